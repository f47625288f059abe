use crate::core::color::{alpha_u8, Rgba8};

/// Blow sparks.
pub const SPARK_RGB: Rgba8 = Rgba8::new(200, 200, 255, 255);
/// Blow rings, hand trails and the bubble shimmer highlight.
pub const HIGHLIGHT_RGB: Rgba8 = Rgba8::WHITE;
pub const SHIMMER_ALPHA: u8 = 100;
/// Hand trail marker radius at full strength.
pub const TRAIL_RADIUS: f32 = 20.0;

/// Night-sky gradient: `t` = 0 at the top row, 1 at the bottom.
#[inline]
pub fn background_row(t: f32) -> Rgba8 {
    let t = t.clamp(0.0, 1.0);
    Rgba8::new(
        (20.0 + t * 20.0) as u8,
        (20.0 + t * 20.0) as u8,
        (40.0 + t * 40.0) as u8,
        255,
    )
}

/// Scale 255 by `remaining / total`, clamped.
#[inline]
pub fn fade_alpha(remaining: i32, total: i32) -> u8 {
    if total <= 0 {
        return 0;
    }
    alpha_u8(255 * remaining / total)
}
