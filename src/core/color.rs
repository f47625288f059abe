//! Discrete RGBA colors and the HSV mapper used by the spawn patterns.
//!
//! Everything here is pure: bubbles carry an [`Rgba8`] and the renderer converts it to a Bevy
//! [`Color`] at draw time.

use bevy::prelude::Color;

/// 8-bit RGBA color as stored on bubbles and particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color from an HSV triple plus explicit alpha.
    #[inline]
    pub fn from_hsv(h: f32, s: f32, v: f32, alpha: u8) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self { r, g, b, a: alpha }
    }

    /// Same RGB, different alpha (the renderer fades with lifetime).
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[inline]
    pub fn to_color(self) -> Color {
        Color::srgba_u8(self.r, self.g, self.b, self.a)
    }
}

/// Clamp an arbitrary integer alpha into the 0..=255 range.
#[inline]
pub fn alpha_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Convert hue/saturation/value to 8-bit RGB.
///
/// * `h` - any finite value, wrapped into `[0, 1)` (red → yellow → green → cyan → blue → magenta)
/// * `s` - clamped to `[0, 1]`; `0` yields gray
/// * `v` - clamped to `[0, 1]`
///
/// Components are truncated, not rounded.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let h = if h.is_finite() { h.rem_euclid(1.0) } else { 0.0 };
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    let to_u8 = |x: f32| (x * 255.0) as u8;

    if s == 0.0 {
        let g = to_u8(v);
        return (g, g, g);
    }

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    (to_u8(r), to_u8(g), to_u8(b))
}
