//! Spawn patterns: each turns an origin and a count into a batch of launched bubbles.
//!
//! | pattern    | direction                         | speed        | hue               |
//! |------------|-----------------------------------|--------------|-------------------|
//! | `fountain` | straight up ±30°                  | 6..9         | sweep `i / count` |
//! | `spiral`   | full circle, evenly spaced, +lift | 3..6         | sweep `i / count` |
//! | `wave`     | shared climb, cosine sway         | 4..7 (batch) | ocean blue ± 0.1  |

use bevy::math::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, TAU};
use std::fmt;
use std::str::FromStr;

use super::bubble::Bubble;
use crate::core::color::Rgba8;
use crate::core::components::ScreenBounds;

pub const PATTERN_ALPHA: u8 = 200;
/// Extra upward speed given to every spiral bubble.
pub const SPIRAL_LIFT: f32 = 2.0;
pub const WAVE_SWAY: f32 = 3.0;
pub const WAVE_BASE_HUE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pattern {
    #[default]
    Fountain,
    Spiral,
    Wave,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Fountain, Pattern::Spiral, Pattern::Wave];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Fountain => "fountain",
            Pattern::Spiral => "spiral",
            Pattern::Wave => "wave",
        }
    }

    /// fountain → spiral → wave → fountain
    pub fn next(self) -> Self {
        match self {
            Pattern::Fountain => Pattern::Spiral,
            Pattern::Spiral => Pattern::Wave,
            Pattern::Wave => Pattern::Fountain,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPattern(pub String);

impl fmt::Display for UnknownPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pattern '{}' (expected fountain | spiral | wave)", self.0)
    }
}

impl std::error::Error for UnknownPattern {}

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Pattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPattern(trimmed.to_string()))
    }
}

/// Build `count` bubbles at `origin` launched according to `pattern`.
pub fn generate<R: Rng + ?Sized>(
    pattern: Pattern,
    origin: Vec2,
    count: usize,
    bounds: ScreenBounds,
    rng: &mut R,
) -> Vec<Bubble> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f32;
    match pattern {
        Pattern::Fountain => (0..count)
            .map(|i| {
                let angle = FRAC_PI_2 + FRAC_PI_3 * (rng.gen::<f32>() - 0.5);
                let speed = rng.gen_range(6.0..9.0);
                let radius = rng.gen_range(10..=25) as f32;
                let color = Rgba8::from_hsv(i as f32 / n, 0.8, 1.0, PATTERN_ALPHA);
                Bubble::spawn(origin, bounds, rng).with_overrides(
                    Vec2::new(angle.cos() * speed, -angle.sin() * speed),
                    radius,
                    color,
                )
            })
            .collect(),
        Pattern::Spiral => (0..count)
            .map(|i| {
                let angle = i as f32 / n * TAU;
                let speed = rng.gen_range(3.0..6.0);
                let radius = rng.gen_range(8..=20) as f32;
                let color = Rgba8::from_hsv(i as f32 / n, 0.9, 1.0, PATTERN_ALPHA);
                Bubble::spawn(origin, bounds, rng).with_overrides(
                    Vec2::new(angle.cos() * speed, -angle.sin() * speed - SPIRAL_LIFT),
                    radius,
                    color,
                )
            })
            .collect(),
        Pattern::Wave => {
            let base_speed = rng.gen_range(4.0..7.0);
            (0..count)
                .map(|i| {
                    let phase = i as f32 / n * TAU;
                    let radius = rng.gen_range(12..=28) as f32;
                    let hue = WAVE_BASE_HUE + rng.gen_range(-0.1..0.1);
                    let color = Rgba8::from_hsv(hue, 0.7, 1.0, PATTERN_ALPHA);
                    Bubble::spawn(origin, bounds, rng).with_overrides(
                        Vec2::new(phase.cos() * WAVE_SWAY, -base_speed),
                        radius,
                        color,
                    )
                })
                .collect()
        }
    }
}

/// Like [`generate`], keyed by pattern name. Unknown names produce an empty batch.
pub fn generate_named<R: Rng + ?Sized>(
    name: &str,
    origin: Vec2,
    count: usize,
    bounds: ScreenBounds,
    rng: &mut R,
) -> Vec<Bubble> {
    match name.parse::<Pattern>() {
        Ok(pattern) => generate(pattern, origin, count, bounds, rng),
        Err(_) => Vec::new(),
    }
}
