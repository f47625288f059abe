//! The primary entity: a floating soap bubble that can burst into debris.

use bevy::math::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::particle::{self, Particle, ParticleDecay};
use crate::core::color::Rgba8;
use crate::core::components::{HandBox, ScreenBounds};

pub const BUBBLE_LIFETIME: i32 = 255;
pub const DEBRIS_PER_BURST: usize = 15;
/// Downward drift added to dy every tick.
pub const DRIFT: f32 = 0.02;
pub const WOBBLE_STRENGTH: f32 = 0.1;
/// Horizontal velocity factor applied on touching a side edge.
pub const EDGE_DAMPING: f32 = -0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba8,
    pub lifetime: i32,
    pub wobble_phase: f32,
    pub wobble_speed: f32,
    burst: bool,
    particles: Vec<Particle>,
    bounds: ScreenBounds,
}

impl Bubble {
    /// Fresh bubble with randomized size, drift, translucent color and wobble.
    pub fn spawn<R: Rng + ?Sized>(position: Vec2, bounds: ScreenBounds, rng: &mut R) -> Self {
        Self {
            position,
            velocity: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-3.0..-1.0)),
            radius: rng.gen_range(15..=35) as f32,
            color: Rgba8::new(
                rng.gen_range(100..=255),
                rng.gen_range(100..=255),
                rng.gen_range(200..=255),
                rng.gen_range(100..=200),
            ),
            lifetime: BUBBLE_LIFETIME,
            wobble_phase: rng.gen_range(0.0..TAU),
            wobble_speed: rng.gen_range(0.05..0.1),
            burst: false,
            particles: Vec::new(),
            bounds,
        }
    }

    /// Replace the randomized launch parameters (used by the spawn patterns).
    pub fn with_overrides(mut self, velocity: Vec2, radius: f32, color: Rgba8) -> Self {
        self.velocity = velocity;
        self.radius = radius.max(f32::EPSILON);
        self.color = color;
        self
    }

    #[inline]
    pub fn is_burst(&self) -> bool {
        self.burst
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn bounds(&self) -> ScreenBounds {
        self.bounds
    }

    /// One physics step. Returns whether the bubble should stay in the simulation.
    pub fn advance(&mut self) -> bool {
        if self.burst {
            return particle::advance_all(&mut self.particles, ParticleDecay::DEBRIS) > 0;
        }

        self.position += self.velocity;
        self.velocity.y += DRIFT;
        self.lifetime -= 1;

        self.wobble_phase += self.wobble_speed;
        self.velocity.x += self.wobble_phase.sin() * WOBBLE_STRENGTH;

        if self.position.x - self.radius <= 0.0
            || self.position.x + self.radius >= self.bounds.width
        {
            self.velocity.x *= EDGE_DAMPING;
        }

        self.lifetime > 0 && self.position.y + self.radius > 0.0
    }

    /// Pop into debris. Returns `false` if the bubble had already burst.
    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.burst {
            return false;
        }
        self.burst = true;
        let origin = self.position;
        self.particles
            .extend((0..DEBRIS_PER_BURST).map(|_| Particle::debris(origin, rng)));
        true
    }

    /// Push the bubble. Frozen bubbles (already burst) ignore impulses.
    pub fn apply_impulse(&mut self, fx: f32, fy: f32) {
        if self.burst {
            return;
        }
        self.velocity += Vec2::new(fx, fy);
    }

    #[inline]
    pub fn center_inside(&self, hand: &HandBox) -> bool {
        hand.contains(self.position)
    }
}
