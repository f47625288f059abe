use bevy::math::Vec2;
use rand::Rng;

use super::particle::{self, Particle, ParticleDecay};

pub const BLOW_LIFETIME: i32 = 30;
pub const RING_GROWTH: f32 = 8.0;
pub const RING_MAX_RADIUS: f32 = 100.0;
pub const SPARKS_PER_TICK: usize = 3;

/// Expanding ring shown where a blow was detected, throwing sparks for the first half of its
/// life.
#[derive(Debug, Clone, PartialEq)]
pub struct BlowEffect {
    pub origin: Vec2,
    pub ring_radius: f32,
    pub lifetime: i32,
    particles: Vec<Particle>,
}

impl BlowEffect {
    pub fn spawn(x: f32, y: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            ring_radius: 0.0,
            lifetime: BLOW_LIFETIME,
            particles: Vec::new(),
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Ring animation finished. Sparks may still be draining.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.lifetime <= 0
    }

    /// Still emitting new sparks.
    #[inline]
    pub fn is_emitting(&self) -> bool {
        self.lifetime > BLOW_LIFETIME / 2
    }

    /// One animation step. The effect stays alive until both the ring and its sparks are done.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.ring_radius = (self.ring_radius + RING_GROWTH).min(RING_MAX_RADIUS);
        self.lifetime -= 1;

        if self.is_emitting() {
            let origin = self.origin;
            self.particles
                .extend((0..SPARKS_PER_TICK).map(|_| Particle::spark(origin, rng)));
        }
        let live_sparks = particle::advance_all(&mut self.particles, ParticleDecay::SPARK);

        !self.is_complete() || live_sparks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ring_grows_and_caps() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut fx = BlowEffect::spawn(400.0, 550.0);
        fx.advance(&mut rng);
        assert_eq!(fx.ring_radius, RING_GROWTH);
        for _ in 0..20 {
            fx.advance(&mut rng);
        }
        assert_eq!(fx.ring_radius, RING_MAX_RADIUS);
    }

    #[test]
    fn emits_only_during_first_half() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut fx = BlowEffect::spawn(0.0, 0.0);
        fx.advance(&mut rng);
        assert_eq!(fx.particles().len(), SPARKS_PER_TICK);
        // sparks are born with life >= 10, so nothing expires in the first 9 ticks
        for _ in 1..9 {
            fx.advance(&mut rng);
        }
        assert_eq!(fx.particles().len(), 9 * SPARKS_PER_TICK);
        while fx.lifetime > 15 {
            fx.advance(&mut rng);
        }
        assert!(!fx.is_emitting());
        let mut last = fx.particles().len();
        while fx.advance(&mut rng) {
            assert!(fx.particles().len() <= last);
            last = fx.particles().len();
        }
    }

    #[test]
    fn stays_alive_until_sparks_drain() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut fx = BlowEffect::spawn(0.0, 0.0);
        let mut ticks = 0;
        while fx.advance(&mut rng) {
            ticks += 1;
            assert!(ticks < 100);
        }
        assert!(fx.is_complete());
        assert!(fx.particles().is_empty());
        assert!(ticks >= BLOW_LIFETIME as usize - 1);
    }

    #[test]
    fn complete_but_draining_is_alive() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut fx = BlowEffect::spawn(0.0, 0.0);
        fx.lifetime = 1;
        fx.particles.push(Particle {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            life: 5,
            radius: 2.0,
        });
        assert!(fx.advance(&mut rng));
        assert!(fx.is_complete());
    }
}
