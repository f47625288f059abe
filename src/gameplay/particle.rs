use bevy::math::Vec2;
use rand::Rng;

/// Per-tick decay applied to a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleDecay {
    pub life_step: i32,
    pub shrink: f32,
}

impl ParticleDecay {
    /// Debris left behind by a popped bubble.
    pub const DEBRIS: ParticleDecay = ParticleDecay {
        life_step: 2,
        shrink: 0.95,
    };
    /// Sparks thrown off by a blow effect; they do not shrink.
    pub const SPARK: ParticleDecay = ParticleDecay {
        life_step: 1,
        shrink: 1.0,
    };
}

/// A single decaying point. Shared by burst debris and blow sparks.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: i32,
    pub radius: f32,
}

pub const SPARK_RADIUS: f32 = 2.0;
/// Upper bound (exclusive) of the life a particle is born with; renderers fade against it.
pub const MAX_PARTICLE_LIFE: i32 = 20;

impl Particle {
    /// Debris: random velocity in a ±3 square, life in `[10, 20)`, integer radius 2..=4.
    pub fn debris<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        Self {
            position: origin,
            velocity: Vec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)),
            life: rng.gen_range(10..MAX_PARTICLE_LIFE),
            radius: rng.gen_range(2..=4) as f32,
        }
    }

    /// Spark: upward half-circle direction, speed 2..5, life 10..=20.
    pub fn spark<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        let angle: f32 = rng.gen_range(0.0..=std::f32::consts::PI);
        let speed: f32 = rng.gen_range(2.0..5.0);
        Self {
            position: origin,
            velocity: Vec2::new(angle.cos() * speed, -angle.sin() * speed),
            life: rng.gen_range(10..=MAX_PARTICLE_LIFE),
            radius: SPARK_RADIUS,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn advance(&mut self, decay: ParticleDecay) {
        self.position += self.velocity;
        self.life -= decay.life_step;
        self.radius = (self.radius * decay.shrink).max(0.0);
    }
}

/// Advance every particle and drop the expired ones. Returns the number still alive.
pub fn advance_all(particles: &mut Vec<Particle>, decay: ParticleDecay) -> usize {
    for p in particles.iter_mut() {
        p.advance(decay);
    }
    particles.retain(Particle::is_alive);
    particles.len()
}
