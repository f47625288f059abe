pub mod blow_effect;
pub mod bubble;
pub mod hand_trail;
pub mod particle;
pub mod patterns;
pub mod sim_plugin;
pub mod simulation;

pub use blow_effect::BlowEffect;
pub use bubble::Bubble;
pub use hand_trail::HandTrailMarker;
pub use particle::{Particle, ParticleDecay};
pub use patterns::Pattern;
pub use simulation::{Announcement, SimEffect, SimEvent, SimulationState, SoundCue};
