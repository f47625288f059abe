pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use core::components::{HandBox, ScreenBounds};
pub use core::config::{ConfigDiagnostics, GameConfig};
pub use gameplay::{
    Announcement, BlowEffect, Bubble, HandTrailMarker, Particle, Pattern, SimEffect, SimEvent,
    SimulationState, SoundCue,
};
