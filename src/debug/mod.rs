//! Debug module: feature gated periodic stats logging.
//! Built only when compiled with `--features debug` (on by default); otherwise `DebugPlugin`
//! is an empty plugin so the app wiring stays the same.

#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
pub use logging::{DebugState, SimStats};

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, _app: &mut App) {
        #[cfg(feature = "debug")]
        {
            use crate::core::system::system_order::PresentSet;
            use logging::{debug_logging_system, debug_stats_collect_system};
            _app.init_resource::<DebugState>()
                .init_resource::<SimStats>()
                .add_systems(
                    Update,
                    (debug_stats_collect_system, debug_logging_system)
                        .chain()
                        .after(PresentSet),
                );
        }
    }
}
