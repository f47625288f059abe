pub mod blow;
pub mod input;
pub mod pointer_hand;
pub mod session;

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::InputCollectSet;
use blow::{blow_gesture_system, BlowGate};
use input::{keyboard_commands_system, CurrentPattern};
use pointer_hand::{pointer_hand_system, PointerHand};

/// Driver-side input: keyboard commands, the blow stand-in and the pointer hand stand-in.
/// All of them only queue `SimEvent`s; the fixed tick applies them.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        app.insert_resource(CurrentPattern(cfg.initial_pattern()))
            .insert_resource(BlowGate::new(&cfg.blow, 0))
            .init_resource::<PointerHand>()
            .add_systems(
                Update,
                (
                    keyboard_commands_system,
                    blow_gesture_system,
                    pointer_hand_system,
                )
                    .chain()
                    .in_set(InputCollectSet),
            );
    }
}
