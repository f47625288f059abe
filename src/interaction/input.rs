use bevy::prelude::*;

use crate::gameplay::patterns::Pattern;
use crate::gameplay::sim_plugin::PendingSimEvents;
use crate::gameplay::simulation::SimEvent;
use crate::rendering::hud::HudMessage;

/// Pattern used by the next blow.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentPattern(pub Pattern);

/// Discrete keyboard commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    BurstAll,
    Select(Pattern),
    CyclePattern,
}

pub fn command_for_key(key: KeyCode) -> Option<KeyCommand> {
    match key {
        KeyCode::Escape => Some(KeyCommand::Quit),
        KeyCode::Space => Some(KeyCommand::BurstAll),
        KeyCode::KeyF => Some(KeyCommand::Select(Pattern::Fountain)),
        KeyCode::KeyS => Some(KeyCommand::Select(Pattern::Spiral)),
        KeyCode::KeyW => Some(KeyCommand::Select(Pattern::Wave)),
        KeyCode::Tab => Some(KeyCommand::CyclePattern),
        _ => None,
    }
}

pub fn pattern_banner(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::Fountain => "🌬 Fountain pattern activated!",
        Pattern::Spiral => "🌀 Spiral pattern activated!",
        Pattern::Wave => "🌊 Wave pattern activated!",
    }
}

pub fn keyboard_commands_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut current: ResMut<CurrentPattern>,
    mut pending: ResMut<PendingSimEvents>,
    mut hud: EventWriter<HudMessage>,
    mut exit: EventWriter<AppExit>,
) {
    for key in keys.get_just_pressed() {
        let Some(cmd) = command_for_key(*key) else {
            continue;
        };
        match cmd {
            KeyCommand::Quit => {
                info!("quit requested");
                exit.write(AppExit::Success);
            }
            KeyCommand::BurstAll => pending.push(SimEvent::BurstAll),
            KeyCommand::Select(pattern) => select(&mut current, pattern, &mut hud),
            KeyCommand::CyclePattern => {
                let next = current.0.next();
                select(&mut current, next, &mut hud);
            }
        }
    }
}

fn select(current: &mut CurrentPattern, pattern: Pattern, hud: &mut EventWriter<HudMessage>) {
    current.0 = pattern;
    info!(pattern = %pattern, "pattern selected");
    hud.write(HudMessage::new(pattern_banner(pattern)));
}
