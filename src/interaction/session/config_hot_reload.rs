use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::GameConfig;
use crate::interaction::blow::BlowGate;

/// Files polled for changes, merged in order like at startup.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

/// Live-tunes blow / hand / audio / message settings. Window and simulation settings are fixed
/// for the lifetime of a `SimulationState` (and may carry CLI overrides), so they are kept.
pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

/// Merge a reloaded config into the running one, keeping fields that cannot change live.
pub fn apply_live_config(running: &GameConfig, mut reloaded: GameConfig) -> GameConfig {
    reloaded.window = running.window.clone();
    reloaded.simulation = running.simulation.clone();
    reloaded
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut gate: Option<ResMut<BlowGate>>,
) {
    let wanted = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - wanted).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(wanted));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }

    let mut dirty = false;
    for path in &settings.paths {
        let Ok(mod_time) = std::fs::metadata(path).and_then(|m| m.modified()) else {
            continue;
        };
        let entry = state
            .last_mod
            .entry(path.clone())
            .or_insert(SystemTime::UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    if !dirty {
        return;
    }

    let (loaded, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    for e in errors {
        warn!("CONFIG HOT-RELOAD issue: {e}");
    }
    let new_cfg = apply_live_config(&cfg_res, loaded);
    if *cfg_res == new_cfg {
        return;
    }
    for w in new_cfg.validate() {
        warn!("CONFIG: {w}");
    }
    if let Some(gate) = gate.as_deref_mut() {
        gate.startup_delay_ms = new_cfg.blow.startup_delay_ms;
        gate.cooldown_ms = new_cfg.blow.cooldown_ms;
    }
    info!("Config hot-reload applied");
    *cfg_res = new_cfg;
}
