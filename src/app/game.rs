// This file is part of Bubble Blast.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::audio::AudioCuePlugin;
use crate::core::config::{ConfigDiagnostics, GameConfig};
use crate::core::system::system_order::{InputCollectSet, PresentSet};
use crate::debug::DebugPlugin;
use crate::gameplay::sim_plugin::SimulationPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::interaction::InteractionPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::draw::DrawPlugin;
use crate::rendering::hud::HudPlugin;

/// Everything except window / render setup. Insert `GameConfig` before adding it.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (InputCollectSet, PresentSet.after(InputCollectSet)))
            .init_resource::<GameConfig>()
            .init_resource::<ConfigDiagnostics>()
            .add_systems(Startup, log_config_diagnostics)
            .add_plugins((
                CameraPlugin,
                SimulationPlugin,
                InteractionPlugin,
                HudPlugin,
                DrawPlugin,
                AudioCuePlugin,
                DebugPlugin,
                ConfigHotReloadPlugin,
                AutoClosePlugin,
            ));
    }
}

fn log_config_diagnostics(diag: Res<ConfigDiagnostics>, cfg: Res<GameConfig>) {
    if diag.used.is_empty() {
        warn!("CONFIG: no config files loaded; using defaults");
    } else {
        info!(files = ?diag.used, "CONFIG: loaded");
    }
    for e in &diag.errors {
        warn!("CONFIG: {e}");
    }
    for w in &diag.warnings {
        warn!("CONFIG: {w}");
    }
    info!(
        width = cfg.window.width,
        height = cfg.window.height,
        seed = ?cfg.simulation.seed,
        pattern = %cfg.initial_pattern(),
        "Bubble Blast starting"
    );
}
