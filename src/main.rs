// This file is part of Bubble Blast.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use bubble_blast::core::config::{ConfigDiagnostics, GameConfig};
use bubble_blast::interaction::session::config_hot_reload::ConfigReloadSettings;
use bubble_blast::GamePlugin;

#[derive(Parser, Debug)]
#[command(about = "Bubble Blast: blow, pop and burst bubbles", version)]
struct Args {
    /// Config file, repeatable; later files override earlier keys.
    /// Defaults to assets/config/game.ron then assets/config/game.local.ron.
    #[arg(long = "config")]
    configs: Vec<PathBuf>,
    /// Fixed RNG seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds (0 disables).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(secs) = args.auto_close {
        if !secs.is_finite() || secs < 0.0 {
            anyhow::bail!("--auto-close must be a non-negative number of seconds, got {secs}");
        }
    }

    let paths = if args.configs.is_empty() {
        ConfigReloadSettings::default().paths
    } else {
        args.configs.clone()
    };
    let (mut cfg, used, errors) = GameConfig::load_layered(paths.iter());
    if let Some(seed) = args.seed {
        cfg.simulation.seed = Some(seed);
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    let warnings = cfg.validate();
    if cfg.window.width <= 0.0 || cfg.window.height <= 0.0 {
        anyhow::bail!(
            "window size {}x{} is not drawable",
            cfg.window.width,
            cfg.window.height
        );
    }

    let exit = App::new()
        .insert_resource(ConfigDiagnostics {
            used,
            errors,
            warnings,
        })
        .insert_resource(ConfigReloadSettings {
            paths,
            ..Default::default()
        })
        .insert_resource(cfg.clone())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();

    if let AppExit::Error(code) = exit {
        anyhow::bail!("app exited with code {code}");
    }
    Ok(())
}
