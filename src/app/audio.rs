use bevy::audio::Volume;
use bevy::prelude::*;

use crate::core::config::{AudioConfig, GameConfig};
use crate::gameplay::sim_plugin::SimEffectEvent;
use crate::gameplay::simulation::{SimEffect, SoundCue};
use crate::rendering::hud::{HudMessage, NOTICE_DURATION_MS};

/// Loaded one-shot sounds. Missing files leave the bank empty and cues become silent.
#[derive(Resource, Default)]
pub struct SoundBank {
    pop: Option<Handle<AudioSource>>,
    blow: Option<Handle<AudioSource>>,
}

impl SoundBank {
    pub fn is_loaded(&self) -> bool {
        self.pop.is_some() && self.blow.is_some()
    }
    fn handle(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        match cue {
            SoundCue::Pop => self.pop.as_ref(),
            SoundCue::Blow => self.blow.as_ref(),
        }
    }
}

/// Asset path configured for a cue (relative to `assets/`).
pub fn cue_path(cfg: &AudioConfig, cue: SoundCue) -> &str {
    match cue {
        SoundCue::Pop => &cfg.pop,
        SoundCue::Blow => &cfg.blow,
    }
}

pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_event::<HudMessage>()
            .add_event::<SimEffectEvent>()
            .add_systems(Startup, load_sound_bank)
            .add_systems(Update, play_sound_cues);
    }
}

fn load_sound_bank(
    cfg: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut bank: ResMut<SoundBank>,
    mut hud: EventWriter<HudMessage>,
) {
    if !cfg.audio.enabled {
        info!("Audio disabled by config");
        return;
    }
    let missing: Vec<&str> = [SoundCue::Pop, SoundCue::Blow]
        .into_iter()
        .map(|cue| cue_path(&cfg.audio, cue))
        .filter(|p| !std::path::Path::new("assets").join(p).exists())
        .collect();
    if !missing.is_empty() {
        warn!(?missing, "Sound files not found under assets/; continuing without audio");
        hud.write(HudMessage::new("Note: Sound files not found").with_duration(NOTICE_DURATION_MS));
        return;
    }
    bank.pop = Some(asset_server.load(cfg.audio.pop.clone()));
    bank.blow = Some(asset_server.load(cfg.audio.blow.clone()));
    info!(pop = %cfg.audio.pop, blow = %cfg.audio.blow, "Sounds loaded");
    hud.write(HudMessage::new("🎵 Sounds loaded successfully!"));
}

fn play_sound_cues(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    bank: Res<SoundBank>,
    mut effects: EventReader<SimEffectEvent>,
) {
    for SimEffectEvent(effect) in effects.read() {
        let SimEffect::PlaySound(cue) = *effect else {
            continue;
        };
        let Some(handle) = bank.handle(cue) else {
            continue;
        };
        commands.spawn((
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(cfg.audio.volume.clamp(0.0, 1.0))),
        ));
    }
}
