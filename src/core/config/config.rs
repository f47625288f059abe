use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::core::components::ScreenBounds;
use crate::gameplay::patterns::Pattern;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Bubble Blast Fun".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConfigRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for ConfigRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
    pub tick_hz: f64,
}
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_hz: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BlowConfig {
    pub enabled: bool,
    pub startup_delay_ms: u64,
    pub cooldown_ms: u64,
    /// Blow origin sits this many pixels above the bottom edge, horizontally centred.
    pub origin_offset_y: f32,
    pub stream_count: usize,
    pub wind_x: ConfigRange<f32>,
    pub wind_y: ConfigRange<f32>,
}
impl Default for BlowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            startup_delay_ms: 2000,
            cooldown_ms: 300,
            origin_offset_y: 50.0,
            stream_count: 12,
            wind_x: ConfigRange { min: -3.0, max: 3.0 },
            wind_y: ConfigRange { min: -4.0, max: -2.0 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HandConfig {
    pub enabled: bool,
    /// Side of the square box reported around the pointer.
    pub box_size: f32,
    /// Pings within this half-extent of the screen centre only leave a trail.
    pub ignore_center_extent: f32,
    pub min_move: f32,
}
impl Default for HandConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            box_size: 80.0,
            ignore_center_extent: 100.0,
            min_move: 4.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PatternConfig {
    pub initial: String,
}
impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            initial: Pattern::Fountain.name().into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub volume: f32,
    pub pop: String,
    pub blow: String,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.4,
            pop: "sounds/pop.wav".into(),
            blow: "sounds/bubbles2.wav".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MessagesConfig {
    pub duration_ms: u64,
    pub fade_ms: u64,
    pub top_margin: f32,
    pub line_spacing: f32,
    pub font_size: f32,
}
impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            fade_ms: 500,
            top_margin: 20.0,
            line_spacing: 40.0,
            font_size: 36.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DrawConfig {
    pub shimmer: bool,
    pub background_gradient: bool,
}
impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            shimmer: true,
            background_gradient: true,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
    pub blow: BlowConfig,
    pub hand: HandConfig,
    pub patterns: PatternConfig,
    pub audio: AudioConfig,
    pub messages: MessagesConfig,
    pub draw: DrawConfig,
}

/// Outcome of loading the layered config at startup, logged once the app runs.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Deep-merge RON files in order (later files override earlier keys).
    /// Returns the config, the paths that were read, and any read/parse errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let found = bm.iter_mut().find(|(ek, _)| **ek == k);
                        match found {
                            Some((_, ev)) => merge_value(ev, v),
                            None => {
                                bm.insert(k, v);
                            }
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn screen_bounds(&self) -> ScreenBounds {
        ScreenBounds::new(self.window.width, self.window.height)
    }

    /// Configured starting pattern; unknown names fall back to fountain.
    pub fn initial_pattern(&self) -> Pattern {
        self.patterns.initial.parse().unwrap_or_default()
    }

    /// Where blows originate: bottom centre, raised by `blow.origin_offset_y`.
    pub fn blow_origin(&self) -> Vec2 {
        Vec2::new(
            self.window.width * 0.5,
            self.window.height - self.blow.origin_offset_y,
        )
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if !(1.0..=1000.0).contains(&self.simulation.tick_hz) {
            w.push(format!(
                "simulation.tick_hz {} outside 1..1000; bubble speeds are tuned for 60",
                self.simulation.tick_hz
            ));
        }
        if self.blow.enabled {
            if self.blow.stream_count == 0 {
                w.push("blow.stream_count is 0; blows spawn no bubbles".into());
            }
            if self.blow.stream_count > 500 {
                w.push(format!(
                    "blow.stream_count {} very high; performance may suffer",
                    self.blow.stream_count
                ));
            }
            if self.blow.origin_offset_y < 0.0 || self.blow.origin_offset_y > self.window.height {
                w.push(format!(
                    "blow.origin_offset_y {} puts the blow origin off screen",
                    self.blow.origin_offset_y
                ));
            }
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &ConfigRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
        }
        check_range_f32(&mut w, "blow.wind_x", &self.blow.wind_x);
        check_range_f32(&mut w, "blow.wind_y", &self.blow.wind_y);
        if self.hand.enabled && self.hand.box_size <= 0.0 {
            w.push("hand.box_size must be > 0 or hand pings never pop bubbles".into());
        }
        if self.hand.min_move < 0.0 {
            w.push("hand.min_move negative -> treated as 0".into());
        }
        if self.patterns.initial.parse::<Pattern>().is_err() {
            w.push(format!(
                "patterns.initial '{}' unknown (fountain | spiral | wave); using fountain",
                self.patterns.initial
            ));
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            w.push(format!("audio.volume {} outside 0..1", self.audio.volume));
        }
        if self.messages.fade_ms > self.messages.duration_ms {
            w.push(format!(
                "messages.fade_ms {} longer than duration_ms {}",
                self.messages.fade_ms, self.messages.duration_ms
            ));
        }
        w
    }
}
