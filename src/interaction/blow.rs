//! Blow gesture gating: start-up grace period, per-blow cooldown, and the event sequence an
//! accepted blow expands into.

use bevy::prelude::*;
use rand::Rng;

use crate::core::config::{BlowConfig, GameConfig};
use crate::core::rng::SimRng;
use crate::gameplay::patterns::Pattern;
use crate::gameplay::sim_plugin::PendingSimEvents;
use crate::gameplay::simulation::SimEvent;

use super::input::CurrentPattern;

/// Accepts a blow only after `startup_delay_ms` has passed and at least `cooldown_ms` since the
/// previous accepted blow. Both comparisons are strict.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BlowGate {
    pub startup_delay_ms: u64,
    pub cooldown_ms: u64,
    started_at_ms: u64,
    last_blow_ms: u64,
    accepted: u32,
}

impl BlowGate {
    pub fn new(cfg: &BlowConfig, started_at_ms: u64) -> Self {
        Self {
            startup_delay_ms: cfg.startup_delay_ms,
            cooldown_ms: cfg.cooldown_ms,
            started_at_ms,
            last_blow_ms: 0,
            accepted: 0,
        }
    }

    pub fn try_accept(&mut self, now_ms: u64) -> bool {
        let warmed_up = now_ms.saturating_sub(self.started_at_ms) > self.startup_delay_ms;
        let cooled = now_ms.saturating_sub(self.last_blow_ms) > self.cooldown_ms;
        if warmed_up && cooled {
            self.last_blow_ms = now_ms;
            self.accepted += 1;
            true
        } else {
            false
        }
    }

    pub fn accepted(&self) -> u32 {
        self.accepted
    }
}

impl Default for BlowGate {
    fn default() -> Self {
        Self::new(&BlowConfig::default(), 0)
    }
}

/// Expand one accepted blow: ring effect, a stream in the current pattern, then a random gust
/// that also catches the freshly spawned bubbles.
pub fn blow_events<R: Rng + ?Sized>(cfg: &GameConfig, pattern: Pattern, rng: &mut R) -> [SimEvent; 3] {
    let origin = cfg.blow_origin();
    let wind = &cfg.blow;
    [
        SimEvent::Blow {
            x: origin.x,
            y: origin.y,
        },
        SimEvent::spawn_stream(pattern, origin, wind.stream_count),
        SimEvent::WindImpulse {
            fx: sample(rng, wind.wind_x.min, wind.wind_x.max),
            fy: sample(rng, wind.wind_y.min, wind.wind_y.max),
        },
    ]
}

fn sample<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi - lo > f32::EPSILON {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Keyboard stand-in for the camera blow detector (B or Enter).
pub fn blow_gesture_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    current: Res<CurrentPattern>,
    mut gate: ResMut<BlowGate>,
    mut rng: ResMut<SimRng>,
    mut pending: ResMut<PendingSimEvents>,
) {
    if !cfg.blow.enabled || !keys.any_just_pressed([KeyCode::KeyB, KeyCode::Enter]) {
        return;
    }
    let now_ms = time.elapsed().as_millis() as u64;
    if !gate.try_accept(now_ms) {
        debug!(now_ms, "blow ignored (warm-up or cooldown)");
        return;
    }
    pending.extend(blow_events(&cfg, current.0, &mut rng.0));
}
