//! Owns every live bubble, blow effect and hand trail; applies inbound events and advances one
//! tick at a time. Side effects (sounds, HUD messages) come back as [`SimEffect`] intents.

use bevy::log::debug;
use bevy::math::Vec2;
use bevy::prelude::Resource;
use rand::Rng;

use super::blow_effect::BlowEffect;
use super::bubble::Bubble;
use super::hand_trail::HandTrailMarker;
use super::patterns::{self, Pattern};
use crate::core::components::{HandBox, ScreenBounds};

/// Inbound request from the driver, applied at the start of a tick in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    BurstAll,
    /// `pattern` is a pattern name; unknown names and non-positive counts are ignored.
    SpawnStream {
        pattern: String,
        origin: Vec2,
        count: i32,
    },
    WindImpulse {
        fx: f32,
        fy: f32,
    },
    /// A detected hand. With `bounds`, bubbles centred inside the box burst.
    HandPing {
        x: f32,
        y: f32,
        bounds: Option<HandBox>,
    },
    Blow {
        x: f32,
        y: f32,
    },
}

impl SimEvent {
    pub fn spawn_stream(pattern: Pattern, origin: Vec2, count: usize) -> Self {
        SimEvent::SpawnStream {
            pattern: pattern.name().to_string(),
            origin,
            count: i32::try_from(count).unwrap_or(i32::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Pop,
    Blow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    AllBurst,
    StreamSpawned { pattern: Pattern, count: usize },
    Woosh,
}

/// Work the driver should perform after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEffect {
    PlaySound(SoundCue),
    Announce(Announcement),
}

#[derive(Resource, Debug, Clone)]
pub struct SimulationState {
    bounds: ScreenBounds,
    bubbles: Vec<Bubble>,
    blow_effects: Vec<BlowEffect>,
    hand_trails: Vec<HandTrailMarker>,
    tick_count: u64,
}

impl SimulationState {
    pub fn new(bounds: ScreenBounds) -> Self {
        Self {
            bounds,
            bubbles: Vec::new(),
            blow_effects: Vec::new(),
            hand_trails: Vec::new(),
            tick_count: 0,
        }
    }

    pub fn bounds(&self) -> ScreenBounds {
        self.bounds
    }
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }
    pub fn blow_effects(&self) -> &[BlowEffect] {
        &self.blow_effects
    }
    pub fn hand_trails(&self) -> &[HandTrailMarker] {
        &self.hand_trails
    }
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Number of bubbles currently shown as debris clouds.
    pub fn bursting_count(&self) -> usize {
        self.bubbles.iter().filter(|b| b.is_burst()).count()
    }

    /// Spawn one randomized bubble directly (no pattern).
    pub fn spawn_bubble<R: Rng + ?Sized>(&mut self, position: Vec2, rng: &mut R) {
        self.bubbles.push(Bubble::spawn(position, self.bounds, rng));
    }

    /// Insert an already configured bubble.
    pub fn insert_bubble(&mut self, bubble: Bubble) {
        self.bubbles.push(bubble);
    }

    /// Apply `events`, advance everything one step, prune the dead.
    pub fn tick<R, I>(&mut self, events: I, rng: &mut R) -> Vec<SimEffect>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = SimEvent>,
    {
        let mut effects = Vec::new();
        for event in events {
            self.apply(event, rng, &mut effects);
        }

        self.bubbles.retain_mut(Bubble::advance);
        self.blow_effects.retain_mut(|fx| fx.advance(rng));
        self.hand_trails.retain_mut(HandTrailMarker::advance);

        self.tick_count += 1;
        effects
    }

    fn apply<R: Rng + ?Sized>(&mut self, event: SimEvent, rng: &mut R, effects: &mut Vec<SimEffect>) {
        match event {
            SimEvent::BurstAll => {
                for bubble in self.bubbles.iter_mut() {
                    bubble.burst(rng);
                }
                effects.push(SimEffect::PlaySound(SoundCue::Pop));
                effects.push(SimEffect::Announce(Announcement::AllBurst));
            }
            SimEvent::SpawnStream {
                pattern,
                origin,
                count,
            } => {
                let pattern = match pattern.parse::<Pattern>() {
                    Ok(p) => p,
                    Err(e) => {
                        debug!("spawn stream ignored: {e}");
                        return;
                    }
                };
                let count = match usize::try_from(count) {
                    Ok(c) if c > 0 => c,
                    _ => {
                        debug!(count, "spawn stream ignored: non-positive count");
                        return;
                    }
                };
                let batch = patterns::generate(pattern, origin, count, self.bounds, rng);
                self.bubbles.extend(batch);
                effects.push(SimEffect::Announce(Announcement::StreamSpawned {
                    pattern,
                    count,
                }));
            }
            SimEvent::WindImpulse { fx, fy } => {
                for bubble in self.bubbles.iter_mut() {
                    bubble.apply_impulse(fx, fy);
                }
            }
            SimEvent::HandPing { x, y, bounds } => {
                self.hand_trails.push(HandTrailMarker::new(x, y));
                let Some(hand) = bounds else { return };
                for bubble in self.bubbles.iter_mut() {
                    if !bubble.is_burst() && bubble.center_inside(&hand) && bubble.burst(rng) {
                        effects.push(SimEffect::PlaySound(SoundCue::Pop));
                    }
                }
            }
            SimEvent::Blow { x, y } => {
                self.blow_effects.push(BlowEffect::spawn(x, y));
                effects.push(SimEffect::PlaySound(SoundCue::Blow));
                effects.push(SimEffect::Announce(Announcement::Woosh));
            }
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(ScreenBounds::default())
    }
}
