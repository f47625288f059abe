use bevy::prelude::*;

use super::simulation::{SimEffect, SimEvent, SimulationState};
use crate::core::config::GameConfig;
use crate::core::rng::SimRng;
use crate::core::system::system_order::SimTickSet;

/// Events collected by input systems since the last fixed tick, in arrival order.
#[derive(Resource, Default, Debug)]
pub struct PendingSimEvents(pub Vec<SimEvent>);

impl PendingSimEvents {
    pub fn push(&mut self, ev: SimEvent) {
        self.0.push(ev);
    }
    pub fn extend(&mut self, evs: impl IntoIterator<Item = SimEvent>) {
        self.0.extend(evs);
    }
}

/// Effect intent produced by the last tick, for audio / HUD consumers.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimEffectEvent(pub SimEffect);

/// Owns the `SimulationState` resource and advances it once per fixed step.
///
/// Reads `GameConfig` at build time (insert it before adding the plugin) for screen bounds,
/// tick rate and RNG seed; falls back to defaults when absent.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        app.add_event::<SimEffectEvent>()
            .init_resource::<PendingSimEvents>()
            .insert_resource(SimulationState::new(cfg.screen_bounds()))
            .insert_resource(SimRng::from_seed(cfg.simulation.seed))
            .insert_resource(Time::<Fixed>::from_hz(cfg.simulation.tick_hz.clamp(1.0, 1000.0)))
            .add_systems(FixedUpdate, run_simulation_tick.in_set(SimTickSet));
    }
}

pub fn run_simulation_tick(
    mut state: ResMut<SimulationState>,
    mut rng: ResMut<SimRng>,
    mut pending: ResMut<PendingSimEvents>,
    mut ew: EventWriter<SimEffectEvent>,
) {
    let events = std::mem::take(&mut pending.0);
    let effects = state.tick(events, &mut rng.0);
    if !effects.is_empty() {
        ew.write_batch(effects.into_iter().map(SimEffectEvent));
    }
}
