use bevy::prelude::*;

use crate::gameplay::simulation::SimulationState;

#[derive(Resource, Debug)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

/// Snapshot of simulation population, refreshed every frame.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct SimStats {
    pub fps: f32,
    pub tick: u64,
    pub bubbles: usize,
    pub bursting: usize,
    pub effects: usize,
    pub trails: usize,
}

impl SimStats {
    pub fn capture(&mut self, state: &SimulationState) {
        self.tick = state.tick_count();
        self.bubbles = state.bubbles().len();
        self.bursting = state.bursting_count();
        self.effects = state.blow_effects().len();
        self.trails = state.hand_trails().len();
    }

    pub fn log_line(&self) -> String {
        format!(
            "SIM tick={} bubbles={} bursting={} effects={} trails={} fps={:.1}",
            self.tick, self.bubbles, self.bursting, self.effects, self.trails, self.fps
        )
    }
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<SimStats>,
    sim: Option<Res<SimulationState>>,
) {
    state.frame_counter += 1;
    let inst_fps = 1.0 / time.delta_secs().max(1e-6);
    stats.fps = if stats.fps == 0.0 {
        inst_fps
    } else {
        stats.fps * 0.9 + inst_fps * 0.1
    };
    if let Some(sim) = sim {
        stats.capture(&sim);
    }
}

pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<SimStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!("{} frame={}", stats.log_line(), state.frame_counter);
    }
}
