//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. InputCollect (Update): keyboard / pointer / blow gate push `SimEvent`s into the pending queue
//! 2. SimTick (FixedUpdate, 60 Hz): drain the queue, run one `SimulationState::tick`, emit effects
//! 3. Present (Update): audio, HUD messages, gizmo drawing
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputCollectSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SimTickSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentSet;
