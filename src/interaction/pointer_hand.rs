//! Pointer stand-in for the camera hand detector: cursor motion becomes `HandPing`s.

use bevy::prelude::*;

use crate::core::components::{HandBox, ScreenBounds};
use crate::core::config::{GameConfig, HandConfig};
use crate::gameplay::sim_plugin::PendingSimEvents;
use crate::gameplay::simulation::SimEvent;

/// Last cursor position that produced a ping.
#[derive(Resource, Debug, Default)]
pub struct PointerHand {
    pub last: Option<Vec2>,
}

/// Build the ping for a hand centroid. Inside the ignored centre square (the blow area) the ping
/// only leaves a trail; elsewhere it carries a box and can pop bubbles.
pub fn hand_ping_for(centroid: Vec2, bounds: ScreenBounds, cfg: &HandConfig) -> SimEvent {
    let offset = (centroid - bounds.center()).abs();
    let in_center = offset.x <= cfg.ignore_center_extent && offset.y <= cfg.ignore_center_extent;
    SimEvent::HandPing {
        x: centroid.x,
        y: centroid.y,
        bounds: (!in_center).then(|| HandBox::centered(centroid, cfg.box_size)),
    }
}

pub fn pointer_hand_system(
    windows: Query<&Window>,
    cfg: Res<GameConfig>,
    mut hand: ResMut<PointerHand>,
    mut pending: ResMut<PendingSimEvents>,
) {
    if !cfg.hand.enabled {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        hand.last = None;
        return;
    };
    let min_move = cfg.hand.min_move.max(0.0);
    if let Some(last) = hand.last {
        if last.distance_squared(cursor) < min_move * min_move {
            return;
        }
    }
    hand.last = Some(cursor);
    pending.push(hand_ping_for(cursor, cfg.screen_bounds(), &cfg.hand));
}
