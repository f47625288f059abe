//! Immediate-mode drawing of the simulation with 2D gizmos.
//!
//! The simulation works in screen pixels (origin top-left, y down); gizmos use Bevy world space
//! (origin centre, y up). [`screen_to_world`] is the only place the two meet.

use bevy::prelude::*;

use crate::core::color::{alpha_u8, Rgba8};
use crate::core::components::ScreenBounds;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PresentSet;
use crate::gameplay::blow_effect::BLOW_LIFETIME;
use crate::gameplay::bubble::Bubble;
use crate::gameplay::particle::MAX_PARTICLE_LIFE;
use crate::gameplay::simulation::SimulationState;
use crate::rendering::palette::palette::{
    background_row, fade_alpha, HIGHLIGHT_RGB, SHIMMER_ALPHA, SPARK_RGB, TRAIL_RADIUS,
};

pub struct DrawPlugin;

impl Plugin for DrawPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (draw_background, draw_hand_trails, draw_blow_effects, draw_bubbles)
                .chain()
                .in_set(PresentSet),
        );
    }
}

#[inline]
pub fn screen_to_world(p: Vec2, bounds: ScreenBounds) -> Vec2 {
    Vec2::new(p.x - bounds.width * 0.5, bounds.height * 0.5 - p.y)
}

/// Floating bubbles fade out with their remaining lifetime.
#[inline]
pub fn bubble_tint(bubble: &Bubble) -> Rgba8 {
    bubble.color.with_alpha(alpha_u8(bubble.lifetime))
}

/// Centre of the shimmer highlight, orbiting at 30% of the radius with the wobble phase.
#[inline]
pub fn shimmer_center(bubble: &Bubble) -> Vec2 {
    let r = bubble.radius * 0.3;
    bubble.position + Vec2::new(bubble.wobble_phase.cos() * r, bubble.wobble_phase.sin() * r)
}

fn draw_background(mut gizmos: Gizmos, cfg: Res<GameConfig>, state: Res<SimulationState>) {
    if !cfg.draw.background_gradient {
        return;
    }
    let bounds = state.bounds();
    let rows = bounds.height.max(1.0) as u32;
    for row in 0..rows {
        let y = row as f32;
        let color = background_row(y / bounds.height).to_color();
        gizmos.line_2d(
            screen_to_world(Vec2::new(0.0, y), bounds),
            screen_to_world(Vec2::new(bounds.width, y), bounds),
            color,
        );
    }
}

fn draw_hand_trails(mut gizmos: Gizmos, state: Res<SimulationState>) {
    let bounds = state.bounds();
    for trail in state.hand_trails() {
        let k = trail.strength();
        let radius = TRAIL_RADIUS * k;
        if radius < 1.0 {
            continue;
        }
        let color = HIGHLIGHT_RGB.with_alpha((255.0 * k) as u8).to_color();
        gizmos.circle_2d(screen_to_world(trail.position, bounds), radius, color);
    }
}

fn draw_blow_effects(mut gizmos: Gizmos, state: Res<SimulationState>) {
    let bounds = state.bounds();
    for fx in state.blow_effects() {
        if !fx.is_complete() && fx.ring_radius > 0.0 {
            let ring = HIGHLIGHT_RGB.with_alpha(fade_alpha(fx.lifetime, BLOW_LIFETIME));
            gizmos.circle_2d(
                screen_to_world(fx.origin, bounds),
                fx.ring_radius,
                ring.to_color(),
            );
        }
        for p in fx.particles() {
            let c = SPARK_RGB.with_alpha(fade_alpha(p.life, MAX_PARTICLE_LIFE));
            gizmos.circle_2d(screen_to_world(p.position, bounds), p.radius, c.to_color());
        }
    }
}

fn draw_bubbles(mut gizmos: Gizmos, cfg: Res<GameConfig>, state: Res<SimulationState>) {
    let bounds = state.bounds();
    for bubble in state.bubbles() {
        if bubble.is_burst() {
            for p in bubble.particles() {
                if p.radius <= 0.0 {
                    continue;
                }
                let c = bubble.color.with_alpha(alpha_u8(p.life * 3));
                gizmos.circle_2d(screen_to_world(p.position, bounds), p.radius, c.to_color());
            }
            continue;
        }
        let center = screen_to_world(bubble.position, bounds);
        gizmos.circle_2d(center, bubble.radius, bubble_tint(bubble).to_color());
        if cfg.draw.shimmer {
            gizmos.circle_2d(
                screen_to_world(shimmer_center(bubble), bounds),
                bubble.radius * 0.2,
                HIGHLIGHT_RGB.with_alpha(SHIMMER_ALPHA).to_color(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn screen_corners_map_to_world() {
        let b = ScreenBounds::new(800.0, 600.0);
        assert_eq!(screen_to_world(Vec2::ZERO, b), Vec2::new(-400.0, 300.0));
        assert_eq!(screen_to_world(Vec2::new(800.0, 600.0), b), Vec2::new(400.0, -300.0));
        assert_eq!(screen_to_world(b.center(), b), Vec2::ZERO);
    }

    #[test]
    fn tint_tracks_lifetime() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bubble = Bubble::spawn(Vec2::new(10.0, 10.0), ScreenBounds::default(), &mut rng);
        assert_eq!(bubble_tint(&bubble).a, 255);
        bubble.lifetime = 40;
        assert_eq!(bubble_tint(&bubble).a, 40);
        assert_eq!(bubble_tint(&bubble).rgb(), bubble.color.rgb());
    }

    #[test]
    fn shimmer_orbits_inside_bubble() {
        let mut rng = StdRng::seed_from_u64(1);
        let bubble = Bubble::spawn(Vec2::new(100.0, 100.0), ScreenBounds::default(), &mut rng);
        let d = shimmer_center(&bubble).distance(bubble.position);
        assert!((d - bubble.radius * 0.3).abs() < 1e-3);
    }
}
