use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;

use bubble_blast::gameplay::sim_plugin::{PendingSimEvents, SimulationPlugin};
use bubble_blast::interaction::blow::BlowGate;
use bubble_blast::interaction::input::CurrentPattern;
use bubble_blast::interaction::InteractionPlugin;
use bubble_blast::rendering::hud::{HudPlugin, MessageBoard};
use bubble_blast::{GameConfig, Pattern, SimulationState};

fn test_app(modify: impl FnOnce(&mut GameConfig)) -> App {
    let mut cfg = GameConfig::default();
    cfg.simulation.seed = Some(21);
    modify(&mut cfg);
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)))
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(cfg)
        .add_plugins((SimulationPlugin, HudPlugin, InteractionPlugin));
    app
}

fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn has_line(app: &App, text: &str) -> bool {
    app.world()
        .resource::<MessageBoard>()
        .lines()
        .iter()
        .any(|l| l.text == text)
}

#[test]
fn initial_pattern_comes_from_config() {
    let app = test_app(|cfg| cfg.patterns.initial = "Wave".into());
    assert_eq!(app.world().resource::<CurrentPattern>().0, Pattern::Wave);
}

#[test]
fn blow_key_spawns_a_stream_after_warm_up() {
    let mut app = test_app(|cfg| {
        cfg.blow.startup_delay_ms = 50;
        cfg.blow.cooldown_ms = 0;
        cfg.patterns.initial = "spiral".into();
    });
    app.update();

    // still warming up
    tap(&mut app, KeyCode::KeyB);
    app.update();
    assert_eq!(app.world().resource::<BlowGate>().accepted(), 0);

    app.update();
    app.update();
    tap(&mut app, KeyCode::KeyB);
    app.update();
    app.update();

    assert_eq!(app.world().resource::<BlowGate>().accepted(), 1);
    assert!(app.world().resource::<PendingSimEvents>().0.is_empty());
    let state = app.world().resource::<SimulationState>();
    assert_eq!(state.bubbles().len(), 12);
    assert!(state.tick_count() > 0);
    assert!(has_line(&app, "🌬 Woosh!"));
}

#[test]
fn space_bursts_everything_and_announces() {
    let mut app = test_app(|_| {});
    {
        let world = app.world_mut();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut state = world.resource_mut::<SimulationState>();
        for x in [100.0, 200.0, 300.0] {
            state.spawn_bubble(Vec2::new(x, 300.0), &mut rng);
        }
    }
    app.update();
    tap(&mut app, KeyCode::Space);
    app.update();

    let state = app.world().resource::<SimulationState>();
    assert_eq!(state.bubbles().len(), 3);
    assert!(state.bubbles().iter().all(|b| b.is_burst()));
    assert!(has_line(&app, "✨ All bubbles burst! ✨"));
}

#[test]
fn pattern_keys_switch_and_announce() {
    let mut app = test_app(|_| {});
    app.update();
    tap(&mut app, KeyCode::KeyS);
    assert_eq!(app.world().resource::<CurrentPattern>().0, Pattern::Spiral);
    tap(&mut app, KeyCode::Tab);
    assert_eq!(app.world().resource::<CurrentPattern>().0, Pattern::Wave);
    app.update();
    assert!(has_line(&app, "🌊 Wave pattern activated!"));
}
