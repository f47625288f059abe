use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bubble_blast::core::color::{hsv_to_rgb, Rgba8};
use bubble_blast::gameplay::bubble::DEBRIS_PER_BURST;
use bubble_blast::gameplay::patterns::{self, PATTERN_ALPHA, SPIRAL_LIFT};
use bubble_blast::{
    Announcement, Bubble, HandBox, Pattern, ScreenBounds, SimEffect, SimEvent, SimulationState,
    SoundCue,
};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn calm_bubble(at: Vec2, r: &mut StdRng) -> Bubble {
    let mut b = Bubble::spawn(at, ScreenBounds::default(), r);
    b.velocity = Vec2::ZERO;
    b.wobble_phase = 0.0;
    b.wobble_speed = 0.0;
    b
}

#[test]
fn hsv_reference_points() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
    assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0, 255, 0));
    assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
}

#[test]
fn fountain_hues_sweep_in_order() {
    let n = 6;
    let batch = patterns::generate(
        Pattern::Fountain,
        Vec2::new(400.0, 550.0),
        n,
        ScreenBounds::default(),
        &mut rng(1),
    );
    assert_eq!(batch.len(), n);
    for (i, b) in batch.iter().enumerate() {
        let want = Rgba8::from_hsv(i as f32 / n as f32, 0.8, 1.0, PATTERN_ALPHA);
        assert_eq!(b.color, want, "bubble {i}");
        assert!(b.velocity.y < 0.0, "fountain bubbles head up");
    }
}

#[test]
fn spiral_angles_step_by_45_degrees() {
    let origin = Vec2::new(400.0, 300.0);
    let batch = patterns::generate(Pattern::Spiral, origin, 8, ScreenBounds::default(), &mut rng(2));
    assert_eq!(batch.len(), 8);
    for (i, b) in batch.iter().enumerate() {
        assert_eq!(b.position, origin);
        let unbiased = Vec2::new(b.velocity.x, b.velocity.y + SPIRAL_LIFT);
        let speed = unbiased.length();
        assert!((3.0..6.0).contains(&speed), "speed {speed}");
        let angle = (-unbiased.y).atan2(unbiased.x).rem_euclid(std::f32::consts::TAU);
        let want = (i as f32 * 45.0).to_radians();
        assert!((angle - want).abs() < 1e-3, "bubble {i}: {angle} vs {want}");
    }
}

#[test]
fn lifetime_counts_down_until_pruned() {
    let mut r = rng(3);
    let mut state = SimulationState::new(ScreenBounds::default());
    let mut b = calm_bubble(Vec2::new(400.0, 300.0), &mut r);
    b.lifetime = 3;
    state.insert_bubble(b);

    state.tick([], &mut r);
    assert_eq!(state.bubbles()[0].lifetime, 2);
    state.tick([], &mut r);
    assert_eq!(state.bubbles()[0].lifetime, 1);
    state.tick([], &mut r);
    assert!(state.bubbles().is_empty());
}

#[test]
fn burst_is_one_way_and_frozen() {
    let mut r = rng(4);
    let mut b = calm_bubble(Vec2::new(100.0, 100.0), &mut r);
    assert!(b.burst(&mut r));
    assert_eq!(b.particles().len(), DEBRIS_PER_BURST);
    assert!(!b.burst(&mut r));
    assert_eq!(b.particles().len(), DEBRIS_PER_BURST);

    let before = b.velocity;
    b.apply_impulse(5.0, 5.0);
    assert_eq!(b.velocity, before);
}

#[test]
fn burst_bubble_pruned_when_debris_runs_out() {
    let mut r = rng(5);
    let mut state = SimulationState::new(ScreenBounds::default());
    state.insert_bubble(calm_bubble(Vec2::new(200.0, 200.0), &mut r));
    state.tick([SimEvent::BurstAll], &mut r);

    let mut ticks = 1;
    while !state.bubbles().is_empty() {
        assert!(state.bubbles()[0].particles().iter().any(|p| p.is_alive()));
        state.tick([], &mut r);
        ticks += 1;
        assert!(ticks <= 10, "debris outlived 10 ticks");
    }
}

#[test]
fn wind_moves_only_floating_bubbles() {
    let mut r = rng(6);
    let mut state = SimulationState::new(ScreenBounds::default());
    for x in [100.0, 300.0, 500.0] {
        state.insert_bubble(calm_bubble(Vec2::new(x, 300.0), &mut r));
    }
    let mut popped = calm_bubble(Vec2::new(700.0, 300.0), &mut r);
    popped.burst(&mut r);
    let frozen_velocity = popped.velocity;
    state.insert_bubble(popped);

    state.tick([SimEvent::WindImpulse { fx: 2.0, fy: -3.0 }], &mut r);
    let bubbles = state.bubbles();
    assert_eq!(bubbles.len(), 4);
    for b in bubbles.iter().filter(|b| !b.is_burst()) {
        // impulse, then one tick of drift
        assert!((b.velocity.x - 2.0).abs() < 1e-5);
        assert!((b.velocity.y - (-3.0 + 0.02)).abs() < 1e-5);
    }
    let burst: Vec<_> = bubbles.iter().filter(|b| b.is_burst()).collect();
    assert_eq!(burst.len(), 1);
    assert_eq!(burst[0].velocity, frozen_velocity);
}

#[test]
fn hand_ping_pops_bubbles_inside_box() {
    let mut r = rng(7);
    let mut state = SimulationState::new(ScreenBounds::default());
    state.insert_bubble(calm_bubble(Vec2::new(100.0, 100.0), &mut r));
    state.insert_bubble(calm_bubble(Vec2::new(110.0, 105.0), &mut r));
    state.insert_bubble(calm_bubble(Vec2::new(500.0, 500.0), &mut r));

    let effects = state.tick(
        [SimEvent::HandPing {
            x: 105.0,
            y: 100.0,
            bounds: Some(HandBox::new(80.0, 80.0, 40.0, 40.0)),
        }],
        &mut r,
    );
    assert_eq!(effects, vec![SimEffect::PlaySound(SoundCue::Pop); 2]);
    assert_eq!(state.bursting_count(), 2);
    assert_eq!(state.hand_trails().len(), 1);
}

#[test]
fn degenerate_inputs_are_no_ops() {
    let mut r = rng(8);
    let mut state = SimulationState::new(ScreenBounds::default());
    state.insert_bubble(calm_bubble(Vec2::new(100.0, 100.0), &mut r));
    let effects = state.tick(
        [
            SimEvent::SpawnStream {
                pattern: "vortex".into(),
                origin: Vec2::ZERO,
                count: 5,
            },
            SimEvent::SpawnStream {
                pattern: "wave".into(),
                origin: Vec2::ZERO,
                count: -2,
            },
            SimEvent::HandPing {
                x: 100.0,
                y: 100.0,
                bounds: Some(HandBox::new(100.0, 100.0, 0.0, 0.0)),
            },
        ],
        &mut r,
    );
    assert!(effects.is_empty());
    assert_eq!(state.bubbles().len(), 1);
    assert_eq!(state.bursting_count(), 0);
}

#[test]
fn blow_sequence_spawns_effect_and_stream() {
    let mut r = rng(9);
    let mut state = SimulationState::new(ScreenBounds::default());
    let origin = Vec2::new(400.0, 550.0);
    let effects = state.tick(
        [
            SimEvent::Blow {
                x: origin.x,
                y: origin.y,
            },
            SimEvent::spawn_stream(Pattern::Wave, origin, 12),
        ],
        &mut r,
    );
    assert_eq!(state.blow_effects().len(), 1);
    assert_eq!(state.bubbles().len(), 12);
    assert_eq!(
        effects,
        vec![
            SimEffect::PlaySound(SoundCue::Blow),
            SimEffect::Announce(Announcement::Woosh),
            SimEffect::Announce(Announcement::StreamSpawned {
                pattern: Pattern::Wave,
                count: 12
            }),
        ]
    );

    // ring and sparks eventually fade out completely
    for _ in 0..200 {
        state.tick([], &mut r);
    }
    assert!(state.blow_effects().is_empty());
    assert_eq!(state.tick_count(), 201);
}

#[test]
fn same_seed_same_run() {
    let run = |seed| {
        let mut r = rng(seed);
        let mut state = SimulationState::new(ScreenBounds::default());
        state.tick(
            [SimEvent::spawn_stream(Pattern::Fountain, Vec2::new(400.0, 550.0), 10)],
            &mut r,
        );
        for _ in 0..30 {
            state.tick([], &mut r);
        }
        state
            .bubbles()
            .iter()
            .map(|b| (b.position, b.radius))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}
