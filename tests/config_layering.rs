use std::fs;

use bubble_blast::core::config::GameConfig;
use bubble_blast::Pattern;

#[test]
fn local_overlay_overrides_only_its_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        r#"(
            window: (width: 1024.0, height: 768.0, title: "Base", autoClose: 0.0),
            blow: (stream_count: 20, cooldown_ms: 500),
            patterns: (initial: "spiral"),
        )"#,
    )
    .expect("write base");
    fs::write(
        &local,
        r#"(
            blow: (cooldown_ms: 100),
            simulation: (seed: Some(7)),
        )"#,
    )
    .expect("write local");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.width, 1024.0);
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.blow.stream_count, 20);
    assert_eq!(cfg.blow.cooldown_ms, 100);
    assert_eq!(cfg.blow.startup_delay_ms, 2000);
    assert_eq!(cfg.simulation.seed, Some(7));
    assert_eq!(cfg.initial_pattern(), Pattern::Spiral);
}

#[test]
fn missing_and_broken_files_are_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(blow: (stream_count: ").expect("write broken");
    let missing = dir.path().join("nope.ron");

    let (cfg, used, errors) = GameConfig::load_layered([&missing, &broken]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("read error"));
    assert!(errors[1].contains("parse error"));
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn wrong_types_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("game.ron");
    fs::write(&path, r#"(blow: (stream_count: "many"))"#).expect("write");

    let (cfg, used, errors) = GameConfig::load_layered([&path]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("using defaults"));
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron");
    let cfg = GameConfig::load_from_file(path).expect("shipped config parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty());
}

#[test]
fn load_or_default_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (cfg, err) = GameConfig::load_or_default(dir.path().join("absent.ron"));
    assert_eq!(cfg, GameConfig::default());
    assert!(err.is_some_and(|e| e.contains("read config")));
}
