//! Movement integration tests
//!
//! Полный ShooterTick через ShooterSession: гравитация, земля, стены уровня,
//! прыжок, камера. Спавн врагов отключён (огромный интервал).

use bevy::prelude::*;
use scrollshot_simulation::{Level, PlayerIntent, ShooterConfig, ShooterSession};

const DT: f32 = 1.0 / 60.0;

fn quiet_config() -> ShooterConfig {
    let mut config = ShooterConfig::default();
    config.spawn.interval = 1.0e6;
    config
}

fn quiet_session() -> ShooterSession {
    let config = quiet_config();
    let level = Level::default_layout(&config);
    ShooterSession::start(config, level, 42).expect("valid session")
}

/// Игрок спавнится в воздухе и падает на землю
fn landed_session() -> ShooterSession {
    let mut session = quiet_session();
    session.run(PlayerIntent::idle(), DT, 120);
    session
}

#[test]
fn test_player_lands_on_ground() {
    let session = landed_session();
    let body = session.player_body().unwrap();

    assert!(body.on_ground);
    assert_eq!(body.bottom(), 560.0);
    assert_eq!(body.velocity.y, 0.0);
}

#[test]
fn test_player_lands_with_long_host_frames() {
    // Шаг на terminal velocity при 1/30 и 1/20 s длиннее PROBE_DEPTH
    for dt in [1.0 / 30.0, 1.0 / 20.0] {
        let mut session = quiet_session();
        session.run(PlayerIntent::idle(), dt, 60);

        let body = session.player_body().unwrap();
        assert!(body.on_ground, "dt={} body={:?}", dt, body);
        assert_eq!(body.bottom(), 560.0, "dt={}", dt);
    }
}

#[test]
fn test_resting_player_stays_put() {
    let mut session = landed_session();

    for _ in 0..30 {
        session.step(PlayerIntent::idle(), DT);
        let body = session.player_body().unwrap();
        assert!(body.on_ground);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.bottom(), 560.0);
    }
}

#[test]
fn test_run_right_sets_velocity_and_facing() {
    let mut session = landed_session();
    let start_x = session.player_body().unwrap().position.x;

    session.run(PlayerIntent::right(), DT, 60);
    let body = session.player_body().unwrap();

    assert_eq!(body.velocity.x, 300.0);
    assert!(body.facing_right);
    assert!((body.position.x - (start_x + 300.0)).abs() < 0.1, "x = {}", body.position.x);

    session.step(PlayerIntent::left(), DT);
    let body = session.player_body().unwrap();
    assert_eq!(body.velocity.x, -300.0);
    assert!(!body.facing_right);

    // Без input - мгновенная остановка (без инерции)
    session.step(PlayerIntent::idle(), DT);
    assert_eq!(session.player_body().unwrap().velocity.x, 0.0);
}

#[test]
fn test_both_directions_right_wins() {
    let mut session = landed_session();
    let intent = PlayerIntent {
        move_left: true,
        move_right: true,
        ..PlayerIntent::default()
    };

    session.step(intent, DT);
    assert_eq!(session.player_body().unwrap().velocity.x, 300.0);
}

#[test]
fn test_level_bounds_clamp() {
    let mut session = landed_session();

    session.run(PlayerIntent::left(), DT, 60);
    assert_eq!(session.player_body().unwrap().left(), 0.0);

    // 2000px уровень: 8 секунд бега вправо хватает с запасом
    session.run(PlayerIntent::right(), DT, 480);
    assert_eq!(session.player_body().unwrap().right(), 2000.0);
}

#[test]
fn test_jump_only_from_ground() {
    let mut session = landed_session();

    session.step(PlayerIntent::idle().with_jump(), DT);
    let body = session.player_body().unwrap();
    assert!(!body.on_ground);
    assert!(body.velocity.y < 0.0, "velocity.y = {}", body.velocity.y);
    assert!(body.bottom() < 560.0);

    // В воздухе повторный прыжок ничего не даёт
    let before = body.velocity.y;
    session.step(PlayerIntent::idle().with_jump(), DT);
    let after = session.player_body().unwrap().velocity.y;
    assert!(after > before, "gravity only: {} -> {}", before, after);

    // Приземление (~0.75s полёта)
    session.run(PlayerIntent::idle(), DT, 90);
    let body = session.player_body().unwrap();
    assert!(body.on_ground);
    assert_eq!(body.bottom(), 560.0);
}

#[test]
fn test_camera_follows_player() {
    let mut session = landed_session();
    assert_eq!(session.camera().unwrap().left(), 0.0);

    session.run(PlayerIntent::right(), DT, 240);
    let body = session.player_body().unwrap();
    let camera = session.camera().unwrap();

    let expected = (body.center().x - 400.0).clamp(0.0, 1200.0);
    assert!((camera.left() - expected).abs() < 1e-3);
    assert_eq!(camera.top(), 0.0);

    session.run(PlayerIntent::right(), DT, 480);
    assert_eq!(session.camera().unwrap().left(), 1200.0);
}
