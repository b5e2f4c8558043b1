//! Headless симуляция Scrollshot
//!
//! Скриптованный прогон: игрок бежит вправо, прыгает и стреляет.
//! Опционально первый аргумент - путь к RON конфигу.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use scrollshot_simulation::{EventKind, GameEvent, Level, PlayerIntent, SessionError, ShooterConfig, ShooterSession};

const SEED: u64 = 42;
const TICKS: usize = 1800; // 30 секунд при 60Hz
const DT: f32 = 1.0 / 60.0;

fn load_config() -> Result<ShooterConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            Ok(ShooterConfig::from_ron_str(&text)?)
        }
        None => Ok(ShooterConfig::default()),
    }
}

/// Скрипт input: бег вправо, прыжок каждую секунду, огонь постоянно
fn scripted_intent(tick: usize) -> PlayerIntent {
    let mut intent = PlayerIntent::right().with_shoot();
    if tick % 60 == 0 {
        intent = intent.with_jump();
    }
    intent
}

fn run(config: ShooterConfig) -> Result<u32, SessionError> {
    let level = Level::default_layout(&config);
    let mut session = ShooterSession::start(config, level, SEED)?;

    let shots = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&shots);
    session.subscribe(EventKind::BulletFired, move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    session.subscribe_all(|event| match event {
        GameEvent::EnemyKilled { position } => {
            println!("  enemy killed at ({:.0}, {:.0})", position.x, position.y)
        }
        GameEvent::PlayerDamaged { health } => println!("  player hit, health {}", health),
        GameEvent::PlayerDied => println!("  player died"),
        GameEvent::BulletFired => {}
    });

    for tick in 0..TICKS {
        session.step(scripted_intent(tick), DT);

        if tick % 300 == 0 {
            let x = session.player_body().map_or(0.0, |body| body.position.x);
            let health = session.player_health().map_or(0.0, |health| health.fraction());
            println!(
                "Tick {}: player x={:.0}, health={:.0}%, enemies={}, bullets={}, score={}",
                tick,
                x,
                health * 100.0,
                session.enemy_count(),
                session.projectile_count(),
                session.score()
            );
        }

        if !session.is_player_alive() {
            println!("Player died at tick {}", tick);
            break;
        }
    }

    println!("Shots fired: {}", shots.load(Ordering::Relaxed));
    Ok(session.end())
}

fn main() {
    println!("Starting Scrollshot headless simulation (seed: {})", SEED);

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {}", err);
            std::process::exit(1);
        }
    };

    match run(config) {
        Ok(score) => println!("Simulation complete! Score: {}", score),
        Err(err) => {
            eprintln!("Failed to start session: {}", err);
            std::process::exit(1);
        }
    }
}
