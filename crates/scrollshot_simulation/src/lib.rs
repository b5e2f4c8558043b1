//! Scrollshot Simulation Core
//!
//! Headless 2D side-scroller shooter на Bevy 0.16 ECS:
//! kinematic физика на AABB, коллизии с платформами, пули/враги,
//! урон с неуязвимостью, спавн по таймеру, scrolling камера.
//!
//! Presentation слой (рендер, звук, input) - снаружи: он заполняет
//! PlayerIntent и подписывается на GameEvent через EventBus.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod components;
pub mod config;
pub mod events;
pub mod geometry;
pub mod level;
pub mod logger;
pub mod physics;
pub mod schedule;
pub mod session;
pub mod shared;
pub mod spawn;

// Re-export базовых типов для удобства
pub use combat::{apply_enemy_damage, apply_player_damage, Score};
pub use components::*;
pub use config::{ConfigError, ShooterConfig};
pub use events::{EventBus, EventKind, EventSink, GameEvent, ListenerId};
pub use geometry::{Aabb, Axis, EntityKind, HasBounds};
pub use level::{Level, LevelError, Platform};
pub use logger::init_logger;
pub use physics::{integrate, resolve_contacts, resolve_hits, resolve_platform_collisions, HitPair};
pub use schedule::{run_tick, ShooterPlugin, ShooterTick, TickDelta};
pub use session::{player_bundle, SessionError, ShooterSession};
pub use shared::Camera;
pub use spawn::{SpawnController, SpawnRequest};

/// Real-time plugin: ShooterTick из FixedUpdate (60 Hz) + спавн игрока на Startup
pub struct SimulationPlugin {
    pub config: ShooterConfig,
    pub level: Level,
}

impl SimulationPlugin {
    pub fn new(config: ShooterConfig, level: Level) -> Self {
        Self { config, level }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins(ShooterPlugin::new(self.config.clone(), self.level.clone()))
            .add_systems(Startup, spawn_player)
            .add_systems(FixedUpdate, schedule::run_fixed_tick);
    }
}

fn spawn_player(mut commands: Commands, config: Res<ShooterConfig>) {
    let player = commands.spawn(player_bundle(&config)).id();
    logger::log_info(&format!("Player {:?} spawned", player));
}

/// Детерминистичный RNG resource (seeded)
///
/// Единственный источник случайности симуляции (высота спавна врагов).
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Компоненты типа `T` в порядке entity index, сериализованные через Debug.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
