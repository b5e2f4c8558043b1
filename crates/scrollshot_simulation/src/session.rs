//! ShooterSession - жизненный цикл одной игровой сессии
//!
//! start: мир (уровень, игрок, ресурсы) → step(intent, dt)… → end.
//! Listeners живут ровно столько же, сколько сессия: end (или Drop) снимает их все.

use bevy::prelude::*;
use thiserror::Error;
use crate::combat::Score;
use crate::components::{Enemy, EnemyHealth, KinematicBody, Player, PlayerController, PlayerHealth, PlayerIntent, Projectile};
use crate::config::{ConfigError, ShooterConfig};
use crate::events::{EventBus, EventKind, GameEvent, ListenerId};
use crate::geometry::EntityKind;
use crate::level::{Level, LevelError};
use crate::logger;
use crate::schedule::{run_tick, ShooterPlugin};
use crate::shared::Camera;
use crate::spawn::enemy_bundle;
use crate::{create_headless_app, world_snapshot};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Level(#[from] LevelError),
}

/// Bundle игрока из конфига (позиция = левый верхний угол)
pub fn player_bundle(config: &ShooterConfig) -> impl Bundle {
    let player = &config.player;

    (
        Player,
        EntityKind::Player,
        KinematicBody::new(
            Vec2::new(player.spawn_x, player.spawn_y),
            Vec2::new(player.width, player.height),
        ),
        PlayerHealth::new(player.max_health, player.invincibility_time),
        PlayerController::new(player, &config.weapon),
        PlayerIntent::idle(),
    )
}

pub struct ShooterSession {
    app: App,
    player: Entity,
    ended: bool,
}

impl ShooterSession {
    /// Валидирует конфиг и уровень, строит мир
    pub fn start(config: ShooterConfig, level: Level, seed: u64) -> Result<Self, SessionError> {
        config.validate()?;
        level.validate()?;

        let platform_count = level.platforms().len();
        let mut app = create_headless_app(seed);
        app.add_plugins(ShooterPlugin::new(config.clone(), level));

        let world = app.world_mut();
        let player = world.spawn(player_bundle(&config)).id();

        let center = world.get::<KinematicBody>(player).map(|body| body.center());
        if let (Some(center), Some(mut camera)) = (center, world.get_resource_mut::<Camera>()) {
            camera.update(center);
        }

        logger::log_info(&format!(
            "Session started (seed: {}, platforms: {}, player: {:?})",
            seed, platform_count, player
        ));

        Ok(Self {
            app,
            player,
            ended: false,
        })
    }

    /// Стандартный конфиг + стандартный уровень
    pub fn with_defaults(seed: u64) -> Result<Self, SessionError> {
        let config = ShooterConfig::default();
        let level = Level::default_layout(&config);
        Self::start(config, level, seed)
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn subscribe<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&GameEvent) + Send + Sync + 'static,
    {
        self.bus_mut().subscribe(kind, listener)
    }

    pub fn subscribe_all<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GameEvent) + Send + Sync + 'static,
    {
        self.bus_mut().subscribe_all(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus_mut().unsubscribe(id)
    }

    fn bus_mut(&mut self) -> Mut<'_, EventBus> {
        self.app.world_mut().resource_mut::<EventBus>()
    }

    /// Один тик: intent текущего кадра + dt
    pub fn step(&mut self, intent: PlayerIntent, delta: f32) {
        if self.ended {
            return;
        }

        let world = self.app.world_mut();
        if let Some(mut current) = world.get_mut::<PlayerIntent>(self.player) {
            *current = intent;
        }

        run_tick(world, delta);
    }

    /// Несколько тиков с одинаковым intent
    pub fn run(&mut self, intent: PlayerIntent, delta: f32, ticks: usize) {
        for _ in 0..ticks {
            self.step(intent, delta);
        }
    }

    pub fn player_body(&self) -> Option<KinematicBody> {
        self.app.world().get::<KinematicBody>(self.player).copied()
    }

    pub fn player_health(&self) -> Option<PlayerHealth> {
        self.app.world().get::<PlayerHealth>(self.player).copied()
    }

    pub fn is_player_alive(&self) -> bool {
        self.player_health().is_some_and(|health| health.is_alive())
    }

    pub fn camera(&self) -> Option<Camera> {
        self.app.world().get_resource::<Camera>().copied()
    }

    pub fn score(&self) -> u32 {
        self.app.world().get_resource::<Score>().map_or(0, |score| score.kills)
    }

    /// Враги в порядке entity index
    pub fn enemies(&mut self) -> Vec<(Entity, KinematicBody, EnemyHealth)> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<(Entity, &KinematicBody, &EnemyHealth), With<Enemy>>();
        let mut enemies: Vec<_> = query
            .iter(world)
            .map(|(entity, body, health)| (entity, *body, *health))
            .collect();
        enemies.sort_by_key(|(entity, _, _)| entity.index());
        enemies
    }

    pub fn projectiles(&mut self) -> Vec<Projectile> {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Projectile)>();
        let mut projectiles: Vec<_> = query.iter(world).map(|(entity, p)| (entity, *p)).collect();
        projectiles.sort_by_key(|(entity, _)| entity.index());
        projectiles.into_iter().map(|(_, p)| p).collect()
    }

    pub fn enemy_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query_filtered::<(), With<Enemy>>().iter(world).count()
    }

    pub fn projectile_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query_filtered::<(), With<Projectile>>().iter(world).count()
    }

    /// Ручной спавн врага (центр)
    pub fn spawn_enemy_at(&mut self, center: Vec2) -> Entity {
        let world = self.app.world_mut();
        let config = world
            .get_resource::<ShooterConfig>()
            .map(|config| config.enemy)
            .unwrap_or_default();

        world.spawn(enemy_bundle(center, &config)).id()
    }

    /// Прямой доступ к миру (snapshots, debug)
    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Снимок тел, здоровья, пуль и платформ уровня для сравнения прогонов
    pub fn snapshot(&mut self) -> Vec<u8> {
        let world = self.app.world_mut();
        let mut snapshot = world_snapshot::<EntityKind>(world);
        snapshot.extend(world_snapshot::<KinematicBody>(world));
        snapshot.extend(world_snapshot::<PlayerHealth>(world));
        snapshot.extend(world_snapshot::<EnemyHealth>(world));
        snapshot.extend(world_snapshot::<Projectile>(world));

        if let Some(level) = world.get_resource::<Level>() {
            for platform in level.platforms() {
                snapshot.extend_from_slice(EntityKind::Platform.as_str().as_bytes());
                snapshot.extend_from_slice(format!("{:?}", platform.bounds).as_bytes());
            }
        }

        snapshot
    }

    /// Завершает сессию: снимает listeners, возвращает итоговый счёт
    pub fn end(mut self) -> u32 {
        self.release();
        self.score()
    }

    fn release(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if let Some(mut bus) = self.app.world_mut().get_resource_mut::<EventBus>() {
            bus.clear();
        }
        logger::log_info(&format!("Session ended (score: {})", self.score()));
    }
}

impl Drop for ShooterSession {
    fn drop(&mut self) {
        self.release();
    }
}
