//! Enemy spawning: чисто по времени, за правым краем камеры

use bevy::prelude::*;
use rand::Rng;
use crate::components::{Enemy, EnemyHealth, KinematicBody};
use crate::config::{EnemyConfig, SpawnConfig};
use crate::geometry::{Aabb, EntityKind};
use crate::logger;
use crate::schedule::TickDelta;
use crate::shared::Camera;
use crate::DeterministicRng;

/// Запрос на спавн врага (центр)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
}

/// Аккумулятор времени + фиксированный интервал
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SpawnController {
    pub elapsed: f32,
    pub interval: f32,
    pub margin: f32,
    pub band_min: f32,
    pub band_max: f32,
}

impl SpawnController {
    pub fn new(config: &SpawnConfig) -> Self {
        Self {
            elapsed: 0.0,
            interval: config.interval,
            margin: config.margin,
            band_min: config.band_min,
            band_max: config.band_max,
        }
    }

    /// Копит dt; на пороге сбрасывает аккумулятор в 0 (остаток не переносится)
    ///
    /// Максимум один запрос за вызов, даже если dt больше нескольких интервалов.
    pub fn tick(&mut self, delta: f32, viewport: &Aabb, rng: &mut impl Rng) -> Option<SpawnRequest> {
        self.elapsed += delta.max(0.0);

        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed = 0.0;

        let y = if self.band_min < self.band_max {
            rng.gen_range(self.band_min..=self.band_max)
        } else {
            self.band_min
        };

        Some(SpawnRequest {
            position: Vec2::new(viewport.right() + self.margin, y),
        })
    }
}

/// Bundle врага с центром в `center`
pub fn enemy_bundle(center: Vec2, config: &EnemyConfig) -> impl Bundle {
    (
        Enemy::from_config(config),
        EnemyHealth::new(config.health),
        KinematicBody::centered(center, Vec2::new(config.width, config.height)),
        EntityKind::Enemy,
    )
}

/// Система спавна (после коллизий, до камеры)
pub fn spawn_enemies(
    mut commands: Commands,
    mut spawner: ResMut<SpawnController>,
    mut rng: ResMut<DeterministicRng>,
    camera: Res<Camera>,
    config: Res<crate::config::ShooterConfig>,
    delta: Res<TickDelta>,
) {
    let Some(request) = spawner.tick(delta.0, &camera.viewport(), &mut rng.rng) else {
        return;
    };

    let entity = commands.spawn(enemy_bundle(request.position, &config.enemy)).id();
    logger::log(&format!(
        "Enemy {:?} spawned at ({:.1}, {:.1})",
        entity, request.position.x, request.position.y
    ));
}
