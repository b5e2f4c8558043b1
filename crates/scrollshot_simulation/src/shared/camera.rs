//! Scrolling camera: viewport следует за игроком, clamp по границам уровня

use bevy::prelude::*;
use crate::components::{Enemy, KinematicBody, Player, Projectile};
use crate::config::ShooterConfig;
use crate::geometry::Aabb;

/// Viewport в мировых координатах (Resource)
///
/// Stateless кроме текущего прямоугольника: `update` полностью его пересчитывает.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    viewport: Aabb,
    level_size: Vec2,
}

impl Camera {
    pub fn new(viewport_size: Vec2, level_size: Vec2) -> Self {
        Self {
            viewport: Aabb::from_position_size(Vec2::ZERO, viewport_size),
            level_size,
        }
    }

    /// Центрирует viewport на цели, затем clamp каждой оси в `[0, level - viewport]`
    ///
    /// Уровень меньше viewport по оси → 0.
    pub fn update(&mut self, target: Vec2) -> Aabb {
        let size = self.viewport.size();
        let max = self.level_size - size;

        let x = (target.x - size.x / 2.0).min(max.x).max(0.0);
        let y = (target.y - size.y / 2.0).min(max.y).max(0.0);

        self.viewport = Aabb::from_position_size(Vec2::new(x, y), size);
        self.viewport
    }

    pub fn viewport(&self) -> Aabb {
        self.viewport
    }

    pub fn left(&self) -> f32 {
        self.viewport.left()
    }

    pub fn right(&self) -> f32 {
        self.viewport.right()
    }

    pub fn top(&self) -> f32 {
        self.viewport.top()
    }

    pub fn bottom(&self) -> f32 {
        self.viewport.bottom()
    }

    /// World → screen (для рендера)
    pub fn to_screen(&self, rect: &Aabb) -> Aabb {
        rect.translated(-self.viewport.position())
    }

    pub fn to_screen_point(&self, point: Vec2) -> Vec2 {
        point - self.viewport.position()
    }
}

/// Камера на центр игрока
pub fn update_camera(mut camera: ResMut<Camera>, player: Query<&KinematicBody, With<Player>>) {
    if let Ok(body) = player.single() {
        camera.update(body.center());
    }
}

/// Пуля улетела дальше margin за край камеры
pub fn is_projectile_offscreen(bounds: &Aabb, camera: &Camera, margin: f32) -> bool {
    bounds.right() < camera.left() - margin || bounds.left() > camera.right() + margin
}

/// Враг отстал больше чем на ширину viewport за левым краем
pub fn is_enemy_left_behind(bounds: &Aabb, camera: &Camera) -> bool {
    bounds.right() < camera.left() - camera.viewport().width
}

/// Удаляет пули и врагов, ушедших за пределы камеры
pub fn cull_offscreen(
    mut commands: Commands,
    camera: Res<Camera>,
    config: Res<ShooterConfig>,
    projectiles: Query<(Entity, &Projectile)>,
    enemies: Query<(Entity, &KinematicBody), (With<Enemy>, Without<Player>)>,
) {
    let margin = config.weapon.offscreen_margin;

    for (entity, projectile) in projectiles.iter() {
        if is_projectile_offscreen(&projectile.bounds, &camera, margin) {
            commands.entity(entity).despawn();
        }
    }

    for (entity, body) in enemies.iter() {
        if is_enemy_left_behind(&body.rect(), &camera) {
            commands.entity(entity).despawn();
        }
    }
}
