//! ECS системы движения (ShooterTick)
//!
//! Порядок внутри тика задаёт schedule: intents → integrate → clamp →
//! enemy tracking → projectiles → static collision.
//! Все системы читают dt из `TickDelta`, не из `Time`.

use bevy::prelude::*;
use crate::components::{Enemy, KinematicBody, Player, PlayerController, PlayerHealth, PlayerIntent, Projectile};
use crate::config::ShooterConfig;
use crate::level::Level;
use crate::schedule::TickDelta;
use super::{integrate, resolve_platform_collisions};

/// Intent → velocity.x / прыжок
///
/// Мёртвый игрок игнорирует input (горизонтальная скорость гасится).
pub fn apply_player_intents(
    mut query: Query<(&PlayerIntent, &PlayerController, &PlayerHealth, &mut KinematicBody), With<Player>>,
) {
    for (intent, controller, health, mut body) in query.iter_mut() {
        if !health.is_alive() {
            body.velocity.x = 0.0;
            continue;
        }

        controller.apply_movement(&mut body, intent);
    }
}

/// Гравитация + velocity → position (только игрок: враги летают)
pub fn integrate_player(
    mut query: Query<&mut KinematicBody, With<Player>>,
    config: Res<ShooterConfig>,
    delta: Res<TickDelta>,
) {
    for mut body in query.iter_mut() {
        integrate(
            &mut body,
            delta.0,
            config.physics.gravity,
            config.physics.terminal_velocity,
        );
    }
}

/// Игрок не выходит за левый/правый край уровня
pub fn clamp_player_to_level(mut query: Query<&mut KinematicBody, With<Player>>, level: Res<Level>) {
    let level_width = level.size().x;

    for mut body in query.iter_mut() {
        if body.left() < 0.0 {
            body.set_left(0.0);
        }
        if body.right() > level_width {
            body.set_right(level_width);
        }
    }
}

/// Враги летят к центру игрока; пока игрок мёртв - стоят
pub fn track_enemies(
    player: Query<(&KinematicBody, &PlayerHealth), With<Player>>,
    mut enemies: Query<(&Enemy, &mut KinematicBody), Without<Player>>,
    delta: Res<TickDelta>,
) {
    let Ok((player_body, health)) = player.single() else {
        return;
    };
    if !health.is_alive() {
        return;
    }

    let target = player_body.center();
    for (enemy, mut body) in enemies.iter_mut() {
        crate::components::track_toward(&mut body, target, enemy.speed, delta.0);
    }
}

/// Сдвигает пули, истёкшие удаляются сразу
pub fn advance_projectiles(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Projectile)>,
    delta: Res<TickDelta>,
) {
    for (entity, mut projectile) in query.iter_mut() {
        if !projectile.advance(delta.0) {
            commands.entity(entity).despawn();
        }
    }
}

/// Body vs static geometry для игрока
pub fn resolve_static_collisions(mut query: Query<&mut KinematicBody, With<Player>>, level: Res<Level>) {
    for mut body in query.iter_mut() {
        resolve_platform_collisions(&mut body, level.platforms());
    }
}
