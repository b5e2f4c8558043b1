//! Flying enemy: летит к игроку, без гравитации

use bevy::prelude::*;
use crate::components::KinematicBody;
use crate::config::EnemyConfig;

/// Враг (контактный урон + скорость преследования)
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub speed: f32,
    pub contact_damage: u32,
}

impl Enemy {
    pub fn from_config(config: &EnemyConfig) -> Self {
        Self {
            speed: config.speed,
            contact_damage: config.contact_damage,
        }
    }
}

/// Двигает тело к `target` по нормализованному направлению
///
/// Совпадение центров - нулевое направление, тело стоит на месте.
pub fn track_toward(body: &mut KinematicBody, target: Vec2, speed: f32, delta: f32) {
    let direction = (target - body.center()).normalize_or_zero();

    body.velocity = direction * speed;
    body.position += body.velocity * delta.max(0.0);
    body.facing_right = direction.x > 0.0;
}
