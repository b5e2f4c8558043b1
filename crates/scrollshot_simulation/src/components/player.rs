//! Player: intents от input слоя + контроллер движения/стрельбы

use bevy::prelude::*;
use crate::components::{Heading, KinematicBody, Projectile};
use crate::config::{PlayerConfig, WeaponConfig};

/// Маркер игрока
///
/// PlayerIntent добавляется автоматически через Required Components.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(PlayerIntent)]
pub struct Player;

/// Декодированный input текущего тика (заполняется presentation слоем)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub shoot: bool,
}

impl PlayerIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn right() -> Self {
        Self {
            move_right: true,
            ..Self::default()
        }
    }

    pub fn left() -> Self {
        Self {
            move_left: true,
            ..Self::default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn with_shoot(mut self) -> Self {
        self.shoot = true;
        self
    }
}

/// Параметры движения и cooldown стрельбы
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerController {
    pub speed: f32,
    pub jump_velocity: f32,
    pub shoot_cooldown: f32,
    /// Текущий cooldown (0 = можно стрелять)
    pub cooldown_remaining: f32,
}

impl PlayerController {
    pub fn new(player: &PlayerConfig, weapon: &WeaponConfig) -> Self {
        Self {
            speed: player.speed,
            jump_velocity: player.jump_velocity,
            shoot_cooldown: weapon.shoot_cooldown,
            cooldown_remaining: 0.0,
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.cooldown_remaining <= 0.0
    }

    pub fn tick(&mut self, delta: f32) {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining -= delta.max(0.0);
        }
    }

    /// Горизонтальная скорость ставится напрямую (без инерции), прыжок только с земли
    pub fn apply_movement(&self, body: &mut KinematicBody, intent: &PlayerIntent) {
        body.velocity.x = 0.0;

        if intent.move_left {
            body.velocity.x = -self.speed;
            body.facing_right = false;
        }
        // Right перекрывает left если зажаты обе
        if intent.move_right {
            body.velocity.x = self.speed;
            body.facing_right = true;
        }

        if intent.jump && body.on_ground {
            body.velocity.y = self.jump_velocity;
            body.on_ground = false;
        }
    }

    /// Выстрел если cooldown готов: пуля с переднего края, по центру высоты
    pub fn try_shoot(&mut self, body: &KinematicBody, weapon: &WeaponConfig) -> Option<Projectile> {
        if !self.can_shoot() {
            return None;
        }

        let heading = Heading::from_facing(body.facing_right);
        let edge_x = match heading {
            Heading::Right => body.right(),
            Heading::Left => body.left(),
        };
        let origin = Vec2::new(edge_x, body.center().y);

        self.cooldown_remaining = self.shoot_cooldown;
        Some(Projectile::fire(origin, heading, weapon))
    }
}
