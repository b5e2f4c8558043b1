//! Projectile: пуля с ограниченным временем жизни
//!
//! Удаляется когда lifetime <= 0 или при первом попадании.

use bevy::prelude::*;
use crate::config::WeaponConfig;
use crate::geometry::{Aabb, HasBounds};

/// Направление полёта по оси X
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn from_facing(facing_right: bool) -> Self {
        if facing_right {
            Heading::Right
        } else {
            Heading::Left
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub bounds: Aabb,
    pub heading: Heading,
    /// px/s
    pub speed: f32,
    pub damage: u32,
    /// Оставшееся время жизни (секунды), никогда не < 0
    pub lifetime: f32,
}

impl Projectile {
    /// Пуля с центром в `origin` (передний край стрелка, середина по высоте)
    pub fn fire(origin: Vec2, heading: Heading, weapon: &WeaponConfig) -> Self {
        Self {
            bounds: Aabb::from_center(origin, Vec2::new(weapon.bullet_width, weapon.bullet_height)),
            heading,
            speed: weapon.bullet_speed,
            damage: weapon.bullet_damage,
            lifetime: weapon.bullet_lifetime.max(0.0),
        }
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.speed * self.heading.sign(), 0.0)
    }

    /// Сдвигает пулю и уменьшает lifetime. Возвращает false когда пуля истекла.
    pub fn advance(&mut self, delta: f32) -> bool {
        let delta = delta.max(0.0);
        self.bounds = self.bounds.translated(self.velocity() * delta);
        self.lifetime = (self.lifetime - delta).max(0.0);
        !self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

impl HasBounds for Projectile {
    fn bounds(&self) -> Aabb {
        self.bounds
    }
}
