//! Kinematic body: позиция, размер, скорость, ground state

use bevy::prelude::*;
use crate::geometry::{Aabb, HasBounds};

/// Kinematic тело (игрок, враг)
///
/// `position` - левый верхний угол прямоугольника. Мутируется только
/// интеграцией и разрешением коллизий, один раз за тик, в этом порядке.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    /// Пересчитывается с нуля каждый тик в resolve_platform_collisions
    pub on_ground: bool,
    pub facing_right: bool,
    /// Смещение за последний шаг интеграции (sweep для ground/ceiling probe)
    pub last_step: Vec2,
}

impl KinematicBody {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            on_ground: false,
            facing_right: true,
            last_step: Vec2::ZERO,
        }
    }

    /// Тело с центром в `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size * 0.5, size)
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_position_size(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn set_left(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.position.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.position.y = y - self.size.y;
    }
}

impl HasBounds for KinematicBody {
    fn bounds(&self) -> Aabb {
        self.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let mut body = KinematicBody::new(Vec2::new(10.0, 20.0), Vec2::new(32.0, 48.0));
        assert_eq!(body.right(), 42.0);
        assert_eq!(body.bottom(), 68.0);
        assert_eq!(body.center(), Vec2::new(26.0, 44.0));

        body.set_bottom(100.0);
        assert_eq!(body.position.y, 52.0);

        body.set_right(50.0);
        assert_eq!(body.position.x, 18.0);
    }

    #[test]
    fn test_centered() {
        let body = KinematicBody::centered(Vec2::new(100.0, 100.0), Vec2::new(32.0, 32.0));
        assert_eq!(body.position, Vec2::new(84.0, 84.0));
        assert_eq!(body.rect().center(), Vec2::new(100.0, 100.0));
    }
}
