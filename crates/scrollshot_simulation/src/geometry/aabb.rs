//! Axis-aligned rectangles, screen-space convention (y растёт вниз).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Ось для overlap/penetration запросов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Axis-aligned bounding box
///
/// `(x, y)` - левый верхний угол. Прямоугольник с `width <= 0` или
/// `height <= 0` вырожденный и ни с чем не пересекается.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Прямоугольник с центром в `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Строгое пересечение: касание рёбрами не считается
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }

        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Длина перекрытия проекций на ось (<= 0 - проекции не пересекаются)
    pub fn overlap_on_axis(&self, other: &Aabb, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.right().min(other.right()) - self.left().max(other.left()),
            Axis::Y => self.bottom().min(other.bottom()) - self.top().max(other.top()),
        }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

/// Capability: у объекта есть границы для коллизий
pub trait HasBounds {
    fn bounds(&self) -> Aabb;
}

impl HasBounds for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

/// Тег категории entity (Player / Enemy / Projectile / Platform)
///
/// Используется для явного dispatch в snapshot и debug выводе вместо
/// проверки набора компонентов. Платформы не entity (живут в `Level`),
/// `Platform` только метит их в snapshot.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
    Platform,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Enemy => "enemy",
            EntityKind::Projectile => "projectile",
            EntityKind::Platform => "platform",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlapping() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_degenerate_never_intersects() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let flat = Aabb::new(2.0, 2.0, 5.0, 0.0);
        let negative = Aabb::new(2.0, 2.0, -5.0, 5.0);
        assert!(!a.intersects(&flat));
        assert!(!a.intersects(&negative));
        assert!(!flat.intersects(&flat));
    }

    #[test]
    fn test_overlap_on_axis() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(7.0, -4.0, 10.0, 6.0);
        assert_eq!(a.overlap_on_axis(&b, Axis::X), 3.0);
        assert_eq!(a.overlap_on_axis(&b, Axis::Y), 2.0);

        let far = Aabb::new(20.0, 0.0, 5.0, 5.0);
        assert!(a.overlap_on_axis(&far, Axis::X) <= 0.0);
    }

    #[test]
    fn test_from_center() {
        let r = Aabb::from_center(Vec2::new(50.0, 20.0), Vec2::new(12.0, 6.0));
        assert_eq!(r.left(), 44.0);
        assert_eq!(r.top(), 17.0);
        assert_eq!(r.center(), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn test_entity_kind_labels_are_distinct() {
        let kinds = [EntityKind::Player, EntityKind::Enemy, EntityKind::Projectile, EntityKind::Platform];
        let labels: std::collections::HashSet<_> = kinds.iter().map(|kind| kind.as_str()).collect();

        assert_eq!(labels.len(), kinds.len());
        assert_eq!(EntityKind::Platform.as_str(), "platform");
    }
}
