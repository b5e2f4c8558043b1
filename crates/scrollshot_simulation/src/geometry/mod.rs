//! 2D геометрия: Aabb + capability traits
//!
//! Vector math - bevy `Vec2` (glam), здесь только прямоугольники и теги.

pub mod aabb;

pub use aabb::*;
