//! Static geometry: платформы уровня
//!
//! Создаются один раз при загрузке уровня, дальше только читаются
//! (shared by reference во всех collision проверках тика).

use bevy::prelude::*;
use thiserror::Error;
use crate::config::ShooterConfig;
use crate::geometry::{Aabb, HasBounds};

#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("platform #{index} has negative size ({width}x{height})")]
    NegativeSize { index: usize, width: f32, height: f32 },

    #[error("platform #{index} lies outside the level bounds {level_width}x{level_height}")]
    OutOfBounds {
        index: usize,
        level_width: f32,
        level_height: f32,
    },
}

/// Статическая платформа
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub bounds: Aabb,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Aabb::new(x, y, width, height),
        }
    }
}

impl HasBounds for Platform {
    fn bounds(&self) -> Aabb {
        self.bounds
    }
}

/// Floating платформы стандартного уровня (x, y, w, h)
const FLOATING_PLATFORMS: [(f32, f32, f32, f32); 13] = [
    (200.0, 480.0, 150.0, 20.0),
    (450.0, 400.0, 150.0, 20.0),
    (700.0, 320.0, 150.0, 20.0),
    (950.0, 400.0, 150.0, 20.0),
    (1200.0, 480.0, 150.0, 20.0),
    (1400.0, 350.0, 200.0, 20.0),
    (1700.0, 420.0, 150.0, 20.0),
    (100.0, 350.0, 100.0, 20.0),
    (350.0, 250.0, 120.0, 20.0),
    (600.0, 180.0, 100.0, 20.0),
    (900.0, 220.0, 150.0, 20.0),
    (1100.0, 280.0, 120.0, 20.0),
    (1500.0, 200.0, 150.0, 20.0),
];

const GROUND_THICKNESS: f32 = 40.0;

/// Уровень: размер + неизменяемый список платформ
///
/// Порядок платформ = приоритет при ground проверке (первое совпадение).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Level {
    size: Vec2,
    platforms: Vec<Platform>,
}

impl Level {
    pub fn new(size: Vec2, platforms: Vec<Platform>) -> Self {
        Self { size, platforms }
    }

    /// Стандартный уровень: земля на всю ширину + 13 floating платформ
    pub fn default_layout(config: &ShooterConfig) -> Self {
        let ground = Platform::new(
            0.0,
            config.viewport.height - GROUND_THICKNESS,
            config.level.width,
            GROUND_THICKNESS,
        );

        let platforms = std::iter::once(ground)
            .chain(FLOATING_PLATFORMS.iter().map(|&(x, y, w, h)| Platform::new(x, y, w, h)))
            .collect();

        Self::new(config.level_size(), platforms)
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Проверка при загрузке: отрицательные размеры и выход за границы
    ///
    /// Нулевой размер допустим - такая платформа просто ни с чем не пересекается.
    pub fn validate(&self) -> Result<(), LevelError> {
        for (index, platform) in self.platforms.iter().enumerate() {
            let b = platform.bounds;

            if b.width < 0.0 || b.height < 0.0 {
                return Err(LevelError::NegativeSize {
                    index,
                    width: b.width,
                    height: b.height,
                });
            }

            if b.left() < 0.0 || b.top() < 0.0 || b.right() > self.size.x || b.bottom() > self.size.y {
                return Err(LevelError::OutOfBounds {
                    index,
                    level_width: self.size.x,
                    level_height: self.size.y,
                });
            }
        }

        Ok(())
    }
}
