//! Tunable constants для симуляции
//!
//! Все значения по умолчанию - из исходного дизайна уровня (800x600 viewport,
//! 2000px уровень, 60 Hz). Загружается из RON (частичный документ допустим:
//! отсутствующие поля берутся из Default).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки загрузки/валидации конфига
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("config serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Гравитация и ограничение скорости падения
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// px/s², положительная = вниз
    pub gravity: f32,
    /// Максимальная скорость падения (px/s)
    pub terminal_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1500.0,
            terminal_velocity: 800.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Горизонтальная скорость (px/s), без инерции
    pub speed: f32,
    /// Начальная вертикальная скорость прыжка (отрицательная = вверх)
    pub jump_velocity: f32,
    pub max_health: u32,
    /// Длительность неуязвимости после урона (секунды)
    pub invincibility_time: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 48.0,
            speed: 300.0,
            jump_velocity: -550.0,
            max_health: 100,
            invincibility_time: 1.0,
            spawn_x: 100.0,
            spawn_y: 450.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Секунды между выстрелами
    pub shoot_cooldown: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    pub bullet_damage: u32,
    /// Время жизни пули (секунды)
    pub bullet_lifetime: f32,
    /// Пули дальше этого отступа от краёв камеры удаляются
    pub offscreen_margin: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            shoot_cooldown: 0.25,
            bullet_width: 12.0,
            bullet_height: 6.0,
            bullet_speed: 600.0,
            bullet_damage: 25,
            bullet_lifetime: 2.0,
            offscreen_margin: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub health: u32,
    /// Урон игроку при касании
    pub contact_damage: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 32.0,
            speed: 150.0,
            health: 50,
            contact_damage: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Секунды между спавнами
    pub interval: f32,
    /// Отступ за правым краем камеры
    pub margin: f32,
    /// Вертикальная полоса спавна (центр врага), включительно
    pub band_min: f32,
    pub band_max: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval: 2.5,
            margin: 50.0,
            band_min: 100.0,
            band_max: 450.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 600.0,
        }
    }
}

/// Полный конфиг сессии (Resource)
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub weapon: WeaponConfig,
    pub enemy: EnemyConfig,
    pub spawn: SpawnConfig,
    pub viewport: ViewportConfig,
    pub level: LevelConfig,
}

impl ShooterConfig {
    /// Парсит RON документ и валидирует результат
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: ShooterConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("physics.terminal_velocity", self.physics.terminal_velocity)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        non_negative("player.invincibility_time", self.player.invincibility_time)?;
        if self.player.max_health == 0 {
            return Err(invalid("player.max_health", "must be at least 1"));
        }
        non_negative("weapon.shoot_cooldown", self.weapon.shoot_cooldown)?;
        positive("weapon.bullet_lifetime", self.weapon.bullet_lifetime)?;
        positive("enemy.width", self.enemy.width)?;
        positive("enemy.height", self.enemy.height)?;
        positive("spawn.interval", self.spawn.interval)?;
        if self.spawn.band_min > self.spawn.band_max {
            return Err(invalid(
                "spawn.band_min",
                format!("{} is above band_max {}", self.spawn.band_min, self.spawn.band_max),
            ));
        }
        positive("viewport.width", self.viewport.width)?;
        positive("viewport.height", self.viewport.height)?;
        positive("level.width", self.level.width)?;
        positive("level.height", self.level.height)?;
        Ok(())
    }

    pub fn level_size(&self) -> Vec2 {
        Vec2::new(self.level.width, self.level.height)
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport.width, self.viewport.height)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be > 0, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be >= 0, got {}", value)))
    }
}
