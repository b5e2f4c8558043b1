//! Combat module
//!
//! - Damage rules + notifications (damage.rs, чистые функции)
//! - Systems: стрельба, таймеры, пули vs враги, контактный урон
//! - Score resource
//!
//! Системы регистрируются в ShooterTick (см. schedule), не здесь.

pub mod damage;
pub mod systems;

// Re-export основных типов
pub use damage::{apply_enemy_damage, apply_player_damage, Score};
pub use systems::{fire_player_weapon, resolve_contact_damage, resolve_projectile_hits, tick_player_timers};
