//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - body: KinematicBody (позиция/скорость/ground state)
//! - health: PlayerHealth (с неуязвимостью), EnemyHealth, DamageOutcome
//! - player: Player marker, PlayerIntent, PlayerController
//! - enemy: Enemy + tracking
//! - projectile: Projectile, Heading

pub mod body;
pub mod enemy;
pub mod health;
pub mod player;
pub mod projectile;

// Re-exports для удобного импорта
pub use body::*;
pub use enemy::*;
pub use health::*;
pub use player::*;
pub use projectile::*;
