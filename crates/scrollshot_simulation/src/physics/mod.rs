//! Physics simulation module
//!
//! Kinematic интеграция + коллизии на AABB (без physics engine).
//! Чистые функции (integrate, resolve_*) + тонкие ECS системы в movement.

pub mod collision;
pub mod contacts;
pub mod integrate;
pub mod movement;


// Re-export основных типов
pub use collision::{resolve_platform_collisions, ceiling_probe, ground_probe, PROBE_DEPTH};
pub use contacts::{resolve_contacts, resolve_hits, HitPair};
pub use integrate::integrate;
pub use movement::{
    advance_projectiles,
    apply_player_intents,
    clamp_player_to_level,
    integrate_player,
    resolve_static_collisions,
    track_enemies,
};
