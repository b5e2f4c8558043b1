//! ShooterTick - один шаг симуляции
//!
//! Все системы тика идут одной `.chain()` в отдельном schedule.
//! dt передаётся явно через `TickDelta`, поэтому тик можно гонять вручную
//! (тесты, ShooterSession) или из FixedUpdate (real-time host).
//!
//! Порядок: intents → timers → integration → level clamp → enemy tracking →
//! projectiles → static collision → projectile hits → contact damage →
//! spawn → camera → culling.

use bevy::ecs::schedule::{ExecutorKind, ScheduleLabel};
use bevy::prelude::*;
use crate::combat::{fire_player_weapon, resolve_contact_damage, resolve_projectile_hits, tick_player_timers, Score};
use crate::config::ShooterConfig;
use crate::events::EventBus;
use crate::level::Level;
use crate::logger;
use crate::physics::{
    advance_projectiles, apply_player_intents, clamp_player_to_level, integrate_player, resolve_static_collisions,
    track_enemies,
};
use crate::shared::{cull_offscreen, update_camera, Camera};
use crate::spawn::{spawn_enemies, SpawnController};
use crate::DeterministicRng;

/// Schedule одного тика
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShooterTick;

/// dt текущего тика (секунды, ≥ 0)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct TickDelta(pub f32);

/// Регистрирует ресурсы сессии и системы ShooterTick
///
/// DeterministicRng берётся из App если уже есть (create_headless_app), иначе seed 42.
pub struct ShooterPlugin {
    pub config: ShooterConfig,
    pub level: Level,
}

impl ShooterPlugin {
    pub fn new(config: ShooterConfig, level: Level) -> Self {
        Self { config, level }
    }
}

impl Plugin for ShooterPlugin {
    fn build(&self, app: &mut App) {
        // Строго последовательно, детерминированно
        let mut schedule = Schedule::new(ShooterTick);
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        app.add_schedule(schedule);

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.insert_resource(self.config.clone())
            .insert_resource(self.level.clone())
            .insert_resource(Camera::new(self.config.viewport_size(), self.level.size()))
            .insert_resource(SpawnController::new(&self.config.spawn))
            .init_resource::<Score>()
            .init_resource::<EventBus>()
            .init_resource::<TickDelta>();

        app.add_systems(
            ShooterTick,
            (
                // Фаза 1: input intents
                apply_player_intents,
                fire_player_weapon,
                // Фаза 2: таймеры (cooldown, неуязвимость)
                tick_player_timers,
                // Фаза 3: интеграция
                integrate_player,
                clamp_player_to_level,
                track_enemies,
                advance_projectiles,
                // Фаза 4: static collision
                resolve_static_collisions,
                // Фаза 5: dynamic collision → damage/events
                resolve_projectile_hits,
                resolve_contact_damage,
                // Фаза 6: spawn, camera, cleanup
                spawn_enemies,
                update_camera,
                cull_offscreen,
            )
                .chain(), // Последовательное выполнение
        );
    }
}

/// Один тик с явным dt (отрицательный/NaN dt → 0)
pub fn run_tick(world: &mut World, delta: f32) {
    world.insert_resource(TickDelta(delta.max(0.0)));

    if let Err(err) = world.try_run_schedule(ShooterTick) {
        logger::log_error(&format!("ShooterTick failed to run: {:?}", err));
    }
}

/// FixedUpdate driver: гоняет ShooterTick с fixed timestep
pub fn run_fixed_tick(world: &mut World) {
    let delta = world
        .get_resource::<Time<Fixed>>()
        .map(|time| time.delta_secs())
        .unwrap_or(0.0);

    run_tick(world, delta);
}
