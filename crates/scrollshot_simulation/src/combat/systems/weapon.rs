//! Стрельба игрока + таймеры (cooldown, неуязвимость)

use bevy::prelude::*;
use crate::components::{KinematicBody, Player, PlayerController, PlayerHealth, PlayerIntent};
use crate::config::ShooterConfig;
use crate::events::{EventBus, GameEvent};
use crate::geometry::EntityKind;
use crate::schedule::TickDelta;

/// Intent.shoot → пуля (если cooldown готов) + BulletFired
///
/// Идёт после apply_player_intents: facing уже обновлён этим тиком.
pub fn fire_player_weapon(
    mut commands: Commands,
    mut query: Query<(&PlayerIntent, &mut PlayerController, &KinematicBody, &PlayerHealth), With<Player>>,
    config: Res<ShooterConfig>,
    mut bus: ResMut<EventBus>,
) {
    for (intent, mut controller, body, health) in query.iter_mut() {
        if !intent.shoot || !health.is_alive() {
            continue;
        }

        if let Some(projectile) = controller.try_shoot(body, &config.weapon) {
            commands.spawn((projectile, EntityKind::Projectile));
            bus.emit(&GameEvent::BulletFired);
        }
    }
}

/// Countdown таймеров игрока
pub fn tick_player_timers(
    mut query: Query<(&mut PlayerController, &mut PlayerHealth), With<Player>>,
    delta: Res<TickDelta>,
) {
    for (mut controller, mut health) in query.iter_mut() {
        controller.tick(delta.0);
        health.tick(delta.0);
    }
}
