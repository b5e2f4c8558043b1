//! Damage application + notifications
//!
//! Health компоненты решают что произошло (DamageOutcome), здесь -
//! какое событие из этого следует. Смерть игрока даёт только PlayerDied.

use bevy::prelude::*;
use crate::components::{DamageOutcome, EnemyHealth, PlayerHealth};
use crate::events::{EventSink, GameEvent};

/// Счёт сессии: +1 за каждого убитого врага
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub kills: u32,
}

/// Урон игроку с уведомлением
pub fn apply_player_damage(health: &mut PlayerHealth, amount: u32, sink: &mut impl EventSink) -> DamageOutcome {
    let outcome = health.take_damage(amount);

    match outcome {
        DamageOutcome::Damaged { health } => sink.notify(GameEvent::PlayerDamaged { health }),
        DamageOutcome::Died => sink.notify(GameEvent::PlayerDied),
        DamageOutcome::Ignored => {}
    }

    outcome
}

/// Урон врагу; при смерти - EnemyKilled с последней позицией (центр)
pub fn apply_enemy_damage(
    health: &mut EnemyHealth,
    amount: u32,
    position: Vec2,
    sink: &mut impl EventSink,
) -> DamageOutcome {
    let outcome = health.take_damage(amount);

    if outcome == DamageOutcome::Died {
        sink.notify(GameEvent::EnemyKilled { position });
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_damage_notifications() {
        let mut health = PlayerHealth::new(30, 1.0);
        let mut events: Vec<GameEvent> = Vec::new();

        apply_player_damage(&mut health, 15, &mut events);
        // Неуязвим - ни урона, ни события
        apply_player_damage(&mut health, 15, &mut events);
        health.tick(1.0);
        apply_player_damage(&mut health, 15, &mut events);

        assert_eq!(events, vec![GameEvent::PlayerDamaged { health: 15 }, GameEvent::PlayerDied]);
    }

    #[test]
    fn test_player_death_notified_once() {
        let mut health = PlayerHealth::new(100, 1.0);
        let mut events: Vec<GameEvent> = Vec::new();

        assert_eq!(apply_player_damage(&mut health, 100, &mut events), DamageOutcome::Died);
        for _ in 0..5 {
            health.tick(2.0);
            assert_eq!(apply_player_damage(&mut health, 100, &mut events), DamageOutcome::Ignored);
        }

        assert_eq!(events, vec![GameEvent::PlayerDied]);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_enemy_kill_carries_position() {
        let mut health = EnemyHealth::new(50);
        let mut events: Vec<GameEvent> = Vec::new();
        let position = Vec2::new(640.0, 200.0);

        assert_eq!(
            apply_enemy_damage(&mut health, 25, position, &mut events),
            DamageOutcome::Damaged { health: 25 }
        );
        assert!(events.is_empty());

        assert_eq!(apply_enemy_damage(&mut health, 25, position, &mut events), DamageOutcome::Died);
        assert_eq!(apply_enemy_damage(&mut health, 25, position, &mut events), DamageOutcome::Ignored);
        assert_eq!(events, vec![GameEvent::EnemyKilled { position }]);
    }
}
