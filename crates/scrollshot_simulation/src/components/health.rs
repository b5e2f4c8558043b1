//! Health / damage state machines
//!
//! Игрок: Healthy → Invincible → Healthy → … → Dead (terminal).
//! Враг: без окна неуязвимости, урон безусловный, health == 0 → Dead.

use bevy::prelude::*;

/// Результат попытки нанести урон
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Урон подавлен (неуязвимость или уже мёртв)
    Ignored,
    /// Урон применён, entity жив
    Damaged { health: u32 },
    /// Этот удар убил entity (ровно один раз за жизнь)
    Died,
}

/// Состояние жизни игрока
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vitality {
    Healthy,
    Invincible { remaining: f32 },
    Dead,
}

/// Здоровье игрока с окном неуязвимости
///
/// Инвариант: 0 ≤ current ≤ max; меняется только через take_damage.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerHealth {
    pub current: u32,
    pub max: u32,
    /// Длительность неуязвимости после урона (секунды)
    pub invincibility_duration: f32,
    pub state: Vitality,
}

impl PlayerHealth {
    pub fn new(max: u32, invincibility_duration: f32) -> Self {
        Self {
            current: max,
            max,
            invincibility_duration,
            state: Vitality::Healthy,
        }
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self.state, Vitality::Dead)
    }

    pub fn is_invincible(&self) -> bool {
        matches!(self.state, Vitality::Invincible { .. })
    }

    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        match self.state {
            Vitality::Dead | Vitality::Invincible { .. } => DamageOutcome::Ignored,
            Vitality::Healthy => {
                self.current = self.current.saturating_sub(amount);

                if self.current == 0 {
                    self.state = Vitality::Dead;
                    DamageOutcome::Died
                } else {
                    self.state = Vitality::Invincible {
                        remaining: self.invincibility_duration,
                    };
                    DamageOutcome::Damaged { health: self.current }
                }
            }
        }
    }

    /// Countdown неуязвимости; при remaining <= 0 возвращаемся в Healthy
    pub fn tick(&mut self, delta: f32) {
        if let Vitality::Invincible { remaining } = self.state {
            let remaining = remaining - delta.max(0.0);
            self.state = if remaining <= 0.0 {
                Vitality::Healthy
            } else {
                Vitality::Invincible { remaining }
            };
        }
    }

    /// Доля здоровья 0..=1 (для HUD/лога)
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Здоровье врага (без неуязвимости)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyHealth {
    pub current: u32,
    pub max: u32,
}

impl EnemyHealth {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        if !self.is_alive() {
            return DamageOutcome::Ignored;
        }

        self.current = self.current.saturating_sub(amount);
        if self.current == 0 {
            DamageOutcome::Died
        } else {
            DamageOutcome::Damaged { health: self.current }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_starts_invincibility() {
        let mut health = PlayerHealth::new(100, 1.0);

        assert_eq!(health.take_damage(15), DamageOutcome::Damaged { health: 85 });
        assert!(health.is_invincible());

        // Во время неуязвимости урон полностью подавлен
        assert_eq!(health.take_damage(15), DamageOutcome::Ignored);
        assert_eq!(health.current, 85);
    }

    #[test]
    fn test_invincibility_expires() {
        let mut health = PlayerHealth::new(100, 1.0);
        health.take_damage(10);

        health.tick(0.5);
        assert!(health.is_invincible());

        health.tick(0.5);
        assert_eq!(health.state, Vitality::Healthy);

        assert_eq!(health.take_damage(10), DamageOutcome::Damaged { health: 80 });
    }

    #[test]
    fn test_lethal_damage_dies_once() {
        let mut health = PlayerHealth::new(100, 1.0);

        assert_eq!(health.take_damage(100), DamageOutcome::Died);
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());

        // Мёртвый - всё игнорируется, повторной смерти нет
        for _ in 0..5 {
            health.tick(2.0);
            assert_eq!(health.take_damage(10), DamageOutcome::Ignored);
        }
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_overkill_clamps_to_zero() {
        let mut health = PlayerHealth::new(30, 1.0);
        assert_eq!(health.take_damage(500), DamageOutcome::Died);
        assert_eq!(health.current, 0);
        assert_eq!(health.fraction(), 0.0);
    }

    #[test]
    fn test_fraction_tracks_damage() {
        let mut health = PlayerHealth::new(100, 1.0);
        assert_eq!(health.fraction(), 1.0);

        health.take_damage(15);
        assert!((health.fraction() - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_tick_without_invincibility_is_noop() {
        let mut health = PlayerHealth::new(100, 1.0);
        health.tick(3.0);
        assert_eq!(health.state, Vitality::Healthy);
        assert_eq!(health.current, 100);
    }

    #[test]
    fn test_enemy_health() {
        let mut health = EnemyHealth::new(50);

        assert_eq!(health.take_damage(25), DamageOutcome::Damaged { health: 25 });
        assert_eq!(health.take_damage(25), DamageOutcome::Died);
        assert_eq!(health.take_damage(25), DamageOutcome::Ignored);
        assert_eq!(health.current, 0);
    }
}
