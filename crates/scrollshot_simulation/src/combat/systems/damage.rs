//! Dynamic collision → damage systems
//!
//! Сущности собираются и сортируются по entity index перед all-pairs проверкой:
//! «первое совпадение» не зависит от порядка итерации archetype.

use bevy::prelude::*;
use crate::combat::{apply_enemy_damage, apply_player_damage, Score};
use crate::components::{DamageOutcome, Enemy, EnemyHealth, KinematicBody, Player, PlayerHealth, Projectile};
use crate::events::EventBus;
use crate::geometry::Aabb;
use crate::logger;
use crate::physics::{resolve_contacts, resolve_hits};

/// Пули против врагов
///
/// Пуля удаляется при любом попадании; враг - только если урон его убил.
pub fn resolve_projectile_hits(
    mut commands: Commands,
    projectiles: Query<(Entity, &Projectile)>,
    mut enemies: Query<(Entity, &KinematicBody, &mut EnemyHealth), (With<Enemy>, Without<Player>)>,
    mut bus: ResMut<EventBus>,
    mut score: ResMut<Score>,
) {
    let mut bullets: Vec<(Entity, Projectile)> = projectiles
        .iter()
        .filter(|(_, projectile)| !projectile.is_expired())
        .map(|(entity, projectile)| (entity, *projectile))
        .collect();
    bullets.sort_by_key(|(entity, _)| entity.index());

    let mut targets: Vec<(Entity, Aabb)> = enemies
        .iter()
        .map(|(entity, body, _)| (entity, body.rect()))
        .collect();
    targets.sort_by_key(|(entity, _)| entity.index());

    let bullet_bounds: Vec<Aabb> = bullets.iter().map(|(_, projectile)| projectile.bounds).collect();
    let target_bounds: Vec<Aabb> = targets.iter().map(|(_, bounds)| *bounds).collect();

    for hit in resolve_hits(&bullet_bounds, &target_bounds) {
        let (bullet, projectile) = bullets[hit.projectile];
        let (target, bounds) = targets[hit.target];

        commands.entity(bullet).despawn();

        let Ok((_, _, mut health)) = enemies.get_mut(target) else {
            continue;
        };

        if apply_enemy_damage(&mut health, projectile.damage, bounds.center(), &mut *bus) == DamageOutcome::Died {
            score.kills += 1;
            logger::log_info(&format!(
                "Enemy {:?} killed at ({:.1}, {:.1}), score: {}",
                target,
                bounds.center().x,
                bounds.center().y,
                score.kills
            ));
            commands.entity(target).despawn();
        }
    }
}

/// Контакт игрока с врагами
///
/// Каждый перекрывающий враг вызывает take_damage по очереди: после первого
/// удара неуязвимость подавляет остальные в этом же тике.
pub fn resolve_contact_damage(
    mut player: Query<(&KinematicBody, &mut PlayerHealth), With<Player>>,
    enemies: Query<(Entity, &KinematicBody, &Enemy), Without<Player>>,
    mut bus: ResMut<EventBus>,
) {
    let Ok((body, mut health)) = player.single_mut() else {
        return;
    };
    if !health.is_alive() {
        return;
    }

    let mut attackers: Vec<(Entity, Aabb, u32)> = enemies
        .iter()
        .map(|(entity, enemy_body, enemy)| (entity, enemy_body.rect(), enemy.contact_damage))
        .collect();
    attackers.sort_by_key(|(entity, _, _)| entity.index());

    let rects: Vec<Aabb> = attackers.iter().map(|(_, rect, _)| *rect).collect();

    for index in resolve_contacts(body, &rects) {
        let (enemy, _, damage) = attackers[index];

        match apply_player_damage(&mut health, damage, &mut *bus) {
            DamageOutcome::Damaged { health } => {
                logger::log_info(&format!("Player hit by {:?}, health: {}", enemy, health));
            }
            DamageOutcome::Died => {
                logger::log_warning(&format!("Player killed by {:?}", enemy));
            }
            DamageOutcome::Ignored => {}
        }
    }
}
