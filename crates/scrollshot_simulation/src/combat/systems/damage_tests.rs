//! Tests for damage systems.

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use bevy::prelude::*;
    use std::sync::{Arc, Mutex};
    use crate::combat::Score;
    use crate::components::{EnemyHealth, KinematicBody, PlayerHealth, Projectile, Heading};
    use crate::config::ShooterConfig;
    use crate::events::{EventBus, GameEvent};
    use crate::geometry::EntityKind;
    use crate::session::player_bundle;
    use crate::spawn::enemy_bundle;
    use super::super::damage::{resolve_contact_damage, resolve_projectile_hits};

    type Recorded = Arc<Mutex<Vec<GameEvent>>>;

    fn setup() -> (World, Recorded) {
        let mut world = World::new();
        let seen: Recorded = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut bus = EventBus::new();
        bus.subscribe_all(move |event| sink.lock().unwrap().push(*event));

        world.insert_resource(bus);
        world.insert_resource(Score::default());
        world.insert_resource(ShooterConfig::default());
        (world, seen)
    }

    fn spawn_enemy(world: &mut World, center: Vec2) -> Entity {
        let config = ShooterConfig::default();
        world.spawn(enemy_bundle(center, &config.enemy)).id()
    }

    fn spawn_bullet(world: &mut World, center: Vec2) -> Entity {
        let config = ShooterConfig::default();
        let projectile = Projectile::fire(center, Heading::Right, &config.weapon);
        world.spawn((projectile, EntityKind::Projectile)).id()
    }

    fn spawn_player_at(world: &mut World, position: Vec2) -> Entity {
        let config = ShooterConfig::default();
        let player = world.spawn(player_bundle(&config)).id();
        world.get_mut::<KinematicBody>(player).unwrap().position = position;
        player
    }

    #[test]
    fn test_bullet_damages_enemy_without_removing_it() {
        let (mut world, seen) = setup();
        let enemy = spawn_enemy(&mut world, Vec2::new(400.0, 300.0));
        let bullet = spawn_bullet(&mut world, Vec2::new(400.0, 300.0));

        world.run_system_once(resolve_projectile_hits).unwrap();

        assert!(!world.entities().contains(bullet), "bullet must be removed on hit");
        assert_eq!(world.get::<EnemyHealth>(enemy).unwrap().current, 25);
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(world.resource::<Score>().kills, 0);
    }

    #[test]
    fn test_second_hit_kills_and_scores() {
        let (mut world, seen) = setup();
        let enemy = spawn_enemy(&mut world, Vec2::new(400.0, 300.0));

        spawn_bullet(&mut world, Vec2::new(400.0, 300.0));
        world.run_system_once(resolve_projectile_hits).unwrap();
        spawn_bullet(&mut world, Vec2::new(400.0, 300.0));
        world.run_system_once(resolve_projectile_hits).unwrap();

        assert!(!world.entities().contains(enemy), "dead enemy must be removed");
        assert_eq!(world.resource::<Score>().kills, 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![GameEvent::EnemyKilled { position: Vec2::new(400.0, 300.0) }]
        );
    }

    #[test]
    fn test_two_bullets_same_tick_single_kill() {
        let (mut world, seen) = setup();
        let enemy = spawn_enemy(&mut world, Vec2::new(400.0, 300.0));
        let first = spawn_bullet(&mut world, Vec2::new(398.0, 300.0));
        let second = spawn_bullet(&mut world, Vec2::new(402.0, 300.0));

        world.run_system_once(resolve_projectile_hits).unwrap();

        assert!(!world.entities().contains(enemy));
        assert!(!world.entities().contains(first));
        assert!(!world.entities().contains(second));
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(world.resource::<Score>().kills, 1);
    }

    #[test]
    fn test_bullet_hits_at_most_one_target() {
        let (mut world, _) = setup();
        let near = spawn_enemy(&mut world, Vec2::new(400.0, 300.0));
        let overlapping = spawn_enemy(&mut world, Vec2::new(410.0, 300.0));
        spawn_bullet(&mut world, Vec2::new(405.0, 300.0));

        world.run_system_once(resolve_projectile_hits).unwrap();

        assert_eq!(world.get::<EnemyHealth>(near).unwrap().current, 25);
        assert_eq!(world.get::<EnemyHealth>(overlapping).unwrap().current, 50);
    }

    #[test]
    fn test_expired_bullet_never_hits() {
        let (mut world, _) = setup();
        let enemy = spawn_enemy(&mut world, Vec2::new(400.0, 300.0));
        let bullet = spawn_bullet(&mut world, Vec2::new(400.0, 300.0));
        world.get_mut::<Projectile>(bullet).unwrap().lifetime = 0.0;

        world.run_system_once(resolve_projectile_hits).unwrap();

        assert_eq!(world.get::<EnemyHealth>(enemy).unwrap().current, 50);
    }

    #[test]
    fn test_simultaneous_contacts_hit_once() {
        let (mut world, seen) = setup();
        let player = spawn_player_at(&mut world, Vec2::new(100.0, 100.0));
        spawn_enemy(&mut world, Vec2::new(110.0, 120.0));
        spawn_enemy(&mut world, Vec2::new(120.0, 130.0));
        spawn_enemy(&mut world, Vec2::new(900.0, 130.0));

        world.run_system_once(resolve_contact_damage).unwrap();

        let health = world.get::<PlayerHealth>(player).unwrap();
        assert_eq!(health.current, 85);
        assert!(health.is_invincible());
        assert_eq!(*seen.lock().unwrap(), vec![GameEvent::PlayerDamaged { health: 85 }]);
    }

    #[test]
    fn test_dead_player_takes_no_contact() {
        let (mut world, seen) = setup();
        let player = spawn_player_at(&mut world, Vec2::new(100.0, 100.0));
        world.get_mut::<PlayerHealth>(player).unwrap().take_damage(100);
        spawn_enemy(&mut world, Vec2::new(110.0, 120.0));

        world.run_system_once(resolve_contact_damage).unwrap();

        assert_eq!(world.get::<PlayerHealth>(player).unwrap().current, 0);
        assert!(seen.lock().unwrap().is_empty());
    }
}
