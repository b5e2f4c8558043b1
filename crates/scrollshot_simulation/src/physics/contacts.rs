//! Dynamic vs dynamic: пули против целей, тело против врагов
//!
//! All-pairs O(n·m) - на этом масштабе spatial partitioning не нужен.

use crate::geometry::HasBounds;

/// Пара (индекс пули, индекс цели) в переданных срезах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPair {
    pub projectile: usize,
    pub target: usize,
}

/// Каждая пуля попадает максимум в одну цель (первое совпадение по порядку)
///
/// Цель может получить несколько попаданий за тик от разных пуль.
pub fn resolve_hits<P: HasBounds, T: HasBounds>(projectiles: &[P], targets: &[T]) -> Vec<HitPair> {
    let target_bounds: Vec<_> = targets.iter().map(HasBounds::bounds).collect();

    projectiles
        .iter()
        .enumerate()
        .filter_map(|(projectile, p)| {
            let bounds = p.bounds();
            target_bounds
                .iter()
                .position(|t| bounds.intersects(t))
                .map(|target| HitPair { projectile, target })
        })
        .collect()
}

/// Все цели, перекрывающие тело (без дедупликации - решает damage gate)
pub fn resolve_contacts<B: HasBounds, T: HasBounds>(body: &B, others: &[T]) -> Vec<usize> {
    let bounds = body.bounds();

    others
        .iter()
        .enumerate()
        .filter(|(_, other)| bounds.intersects(&other.bounds()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Aabb;

    #[test]
    fn test_projectile_hits_first_target_only() {
        let projectiles = [Aabb::new(10.0, 10.0, 12.0, 6.0)];
        let targets = [
            Aabb::new(0.0, 0.0, 32.0, 32.0),
            Aabb::new(5.0, 5.0, 32.0, 32.0),
        ];

        let hits = resolve_hits(&projectiles, &targets);
        assert_eq!(hits, vec![HitPair { projectile: 0, target: 0 }]);
    }

    #[test]
    fn test_two_projectiles_same_target() {
        let projectiles = [Aabb::new(10.0, 10.0, 12.0, 6.0), Aabb::new(12.0, 12.0, 12.0, 6.0)];
        let targets = [Aabb::new(0.0, 0.0, 32.0, 32.0)];

        let hits = resolve_hits(&projectiles, &targets);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.target == 0));
    }

    #[test]
    fn test_miss() {
        let projectiles = [Aabb::new(100.0, 100.0, 12.0, 6.0)];
        let targets = [Aabb::new(0.0, 0.0, 32.0, 32.0)];
        assert!(resolve_hits(&projectiles, &targets).is_empty());

        let empty: [Aabb; 0] = [];
        assert!(resolve_hits(&empty, &targets).is_empty());
        assert!(resolve_hits(&projectiles, &empty).is_empty());
    }

    #[test]
    fn test_contacts_report_every_overlap() {
        let player = Aabb::new(0.0, 0.0, 32.0, 48.0);
        let enemies = [
            Aabb::new(20.0, 10.0, 32.0, 32.0),
            Aabb::new(200.0, 10.0, 32.0, 32.0),
            Aabb::new(-10.0, 30.0, 32.0, 32.0),
        ];

        assert_eq!(resolve_contacts(&player, &enemies), vec![0, 2]);
    }
}
