//! Collision resolver: тело против static geometry
//!
//! Три прохода, порядок важен:
//! 1. Ground - probe под ногами, snap bottom → platform.top
//! 2. Horizontal - выталкивание из стен по минимальной горизонтальной пенетрации
//! 3. Ceiling - только при движении вверх, probe над головой
//!
//! Ground первым: приземление на край платформы не превращается в
//! боковое выталкивание (нет jitter).
//!
//! Probe тянется назад на весь вертикальный шаг тика (`last_step`), поэтому
//! длинный dt не проваливает тело сквозь платформу.

use crate::components::KinematicBody;
use crate::geometry::{Aabb, Axis, HasBounds};

/// Минимальная глубина probe (стоящее тело, тела без интеграции)
pub const PROBE_DEPTH: f32 = 16.0;

/// Зазор снаружи тела, в пределах которого контакт считается касанием
pub const PROBE_SKIN: f32 = 1.0;

/// Горизонтальный inset probe (против ложного ground от соседних стен)
pub const PROBE_INSET: f32 = 6.0;

fn probe_inset(body: &KinematicBody) -> f32 {
    PROBE_INSET.min(body.size.x * 0.25).max(0.0)
}

/// Глубина probe: PROBE_DEPTH или пройденный за тик путь (+ skin), что больше
fn probe_depth(travelled: f32) -> f32 {
    PROBE_DEPTH.max(travelled + PROBE_SKIN)
}

/// Прямоугольник у ног: [bottom - depth, bottom + skin]
///
/// При падении depth покрывает весь шаг тика: верх любой платформы между
/// прошлым и текущим bottom попадает в probe.
pub fn ground_probe(body: &KinematicBody) -> Aabb {
    let inset = probe_inset(body);
    let depth = probe_depth(body.last_step.y);
    Aabb::new(
        body.left() + inset,
        body.bottom() - depth,
        body.size.x - inset * 2.0,
        depth + PROBE_SKIN,
    )
}

/// Прямоугольник у головы: [top - skin, top + depth]
pub fn ceiling_probe(body: &KinematicBody) -> Aabb {
    let inset = probe_inset(body);
    let depth = probe_depth(-body.last_step.y);
    Aabb::new(
        body.left() + inset,
        body.top() - PROBE_SKIN,
        body.size.x - inset * 2.0,
        depth + PROBE_SKIN,
    )
}

/// Разрешает коллизии тела с платформами, возвращает `on_ground`
///
/// `on_ground` всегда пересчитывается с нуля. Ничья между платформами
/// решается порядком списка. Вырожденные платформы молча пропускаются.
pub fn resolve_platform_collisions<P: HasBounds>(body: &mut KinematicBody, platforms: &[P]) -> bool {
    body.on_ground = false;

    let ground = resolve_ground(body, platforms);
    resolve_walls(body, platforms, ground);

    if body.velocity.y < 0.0 {
        resolve_ceiling(body, platforms);
    }

    body.on_ground
}

/// Pass 1: первая платформа, чей верх попал в ground probe, пока тело падает/стоит
fn resolve_ground<P: HasBounds>(body: &mut KinematicBody, platforms: &[P]) -> Option<usize> {
    if body.velocity.y < 0.0 {
        return None;
    }

    let probe = ground_probe(body);

    for (index, platform) in platforms.iter().enumerate() {
        let rect = platform.bounds();

        // Верх платформы должен лежать внутри полосы probe - иначе это стена сбоку
        if probe.intersects(&rect) && rect.top() >= probe.top() {
            body.set_bottom(rect.top());
            body.velocity.y = 0.0;
            body.on_ground = true;
            return Some(index);
        }
    }

    None
}

/// Pass 2: горизонтальное выталкивание
///
/// Только позиционная коррекция: velocity.x не трогаем, её снова выставит input.
fn resolve_walls<P: HasBounds>(body: &mut KinematicBody, platforms: &[P], ground: Option<usize>) {
    for (index, platform) in platforms.iter().enumerate() {
        if ground == Some(index) {
            continue;
        }

        let rect = platform.bounds();
        let bounds = body.rect();
        if !bounds.intersects(&rect) {
            continue;
        }

        // Вбок только когда тело пересекает край стены (не целиком внутри по X)
        // и горизонтальная глубина меньше вертикальной
        let horizontal = bounds.overlap_on_axis(&rect, Axis::X);
        let vertical = bounds.overlap_on_axis(&rect, Axis::Y);

        if horizontal < bounds.width && horizontal < vertical {
            if bounds.center().x <= rect.center().x {
                body.set_right(rect.left());
            } else {
                body.set_left(rect.right());
            }
        }
    }
}

/// Pass 3: удар головой о низ платформы
fn resolve_ceiling<P: HasBounds>(body: &mut KinematicBody, platforms: &[P]) {
    let probe = ceiling_probe(body);

    for platform in platforms {
        let rect = platform.bounds();

        if probe.intersects(&rect) && rect.bottom() <= probe.bottom() {
            body.set_top(rect.bottom());
            body.velocity.y = 0.0;
            return;
        }
    }
}
