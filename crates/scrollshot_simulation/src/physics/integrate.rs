//! Velocity/gravity интеграция (semi-implicit Euler)

use bevy::prelude::*;
use crate::components::KinematicBody;

/// Один шаг интеграции тела
///
/// `velocity.y += gravity * dt`, затем clamp сверху по `terminal_velocity`,
/// затем `position += velocity * dt`. Отрицательный dt (и NaN) приводится к 0,
/// при dt == 0 позиция и скорость не меняются. Горизонтальная скорость здесь
/// не меняется: её ставит input.
///
/// Смещение шага сохраняется в `last_step`, collision resolver расширяет по нему probe.
pub fn integrate(body: &mut KinematicBody, delta: f32, gravity: f32, terminal_velocity: f32) {
    let delta = delta.max(0.0);
    if delta == 0.0 {
        body.last_step = Vec2::ZERO;
        return;
    }

    body.velocity.y = (body.velocity.y + gravity * delta).min(terminal_velocity);
    body.last_step = body.velocity * delta;
    body.position += body.last_step;
}
