//! Held-trigger shooting at a fixed cadence.

use bevy::prelude::*;

use super::components::{ControllerConfig, FireControl, Player};
use crate::core::FireEvent;
use crate::stats::StatBlock;

/// Where a projectile leaves the player: `offset` units along its facing.
pub fn fire_origin(transform: &Transform, offset: f32) -> (Vec3, Vec3) {
    let direction = transform.forward().as_vec3();
    (transform.translation + direction * offset, direction)
}

/// Emit at most one `FireEvent` per fire interval while the left button is held.
pub fn fire_weapon(
    mouse: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut query: Query<(Entity, &Transform, &StatBlock, &mut FireControl), With<Player>>,
    mut fire_events: EventWriter<FireEvent>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }

    let Ok((shooter, transform, stats, mut fire_control)) = query.get_single_mut() else {
        return;
    };

    if !fire_control.try_fire(time.elapsed_secs(), config.fire_interval) {
        return;
    }

    let (origin, direction) = fire_origin(transform, config.fire_point_offset);
    fire_events.send(FireEvent {
        shooter,
        origin,
        direction,
        damage: stats.power(),
    });
}
