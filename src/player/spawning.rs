//! Player entity construction.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::stats::StatBlock;

/// Capsule half height of the player body.
pub const PLAYER_HALF_HEIGHT: f32 = 0.5;
/// Capsule radius of the player body.
pub const PLAYER_RADIUS: f32 = 0.5;

/// Spawn the player body with controller state and physics.
///
/// Visuals are attached by the caller so this also works headless.
pub fn spawn_player(commands: &mut Commands, position: Vec3, stats: StatBlock) -> Entity {
    commands
        .spawn((
            (
                Player,
                stats,
                MoveIntent::default(),
                PlanarVelocity::default(),
                DashState::default(),
                DoubleTapDetector::default(),
                FireControl::default(),
                Transform::from_translation(position),
                Visibility::default(),
            ),
            // Rapier physics: the controller writes X/Z velocity, gravity owns Y
            RigidBody::Dynamic,
            Collider::capsule_y(PLAYER_HALF_HEIGHT, PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            Friction::coefficient(0.0),
            Damping {
                linear_damping: 0.0,
                angular_damping: 0.0,
            },
            ActiveEvents::COLLISION_EVENTS,
            Name::new("Player"),
        ))
        .id()
}
