//! Rover components, tuning, and the pure control helpers.

use bevy::prelude::*;
use serde::Deserialize;

/// Screens of the rover game.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum RoverScreen {
    #[default]
    Title,
    Driving,
}

/// Marker for rover title screen entities.
#[derive(Component)]
pub struct RoverTitleUi;

/// Marker for the force-driven rover.
#[derive(Component)]
pub struct Rover;

/// Position last frame, used to derive the heading.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PreviousPosition(pub Vec3);

/// Tuning for the rover.
#[derive(Resource, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RoverConfig {
    /// Force per held key
    pub force: f32,
    /// Per-axis speed above which no more force is added
    pub max_speed: f32,
    /// Degrees per second toward the travel direction
    pub turn_rate_degrees: f32,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            force: 5.0,
            max_speed: 4.0,
            turn_rate_degrees: 600.0,
        }
    }
}

/// Which steering keys are held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoverKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl RoverKeys {
    pub fn from_input(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            forward: keyboard.pressed(KeyCode::KeyW),
            back: keyboard.pressed(KeyCode::KeyS),
            left: keyboard.pressed(KeyCode::KeyA),
            right: keyboard.pressed(KeyCode::KeyD),
        }
    }
}

/// Force to apply this frame.
///
/// Zero once either horizontal axis reaches `max_speed`; otherwise each held
/// key contributes `force` along its world axis.
pub fn rover_force(keys: RoverKeys, velocity: Vec3, config: &RoverConfig) -> Vec3 {
    if velocity.x.abs() >= config.max_speed || velocity.z.abs() >= config.max_speed {
        return Vec3::ZERO;
    }

    let mut force = Vec3::ZERO;
    if keys.forward {
        force += Vec3::NEG_Z * config.force;
    }
    if keys.back {
        force += Vec3::Z * config.force;
    }
    if keys.right {
        force += Vec3::X * config.force;
    }
    if keys.left {
        force += Vec3::NEG_X * config.force;
    }
    force
}

/// Rotate `current` toward facing `direction`, by at most `max_radians`.
///
/// The vertical part of `direction` is ignored; a zero direction keeps `current`.
pub fn turn_toward(current: Quat, direction: Vec3, max_radians: f32) -> Quat {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() <= f32::EPSILON {
        return current;
    }

    let target = Transform::IDENTITY.looking_to(flat, Vec3::Y).rotation;
    let angle = current.angle_between(target);
    if angle <= max_radians {
        target
    } else {
        current.slerp(target, max_radians / angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_key_pushes_along_its_axis() {
        let config = RoverConfig::default();
        let keys = RoverKeys {
            forward: true,
            right: true,
            ..default()
        };

        assert_eq!(rover_force(keys, Vec3::ZERO, &config), Vec3::new(5.0, 0.0, -5.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let config = RoverConfig::default();
        let keys = RoverKeys {
            left: true,
            right: true,
            ..default()
        };

        assert_eq!(rover_force(keys, Vec3::ZERO, &config), Vec3::ZERO);
    }

    #[test]
    fn no_force_at_max_speed_on_either_axis() {
        let config = RoverConfig::default();
        let keys = RoverKeys {
            forward: true,
            ..default()
        };

        assert_eq!(rover_force(keys, Vec3::new(4.0, 0.0, 0.0), &config), Vec3::ZERO);
        assert_eq!(rover_force(keys, Vec3::new(0.0, 0.0, -4.5), &config), Vec3::ZERO);
        assert_ne!(rover_force(keys, Vec3::new(3.9, 10.0, 0.0), &config), Vec3::ZERO);
    }

    #[test]
    fn turning_is_rate_limited() {
        let step = 10f32.to_radians();
        let turned = turn_toward(Quat::IDENTITY, Vec3::X, step);

        assert!((turned.angle_between(Quat::IDENTITY) - step).abs() < 1e-4);
    }

    #[test]
    fn turning_reaches_target_when_close_enough() {
        let turned = turn_toward(Quat::IDENTITY, Vec3::X, std::f32::consts::PI);
        let facing = turned * Vec3::NEG_Z;

        assert!((facing - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn zero_displacement_keeps_orientation() {
        let current = Quat::from_rotation_y(1.0);

        assert_eq!(turn_toward(current, Vec3::ZERO, 1.0), current);
        assert_eq!(turn_toward(current, Vec3::Y, 1.0), current);
    }
}
