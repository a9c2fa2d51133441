//! Camera-relative movement, double-tap dashing, and velocity smoothing.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::camera::GameCamera;
use crate::stats::StatBlock;

/// Horizontal movement axes derived from the camera orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl CameraBasis {
    /// Project a camera's forward/right onto the ground plane.
    pub fn from_camera(transform: &GlobalTransform) -> Self {
        Self::flatten(transform.forward().as_vec3(), transform.right().as_vec3())
    }

    pub fn flatten(forward: Vec3, right: Vec3) -> Self {
        let fallback = Self::default();
        let forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or(fallback.forward);
        let right = Vec3::new(right.x, 0.0, right.z).normalize_or(fallback.right);
        Self { forward, right }
    }

    /// Combine raw axis values into a unit world direction (or zero).
    pub fn relative(&self, horizontal: f32, vertical: f32) -> Vec3 {
        (self.forward * vertical + self.right * horizontal).normalize_or_zero()
    }

    /// World direction a dash key points in.
    pub fn dash_direction(&self, key: DashKey) -> Vec3 {
        match key {
            DashKey::Forward => self.forward,
            DashKey::Left => -self.right,
            DashKey::Back => -self.forward,
            DashKey::Right => self.right,
        }
    }
}

/// Velocity the controller wants this step.
pub fn target_velocity(dash: &DashState, intent: Vec3, move_speed: f32, dash_speed: f32) -> Vec3 {
    if dash.active {
        dash.direction * dash_speed
    } else if intent != Vec3::ZERO {
        intent * move_speed
    } else {
        Vec3::ZERO
    }
}

/// Exponentially approach `target`, faster when stopping.
pub fn smooth_velocity(current: Vec3, target: Vec3, acceleration: f32, deceleration: f32, dt: f32) -> Vec3 {
    let rate = if target != Vec3::ZERO {
        acceleration
    } else {
        deceleration
    };
    current.lerp(target, (rate * dt).clamp(0.0, 1.0))
}

fn axis(keyboard: &ButtonInput<KeyCode>, positive: [KeyCode; 2], negative: [KeyCode; 2]) -> f32 {
    let pos = keyboard.any_pressed(positive) as i32;
    let neg = keyboard.any_pressed(negative) as i32;
    (pos - neg) as f32
}

/// Read WASD, resolve the camera-relative direction, detect dash gestures,
/// and snap facing to the input direction.
pub fn read_movement_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<ControllerConfig>,
    camera_query: Query<&GlobalTransform, With<GameCamera>>,
    mut player_query: Query<
        (&mut Transform, &mut MoveIntent, &mut DoubleTapDetector, &mut DashState),
        With<Player>,
    >,
) {
    let Ok((mut transform, mut intent, mut detector, mut dash)) = player_query.get_single_mut() else {
        return;
    };

    let basis = camera_query
        .get_single()
        .map(CameraBasis::from_camera)
        .unwrap_or_default();

    let horizontal = axis(&keyboard, [KeyCode::KeyD, KeyCode::ArrowRight], [KeyCode::KeyA, KeyCode::ArrowLeft]);
    let vertical = axis(&keyboard, [KeyCode::KeyW, KeyCode::ArrowUp], [KeyCode::KeyS, KeyCode::ArrowDown]);
    intent.0 = basis.relative(horizontal, vertical);

    let now = time.elapsed_secs();
    for key in DashKey::ALL {
        if !keyboard.just_pressed(key.key_code()) {
            continue;
        }
        if detector.register_press(key, now, config.double_tap_window)
            && dash.try_start(basis.dash_direction(key), config.dash_duration, config.dash_cooldown)
        {
            debug!("Dash started toward {:?}", key);
        }
    }

    // Facing is left alone while dashing
    if intent.0 != Vec3::ZERO && !dash.active {
        transform.look_to(intent.0, Vec3::Y);
    }
}

/// Advance dash duration and cooldown timers.
pub fn tick_dash(time: Res<Time>, mut query: Query<&mut DashState>) {
    let dt = time.delta_secs();
    for mut dash in query.iter_mut() {
        if dash.tick(dt) {
            debug!("Dash finished");
        }
    }
}

/// Fixed-step velocity update. Only X and Z are written; Y belongs to gravity.
pub fn apply_movement(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut query: Query<
        (&MoveIntent, &DashState, &StatBlock, &mut PlanarVelocity, &mut Velocity),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    for (intent, dash, stats, mut planar, mut velocity) in query.iter_mut() {
        let target = target_velocity(dash, intent.0, stats.move_speed(), config.dash_speed);
        planar.0 = smooth_velocity(planar.0, target, config.acceleration, config.deceleration, dt);

        velocity.linvel.x = planar.0.x;
        velocity.linvel.z = planar.0.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_basis_ignores_pitch() {
        let basis = CameraBasis::flatten(Vec3::new(0.0, -0.7, -0.7), Vec3::X);

        assert!((basis.forward - Vec3::NEG_Z).length() < 1e-5);
        assert_eq!(basis.right, Vec3::X);
    }

    #[test]
    fn camera_basis_falls_back_when_looking_straight_down() {
        let basis = CameraBasis::flatten(Vec3::NEG_Y, Vec3::X);

        assert_eq!(basis.forward, Vec3::NEG_Z);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let dir = CameraBasis::default().relative(1.0, 1.0);

        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(dir.x > 0.0 && dir.z < 0.0);
    }

    #[test]
    fn dash_directions_follow_camera() {
        let basis = CameraBasis::default();

        assert_eq!(basis.dash_direction(DashKey::Forward), Vec3::NEG_Z);
        assert_eq!(basis.dash_direction(DashKey::Left), Vec3::NEG_X);
        assert_eq!(basis.dash_direction(DashKey::Back), Vec3::Z);
        assert_eq!(basis.dash_direction(DashKey::Right), Vec3::X);
    }

    #[test]
    fn target_velocity_prefers_dash() {
        let mut dash = DashState::default();
        dash.try_start(Vec3::X, 0.3, 0.5);

        assert_eq!(target_velocity(&dash, Vec3::Z, 8.0, 15.0), Vec3::X * 15.0);
    }

    #[test]
    fn target_velocity_uses_move_speed_or_zero() {
        let dash = DashState::default();

        assert_eq!(target_velocity(&dash, Vec3::Z, 8.0, 15.0), Vec3::Z * 8.0);
        assert_eq!(target_velocity(&dash, Vec3::ZERO, 8.0, 15.0), Vec3::ZERO);
    }

    #[test]
    fn smoothing_uses_separate_rates() {
        let dt = 0.02;
        let accelerating = smooth_velocity(Vec3::ZERO, Vec3::X * 10.0, 20.0, 25.0, dt);
        assert!((accelerating.x - 4.0).abs() < 1e-4);

        let decelerating = smooth_velocity(Vec3::X * 10.0, Vec3::ZERO, 20.0, 25.0, dt);
        assert!((decelerating.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn smoothing_never_overshoots_on_long_steps() {
        let v = smooth_velocity(Vec3::ZERO, Vec3::X * 10.0, 20.0, 25.0, 1.0);

        assert_eq!(v, Vec3::X * 10.0);
    }
}
