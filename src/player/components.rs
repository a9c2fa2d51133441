//! Player-related components.

use bevy::prelude::*;
use serde::Deserialize;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// The four movement keys that can trigger a dash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashKey {
    Forward,
    Left,
    Back,
    Right,
}

impl DashKey {
    pub const ALL: [DashKey; 4] = [DashKey::Forward, DashKey::Left, DashKey::Back, DashKey::Right];

    pub fn key_code(self) -> KeyCode {
        match self {
            DashKey::Forward => KeyCode::KeyW,
            DashKey::Left => KeyCode::KeyA,
            DashKey::Back => KeyCode::KeyS,
            DashKey::Right => KeyCode::KeyD,
        }
    }

    fn index(self) -> usize {
        match self {
            DashKey::Forward => 0,
            DashKey::Left => 1,
            DashKey::Back => 2,
            DashKey::Right => 3,
        }
    }
}

/// Detects a second press of the same key within the double-tap window.
///
/// Each key keeps its own timer, so W-then-D never counts as a double tap.
#[derive(Component, Debug, Default, Clone)]
pub struct DoubleTapDetector {
    last_press: [Option<f32>; 4],
}

impl DoubleTapDetector {
    /// Record a press at time `now`; true when it completes a double tap.
    pub fn register_press(&mut self, key: DashKey, now: f32, window: f32) -> bool {
        let slot = &mut self.last_press[key.index()];
        let is_double = slot.is_some_and(|last| now - last <= window);
        *slot = Some(now);
        is_double
    }
}

/// Dash state machine: `Normal` when inactive, `Dashing` while active.
///
/// The cooldown is armed on entry and ticks independently of the dash
/// itself, so it can outlast the dash.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct DashState {
    pub active: bool,
    pub remaining: f32,
    pub cooldown_remaining: f32,
    /// World direction locked in when the dash started
    pub direction: Vec3,
}

impl DashState {
    pub fn can_dash(&self) -> bool {
        !self.active && self.cooldown_remaining <= 0.0
    }

    /// Enter `Dashing` if allowed; returns whether the dash started.
    pub fn try_start(&mut self, direction: Vec3, duration: f32, cooldown: f32) -> bool {
        if !self.can_dash() {
            return false;
        }
        self.active = true;
        self.remaining = duration;
        self.cooldown_remaining = cooldown;
        self.direction = direction.normalize_or_zero();
        true
    }

    /// Advance both timers; returns true on the tick the dash ends.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut ended = false;
        if self.active {
            self.remaining -= dt;
            if self.remaining <= 0.0 {
                self.active = false;
                ended = true;
            }
        }
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining -= dt;
        }
        ended
    }
}

/// Camera-relative movement direction for this frame (unit length or zero).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MoveIntent(pub Vec3);

/// Smoothed horizontal velocity maintained by the controller.
///
/// Kept apart from the physics velocity so the vertical component stays
/// entirely under the physics engine's control.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlanarVelocity(pub Vec3);

/// Rate limiter for the held fire button.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FireControl {
    last_shot: Option<f32>,
}

impl FireControl {
    /// Returns true (and records the shot) when `interval` has passed since the last one.
    pub fn try_fire(&mut self, now: f32, interval: f32) -> bool {
        if self.last_shot.is_some_and(|last| now < last + interval) {
            return false;
        }
        self.last_shot = Some(now);
        true
    }
}

/// Tuning for the movement/combat controller.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Smoothing rate toward a nonzero target velocity
    pub acceleration: f32,
    /// Smoothing rate toward zero
    pub deceleration: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Max seconds between two presses of the same key
    pub double_tap_window: f32,
    /// Seconds between shots while the trigger is held
    pub fire_interval: f32,
    /// Distance in front of the player where projectiles appear
    pub fire_point_offset: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            acceleration: 20.0,
            deceleration: 25.0,
            dash_speed: 15.0,
            dash_duration: 0.3,
            dash_cooldown: 0.5,
            double_tap_window: 0.3,
            fire_interval: 0.2,
            fire_point_offset: 1.0,
        }
    }
}
