//! Follow camera that trails the player from above and behind.

use bevy::prelude::*;
use serde::Deserialize;

use super::letterbox::{Letterbox, LetterboxConfig};
use crate::player::Player;

/// Marker for the gameplay camera. Movement input is relative to it.
#[derive(Component)]
pub struct GameCamera;

/// Tuning for the follow camera.
#[derive(Resource, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Offset from the player
    pub offset: (f32, f32, f32),
    /// How quickly the camera catches up (per second)
    pub follow_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: (0.0, 10.0, 12.0),
            follow_speed: 5.0,
        }
    }
}

impl CameraConfig {
    pub fn offset(&self) -> Vec3 {
        Vec3::new(self.offset.0, self.offset.1, self.offset.2)
    }
}

/// Spawn the letterboxed game camera looking at `focus`.
pub fn spawn_game_camera(
    commands: &mut Commands,
    config: &CameraConfig,
    letterbox: &LetterboxConfig,
    focus: Vec3,
) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Transform::from_translation(focus + config.offset()).looking_at(focus, Vec3::Y),
            GameCamera,
            Letterbox::from(letterbox),
            Name::new("Game Camera"),
        ))
        .id()
}

/// Ease the camera toward the player's position plus the offset.
pub fn follow_player(
    time: Res<Time>,
    config: Res<CameraConfig>,
    player_query: Query<&Transform, (With<Player>, Without<GameCamera>)>,
    mut camera_query: Query<&mut Transform, With<GameCamera>>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let Ok(mut camera) = camera_query.get_single_mut() else {
        return;
    };

    let target = player.translation + config.offset();
    let t = (config.follow_speed * time.delta_secs()).clamp(0.0, 1.0);
    camera.translation = camera.translation.lerp(target, t);
}
