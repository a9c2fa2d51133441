//! Camera plugin - follow camera and letterboxing.

use bevy::prelude::*;
use bevy::transform::TransformSystem;

use super::follow::{follow_player, CameraConfig};
use super::letterbox::{letterbox_new_cameras, refresh_letterbox, LetterboxConfig, RefreshLetterbox};
use crate::core::PlayState;

/// Camera plugin - keeps the game camera on the player and at a fixed aspect.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .init_resource::<LetterboxConfig>()
            .add_event::<RefreshLetterbox>()
            .add_systems(Update, (letterbox_new_cameras, refresh_letterbox))
            .add_systems(
                PostUpdate,
                follow_player
                    .before(TransformSystem::TransformPropagate)
                    .run_if(in_state(PlayState::Running)),
            );
    }
}
