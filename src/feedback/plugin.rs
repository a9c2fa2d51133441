//! Feedback plugin - visual effects and sounds.

use bevy::prelude::*;

use super::audio::{load_sounds, play_sounds, SoundConfig};
use super::effects::{cleanup_effects, grow_effects, setup_effect_assets, spawn_effects};
use crate::core::GameState;

/// Feedback plugin - turns effect and sound requests into output.
pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundConfig>()
            .add_systems(Startup, (setup_effect_assets, load_sounds))
            .add_systems(Update, (spawn_effects, grow_effects, play_sounds))
            .add_systems(OnExit(GameState::InGame), cleanup_effects);
    }
}
