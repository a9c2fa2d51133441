//! Rover plugin - a standalone force-driven controller scene.

use bevy::prelude::*;

use super::components::RoverScreen;
use super::systems::*;
use crate::camera::{letterbox_new_cameras, refresh_letterbox, RefreshLetterbox};
use crate::core::GameConfig;

/// Rover plugin - loads its tuning and runs the rover scene.
pub struct RoverPlugin;

impl Plugin for RoverPlugin {
    fn build(&self, app: &mut App) {
        let config = GameConfig::load();

        app.insert_resource(config.rover)
            .insert_resource(config.letterbox)
            .init_state::<RoverScreen>()
            .add_event::<RefreshLetterbox>()
            .add_systems(OnEnter(RoverScreen::Title), setup_rover_title)
            .add_systems(
                Update,
                rover_title_input.run_if(in_state(RoverScreen::Title)),
            )
            .add_systems(OnExit(RoverScreen::Title), cleanup_rover_title)
            .add_systems(OnEnter(RoverScreen::Driving), setup_rover_scene)
            .add_systems(
                Update,
                (drive_rover, steer_rover).run_if(in_state(RoverScreen::Driving)),
            )
            .add_systems(Update, (letterbox_new_cameras, refresh_letterbox));
    }
}
