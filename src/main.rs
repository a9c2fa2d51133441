//! Dash Arena - Entry Point
//!
//! Controls:
//! - WASD / arrows: Move (camera-relative)
//! - Double-tap W/A/S/D: Dash
//! - Left mouse (hold): Fire
//! - Escape: Pause/Unpause
//! - Enter: Start / retry
//! - F1-F6: Debug actions, F3 toggles the debug readout

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins; sound goes through Kira instead
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Dash Arena".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Audio
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(dash_arena::DashArenaPlugin)

        .run();
}
