//! Rover - Entry Point
//!
//! Controls:
//! - Enter: Start from the title screen
//! - WASD: Push the rover along the world axes

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rover".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        .add_plugins(dash_arena::rover::RoverPlugin)

        .run();
}
