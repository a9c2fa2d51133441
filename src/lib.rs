//! Dash Arena - a top-down arena shooter with stat pickups, in Bevy.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Config, game states, global events, timed despawns
//! - **Stats**: The stat model and damage capability
//! - **Player**: Camera-relative movement, double-tap dash, rate-limited fire
//! - **Combat**: Projectiles, contact resolution, deaths
//! - **Items**: Weighted spawner, placement, pickups
//! - **World**: Arena terrain and training targets
//! - **Camera**: Follow camera and viewport letterboxing
//! - **Feedback**: Visual effects and sounds
//! - **UI**: Menus, HUD, debug readout
//! - **Rover**: A second, force-driven controller (own binary)

pub mod camera;
pub mod combat;
pub mod core;
pub mod feedback;
pub mod items;
pub mod player;
pub mod rover;
pub mod stats;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct DashArenaPlugin;

impl Plugin for DashArenaPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Gameplay
            .add_plugins((
                stats::StatsPlugin,
                player::PlayerPlugin,
                combat::CombatPlugin,
                items::ItemsPlugin,
                world::WorldPlugin,
            ))
            // Presentation
            .add_plugins((camera::CameraPlugin, feedback::FeedbackPlugin, ui::UiPlugin));
    }
}
