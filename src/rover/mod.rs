//! Rover module - the second, force-driven controller.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::RoverPlugin;
pub use systems::{drive_rover, rover_title_input, setup_rover_scene, setup_rover_title, steer_rover};
