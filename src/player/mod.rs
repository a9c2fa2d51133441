//! Player module - the movement/combat controller.

mod components;
mod movement;
mod plugin;
mod shooting;
mod spawning;

pub use components::*;
pub use movement::{
    apply_movement, read_movement_input, smooth_velocity, target_velocity, tick_dash, CameraBasis,
};
pub use plugin::{ControllerSet, PlayerPlugin};
pub use shooting::{fire_origin, fire_weapon};
pub use spawning::{spawn_player, PLAYER_HALF_HEIGHT, PLAYER_RADIUS};
