//! Player plugin - input, dashing, shooting, and movement.

use bevy::prelude::*;

use super::components::*;
use super::movement::{apply_movement, read_movement_input, tick_dash};
use super::shooting::fire_weapon;
use crate::core::PlayState;

/// Frame ordering for the controller: read input before acting on it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    Input,
    Act,
}

/// Player plugin - handles the movement/combat controller.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerConfig>()
            .configure_sets(
                Update,
                (ControllerSet::Input, ControllerSet::Act)
                    .chain()
                    .run_if(in_state(PlayState::Running)),
            )
            .add_systems(Update, read_movement_input.in_set(ControllerSet::Input))
            .add_systems(Update, (fire_weapon, tick_dash).in_set(ControllerSet::Act))
            .add_systems(
                FixedUpdate,
                apply_movement.run_if(in_state(PlayState::Running)),
            );
    }
}
