//! UI plugin - menus, HUD, and debug readout.

use bevy::prelude::*;

use super::debug::{debug_hotkeys, spawn_debug_text, update_debug_text, DebugOverlay};
use super::hud::{spawn_hud, update_health_bar, update_stats_text, HudRoot};
use super::menus::*;
use crate::core::{GameState, PlayState};
use crate::world::setup_arena;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameTitle>()
            .init_resource::<DebugOverlay>()
            // Title screen
            .add_systems(OnEnter(GameState::Title), setup_title_screen)
            .add_systems(
                Update,
                start_on_enter.run_if(in_state(GameState::Title).or(in_state(GameState::GameOver))),
            )
            .add_systems(
                OnExit(GameState::Title),
                (despawn_screen::<TitleUi>, despawn_screen::<MenuCamera>),
            )
            // HUD
            .add_systems(
                OnEnter(GameState::InGame),
                (spawn_hud, spawn_debug_text).after(setup_arena),
            )
            .add_systems(
                Update,
                ((update_health_bar, update_stats_text).chain(), update_debug_text)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(Update, debug_hotkeys.run_if(in_state(PlayState::Running)))
            .add_systems(OnExit(GameState::InGame), despawn_screen::<HudRoot>)
            // Pause overlay
            .add_systems(OnEnter(PlayState::Paused), setup_pause_overlay)
            .add_systems(OnExit(PlayState::Paused), despawn_screen::<PauseUi>)
            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(
                OnExit(GameState::GameOver),
                (despawn_screen::<GameOverUi>, despawn_screen::<MenuCamera>),
            )
            .add_systems(Update, menu_button_input);
    }
}
