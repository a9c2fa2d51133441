//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Player movement
//! and item spawning only run while `PlayState::Running`; menu systems only
//! run on their own screens.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading`, which immediately moves on to `Title`
/// - `Title` waits for Enter
/// - `InGame` builds the arena on entry and tears it down on exit
/// - `GameOver` when the player is defeated; Enter starts a fresh run
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    #[default]
    Loading,
    Title,
    InGame,
    GameOver,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Toggling it never re-runs the `OnEnter(GameState::InGame)` arena setup.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}
