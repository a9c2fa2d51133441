//! Core plugin that sets up configuration, game states, events, and fundamental systems.

use bevy::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::lifetime::expire_lifetimes;
use super::pause::{pause_physics, resume_physics};
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Configuration resources (one per section of the config file)
/// - Game states (Loading, Title, InGame, GameOver) and the pause sub-state
/// - Global events (DamageEvent, DeathEvent, FireEvent, etc.)
/// - Lifetime expiry for short-lived entities
/// - Freezing physics while paused
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        GameConfig::load().insert_into(app);

        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()
            .add_event::<StatsChanged>()
            .add_event::<HealthChanged>()
            .add_event::<FireEvent>()
            .add_event::<EffectEvent>()
            .add_event::<SoundEvent>()

            // Nothing to preload yet, go straight to the title screen
            .add_systems(OnEnter(GameState::Loading), transition_to_title)

            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnEnter(PlayState::Paused), pause_physics)
            .add_systems(OnExit(PlayState::Paused), resume_physics)

            // Timed despawns freeze while paused
            .add_systems(
                Update,
                expire_lifetimes.run_if(in_state(PlayState::Running)),
            );
    }
}

fn transition_to_title(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Title);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Running => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Running),
        }
    }
}
