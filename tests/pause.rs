//! Headless tests for pausing: the physics world stops and starts with the
//! pause sub-state.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier3d::prelude::RapierConfiguration;
use dash_arena::core::*;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(CorePlugin);
    app.world_mut().spawn(RapierConfiguration::new(1.0));

    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
    app
}

/// One frame with Escape freshly pressed, then one frame to apply the transition.
fn press_escape(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(KeyCode::Escape);
    keyboard.clear();
    app.update();
}

fn physics_active(app: &mut App) -> bool {
    app.world_mut()
        .query::<&RapierConfiguration>()
        .single(app.world())
        .physics_pipeline_active
}

fn play_state(app: &App) -> PlayState {
    *app.world().resource::<State<PlayState>>().get()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn pausing_stops_the_physics_pipeline() {
    let mut app = headless_app();
    assert_eq!(play_state(&app), PlayState::Running);
    assert!(physics_active(&mut app));

    press_escape(&mut app);

    assert_eq!(play_state(&app), PlayState::Paused);
    assert!(!physics_active(&mut app));
}

#[test]
fn resuming_restarts_the_physics_pipeline() {
    let mut app = headless_app();

    press_escape(&mut app);
    press_escape(&mut app);

    assert_eq!(play_state(&app), PlayState::Running);
    assert!(physics_active(&mut app));
}

/// Leaving the arena from the pause screen must not leave physics frozen.
#[test]
fn leaving_the_game_while_paused_restores_physics() {
    let mut app = headless_app();
    press_escape(&mut app);
    assert!(!physics_active(&mut app));

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Title);
    app.update();

    assert!(app.world().get_resource::<State<PlayState>>().is_none());
    assert!(physics_active(&mut app));
}
