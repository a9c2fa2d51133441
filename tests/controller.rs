//! Headless tests for the movement/combat controller.
//!
//! Time is advanced manually so double-tap windows and fire cadence are
//! deterministic. Input is injected straight into `ButtonInput`.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::Velocity;
use dash_arena::core::*;
use dash_arena::player::{spawn_player, DashState, PlayerPlugin};
use dash_arena::stats::StatBlock;

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Resource, Default)]
struct ShotLog(Vec<FireEvent>);

fn record_shots(mut shots: EventReader<FireEvent>, mut log: ResMut<ShotLog>) {
    log.0.extend(shots.read().copied());
}

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)));
    app.insert_state(GameState::InGame);
    app.add_sub_state::<PlayState>();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<ShotLog>()
        .add_event::<FireEvent>();
    app.add_plugins(PlayerPlugin);
    app.add_systems(PostUpdate, record_shots);
    app
}

fn spawn_test_player(app: &mut App) -> Entity {
    let player = {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, Vec3::new(0.0, 1.0, 0.0), StatBlock::default())
    };
    app.world_mut().flush();
    player
}

/// One frame with `key` held (and freshly pressed).
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(key);
    keyboard.clear();
}

fn idle(app: &mut App) {
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

fn dash_state(app: &App, player: Entity) -> DashState {
    *app.world().get::<DashState>(player).unwrap()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Two quick presses of the same key start a dash in that key's direction.
#[test]
fn double_tap_starts_a_dash() {
    let mut app = headless_app();
    let player = spawn_test_player(&mut app);
    idle(&mut app);

    tap(&mut app, KeyCode::KeyD);
    idle(&mut app);
    tap(&mut app, KeyCode::KeyD);

    let dash = dash_state(&app, player);
    assert!(dash.active);
    assert_eq!(dash.direction, Vec3::X);
}

/// A single press, even the very first one of the session, never dashes.
#[test]
fn single_press_does_not_dash() {
    let mut app = headless_app();
    let player = spawn_test_player(&mut app);

    tap(&mut app, KeyCode::KeyW);

    assert!(!dash_state(&app, player).active);
}

/// Presses further apart than the window are two separate taps.
#[test]
fn slow_taps_do_not_dash() {
    let mut app = headless_app();
    let player = spawn_test_player(&mut app);
    idle(&mut app);

    tap(&mut app, KeyCode::KeyA);
    for _ in 0..10 {
        idle(&mut app);
    }
    tap(&mut app, KeyCode::KeyA);

    assert!(!dash_state(&app, player).active);
}

/// Tapping different keys never counts as a double tap.
#[test]
fn mixed_keys_do_not_dash() {
    let mut app = headless_app();
    let player = spawn_test_player(&mut app);
    idle(&mut app);

    tap(&mut app, KeyCode::KeyW);
    tap(&mut app, KeyCode::KeyD);

    assert!(!dash_state(&app, player).active);
}

/// The dash ends after its duration and cannot restart during cooldown.
#[test]
fn dash_expires_and_respects_cooldown() {
    let mut app = headless_app();
    let player = spawn_test_player(&mut app);
    idle(&mut app);

    tap(&mut app, KeyCode::KeyW);
    tap(&mut app, KeyCode::KeyW);
    assert!(dash_state(&app, player).active);

    for _ in 0..6 {
        idle(&mut app);
    }
    let dash = dash_state(&app, player);
    assert!(!dash.active);
    assert!(!dash.can_dash());

    // Second tap lands while the cooldown is still running
    tap(&mut app, KeyCode::KeyW);
    tap(&mut app, KeyCode::KeyW);
    assert!(!dash_state(&app, player).active);
}

/// Holding the trigger fires at the configured cadence, carrying current power.
#[test]
fn held_trigger_is_rate_limited() {
    let mut app = headless_app();
    let player = spawn_test_player(&mut app);

    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    for _ in 0..10 {
        app.update();
    }

    let log = app.world().resource::<ShotLog>();
    assert!(
        (2..=3).contains(&log.0.len()),
        "expected 2-3 shots in ~0.5s, got {}",
        log.0.len()
    );
    assert!(log.0.iter().all(|shot| shot.shooter == player && shot.damage == 10.0));
}

/// Held input moves the player horizontally and leaves vertical velocity alone.
#[test]
fn movement_only_writes_horizontal_velocity() {
    let mut app = headless_app();
    let player = spawn_test_player(&mut app);
    app.world_mut()
        .get_mut::<Velocity>(player)
        .unwrap()
        .linvel
        .y = -3.0;

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyW);
    for _ in 0..10 {
        app.update();
    }

    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert!(velocity.linvel.z < 0.0, "W moves along camera forward");
    assert_eq!(velocity.linvel.x, 0.0);
    assert_eq!(velocity.linvel.y, -3.0);
}
