//! Headless tests for the item spawner's live count.
//!
//! No physics world is created, so random placement never finds ground.
//! Explicit spawns and removals drive the count through the `OnRemove`
//! observer instead.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier3d::prelude::CollisionEvent;
use dash_arena::core::*;
use dash_arena::items::{Item, ItemKind, ItemSpawner, ItemsPlugin, SpawnerCommand, SpawnerConfig};
use dash_arena::stats::StatsConfig;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(GameState::InGame);
    app.add_sub_state::<PlayState>();
    app.init_resource::<StatsConfig>()
        .add_event::<StatsChanged>()
        .add_event::<HealthChanged>()
        .add_event::<EffectEvent>()
        .add_event::<SoundEvent>()
        .add_event::<CollisionEvent>();
    app.add_plugins(ItemsPlugin);
    app
}

fn spawn_spawner(app: &mut App, config: SpawnerConfig) -> Entity {
    app.world_mut()
        .spawn((ItemSpawner::from_config(&config), Transform::default()))
        .id()
}

fn manual_config() -> SpawnerConfig {
    SpawnerConfig {
        initial_items: 0,
        auto_spawn: false,
        ..default()
    }
}

fn spawn_specific(app: &mut App, kind: ItemKind, x: f32) {
    app.world_mut().send_event(SpawnerCommand::SpawnSpecific {
        kind,
        position: Vec3::new(x, 0.5, 0.0),
    });
}

fn live_count(app: &App, spawner: Entity) -> u32 {
    app.world()
        .get::<ItemSpawner>(spawner)
        .unwrap()
        .registry
        .live_count()
}

fn item_entities(app: &mut App) -> Vec<Entity> {
    app.world_mut()
        .query_filtered::<Entity, With<Item>>()
        .iter(app.world())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Live count equals spawns minus removals.
#[test]
fn live_count_tracks_spawns_and_removals() {
    let mut app = headless_app();
    let spawner = spawn_spawner(&mut app, manual_config());

    for (i, kind) in [ItemKind::Speed, ItemKind::Heal, ItemKind::Power].into_iter().enumerate() {
        spawn_specific(&mut app, kind, i as f32 * 3.0);
    }
    app.update();
    assert_eq!(live_count(&app, spawner), 3);

    let items = item_entities(&mut app);
    app.world_mut().entity_mut(items[0]).despawn_recursive();
    app.update();

    assert_eq!(live_count(&app, spawner), 2);
}

/// Manual spawns ignore the cap.
#[test]
fn manual_spawns_bypass_the_cap() {
    let mut app = headless_app();
    let spawner = spawn_spawner(
        &mut app,
        SpawnerConfig {
            max_items: 1,
            ..manual_config()
        },
    );

    spawn_specific(&mut app, ItemKind::Hp, 0.0);
    spawn_specific(&mut app, ItemKind::Defense, 5.0);
    app.update();

    assert_eq!(live_count(&app, spawner), 2);
}

/// Clearing removes every item and the count settles at zero, never below.
#[test]
fn clear_items_resets_count_to_zero() {
    let mut app = headless_app();
    let spawner = spawn_spawner(&mut app, manual_config());

    spawn_specific(&mut app, ItemKind::Speed, 0.0);
    spawn_specific(&mut app, ItemKind::Power, 4.0);
    app.update();

    app.world_mut().send_event(SpawnerCommand::ClearItems);
    app.update();

    assert_eq!(live_count(&app, spawner), 0);
    assert!(item_entities(&mut app).is_empty());
}

/// Removing an item whose spawner is already gone is harmless.
#[test]
fn removal_after_spawner_is_gone_does_not_panic() {
    let mut app = headless_app();
    let spawner = spawn_spawner(&mut app, manual_config());

    spawn_specific(&mut app, ItemKind::Heal, 0.0);
    app.update();

    app.world_mut().entity_mut(spawner).despawn();
    let items = item_entities(&mut app);
    app.world_mut().entity_mut(items[0]).despawn();
    app.update();

    assert!(item_entities(&mut app).is_empty());
}

/// Without ground to stand on, initial spawns wait instead of misplacing items.
#[test]
fn initial_spawns_wait_for_valid_ground() {
    let mut app = headless_app();
    let spawner = spawn_spawner(
        &mut app,
        SpawnerConfig {
            auto_spawn: false,
            ..default()
        },
    );

    app.update();
    app.update();

    let state = app.world().get::<ItemSpawner>(spawner).unwrap();
    assert_eq!(state.registry.live_count(), 0);
    assert_eq!(state.pending_initial, 5);
    assert!(item_entities(&mut app).is_empty());
}

/// Old items cleared and a new one spawned in the same frame: only the new one counts.
#[test]
fn clear_then_spawn_in_one_frame_keeps_new_item_counted() {
    let mut app = headless_app();
    let spawner = spawn_spawner(&mut app, manual_config());

    spawn_specific(&mut app, ItemKind::Speed, 0.0);
    spawn_specific(&mut app, ItemKind::Power, 4.0);
    app.update();
    assert_eq!(live_count(&app, spawner), 2);

    app.world_mut().send_event(SpawnerCommand::ClearItems);
    spawn_specific(&mut app, ItemKind::Heal, 8.0);
    app.update();

    let items = item_entities(&mut app);
    assert_eq!(items.len(), 1);
    assert_eq!(app.world().get::<Item>(items[0]).unwrap().kind, ItemKind::Heal);
    assert_eq!(live_count(&app, spawner), 1);
}

/// A clear also removes items spawned earlier in the same frame.
#[test]
fn spawn_then_clear_in_one_frame_leaves_nothing() {
    let mut app = headless_app();
    let spawner = spawn_spawner(&mut app, manual_config());

    spawn_specific(&mut app, ItemKind::Hp, 0.0);
    app.update();

    spawn_specific(&mut app, ItemKind::Defense, 4.0);
    app.world_mut().send_event(SpawnerCommand::ClearItems);
    app.update();

    assert!(item_entities(&mut app).is_empty());
    assert_eq!(live_count(&app, spawner), 0);
}

/// An empty spawn table gives up on the initial burst instead of retrying every frame.
#[test]
fn initial_spawns_are_dropped_when_nothing_can_spawn() {
    let mut app = headless_app();
    let spawner = spawn_spawner(
        &mut app,
        SpawnerConfig {
            auto_spawn: false,
            items: Vec::new(),
            ..default()
        },
    );

    app.update();

    let state = app.world().get::<ItemSpawner>(spawner).unwrap();
    assert_eq!(state.pending_initial, 0);
    assert!(item_entities(&mut app).is_empty());
}
