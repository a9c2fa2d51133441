//! Headless tests for damage, pickups, and death notification.
//!
//! These tests use [`MinimalPlugins`] with the stats plugin and the pickup
//! system. Collisions are injected as Rapier `CollisionEvent`s, so no physics
//! world is needed.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier3d::prelude::CollisionEvent;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
use dash_arena::core::*;
use dash_arena::items::{collect_items, Item, ItemKind, ItemPickupEvent};
use dash_arena::player::Player;
use dash_arena::stats::{StatBlock, StatsPlugin, StatsSet};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Every death notification seen so far.
#[derive(Resource, Default)]
struct DeathLog(Vec<Entity>);

fn record_deaths(mut deaths: EventReader<DeathEvent>, mut log: ResMut<DeathLog>) {
    log.0.extend(deaths.read().map(|event| event.entity));
}

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(GameState::InGame);
    app.add_sub_state::<PlayState>();
    app.add_event::<DamageEvent>()
        .add_event::<DeathEvent>()
        .add_event::<StatsChanged>()
        .add_event::<HealthChanged>()
        .add_event::<EffectEvent>()
        .add_event::<SoundEvent>()
        .add_event::<ItemPickupEvent>()
        .add_event::<CollisionEvent>();
    app.add_plugins(StatsPlugin);
    app.init_resource::<DeathLog>();
    app.add_systems(
        Update,
        (collect_items.before(StatsSet), record_deaths.after(StatsSet)),
    );
    app
}

fn spawn_player(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((Player, StatBlock::default(), Transform::default()))
        .id()
}

fn spawn_item(app: &mut App, kind: ItemKind) -> Entity {
    app.world_mut()
        .spawn((Item { kind }, Transform::from_xyz(1.0, 0.5, 0.0)))
        .id()
}

fn touch(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

fn damage(app: &mut App, target: Entity, amount: f32) {
    app.world_mut().send_event(DamageEvent {
        target,
        source: target,
        amount,
    });
}

fn stats(app: &App, entity: Entity) -> StatBlock {
    app.world().get::<StatBlock>(entity).unwrap().clone()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// 100 HP takes 10 damage, then a heal pickup tops it back up to 100.
#[test]
fn damage_then_heal_pickup_restores_to_max() {
    let mut app = headless_app();
    let player = spawn_player(&mut app);
    app.update();

    damage(&mut app, player, 10.0);
    app.update();
    assert_eq!(stats(&app, player).current_health(), 90.0);

    let heal = spawn_item(&mut app, ItemKind::Heal);
    touch(&mut app, player, heal);
    app.update();

    assert_eq!(stats(&app, player).current_health(), 100.0);
    assert!(app.world().get_entity(heal).is_err(), "heal item must be consumed");
}

/// A defense pickup halves a 10 damage hit.
#[test]
fn defense_pickup_reduces_damage() {
    let mut app = headless_app();
    let player = spawn_player(&mut app);
    app.update();

    let shield = spawn_item(&mut app, ItemKind::Defense);
    touch(&mut app, shield, player);
    app.update();
    assert_eq!(stats(&app, player).defense(), 5.0);

    damage(&mut app, player, 10.0);
    app.update();

    assert_eq!(stats(&app, player).current_health(), 95.0);
}

/// The same contact reported twice in one frame only applies the item once.
#[test]
fn duplicate_contacts_apply_an_item_once() {
    let mut app = headless_app();
    let player = spawn_player(&mut app);
    app.update();

    let boost = spawn_item(&mut app, ItemKind::Speed);
    touch(&mut app, player, boost);
    touch(&mut app, boost, player);
    app.update();

    assert_eq!(stats(&app, player).move_speed(), 10.0);
}

/// Items ignore anything that is not the player.
#[test]
fn non_player_contacts_leave_items_alone() {
    let mut app = headless_app();
    let target = app
        .world_mut()
        .spawn((StatBlock::default(), Transform::default()))
        .id();
    app.update();

    let boost = spawn_item(&mut app, ItemKind::Power);
    touch(&mut app, target, boost);
    app.update();

    assert!(app.world().get_entity(boost).is_ok());
    assert_eq!(stats(&app, target).power(), 10.0);
}

/// Lethal damage produces exactly one death notification, even with overkill.
#[test]
fn death_is_announced_once() {
    let mut app = headless_app();
    let player = spawn_player(&mut app);
    app.update();

    damage(&mut app, player, 150.0);
    damage(&mut app, player, 150.0);
    app.update();
    damage(&mut app, player, 150.0);
    app.update();

    let log = app.world().resource::<DeathLog>();
    assert_eq!(log.0, vec![player]);
    assert_eq!(stats(&app, player).current_health(), 0.0);
}

/// Damage events are not applied while paused.
#[test]
fn paused_game_ignores_damage() {
    let mut app = headless_app();
    let player = spawn_player(&mut app);
    app.update();

    app.world_mut()
        .resource_mut::<NextState<PlayState>>()
        .set(PlayState::Paused);
    app.update();

    damage(&mut app, player, 10.0);
    app.update();

    assert_eq!(stats(&app, player).current_health(), 100.0);
}
