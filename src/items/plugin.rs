//! Items plugin - spawning, pickup, and idle animation.

use bevy::prelude::*;

use super::components::*;
use super::pickup::{animate_items, collect_items, ItemPickupEvent};
use super::spawner::*;
use crate::core::{GameState, PlayState};
use crate::stats::StatsSet;

/// Items plugin - handles the spawner and pickups.
pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnerConfig>()
            .add_event::<SpawnerCommand>()
            .add_event::<ItemPickupEvent>()
            .add_observer(release_spawn_slot)
            .add_systems(Startup, setup_item_assets)
            .add_systems(
                Update,
                (
                    (handle_spawner_commands, tick_item_spawners).chain(),
                    collect_items.before(StatsSet),
                    animate_items,
                )
                    .run_if(in_state(PlayState::Running)),
            )
            .add_systems(OnExit(GameState::InGame), cleanup_items);
    }
}

/// Build the shared item mesh and one material per kind.
fn setup_item_assets(
    mut commands: Commands,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    // Headless apps run without render assets
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };

    let mut material = |kind: ItemKind| {
        materials.add(StandardMaterial {
            base_color: kind.color(),
            emissive: kind.color().to_linear() * 0.5,
            ..default()
        })
    };

    commands.insert_resource(ItemAssets {
        mesh: meshes.add(Cuboid::new(0.6, 0.6, 0.6)),
        speed: material(ItemKind::Speed),
        power: material(ItemKind::Power),
        hp: material(ItemKind::Hp),
        defense: material(ItemKind::Defense),
        heal: material(ItemKind::Heal),
    });
}

fn cleanup_items(mut commands: Commands, query: Query<Entity, With<Item>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
