//! Arena construction and cleanup.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::camera::{spawn_game_camera, CameraConfig, LetterboxConfig};
use crate::items::{ItemSpawner, SpawnerConfig};
use crate::player::{spawn_player, PLAYER_HALF_HEIGHT, PLAYER_RADIUS};
use crate::stats::{BaseStats, StatBlock, StatsConfig};

/// Build the floor, walls, light, player, targets, spawner, and camera.
#[allow(clippy::too_many_arguments)]
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    arena: Res<ArenaConfig>,
    stats: Res<StatsConfig>,
    spawner: Res<SpawnerConfig>,
    camera: Res<CameraConfig>,
    letterbox: Res<LetterboxConfig>,
) {
    info!("Building arena ({} x {})", arena.size, arena.size);
    let half = arena.size / 2.0;

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(arena.size, arena.size))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.35, 0.3))),
        Transform::default(),
        RigidBody::Fixed,
        Collider::cuboid(half, 0.1, half),
        Ground,
        ArenaEntity,
        Name::new("Ground"),
    ));

    let wall_material = materials.add(Color::srgb(0.45, 0.45, 0.5));
    for (center, extents) in arena.wall_layout() {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(extents * 2.0))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(center),
            RigidBody::Fixed,
            Collider::cuboid(extents.x, extents.y, extents.z),
            Wall,
            ArenaEntity,
            Name::new("Wall"),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        ArenaEntity,
        Name::new("Sun"),
    ));

    let start = arena.player_start();
    let player = spawn_player(&mut commands, start, stats.stat_block());
    commands.entity(player).insert((
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_HALF_HEIGHT * 2.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.2, 0.6, 0.9))),
        ArenaEntity,
    ));

    let target_mesh = meshes.add(Cylinder::new(0.6, 2.0));
    let target_material = materials.add(Color::srgb(0.8, 0.4, 0.2));
    let target_stats = BaseStats {
        max_health: arena.target_health,
        move_speed: 0.0,
        power: 0.0,
        defense: 0.0,
    };
    for &(x, y, z) in &arena.target_positions {
        commands.spawn((
            Mesh3d(target_mesh.clone()),
            MeshMaterial3d(target_material.clone()),
            Transform::from_xyz(x, y, z),
            RigidBody::Fixed,
            Collider::cylinder(1.0, 0.6),
            ActiveEvents::COLLISION_EVENTS,
            StatBlock::new(target_stats, stats.boosts),
            TrainingTarget,
            ArenaEntity,
            Name::new("Training Target"),
        ));
    }

    commands.spawn((
        ItemSpawner::from_config(&spawner),
        Transform::default(),
        ArenaEntity,
        Name::new("Item Spawner"),
    ));

    let camera_entity = spawn_game_camera(&mut commands, &camera, &letterbox, start);
    commands.entity(camera_entity).insert(ArenaEntity);
}

/// Despawn everything the arena built, including the player and camera.
pub fn cleanup_arena(mut commands: Commands, arena_query: Query<Entity, With<ArenaEntity>>) {
    for entity in arena_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
