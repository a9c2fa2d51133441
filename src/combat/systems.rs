//! Combat systems - projectile spawning, contact resolution, and deaths.

use bevy::prelude::*;
use bevy::utils::HashSet;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::core::{DamageEvent, DeathEvent, EffectEvent, EffectKind, FireEvent, GameState, Lifetime};
use crate::player::Player;
use crate::stats::StatBlock;
use crate::world::{Ground, TrainingTarget, Wall};

/// Create the shared projectile mesh and material.
pub fn setup_projectile_assets(
    mut commands: Commands,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    config: Res<ProjectileConfig>,
) {
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };
    commands.insert_resource(ProjectileAssets {
        mesh: meshes.add(Sphere::new(config.radius)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.9, 0.3),
            emissive: LinearRgba::rgb(4.0, 3.0, 0.5),
            ..default()
        }),
    });
}

/// Turn fire requests into physics-driven projectiles.
pub fn spawn_projectiles(
    mut commands: Commands,
    mut fire_events: EventReader<FireEvent>,
    config: Res<ProjectileConfig>,
    assets: Option<Res<ProjectileAssets>>,
) {
    for event in fire_events.read() {
        let mut projectile = commands.spawn((
            Projectile {
                damage: event.damage,
                owner: event.shooter,
            },
            Lifetime::from_seconds(config.lifetime),
            Transform::from_translation(event.origin).looking_to(event.direction, Vec3::Y),
            Visibility::default(),
            RigidBody::Dynamic,
            Collider::ball(config.radius),
            Sensor,
            GravityScale(0.0),
            Velocity::linear(event.direction * config.speed),
            Ccd::enabled(),
            ActiveEvents::COLLISION_EVENTS,
            Name::new("Projectile"),
        ));

        if let Some(assets) = &assets {
            projectile.insert((
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
            ));
        }
    }
}

/// Apply projectile hits. Each projectile acts on its first meaningful contact only.
pub fn resolve_projectile_contacts(
    mut commands: Commands,
    mut collision_events: EventReader<CollisionEvent>,
    projectiles: Query<(&Projectile, &Transform)>,
    damageable: Query<(), With<StatBlock>>,
    terrain: Query<(), Or<(With<Ground>, With<Wall>)>>,
    mut damage_events: EventWriter<DamageEvent>,
    mut effects: EventWriter<EffectEvent>,
) {
    // Several contacts can arrive in one frame; only the first one counts
    let mut spent = HashSet::new();

    for event in collision_events.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        for (shot, other) in [(*a, *b), (*b, *a)] {
            if spent.contains(&shot) {
                continue;
            }
            let Ok((projectile, transform)) = projectiles.get(shot) else {
                continue;
            };

            let outcome = classify_contact(
                other == projectile.owner,
                damageable.contains(other),
                terrain.contains(other),
            );

            match outcome {
                ContactOutcome::Damage => {
                    damage_events.send(DamageEvent {
                        target: other,
                        source: projectile.owner,
                        amount: projectile.damage,
                    });
                    effects.send(EffectEvent {
                        kind: EffectKind::Hit,
                        position: transform.translation,
                    });
                }
                ContactOutcome::Absorb => {}
                ContactOutcome::Ignore => continue,
            }

            spent.insert(shot);
            commands.entity(shot).despawn_recursive();
        }
    }
}

/// React to defeats: the player ends the run, targets are removed.
pub fn handle_deaths(
    mut commands: Commands,
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<(), With<Player>>,
    target_query: Query<&Transform, With<TrainingTarget>>,
    mut effects: EventWriter<EffectEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        if player_query.contains(event.entity) {
            info!("Player defeated! Transitioning to Game Over...");
            next_state.set(GameState::GameOver);
        } else if let Ok(transform) = target_query.get(event.entity) {
            effects.send(EffectEvent {
                kind: EffectKind::Defeat,
                position: transform.translation,
            });
            commands.entity(event.entity).despawn_recursive();
        } else if let Some(mut entity) = commands.get_entity(event.entity) {
            entity.despawn_recursive();
        }
    }
}

/// Remove in-flight projectiles when the run ends.
pub fn cleanup_projectiles(mut commands: Commands, query: Query<Entity, With<Projectile>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
