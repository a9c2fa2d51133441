//! Short-lived flash meshes for gameplay effects.

use bevy::prelude::*;

use crate::core::{EffectEvent, EffectKind, Lifetime};

/// Seconds an effect stays on screen.
const EFFECT_DURATION: f32 = 0.4;

/// Shared effect visuals, one material per kind.
#[derive(Resource)]
pub struct EffectAssets {
    pub mesh: Handle<Mesh>,
    pub level_up: Handle<StandardMaterial>,
    pub hit: Handle<StandardMaterial>,
    pub pickup: Handle<StandardMaterial>,
    pub defeat: Handle<StandardMaterial>,
}

impl EffectAssets {
    pub fn material(&self, kind: EffectKind) -> Handle<StandardMaterial> {
        match kind {
            EffectKind::LevelUp => self.level_up.clone(),
            EffectKind::Hit => self.hit.clone(),
            EffectKind::Pickup => self.pickup.clone(),
            EffectKind::Defeat => self.defeat.clone(),
        }
    }
}

/// Expanding flash. Scale grows linearly until the lifetime ends.
#[derive(Component, Debug, Clone, Copy)]
pub struct EffectFlash {
    pub growth: f32,
}

/// Growth rate per kind.
pub fn effect_growth(kind: EffectKind) -> f32 {
    match kind {
        EffectKind::LevelUp => 4.0,
        EffectKind::Hit => 2.0,
        EffectKind::Pickup => 3.0,
        EffectKind::Defeat => 6.0,
    }
}

pub fn setup_effect_assets(
    mut commands: Commands,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };

    let mut glow = |color: LinearRgba| {
        materials.add(StandardMaterial {
            base_color: Color::from(color).with_alpha(0.6),
            emissive: color * 3.0,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })
    };

    commands.insert_resource(EffectAssets {
        mesh: meshes.add(Sphere::new(0.25)),
        level_up: glow(LinearRgba::rgb(1.0, 0.85, 0.2)),
        hit: glow(LinearRgba::rgb(1.0, 0.4, 0.1)),
        pickup: glow(LinearRgba::rgb(0.4, 1.0, 0.6)),
        defeat: glow(LinearRgba::rgb(0.8, 0.2, 1.0)),
    });
}

/// Spawn a flash for every effect request. No-op without visuals.
pub fn spawn_effects(
    mut commands: Commands,
    mut effect_events: EventReader<EffectEvent>,
    assets: Option<Res<EffectAssets>>,
) {
    let Some(assets) = assets else {
        effect_events.clear();
        return;
    };

    for event in effect_events.read() {
        commands.spawn((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material(event.kind)),
            Transform::from_translation(event.position),
            EffectFlash {
                growth: effect_growth(event.kind),
            },
            Lifetime::from_seconds(EFFECT_DURATION),
            Name::new(format!("{:?} effect", event.kind)),
        ));
    }
}

pub fn grow_effects(time: Res<Time>, mut query: Query<(&mut Transform, &EffectFlash)>) {
    let dt = time.delta_secs();
    for (mut transform, flash) in query.iter_mut() {
        transform.scale += Vec3::splat(flash.growth * dt);
    }
}

/// Remove lingering flashes when the run ends.
pub fn cleanup_effects(mut commands: Commands, query: Query<Entity, With<EffectFlash>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
