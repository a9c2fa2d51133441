//! Rover scene and control systems.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::camera::{Letterbox, LetterboxConfig};

pub fn setup_rover_title(mut commands: Commands) {
    commands.spawn((Camera2d, RoverTitleUi));
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.08)),
            RoverTitleUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("ROVER"),
                TextFont {
                    font_size: 80.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.6, 0.1)),
            ));
            parent.spawn((
                Text::new("Press Enter"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.55)),
            ));
        });
}

pub fn rover_title_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<RoverScreen>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        next_state.set(RoverScreen::Driving);
    }
}

pub fn cleanup_rover_title(mut commands: Commands, query: Query<Entity, With<RoverTitleUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Ground, light, rover, and a top-down camera.
pub fn setup_rover_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    letterbox: Res<LetterboxConfig>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(60.0, 60.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.3, 0.25))),
        Transform::default(),
        RigidBody::Fixed,
        Collider::cuboid(30.0, 0.1, 30.0),
        Name::new("Ground"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 12.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let start = Vec3::new(0.0, 0.6, 0.0);
    commands.spawn((
        Rover,
        PreviousPosition(start),
        Mesh3d(meshes.add(Cuboid::new(1.0, 0.6, 1.6))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.6, 0.1))),
        Transform::from_translation(start),
        RigidBody::Dynamic,
        Collider::cuboid(0.5, 0.3, 0.8),
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
        ExternalForce::default(),
        Damping {
            linear_damping: 0.5,
            angular_damping: 0.0,
        },
        Name::new("Rover"),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 25.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        Letterbox::from(&*letterbox),
        Name::new("Rover Camera"),
    ));
    info!("Rover scene ready");
}

/// Push the rover with WASD while it is below its speed limit.
pub fn drive_rover(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<RoverConfig>,
    mut query: Query<(&Velocity, &mut ExternalForce), With<Rover>>,
) {
    let keys = RoverKeys::from_input(&keyboard);
    for (velocity, mut external) in query.iter_mut() {
        external.force = rover_force(keys, velocity.linvel, &config);
    }
}

/// Face the direction the rover actually moved since last frame.
pub fn steer_rover(
    time: Res<Time>,
    config: Res<RoverConfig>,
    mut query: Query<(&mut Transform, &mut PreviousPosition), With<Rover>>,
) {
    let max_radians = config.turn_rate_degrees.to_radians() * time.delta_secs();
    for (mut transform, mut previous) in query.iter_mut() {
        let displacement = transform.translation - previous.0;
        previous.0 = transform.translation;
        transform.rotation = turn_toward(transform.rotation, displacement, max_radians);
    }
}
