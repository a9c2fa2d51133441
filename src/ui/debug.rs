//! Debug hotkeys and the F3 readout.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

use crate::core::HealthChanged;
use crate::items::{ItemSpawner, SpawnerCommand};
use crate::player::{DashState, Player};
use crate::stats::{ResetStats, StatBlock};

/// Whether the debug readout is shown.
#[derive(Resource, Debug, Default)]
pub struct DebugOverlay {
    pub visible: bool,
}

/// Marker for the debug readout text.
#[derive(Component)]
pub struct DebugText;

/// Snapshot shown by the readout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugReadout {
    pub speed: f32,
    pub dashing: bool,
    pub cooldown: f32,
    pub items: u32,
    pub cap: u32,
    pub next_spawn: f32,
}

impl DebugReadout {
    pub fn format(&self) -> String {
        format!(
            "Velocity: {:.2}\nDashing: {}\nDash cooldown: {:.2}\nItems: {}/{}\nNext spawn: {:.1}s",
            self.speed,
            self.dashing,
            self.cooldown.max(0.0),
            self.items,
            self.cap,
            self.next_spawn
        )
    }
}

pub fn spawn_debug_text(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.6, 1.0, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        Visibility::Hidden,
        DebugText,
        super::hud::HudRoot,
    ));
}

/// F1 spawn, F2 clear, F3 readout, F4 reset spawner, F5 reset stats, F6 near death.
pub fn debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<DebugOverlay>,
    mut player_query: Query<(Entity, &mut StatBlock), With<Player>>,
    mut spawner_commands: EventWriter<SpawnerCommand>,
    mut resets: EventWriter<ResetStats>,
    mut health_changed: EventWriter<HealthChanged>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        spawner_commands.send(SpawnerCommand::SpawnRandom);
    }
    if keyboard.just_pressed(KeyCode::F2) {
        spawner_commands.send(SpawnerCommand::ClearItems);
    }
    if keyboard.just_pressed(KeyCode::F3) {
        overlay.visible = !overlay.visible;
    }
    if keyboard.just_pressed(KeyCode::F4) {
        spawner_commands.send(SpawnerCommand::Reset);
    }

    let Ok((player, mut stats)) = player_query.get_single_mut() else {
        return;
    };
    if keyboard.just_pressed(KeyCode::F5) {
        resets.send(ResetStats { entity: player });
    }
    if keyboard.just_pressed(KeyCode::F6) {
        stats.set_health(1.0);
        info!("Debug: player health set to {:.0}", stats.current_health());
        health_changed.send(HealthChanged {
            entity: player,
            current: stats.current_health(),
            maximum: stats.max_health(),
        });
    }
}

pub fn update_debug_text(
    overlay: Res<DebugOverlay>,
    player_query: Query<(&Velocity, &DashState), With<Player>>,
    spawner_query: Query<&ItemSpawner>,
    mut text_query: Query<(&mut Text, &mut Visibility), With<DebugText>>,
) {
    let Ok((mut text, mut visibility)) = text_query.get_single_mut() else {
        return;
    };
    *visibility = if overlay.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    if !overlay.visible {
        return;
    }

    let Ok((velocity, dash)) = player_query.get_single() else {
        return;
    };
    let (items, cap, next_spawn) = spawner_query
        .get_single()
        .map(|s| (s.registry.live_count(), s.registry.cap(), s.schedule.time_until_next()))
        .unwrap_or_default();

    text.0 = DebugReadout {
        speed: velocity.linvel.length(),
        dashing: dash.active,
        cooldown: dash.cooldown_remaining,
        items,
        cap,
        next_spawn,
    }
    .format();
}
