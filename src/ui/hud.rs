//! In-game HUD - health bar and stat readout.

use bevy::prelude::*;

use crate::core::{HealthChanged, StatsChanged};
use crate::player::Player;
use crate::stats::StatBlock;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for the stats text block.
#[derive(Component)]
pub struct StatsText;

/// Spawn the HUD UI.
pub fn spawn_hud(mut commands: Commands, player_query: Query<&StatBlock, With<Player>>) {
    let (summary, fraction) = player_query
        .get_single()
        .map(|stats| (stats.summary(), stats.health_fraction()))
        .unwrap_or_default();

    // HUD root container (bottom-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(summary),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
                StatsText,
            ));

            spawn_bar(parent, "Health", Color::srgb(0.8, 0.2, 0.2), fraction, HealthBar);
        });
}

/// Helper to spawn a status bar.
fn spawn_bar<M: Component>(
    parent: &mut ChildBuilder,
    label: &str,
    color: Color,
    fraction: f32,
    bar_marker: M,
) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            bar_parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            // Bar background
            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(200.0),
                        height: Val::Px(14.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(fraction * 100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        bar_marker,
                    ));
                });
        });
}

/// Resize the health bar when the player's health changes.
pub fn update_health_bar(
    mut health_events: EventReader<HealthChanged>,
    player_query: Query<(), With<Player>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    let Some(latest) = health_events
        .read()
        .filter(|event| player_query.contains(event.entity))
        .last()
    else {
        return;
    };
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    let fraction = if latest.maximum > 0.0 {
        latest.current / latest.maximum
    } else {
        0.0
    };
    bar.width = Val::Percent(fraction.clamp(0.0, 1.0) * 100.0);
}

/// Rewrite the stat readout after any stat or health change of the player.
pub fn update_stats_text(
    mut stats_events: EventReader<StatsChanged>,
    mut health_events: EventReader<HealthChanged>,
    player_query: Query<(Entity, &StatBlock), With<Player>>,
    mut text_query: Query<&mut Text, With<StatsText>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    let Ok((player, stats)) = player_query.get_single() else {
        return;
    };
    let stats_dirty = stats_events.read().any(|event| event.entity == player);
    let health_dirty = health_events.read().any(|event| event.entity == player);
    if !stats_dirty && !health_dirty {
        return;
    }

    if let Ok(mut text) = text_query.get_single_mut() {
        text.0 = stats.summary();
    }
    // Max health boosts change the fraction without a health event
    if stats_dirty {
        if let Ok(mut bar) = bar_query.get_single_mut() {
            bar.width = Val::Percent(stats.health_fraction() * 100.0);
        }
    }
}
