//! Stats plugin - damage application, death notification, and stat resets.

use bevy::prelude::*;

use super::components::{Damageable, StatBlock, StatsConfig};
use crate::core::{DamageEvent, DeathEvent, HealthChanged, PlayState, SoundCue, SoundEvent, StatsChanged};

/// Request to restore an entity's stats to their base values.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetStats {
    pub entity: Entity,
}

/// Ordering for stat mutation; collision handlers run before it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsSet;

/// Stats plugin - owns every write to `StatBlock` except item pickups.
pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatsConfig>()
            .add_event::<ResetStats>()
            .add_systems(
                Update,
                (announce_new_stats, apply_damage, apply_resets)
                    .chain()
                    .in_set(StatsSet)
                    .run_if(in_state(PlayState::Running)),
            );
    }
}

/// Tell listeners about freshly spawned stat blocks so they can draw them.
pub fn announce_new_stats(
    query: Query<Entity, Added<StatBlock>>,
    mut stats_changed: EventWriter<StatsChanged>,
) {
    for entity in query.iter() {
        stats_changed.send(StatsChanged { entity });
    }
}

/// Apply queued damage through the `Damageable` capability.
pub fn apply_damage(
    mut damage_events: EventReader<DamageEvent>,
    mut query: Query<&mut StatBlock>,
    mut health_changed: EventWriter<HealthChanged>,
    mut death_events: EventWriter<DeathEvent>,
    mut sounds: EventWriter<SoundEvent>,
) {
    for event in damage_events.read() {
        // Target may already be gone (despawned this frame)
        let Ok(mut stats) = query.get_mut(event.target) else {
            continue;
        };
        if stats.is_defeated() {
            continue;
        }

        let outcome = stats.take_damage(event.amount);
        debug!(
            "{:?} took {:.1} damage, {:.1} left",
            event.target, outcome.dealt, outcome.remaining
        );

        health_changed.send(HealthChanged {
            entity: event.target,
            current: stats.current_health(),
            maximum: stats.max_health(),
        });
        sounds.send(SoundEvent(SoundCue::Damage));

        if outcome.died {
            info!("{:?} was defeated by {:?}", event.target, event.source);
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}

/// Restore base stats on request.
pub fn apply_resets(
    mut resets: EventReader<ResetStats>,
    mut query: Query<&mut StatBlock>,
    mut stats_changed: EventWriter<StatsChanged>,
) {
    for event in resets.read() {
        let Ok(mut stats) = query.get_mut(event.entity) else {
            warn!("Reset requested for {:?}, which has no stats", event.entity);
            continue;
        };
        stats.reset();
        stats_changed.send(StatsChanged { entity: event.entity });
        info!("Stats reset for {:?}", event.entity);
    }
}
