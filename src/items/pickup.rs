//! Item pickup and idle animation.

use bevy::prelude::*;
use bevy::utils::HashSet;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::core::{EffectEvent, EffectKind, HealthChanged, SoundCue, SoundEvent, StatsChanged};
use crate::player::Player;
use crate::stats::{StatBlock, StatsConfig};

/// What applying an item changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickupOutcome {
    /// A stat was raised to this value
    Boosted(f32),
    /// This much health was restored
    Healed(f32),
}

/// Apply an item's effect to a stat block.
pub fn apply_item(kind: ItemKind, stats: &mut StatBlock, heal_amount: f32) -> PickupOutcome {
    match kind.effect() {
        ItemEffect::Boost(stat) => PickupOutcome::Boosted(stats.apply_boost(stat)),
        ItemEffect::Heal => PickupOutcome::Healed(stats.heal(heal_amount)),
    }
}

/// Sent when an item was consumed.
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemPickupEvent {
    pub item: Entity,
    pub collector: Entity,
    pub kind: ItemKind,
}

/// Consume items touched by the player.
pub fn collect_items(
    mut commands: Commands,
    mut collision_events: EventReader<CollisionEvent>,
    stats_config: Res<StatsConfig>,
    item_query: Query<(&Item, &Transform)>,
    mut collector_query: Query<(&mut StatBlock, &Transform), With<Player>>,
    mut pickups: EventWriter<ItemPickupEvent>,
    mut stats_changed: EventWriter<StatsChanged>,
    mut health_changed: EventWriter<HealthChanged>,
    mut effects: EventWriter<EffectEvent>,
    mut sounds: EventWriter<SoundEvent>,
) {
    // An item overlapping twice in one frame must only apply once
    let mut consumed = HashSet::new();

    for event in collision_events.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        for (item_entity, other) in [(*a, *b), (*b, *a)] {
            if consumed.contains(&item_entity) {
                continue;
            }
            let Ok((item, item_transform)) = item_query.get(item_entity) else {
                continue;
            };
            let Ok((mut stats, collector_transform)) = collector_query.get_mut(other) else {
                continue;
            };

            match apply_item(item.kind, &mut stats, stats_config.heal_amount) {
                PickupOutcome::Boosted(value) => {
                    info!("{:?} boost collected, now {:.1}", item.kind, value);
                    stats_changed.send(StatsChanged { entity: other });
                    effects.send(EffectEvent {
                        kind: EffectKind::LevelUp,
                        position: collector_transform.translation + Vec3::Y,
                    });
                    sounds.send(SoundEvent(SoundCue::LevelUp));
                }
                PickupOutcome::Healed(amount) => {
                    info!(
                        "Healed {:.0}, now {:.0}/{:.0}",
                        amount,
                        stats.current_health(),
                        stats.max_health()
                    );
                    health_changed.send(HealthChanged {
                        entity: other,
                        current: stats.current_health(),
                        maximum: stats.max_health(),
                    });
                    sounds.send(SoundEvent(SoundCue::Heal));
                }
            }

            effects.send(EffectEvent {
                kind: EffectKind::Pickup,
                position: item_transform.translation,
            });
            sounds.send(SoundEvent(SoundCue::Pickup));
            pickups.send(ItemPickupEvent {
                item: item_entity,
                collector: other,
                kind: item.kind,
            });

            consumed.insert(item_entity);
            commands.entity(item_entity).despawn_recursive();
        }
    }
}

/// Spin and bob idle items.
pub fn animate_items(time: Res<Time>, mut query: Query<(&mut Transform, &ItemMotion)>) {
    let elapsed = time.elapsed_secs();
    let dt = time.delta_secs();
    for (mut transform, motion) in query.iter_mut() {
        transform.rotate_y(motion.spin_speed.to_radians() * dt);
        transform.translation.y = motion.height_at(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Damageable;

    #[test]
    fn heal_item_after_damage_is_clamped_to_max() {
        let mut stats = StatBlock::default();
        stats.take_damage(10.0);
        assert_eq!(stats.current_health(), 90.0);

        let outcome = apply_item(ItemKind::Heal, &mut stats, 30.0);

        assert_eq!(outcome, PickupOutcome::Healed(10.0));
        assert_eq!(stats.current_health(), 100.0);
    }

    #[test]
    fn defense_item_reduces_later_damage() {
        let mut stats = StatBlock::default();
        apply_item(ItemKind::Defense, &mut stats, 30.0);

        stats.take_damage(10.0);

        assert_eq!(stats.current_health(), 95.0);
    }

    #[test]
    fn boost_items_raise_their_stat() {
        let mut stats = StatBlock::default();

        assert_eq!(apply_item(ItemKind::Speed, &mut stats, 30.0), PickupOutcome::Boosted(10.0));
        assert_eq!(apply_item(ItemKind::Power, &mut stats, 30.0), PickupOutcome::Boosted(15.0));
        assert_eq!(apply_item(ItemKind::Hp, &mut stats, 30.0), PickupOutcome::Boosted(120.0));
    }
}
