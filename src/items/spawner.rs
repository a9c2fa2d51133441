//! Item spawner: live-count registry, spawn timer, and spawn systems.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use serde::Deserialize;

use super::components::*;
use super::placement::{find_spawn_position, PlacementRules};
use super::selection::pick_weighted;
use crate::player::Player;
use crate::world::Ground;

/// Live item count against a cap.
///
/// Incremented on every spawn, decremented once per tracked item removal.
/// The decrement saturates so stale or duplicate notifications are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRegistry {
    live_count: u32,
    cap: u32,
}

impl SpawnRegistry {
    pub fn new(cap: u32) -> Self {
        Self { live_count: 0, cap }
    }

    pub fn live_count(&self) -> u32 {
        self.live_count
    }

    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Timer-driven spawns are only allowed below the cap.
    pub fn has_capacity(&self) -> bool {
        self.live_count < self.cap
    }

    pub fn register_spawn(&mut self) {
        self.live_count += 1;
    }

    pub fn release(&mut self) {
        self.live_count = self.live_count.saturating_sub(1);
    }

    pub fn reset_count(&mut self) {
        self.live_count = 0;
    }
}

/// Spawn interval timer.
///
/// Keeps accumulating while the spawner is full, so a spawn happens as soon
/// as room frees up once the interval has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSchedule {
    interval: f32,
    elapsed: f32,
}

impl SpawnSchedule {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt`; true when a spawn is due and allowed.
    pub fn tick(&mut self, dt: f32, has_capacity: bool) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval && has_capacity {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn time_until_next(&self) -> f32 {
        (self.interval - self.elapsed).max(0.0)
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Tuning for the item spawner.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub placement: PlacementRules,
    /// Cap for timer-driven spawns
    pub max_items: u32,
    /// Seconds between timer-driven spawns
    pub interval: f32,
    /// Items spawned when the arena is built
    pub initial_items: u32,
    pub auto_spawn: bool,
    pub items: Vec<ItemDescriptor>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            placement: PlacementRules::default(),
            max_items: 20,
            interval: 3.0,
            initial_items: 5,
            auto_spawn: true,
            items: vec![
                ItemDescriptor::new(ItemKind::Speed, 1.0),
                ItemDescriptor::new(ItemKind::Power, 1.0),
                ItemDescriptor::new(ItemKind::Hp, 0.7),
                ItemDescriptor::new(ItemKind::Defense, 0.8),
                ItemDescriptor::new(ItemKind::Heal, 1.5),
            ],
        }
    }
}

/// A spawner placed in the world.
#[derive(Component, Debug, Clone)]
pub struct ItemSpawner {
    pub registry: SpawnRegistry,
    pub schedule: SpawnSchedule,
    pub auto_spawn: bool,
    /// Initial spawns still waiting for a valid position
    pub pending_initial: u32,
    pub table: Vec<ItemDescriptor>,
    pub rules: PlacementRules,
}

impl ItemSpawner {
    pub fn from_config(config: &SpawnerConfig) -> Self {
        Self {
            registry: SpawnRegistry::new(config.max_items),
            schedule: SpawnSchedule::new(config.interval),
            auto_spawn: config.auto_spawn,
            pending_initial: config.initial_items,
            table: config.items.clone(),
            rules: config.placement,
        }
    }

    /// Forget all tracked items and restart the timer.
    pub fn reset(&mut self) {
        self.schedule.reset();
        self.registry.reset_count();
    }
}

/// Explicit requests to a spawner. Manual spawns ignore the cap.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SpawnerCommand {
    SpawnRandom,
    SpawnSpecific { kind: ItemKind, position: Vec3 },
    ClearItems,
    Reset,
}

/// Downward ray cast against ground colliders only.
#[derive(SystemParam)]
pub struct GroundProbe<'w, 's> {
    context: Query<'w, 's, &'static RapierContext>,
    ground: Query<'w, 's, (), With<Ground>>,
}

impl GroundProbe<'_, '_> {
    /// Ground point below `origin`, within `max_distance`.
    pub fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<Vec3> {
        let context = self.context.get_single().ok()?;
        let is_ground = |entity: Entity| self.ground.contains(entity);
        let filter = QueryFilter::default().predicate(&is_ground);

        context
            .cast_ray(origin, Vec3::NEG_Y, max_distance, true, filter)
            .map(|(_, distance)| origin + Vec3::NEG_Y * distance)
    }
}

/// Spawn one tracked item and count it against the spawner.
pub fn spawn_item(
    commands: &mut Commands,
    spawner_entity: Entity,
    spawner: &mut ItemSpawner,
    kind: ItemKind,
    position: Vec3,
    assets: Option<&ItemAssets>,
) -> Entity {
    let mut item = commands.spawn((
        Item { kind },
        SpawnedBy(spawner_entity),
        ItemMotion::new(position.y),
        Transform::from_translation(position),
        Visibility::default(),
        Collider::ball(0.5),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        Name::new(format!("{kind:?} item")),
    ));

    if let Some(assets) = assets {
        item.insert((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material(kind)),
        ));
    }

    spawner.registry.register_spawn();
    info!(
        "Spawned {:?} item at {} ({} on field)",
        kind,
        position,
        spawner.registry.live_count()
    );
    item.id()
}

/// Result of one random spawn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnAttempt {
    Spawned(Entity),
    /// No candidate ray hit the ground, usually because it is not built yet
    NoGround,
    /// Ground was found but every candidate was too close to another item
    Crowded,
    /// The spawn table has nothing with positive weight
    NothingToSpawn,
}

impl ItemSpawner {
    /// Book one initial spawn attempt. Returns true to keep going this frame.
    ///
    /// Missing ground keeps the remaining initial spawns for a later frame.
    /// Any other failure drops them.
    pub fn settle_initial_attempt(&mut self, attempt: SpawnAttempt) -> bool {
        match attempt {
            SpawnAttempt::Spawned(_) => {
                self.pending_initial = self.pending_initial.saturating_sub(1);
                self.pending_initial > 0
            }
            SpawnAttempt::NoGround => false,
            SpawnAttempt::Crowded | SpawnAttempt::NothingToSpawn => {
                if self.pending_initial > 0 {
                    warn!(
                        "Dropping {} initial item(s): {:?}",
                        self.pending_initial, attempt
                    );
                }
                self.pending_initial = 0;
                false
            }
        }
    }
}

/// Pick a kind and a free position, then spawn.
fn spawn_random_item(
    commands: &mut Commands,
    spawner_entity: Entity,
    spawner: &mut ItemSpawner,
    center: Vec3,
    probe: &GroundProbe,
    occupied: &mut Vec<Vec3>,
    assets: Option<&ItemAssets>,
) -> SpawnAttempt {
    let mut rng = rand::thread_rng();

    let Some(kind) = pick_weighted(&spawner.table, &mut rng) else {
        warn!("Item spawner has no spawnable entries, skipping spawn");
        return SpawnAttempt::NothingToSpawn;
    };

    let rules = spawner.rules;
    let mut ground_seen = false;
    let position = find_spawn_position(
        center,
        &rules,
        &mut rng,
        |origin| {
            let hit = probe.cast_down(origin, rules.probe_distance);
            ground_seen |= hit.is_some();
            hit
        },
        occupied,
    );
    let Some(position) = position else {
        debug!("No valid item position found this cycle");
        return if ground_seen {
            SpawnAttempt::Crowded
        } else {
            SpawnAttempt::NoGround
        };
    };

    let item = spawn_item(commands, spawner_entity, spawner, kind, position, assets);
    occupied.push(position);
    SpawnAttempt::Spawned(item)
}

/// Timer-driven and initial spawns.
pub fn tick_item_spawners(
    mut commands: Commands,
    time: Res<Time>,
    probe: GroundProbe,
    assets: Option<Res<ItemAssets>>,
    player_query: Query<&Transform, With<Player>>,
    item_query: Query<&Transform, With<Item>>,
    mut spawner_query: Query<(Entity, &Transform, &mut ItemSpawner)>,
) {
    let player_position = player_query.get_single().ok().map(|t| t.translation);
    let mut occupied: Vec<Vec3> = item_query.iter().map(|t| t.translation).collect();
    let dt = time.delta_secs();

    for (spawner_entity, transform, mut spawner) in spawner_query.iter_mut() {
        let center = player_position.unwrap_or(transform.translation);

        // Initial burst ignores the cap
        while spawner.pending_initial > 0 {
            let attempt = spawn_random_item(
                &mut commands,
                spawner_entity,
                &mut spawner,
                center,
                &probe,
                &mut occupied,
                assets.as_deref(),
            );
            if !spawner.settle_initial_attempt(attempt) {
                break;
            }
        }

        if !spawner.auto_spawn {
            continue;
        }

        let has_capacity = spawner.registry.has_capacity();
        if spawner.schedule.tick(dt, has_capacity) {
            spawn_random_item(
                &mut commands,
                spawner_entity,
                &mut spawner,
                center,
                &probe,
                &mut occupied,
                assets.as_deref(),
            );
        }
    }
}

/// Apply explicit spawner commands to every spawner.
pub fn handle_spawner_commands(
    mut commands: Commands,
    mut spawner_commands: EventReader<SpawnerCommand>,
    probe: GroundProbe,
    assets: Option<Res<ItemAssets>>,
    player_query: Query<&Transform, With<Player>>,
    item_query: Query<(Entity, &Transform), With<Item>>,
    mut spawner_query: Query<(Entity, &Transform, &mut ItemSpawner)>,
) {
    let player_position = player_query.get_single().ok().map(|t| t.translation);
    let mut occupied: Vec<Vec3> = item_query.iter().map(|(_, t)| t.translation).collect();
    // Items spawned by this batch are not visible to `item_query` yet
    let mut batch_spawned: Vec<Entity> = Vec::new();
    let mut existing_cleared = false;

    for command in spawner_commands.read() {
        let Ok((spawner_entity, transform, mut spawner)) = spawner_query.get_single_mut() else {
            warn!("Spawner command {:?} ignored: no single item spawner", command);
            continue;
        };

        match *command {
            SpawnerCommand::SpawnRandom => {
                let center = player_position.unwrap_or(transform.translation);
                if let SpawnAttempt::Spawned(item) = spawn_random_item(
                    &mut commands,
                    spawner_entity,
                    &mut spawner,
                    center,
                    &probe,
                    &mut occupied,
                    assets.as_deref(),
                ) {
                    batch_spawned.push(item);
                }
            }
            SpawnerCommand::SpawnSpecific { kind, position } => {
                let item = spawn_item(
                    &mut commands,
                    spawner_entity,
                    &mut spawner,
                    kind,
                    position,
                    assets.as_deref(),
                );
                batch_spawned.push(item);
                occupied.push(position);
            }
            SpawnerCommand::ClearItems => {
                // Slots are released by `release_spawn_slot` as each item goes
                if !existing_cleared {
                    for (item, _) in item_query.iter() {
                        commands.entity(item).despawn_recursive();
                    }
                    existing_cleared = true;
                }
                for item in batch_spawned.drain(..) {
                    commands.entity(item).despawn_recursive();
                }
                occupied.clear();
                info!("Cleared all items");
            }
            SpawnerCommand::Reset => {
                spawner.reset();
                info!("Item spawner reset");
            }
        }
    }
}

/// Observer: a tracked item is going away, free its slot exactly once.
pub fn release_spawn_slot(
    trigger: Trigger<OnRemove, Item>,
    items: Query<&SpawnedBy>,
    mut spawners: Query<&mut ItemSpawner>,
) {
    let Ok(spawned_by) = items.get(trigger.entity()) else {
        return;
    };
    // Spawner may have been removed first; nothing to update then
    let Ok(mut spawner) = spawners.get_mut(spawned_by.0) else {
        return;
    };
    spawner.registry.release();
    debug!("Item removed, {} on field", spawner.registry.live_count());
}
