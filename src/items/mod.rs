//! Items module - pickups, weighted selection, placement, and the spawner.

mod components;
mod pickup;
mod placement;
mod plugin;
mod selection;
mod spawner;

pub use components::*;
pub use pickup::{animate_items, apply_item, collect_items, ItemPickupEvent, PickupOutcome};
pub use placement::{find_spawn_position, is_occupied, random_point_in_disk, PlacementRules};
pub use plugin::ItemsPlugin;
pub use selection::{pick_weighted, select_by_draw, total_weight};
pub use spawner::{
    handle_spawner_commands, release_spawn_slot, spawn_item, tick_item_spawners, GroundProbe,
    ItemSpawner, SpawnAttempt, SpawnRegistry, SpawnSchedule, SpawnerCommand, SpawnerConfig,
};
