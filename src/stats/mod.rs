//! Stats module - the stat model and the damage capability.

mod components;
mod plugin;

pub use components::*;
pub use plugin::{apply_damage, apply_resets, announce_new_stats, ResetStats, StatsPlugin, StatsSet};
