//! World module - the arena, its terrain, and training targets.

mod arena;
mod components;
mod plugin;

pub use arena::{cleanup_arena, setup_arena};
pub use components::*;
pub use plugin::WorldPlugin;
