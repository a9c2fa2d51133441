//! Combat module - projectiles, contact resolution, and deaths.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use systems::{handle_deaths, resolve_projectile_contacts, spawn_projectiles};
