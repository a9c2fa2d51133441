//! Core game module - configuration, states, events, and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod error;
mod events;
mod lifetime;
mod pause;
mod plugin;
mod states;

pub use config::{load_ron, GameConfig, CONFIG_PATH};
pub use error::DataLoadError;
pub use events::*;
pub use lifetime::{expire_lifetimes, Lifetime};
pub use pause::{pause_physics, resume_physics};
pub use plugin::CorePlugin;
pub use states::*;
