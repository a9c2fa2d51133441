//! Feedback module - effects and sounds. Listens only, never writes gameplay state.

mod audio;
mod effects;
mod plugin;

pub use audio::{load_sounds, play_sounds, SoundConfig, SoundLibrary};
pub use effects::{effect_growth, spawn_effects, EffectAssets, EffectFlash};
pub use plugin::FeedbackPlugin;
