//! Game configuration loaded from an external RON file.
//!
//! Every tuning value the gameplay systems read lives here so it can be
//! tweaked without recompilation. Each section is inserted as its own
//! resource, so systems only depend on the part they use.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;
use crate::camera::{CameraConfig, LetterboxConfig};
use crate::combat::ProjectileConfig;
use crate::feedback::SoundConfig;
use crate::items::SpawnerConfig;
use crate::player::ControllerConfig;
use crate::rover::RoverConfig;
use crate::stats::StatsConfig;
use crate::world::ArenaConfig;

/// Default location of the game configuration file.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub stats: StatsConfig,
    pub controller: ControllerConfig,
    pub projectile: ProjectileConfig,
    pub spawner: SpawnerConfig,
    pub arena: ArenaConfig,
    pub camera: CameraConfig,
    pub letterbox: LetterboxConfig,
    pub sounds: SoundConfig,
    pub rover: RoverConfig,
}

impl GameConfig {
    /// Load the config from [`CONFIG_PATH`], falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from(Path::new(CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(DataLoadError::FileNotFound(path)) => {
                warn!("Could not find {}. Using defaults.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Load and validate the config at `path`.
    pub fn load_from(path: &Path) -> Result<Self, DataLoadError> {
        let config: Self = load_ron(path)?;
        config.validate(&path.display().to_string())?;
        Ok(config)
    }

    /// Parse a config from a RON string.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self, DataLoadError> {
        let config: Self = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Reject values that would break gameplay invariants.
    pub fn validate(&self, origin: &str) -> Result<(), DataLoadError> {
        let invalid = |details: String| DataLoadError::Invalid {
            path: origin.to_string(),
            details,
        };

        let base = &self.stats.base;
        for (name, value) in [
            ("stats.base.max_health", base.max_health),
            ("stats.base.move_speed", base.move_speed),
            ("stats.base.power", base.power),
            ("stats.base.defense", base.defense),
        ] {
            if !(value >= 0.0) {
                return Err(invalid(format!("{name} must be >= 0, got {value}")));
            }
        }

        if let Some(entry) = self.spawner.items.iter().find(|d| !(d.spawn_weight >= 0.0)) {
            return Err(invalid(format!(
                "spawn weight for {:?} must be >= 0, got {}",
                entry.kind, entry.spawn_weight
            )));
        }

        let c = &self.controller;
        if c.dash_duration < 0.0 || c.dash_cooldown < 0.0 || c.fire_interval < 0.0 {
            return Err(invalid("controller timers must be >= 0".to_string()));
        }

        if self.letterbox.target_size.0 <= 0.0 || self.letterbox.target_size.1 <= 0.0 {
            return Err(invalid("letterbox.target_size must be positive".to_string()));
        }

        Ok(())
    }

    /// Insert every section as a standalone resource.
    pub fn insert_into(self, app: &mut App) {
        app.insert_resource(self.stats)
            .insert_resource(self.controller)
            .insert_resource(self.projectile)
            .insert_resource(self.spawner)
            .insert_resource(self.arena)
            .insert_resource(self.camera)
            .insert_resource(self.letterbox)
            .insert_resource(self.sounds)
            .insert_resource(self.rover);
    }
}

/// Read and deserialize a RON file.
pub fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}
