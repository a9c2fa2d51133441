//! One-shot sound cues played through Kira.

use bevy::prelude::*;
use bevy::utils::HashMap;
use bevy_kira_audio::{Audio, AudioControl, AudioSource};
use serde::Deserialize;

use crate::core::{SoundCue, SoundEvent};

/// Sound file per cue, relative to `assets/`. Unset cues stay silent.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub level_up: Option<String>,
    pub heal: Option<String>,
    pub damage: Option<String>,
    pub pickup: Option<String>,
}

impl SoundConfig {
    pub fn path(&self, cue: SoundCue) -> Option<&str> {
        match cue {
            SoundCue::LevelUp => self.level_up.as_deref(),
            SoundCue::Heal => self.heal.as_deref(),
            SoundCue::Damage => self.damage.as_deref(),
            SoundCue::Pickup => self.pickup.as_deref(),
        }
    }
}

/// Loaded handles for every configured cue.
#[derive(Resource, Default)]
pub struct SoundLibrary {
    handles: HashMap<SoundCue, Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn get(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        self.handles.get(&cue)
    }
}

pub fn load_sounds(
    mut commands: Commands,
    config: Res<SoundConfig>,
    asset_server: Option<Res<AssetServer>>,
) {
    let Some(asset_server) = asset_server else {
        return;
    };

    let mut library = SoundLibrary::default();
    for cue in [SoundCue::LevelUp, SoundCue::Heal, SoundCue::Damage, SoundCue::Pickup] {
        match config.path(cue) {
            Some(path) => {
                library.handles.insert(cue, asset_server.load(path.to_string()));
            }
            None => debug!("No sound configured for {:?}", cue),
        }
    }
    info!("Loaded {} sound cues", library.handles.len());
    commands.insert_resource(library);
}

/// Play requested cues. Missing sounds or audio backend are a no-op.
pub fn play_sounds(
    mut sound_events: EventReader<SoundEvent>,
    library: Option<Res<SoundLibrary>>,
    audio: Option<Res<Audio>>,
) {
    let (Some(library), Some(audio)) = (library, audio) else {
        sound_events.clear();
        return;
    };

    for SoundEvent(cue) in sound_events.read() {
        if let Some(handle) = library.get(*cue) {
            audio.play(handle.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_cues_have_no_path() {
        let config = SoundConfig {
            pickup: Some("sounds/pickup.ogg".to_string()),
            ..default()
        };

        assert_eq!(config.path(SoundCue::Pickup), Some("sounds/pickup.ogg"));
        assert_eq!(config.path(SoundCue::Damage), None);
    }
}
