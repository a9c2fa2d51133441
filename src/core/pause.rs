//! Freezing the physics world while the game is paused.

use bevy::prelude::*;
use bevy_rapier3d::prelude::RapierConfiguration;

/// Stop Rapier stepping so bodies, shots and contacts hold still.
pub fn pause_physics(mut config: Query<&mut RapierConfiguration>) {
    for mut config in config.iter_mut() {
        config.physics_pipeline_active = false;
    }
    debug!("Physics paused");
}

/// Let Rapier step again.
pub fn resume_physics(mut config: Query<&mut RapierConfiguration>) {
    for mut config in config.iter_mut() {
        config.physics_pipeline_active = true;
    }
    debug!("Physics resumed");
}
