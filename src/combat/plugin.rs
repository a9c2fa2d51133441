//! Combat plugin - projectiles, hits, and deaths.

use bevy::prelude::*;

use super::components::*;
use super::systems::*;
use crate::core::{GameState, PlayState};
use crate::player::ControllerSet;
use crate::stats::StatsSet;

/// Combat plugin - handles all projectile systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectileConfig>()
            .add_systems(Startup, setup_projectile_assets)
            .add_systems(
                Update,
                (
                    spawn_projectiles.after(ControllerSet::Act),
                    resolve_projectile_contacts.before(StatsSet),
                    handle_deaths.after(StatsSet),
                )
                    .run_if(in_state(PlayState::Running)),
            )
            .add_systems(OnExit(GameState::InGame), cleanup_projectiles);
    }
}
