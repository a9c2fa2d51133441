//! Projectile components and tuning.

use bevy::prelude::*;
use serde::Deserialize;

/// A straight-flying shot. Motion belongs to the physics engine.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    /// Damage applied on first contact, set by the firer
    pub damage: f32,
    /// Entity that fired it; never hit by its own shots
    pub owner: Entity,
}

/// Tuning for projectiles.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Launch speed in units per second
    pub speed: f32,
    /// Seconds before an unconnected shot removes itself
    pub lifetime: f32,
    pub radius: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 20.0,
            lifetime: 5.0,
            radius: 0.15,
        }
    }
}

/// Shared mesh and material for projectile visuals.
#[derive(Resource)]
pub struct ProjectileAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// What a projectile does when it touches something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Apply damage and despawn
    Damage,
    /// Despawn without effect (terrain)
    Absorb,
    /// Keep flying (owner, other projectiles, pickups)
    Ignore,
}

/// Decide the outcome of a contact from the touched entity's capabilities.
pub fn classify_contact(is_owner: bool, is_damageable: bool, is_terrain: bool) -> ContactOutcome {
    if is_owner {
        ContactOutcome::Ignore
    } else if is_damageable {
        ContactOutcome::Damage
    } else if is_terrain {
        ContactOutcome::Absorb
    } else {
        ContactOutcome::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_outcomes() {
        assert_eq!(classify_contact(true, true, false), ContactOutcome::Ignore);
        assert_eq!(classify_contact(false, true, false), ContactOutcome::Damage);
        assert_eq!(classify_contact(false, false, true), ContactOutcome::Absorb);
        assert_eq!(classify_contact(false, false, false), ContactOutcome::Ignore);
    }
}
