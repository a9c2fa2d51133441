//! Global events used for cross-system communication.
//!
//! Projectiles never touch a stat block directly: they send a [`DamageEvent`]
//! and the stats systems apply it. Feedback (effects, sounds, HUD) listens to
//! the notifications below and never writes gameplay state back.

use bevy::prelude::*;

/// Sent when an entity should take damage.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Raw damage before defense
    pub amount: f32,
}

/// Sent exactly once when an entity's health reaches 0.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Entity that was defeated
    pub entity: Entity,
    /// Entity that dealt the final blow (if any)
    pub killed_by: Option<Entity>,
}

/// Sent when a boost or reset changed an entity's stats.
#[derive(Event, Debug, Clone, Copy)]
pub struct StatsChanged {
    pub entity: Entity,
}

/// Sent when current health changed (damage or heal).
#[derive(Event, Debug, Clone, Copy)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: f32,
    pub maximum: f32,
}

/// Sent when a firer requests a projectile.
#[derive(Event, Debug, Clone, Copy)]
pub struct FireEvent {
    /// Entity that fired (never damaged by its own projectile)
    pub shooter: Entity,
    /// World-space spawn point
    pub origin: Vec3,
    /// Unit launch direction
    pub direction: Vec3,
    /// Damage carried by the projectile
    pub damage: f32,
}

/// Visual effect kinds that gameplay can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    LevelUp,
    Hit,
    Pickup,
    Defeat,
}

/// Fire-and-forget request to play an effect at a position.
#[derive(Event, Debug, Clone, Copy)]
pub struct EffectEvent {
    pub kind: EffectKind,
    pub position: Vec3,
}

/// One-shot sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    LevelUp,
    Heal,
    Damage,
    Pickup,
}

/// Fire-and-forget request to play a one-shot sound.
#[derive(Event, Debug, Clone, Copy)]
pub struct SoundEvent(pub SoundCue);
