//! Item components and descriptors.

use bevy::prelude::*;
use serde::Deserialize;

use crate::stats::StatKind;

/// The kinds of pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ItemKind {
    Speed,
    Power,
    Hp,
    Defense,
    Heal,
}

/// What an item does to the actor that collects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    Boost(StatKind),
    Heal,
}

impl ItemKind {
    pub fn effect(self) -> ItemEffect {
        match self {
            ItemKind::Speed => ItemEffect::Boost(StatKind::Speed),
            ItemKind::Power => ItemEffect::Boost(StatKind::Power),
            ItemKind::Hp => ItemEffect::Boost(StatKind::MaxHealth),
            ItemKind::Defense => ItemEffect::Boost(StatKind::Defense),
            ItemKind::Heal => ItemEffect::Heal,
        }
    }

    /// Display colour per kind.
    pub fn color(self) -> Color {
        match self {
            ItemKind::Speed => Color::srgb(0.2, 0.4, 1.0),
            ItemKind::Power => Color::srgb(1.0, 0.2, 0.2),
            ItemKind::Hp => Color::srgb(0.2, 0.9, 0.3),
            ItemKind::Defense => Color::srgb(1.0, 0.9, 0.2),
            ItemKind::Heal => Color::srgb(1.0, 0.5, 0.8),
        }
    }
}

/// One row of the spawn table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDescriptor {
    pub kind: ItemKind,
    /// Relative chance; higher spawns more often
    pub spawn_weight: f32,
    #[serde(default)]
    pub description: String,
}

impl ItemDescriptor {
    pub fn new(kind: ItemKind, spawn_weight: f32) -> Self {
        Self {
            kind,
            spawn_weight,
            description: String::new(),
        }
    }
}

/// A pickup lying in the arena.
#[derive(Component, Debug, Clone, Copy)]
pub struct Item {
    pub kind: ItemKind,
}

/// Back-reference from an item to the spawner tracking it (lookup only).
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnedBy(pub Entity);

/// Idle spin-and-bob animation.
#[derive(Component, Debug, Clone, Copy)]
pub struct ItemMotion {
    pub origin_y: f32,
    /// Degrees per second around Y
    pub spin_speed: f32,
    pub bob_speed: f32,
    pub bob_height: f32,
}

impl ItemMotion {
    pub fn new(origin_y: f32) -> Self {
        Self {
            origin_y,
            spin_speed: 90.0,
            bob_speed: 2.0,
            bob_height: 0.5,
        }
    }

    /// Height at elapsed time `t`.
    pub fn height_at(&self, t: f32) -> f32 {
        self.origin_y + (t * self.bob_speed).sin() * self.bob_height
    }
}

/// Shared visuals for items: one mesh, one material per kind.
#[derive(Resource)]
pub struct ItemAssets {
    pub mesh: Handle<Mesh>,
    pub speed: Handle<StandardMaterial>,
    pub power: Handle<StandardMaterial>,
    pub hp: Handle<StandardMaterial>,
    pub defense: Handle<StandardMaterial>,
    pub heal: Handle<StandardMaterial>,
}

impl ItemAssets {
    pub fn material(&self, kind: ItemKind) -> Handle<StandardMaterial> {
        match kind {
            ItemKind::Speed => self.speed.clone(),
            ItemKind::Power => self.power.clone(),
            ItemKind::Hp => self.hp.clone(),
            ItemKind::Defense => self.defense.clone(),
            ItemKind::Heal => self.heal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_item_boosts_max_health() {
        assert_eq!(ItemKind::Hp.effect(), ItemEffect::Boost(StatKind::MaxHealth));
        assert_eq!(ItemKind::Heal.effect(), ItemEffect::Heal);
    }

    #[test]
    fn bob_stays_within_height() {
        let motion = ItemMotion::new(1.0);
        for step in 0..100 {
            let y = motion.height_at(step as f32 * 0.1);
            assert!((0.5..=1.5).contains(&y));
        }
    }
}
