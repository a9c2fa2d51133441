//! Stat model: health, move speed, power, and defense for a single actor.

use bevy::prelude::*;
use serde::Deserialize;

/// Starting values for a fresh stat block.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub max_health: f32,
    pub move_speed: f32,
    pub power: f32,
    pub defense: f32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            move_speed: 8.0,
            power: 10.0,
            defense: 0.0,
        }
    }
}

/// Fixed per-kind increments applied by [`StatBlock::apply_boost`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoostAmounts {
    pub speed: f32,
    pub power: f32,
    pub max_health: f32,
    pub defense: f32,
}

impl Default for BoostAmounts {
    fn default() -> Self {
        Self {
            speed: 2.0,
            power: 5.0,
            max_health: 20.0,
            defense: 5.0,
        }
    }
}

/// Stat tuning for the player, loaded from the config file.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub base: BaseStats,
    pub boosts: BoostAmounts,
    /// Health restored by a heal pickup
    pub heal_amount: f32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            base: BaseStats::default(),
            boosts: BoostAmounts::default(),
            heal_amount: 30.0,
        }
    }
}

impl StatsConfig {
    /// Build a fresh stat block from this tuning.
    pub fn stat_block(&self) -> StatBlock {
        StatBlock::new(self.base, self.boosts)
    }
}

/// Which stat a boost raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Speed,
    Power,
    MaxHealth,
    Defense,
}

/// Result of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    /// Health actually removed
    pub dealt: f32,
    /// Health left afterwards
    pub remaining: f32,
    /// True only on the hit that moved the actor into the defeated state
    pub died: bool,
}

/// Capability for anything that can receive damage.
///
/// Projectiles only ever talk to this trait.
pub trait Damageable {
    fn take_damage(&mut self, amount: f32) -> DamageOutcome;

    fn is_defeated(&self) -> bool;
}

/// Current stats of an actor.
///
/// Invariant: `0 <= current_health <= max_health` after every mutation.
/// Readers (movement, firing, HUD) query this component directly, so a
/// boost is visible to them on their very next read.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct StatBlock {
    base: BaseStats,
    boosts: BoostAmounts,
    current_health: f32,
    max_health: f32,
    move_speed: f32,
    power: f32,
    defense: f32,
    defeated: bool,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::new(BaseStats::default(), BoostAmounts::default())
    }
}

impl StatBlock {
    pub fn new(base: BaseStats, boosts: BoostAmounts) -> Self {
        let base = BaseStats {
            max_health: base.max_health.max(0.0),
            move_speed: base.move_speed.max(0.0),
            power: base.power.max(0.0),
            defense: base.defense.max(0.0),
        };
        Self {
            base,
            boosts,
            current_health: base.max_health,
            max_health: base.max_health,
            move_speed: base.move_speed,
            power: base.power,
            defense: base.defense,
            defeated: false,
        }
    }

    /// Raise one stat by its fixed increment and return the new value.
    ///
    /// Max health boosts also raise current health by the same amount.
    pub fn apply_boost(&mut self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Speed => {
                self.move_speed += self.boosts.speed;
                self.move_speed
            }
            StatKind::Power => {
                self.power += self.boosts.power;
                self.power
            }
            StatKind::MaxHealth => {
                self.max_health += self.boosts.max_health;
                self.current_health =
                    (self.current_health + self.boosts.max_health).clamp(0.0, self.max_health);
                self.max_health
            }
            StatKind::Defense => {
                self.defense += self.boosts.defense;
                self.defense
            }
        }
    }

    /// Restore up to `amount` health and return how much was healed.
    ///
    /// Defeated actors cannot be healed.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.defeated {
            return 0.0;
        }
        let healed = amount.max(0.0).min(self.max_health - self.current_health);
        self.current_health = (self.current_health + healed).clamp(0.0, self.max_health);
        healed
    }

    /// Debug setter, clamped into range.
    pub fn set_health(&mut self, health: f32) {
        self.current_health = health.clamp(0.0, self.max_health);
    }

    /// Restore base values and clear the defeated state.
    pub fn reset(&mut self) {
        *self = Self::new(self.base, self.boosts);
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn defense(&self) -> f32 {
        self.defense
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    /// Current health as a fraction of max health, 0 when max is 0.
    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.current_health / self.max_health
        } else {
            0.0
        }
    }

    /// Overall progression score used for balancing.
    ///
    /// Health, speed and power each contribute 25 at their base value; defense
    /// starts at 0 so it is measured against one defense boost of 5.
    pub fn total_score(&self) -> f32 {
        let ratio = |value: f32, base: f32| if base > 0.0 { value / base } else { 0.0 };
        ratio(self.current_health, self.base.max_health) * 25.0
            + ratio(self.move_speed, self.base.move_speed) * 25.0
            + ratio(self.power, self.base.power) * 25.0
            + (self.defense / 5.0) * 25.0
    }

    /// Multi-line readout for the HUD.
    pub fn summary(&self) -> String {
        format!(
            "HP: {:.0}/{:.0}\nSpeed: {:.1}\nPower: {:.0}\nDefense: {:.0}",
            self.current_health, self.max_health, self.move_speed, self.power, self.defense
        )
    }
}

impl Damageable for StatBlock {
    /// Defense is subtracted first, but every hit deals at least 1.
    fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.defeated {
            return DamageOutcome {
                dealt: 0.0,
                remaining: self.current_health,
                died: false,
            };
        }

        let actual = (amount - self.defense).max(1.0);
        let before = self.current_health;
        self.current_health = (self.current_health - actual).clamp(0.0, self.max_health);

        let died = self.current_health <= 0.0;
        if died {
            self.defeated = true;
        }

        DamageOutcome {
            dealt: before - self.current_health,
            remaining: self.current_health,
            died,
        }
    }

    fn is_defeated(&self) -> bool {
        self.defeated
    }
}
