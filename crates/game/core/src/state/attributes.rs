//! Base attributes - the permanently stored character stats.
//!
//! Effective values (base + active effect modifiers) are computed on demand by
//! [`crate::registry::effective_stats`] and never stored.

use crate::config::EngineConfig;
use crate::effects::StatModifiers;

/// The six base attributes of a cultivator.
///
/// All are floor-clamped at 1 except `cultivation`, which is unclamped and
/// accumulates over the character's life.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attributes {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub luck: i32,
    pub cultivation: i32,
}

impl Attributes {
    pub fn new(
        strength: i32,
        agility: i32,
        intelligence: i32,
        charisma: i32,
        luck: i32,
        cultivation: i32,
    ) -> Self {
        Self {
            strength,
            agility,
            intelligence,
            charisma,
            luck,
            cultivation,
        }
        .clamped()
    }

    /// Applies the attribute floor to every clamped stat.
    pub fn clamped(self) -> Self {
        const MIN: i32 = EngineConfig::MIN_ATTRIBUTE;
        Self {
            strength: self.strength.max(MIN),
            agility: self.agility.max(MIN),
            intelligence: self.intelligence.max(MIN),
            charisma: self.charisma.max(MIN),
            luck: self.luck.max(MIN),
            cultivation: self.cultivation,
        }
    }

    /// Adds flat deltas without clamping.
    ///
    /// Used for effective stats, which report the raw sum.
    pub fn plus(&self, delta: &StatModifiers) -> Self {
        Self {
            strength: self.strength.saturating_add(delta.strength),
            agility: self.agility.saturating_add(delta.agility),
            intelligence: self.intelligence.saturating_add(delta.intelligence),
            charisma: self.charisma.saturating_add(delta.charisma),
            luck: self.luck.saturating_add(delta.luck),
            cultivation: self.cultivation.saturating_add(delta.cultivation),
        }
    }
}

impl Default for Attributes {
    /// Unremarkable mortal: every stat at 10, no cultivation.
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 0)
    }
}
