//! Modifier blocks carried by an active effect.
//!
//! Every block is fully populated with zero defaults; an effect that does
//! not touch a stat simply carries a zero. Stacks scale a block linearly via
//! `scaled`, and blocks from different effects are summed with `+=`.

use std::ops::{Add, AddAssign};

/// Flat deltas to the six base attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatModifiers {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub luck: i32,
    pub cultivation: i32,
}

impl StatModifiers {
    pub const ZERO: Self = Self {
        strength: 0,
        agility: 0,
        intelligence: 0,
        charisma: 0,
        luck: 0,
        cultivation: 0,
    };

    pub fn scaled(&self, stacks: u32) -> Self {
        let k = i32::try_from(stacks).unwrap_or(i32::MAX);
        Self {
            strength: self.strength.saturating_mul(k),
            agility: self.agility.saturating_mul(k),
            intelligence: self.intelligence.saturating_mul(k),
            charisma: self.charisma.saturating_mul(k),
            luck: self.luck.saturating_mul(k),
            cultivation: self.cultivation.saturating_mul(k),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for StatModifiers {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for StatModifiers {
    fn add_assign(&mut self, rhs: Self) {
        self.strength = self.strength.saturating_add(rhs.strength);
        self.agility = self.agility.saturating_add(rhs.agility);
        self.intelligence = self.intelligence.saturating_add(rhs.intelligence);
        self.charisma = self.charisma.saturating_add(rhs.charisma);
        self.luck = self.luck.saturating_add(rhs.luck);
        self.cultivation = self.cultivation.saturating_add(rhs.cultivation);
    }
}

/// Per-second additive regeneration bonuses (may be negative).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegenModifiers {
    pub health_regen: f64,
    pub qi_regen: f64,
    pub stamina_regen: f64,
}

impl RegenModifiers {
    pub fn scaled(&self, stacks: u32) -> Self {
        let k = f64::from(stacks);
        Self {
            health_regen: self.health_regen * k,
            qi_regen: self.qi_regen * k,
            stamina_regen: self.stamina_regen * k,
        }
    }
}

impl AddAssign for RegenModifiers {
    fn add_assign(&mut self, rhs: Self) {
        self.health_regen += rhs.health_regen;
        self.qi_regen += rhs.qi_regen;
        self.stamina_regen += rhs.stamina_regen;
    }
}

/// Per-second resource drains.
///
/// Applied every regeneration tick regardless of any regen bonus the same
/// effect carries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageOverTime {
    pub health_damage: f64,
    pub qi_drain: f64,
    pub stamina_drain: f64,
}

impl DamageOverTime {
    pub fn scaled(&self, stacks: u32) -> Self {
        let k = f64::from(stacks);
        Self {
            health_damage: self.health_damage * k,
            qi_drain: self.qi_drain * k,
            stamina_drain: self.stamina_drain * k,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.health_damage == 0.0 && self.qi_drain == 0.0 && self.stamina_drain == 0.0
    }
}

impl AddAssign for DamageOverTime {
    fn add_assign(&mut self, rhs: Self) {
        self.health_damage += rhs.health_damage;
        self.qi_drain += rhs.qi_drain;
        self.stamina_drain += rhs.stamina_drain;
    }
}

/// Deltas to the resource maxima.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaxStatModifiers {
    pub max_health: f64,
    pub max_qi: f64,
    pub max_stamina: f64,
}

impl MaxStatModifiers {
    pub fn scaled(&self, stacks: u32) -> Self {
        let k = f64::from(stacks);
        Self {
            max_health: self.max_health * k,
            max_qi: self.max_qi * k,
            max_stamina: self.max_stamina * k,
        }
    }
}

impl AddAssign for MaxStatModifiers {
    fn add_assign(&mut self, rhs: Self) {
        self.max_health += rhs.max_health;
        self.max_qi += rhs.max_qi;
        self.max_stamina += rhs.max_stamina;
    }
}
