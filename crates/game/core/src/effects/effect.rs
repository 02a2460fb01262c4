//! A single timed (or permanent) modifier attached to a character.

use std::fmt;

use crate::config::EngineConfig;
use crate::time::Timestamp;

use super::modifiers::{DamageOverTime, MaxStatModifiers, RegenModifiers, StatModifiers};

/// Classification of an effect.
///
/// Informational only: resolution treats every type identically.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectType {
    #[default]
    Buff,
    Debuff,
    Poison,
    Curse,
    Blessing,
    QiDeviation,
}

/// Unique per-instance identifier, assigned when an effect is inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectId(pub u64);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "effect#{}", self.0)
    }
}

/// Stacking and de-duplication key.
///
/// Kept apart from the display name so two differently-worded effects never
/// merge by accident. Matching is exact and case-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EffectKey(String);

impl EffectKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EffectKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EffectKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for EffectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EffectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An effect on a character's active list.
///
/// `id`, `start_time` and `stacks` are owned by the registry: whatever the
/// caller puts there is overwritten on insertion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub id: EffectId,
    pub key: EffectKey,
    pub name: String,
    pub kind: EffectType,
    pub description: String,
    /// Seconds; `-1` marks a permanent effect.
    pub duration: f64,
    pub start_time: Timestamp,
    pub is_permanent: bool,
    pub stat_modifiers: StatModifiers,
    pub regen_modifiers: RegenModifiers,
    pub damage_over_time: DamageOverTime,
    pub max_stat_modifiers: MaxStatModifiers,
    pub stackable: bool,
    pub stacks: u32,
}

impl ActiveEffect {
    /// Timed effect keyed by its exact name, with no modifiers.
    pub fn new(name: impl Into<String>, kind: EffectType, duration: f64) -> Self {
        let name = name.into();
        Self {
            id: EffectId::default(),
            key: EffectKey::new(name.clone()),
            name,
            kind,
            description: String::new(),
            duration,
            start_time: Timestamp::ZERO,
            is_permanent: false,
            stat_modifiers: StatModifiers::ZERO,
            regen_modifiers: RegenModifiers::default(),
            damage_over_time: DamageOverTime::default(),
            max_stat_modifiers: MaxStatModifiers::default(),
            stackable: false,
            stacks: 1,
        }
    }

    /// Effect that never expires.
    pub fn permanent(name: impl Into<String>, kind: EffectType) -> Self {
        let mut effect = Self::new(name, kind, EngineConfig::PERMANENT_DURATION);
        effect.is_permanent = true;
        effect
    }

    /// Overrides the stacking key (defaults to the exact name).
    pub fn with_key(mut self, key: impl Into<EffectKey>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stat_modifiers(mut self, modifiers: StatModifiers) -> Self {
        self.stat_modifiers = modifiers;
        self
    }

    pub fn with_regen(mut self, modifiers: RegenModifiers) -> Self {
        self.regen_modifiers = modifiers;
        self
    }

    pub fn with_damage_over_time(mut self, damage: DamageOverTime) -> Self {
        self.damage_over_time = damage;
        self
    }

    pub fn with_max_stat_modifiers(mut self, modifiers: MaxStatModifiers) -> Self {
        self.max_stat_modifiers = modifiers;
        self
    }

    pub fn stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Permanent when either the flag is set or the duration is the `-1` sentinel.
    pub fn is_permanent(&self) -> bool {
        self.is_permanent || self.duration == EngineConfig::PERMANENT_DURATION
    }

    /// Seconds since the effect was applied or last refreshed.
    pub fn elapsed_secs(&self, now: Timestamp) -> f64 {
        now.elapsed_secs_since(self.start_time)
    }

    /// Remaining seconds, or the `-1` sentinel for permanent effects.
    pub fn remaining_secs(&self, now: Timestamp) -> f64 {
        if self.is_permanent() {
            return EngineConfig::PERMANENT_REMAINING;
        }
        (self.duration - self.elapsed_secs(now)).max(0.0)
    }

    /// True once a timed effect has run for at least its duration.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        !self.is_permanent() && self.elapsed_secs(now) >= self.duration
    }

    /// Stack count used for aggregation; never below one.
    pub fn stack_multiplier(&self) -> u32 {
        self.stacks.max(1)
    }

    pub fn scaled_stat_modifiers(&self) -> StatModifiers {
        self.stat_modifiers.scaled(self.stack_multiplier())
    }

    pub fn scaled_regen(&self) -> RegenModifiers {
        self.regen_modifiers.scaled(self.stack_multiplier())
    }

    pub fn scaled_damage(&self) -> DamageOverTime {
        self.damage_over_time.scaled(self.stack_multiplier())
    }

    pub fn scaled_max_stat_modifiers(&self) -> MaxStatModifiers {
        self.max_stat_modifiers.scaled(self.stack_multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanence_checks_flag_and_sentinel() {
        let by_flag = ActiveEffect {
            is_permanent: true,
            ..ActiveEffect::new("Dao Heart", EffectType::Blessing, 30.0)
        };
        let by_sentinel = ActiveEffect::new("Heavenly Scar", EffectType::Curse, -1.0);
        assert!(by_flag.is_permanent());
        assert!(by_sentinel.is_permanent());
        assert_eq!(by_flag.remaining_secs(Timestamp::from_millis(u64::MAX)), -1.0);
        assert!(!by_sentinel.is_expired(Timestamp::from_millis(u64::MAX)));
    }

    #[test]
    fn key_defaults_to_exact_name() {
        let effect = ActiveEffect::new("Iron Skin", EffectType::Buff, 60.0);
        assert_eq!(effect.key.as_str(), "Iron Skin");
        let keyed = effect.with_key("iron_skin");
        assert_eq!(keyed.key, EffectKey::from("iron_skin"));
        assert_eq!(keyed.name, "Iron Skin");
    }

    #[test]
    fn effect_type_parses_snake_case() {
        assert_eq!("qi_deviation".parse::<EffectType>(), Ok(EffectType::QiDeviation));
        assert_eq!(EffectType::QiDeviation.to_string(), "qi_deviation");
        assert!("hex".parse::<EffectType>().is_err());
    }
}
