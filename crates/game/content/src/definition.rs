//! Raw effect definitions and their validation.
//!
//! [`EffectSpec`] mirrors what a content author writes: modifier blocks may
//! be omitted and the effect type is a free-form string. [`EffectSpec::validate`]
//! is the only way to turn one into an engine [`ActiveEffect`].

use std::str::FromStr;

use cultivation_core::{
    ActiveEffect, DamageOverTime, EffectType, EngineConfig, EngineError, ErrorSeverity,
    MaxStatModifiers, RegenModifiers, StatModifiers,
};

/// Untrusted effect definition as loaded from a data file.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectSpec {
    pub name: String,
    /// Stacking key; the exact name is used when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub key: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Seconds; `-1` for permanent.
    pub duration: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_permanent: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stackable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_modifiers: Option<StatModifiers>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub regen_modifiers: Option<RegenModifiers>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_over_time: Option<DamageOverTime>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_stat_modifiers: Option<MaxStatModifiers>,
}

/// Reasons an effect definition is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EffectSpecError {
    #[error("effect name must not be empty")]
    EmptyName,

    #[error("effect '{name}' has an empty stacking key")]
    EmptyKey { name: String },

    #[error("effect '{name}' has unknown type '{value}'")]
    UnknownType { name: String, value: String },

    #[error("effect '{name}' has negative duration {duration} (use -1 for permanent)")]
    NegativeDuration { name: String, duration: f64 },

    #[error("effect '{name}' has non-finite {field}")]
    NonFinite { name: String, field: &'static str },

    #[error("effect '{name}' has negative {field} ({value}); use regen modifiers for healing")]
    NegativeDamage {
        name: String,
        field: &'static str,
        value: f64,
    },
}

impl EngineError for EffectSpecError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EFFECT_EMPTY_NAME",
            Self::EmptyKey { .. } => "EFFECT_EMPTY_KEY",
            Self::UnknownType { .. } => "EFFECT_UNKNOWN_TYPE",
            Self::NegativeDuration { .. } => "EFFECT_NEGATIVE_DURATION",
            Self::NonFinite { .. } => "EFFECT_NON_FINITE",
            Self::NegativeDamage { .. } => "EFFECT_NEGATIVE_DAMAGE",
        }
    }
}

impl EffectSpec {
    /// Checks the definition and builds a fully populated effect.
    ///
    /// Omitted modifier blocks become zero blocks. `is_permanent` and a
    /// duration of `-1` are equivalent; either yields a permanent effect.
    pub fn validate(&self) -> Result<ActiveEffect, EffectSpecError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EffectSpecError::EmptyName);
        }
        let owned_name = || name.to_string();

        if self.key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            return Err(EffectSpecError::EmptyKey { name: owned_name() });
        }

        let kind = EffectType::from_str(self.kind.trim()).map_err(|_| {
            EffectSpecError::UnknownType {
                name: owned_name(),
                value: self.kind.clone(),
            }
        })?;

        let permanent = self.is_permanent || self.duration == EngineConfig::PERMANENT_DURATION;
        if !permanent {
            if !self.duration.is_finite() {
                return Err(EffectSpecError::NonFinite {
                    name: owned_name(),
                    field: "duration",
                });
            }
            if self.duration < 0.0 {
                return Err(EffectSpecError::NegativeDuration {
                    name: owned_name(),
                    duration: self.duration,
                });
            }
        }

        let regen = self.regen_modifiers.unwrap_or_default();
        let damage = self.damage_over_time.unwrap_or_default();
        let max_stats = self.max_stat_modifiers.unwrap_or_default();

        let floats = [
            ("health_regen", regen.health_regen),
            ("qi_regen", regen.qi_regen),
            ("stamina_regen", regen.stamina_regen),
            ("health_damage", damage.health_damage),
            ("qi_drain", damage.qi_drain),
            ("stamina_drain", damage.stamina_drain),
            ("max_health", max_stats.max_health),
            ("max_qi", max_stats.max_qi),
            ("max_stamina", max_stats.max_stamina),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EffectSpecError::NonFinite {
                name: owned_name(),
                field,
            });
        }

        let damage_fields = [
            ("health_damage", damage.health_damage),
            ("qi_drain", damage.qi_drain),
            ("stamina_drain", damage.stamina_drain),
        ];
        if let Some(&(field, value)) = damage_fields.iter().find(|(_, v)| *v < 0.0) {
            return Err(EffectSpecError::NegativeDamage {
                name: owned_name(),
                field,
                value,
            });
        }

        let mut effect = if permanent {
            ActiveEffect::permanent(name, kind)
        } else {
            ActiveEffect::new(name, kind, self.duration)
        };
        if let Some(key) = &self.key {
            effect = effect.with_key(key.trim());
        }

        Ok(effect
            .with_description(self.description.clone())
            .with_stat_modifiers(self.stat_modifiers.unwrap_or_default())
            .with_regen(regen)
            .with_damage_over_time(damage)
            .with_max_stat_modifiers(max_stats)
            .stackable(self.stackable))
    }
}
