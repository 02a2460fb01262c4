/// Engine tunables for the regeneration and cultivation math.
///
/// The realm table is fixed (see [`crate::state::Realm`]); everything here
/// scales the per-character terms layered on top of it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Stamina regenerated per second for each point of strength.
    pub stamina_regen_per_strength: f64,
    /// Maximum stamina before strength is added.
    pub base_max_stamina: f64,
    /// Maximum stamina gained per point of strength.
    pub max_stamina_per_strength: f64,
    /// Cultivation progress at which a breakthrough becomes available.
    pub progress_cap: f64,
}

impl EngineConfig {
    // ===== compile-time constants =====
    /// Lowest value any clamped base attribute can reach.
    pub const MIN_ATTRIBUTE: i32 = 1;
    /// Sentinel duration marking an effect as permanent.
    pub const PERMANENT_DURATION: f64 = -1.0;
    /// Remaining-time sentinel reported for permanent effects.
    pub const PERMANENT_REMAINING: f64 = -1.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAMINA_REGEN_PER_STRENGTH: f64 = 0.1;
    pub const DEFAULT_BASE_MAX_STAMINA: f64 = 100.0;
    pub const DEFAULT_MAX_STAMINA_PER_STRENGTH: f64 = 5.0;
    pub const DEFAULT_PROGRESS_CAP: f64 = 100.0;

    pub fn new() -> Self {
        Self {
            stamina_regen_per_strength: Self::DEFAULT_STAMINA_REGEN_PER_STRENGTH,
            base_max_stamina: Self::DEFAULT_BASE_MAX_STAMINA,
            max_stamina_per_strength: Self::DEFAULT_MAX_STAMINA_PER_STRENGTH,
            progress_cap: Self::DEFAULT_PROGRESS_CAP,
        }
    }

    /// Maximum stamina for a given strength: `base + per_strength × strength`.
    pub fn max_stamina_for(&self, strength: i32) -> f64 {
        (self.base_max_stamina + self.max_stamina_per_strength * f64::from(strength)).max(0.0)
    }

    /// Stamina regeneration bonus contributed by strength.
    pub fn stamina_regen_bonus(&self, strength: i32) -> f64 {
        self.stamina_regen_per_strength * f64::from(strength)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounds to one decimal place, matching the precision shown to players.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_stamina_follows_strength() {
        let config = EngineConfig::default();
        assert_eq!(config.max_stamina_for(10), 150.0);
        assert_eq!(config.max_stamina_for(1), 105.0);
    }

    #[test]
    fn rounding_keeps_one_decimal() {
        assert_eq!(round_tenths(97.149_999), 97.1);
        assert_eq!(round_tenths(94.999_999_9), 95.0);
        assert_eq!(round_tenths(-0.04), -0.0);
    }
}
