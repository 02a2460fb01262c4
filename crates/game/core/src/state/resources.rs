//! Resource pools (health, qi, stamina).
//!
//! Current values are game state and are always kept inside `[0, max]`.
//! `max_health`/`max_qi` come from the realm table, `max_stamina` from strength.

use crate::config::round_tenths;

/// Enum naming the three resource pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResourceKind {
    Health,
    Qi,
    Stamina,
}

/// Current and maximum values for every pool.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    pub health: f64,
    pub max_health: f64,
    pub qi: f64,
    pub max_qi: f64,
    pub stamina: f64,
    pub max_stamina: f64,
}

impl ResourcePool {
    /// Pools filled to the given maxima.
    pub fn full(max_health: f64, max_qi: f64, max_stamina: f64) -> Self {
        Self {
            health: max_health,
            max_health,
            qi: max_qi,
            max_qi,
            stamina: max_stamina,
            max_stamina,
        }
    }

    pub fn current(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Health => self.health,
            ResourceKind::Qi => self.qi,
            ResourceKind::Stamina => self.stamina,
        }
    }

    pub fn max(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Health => self.max_health,
            ResourceKind::Qi => self.max_qi,
            ResourceKind::Stamina => self.max_stamina,
        }
    }

    /// Clamps every current value into `[0, max]`.
    pub fn clamp_all(&mut self) {
        self.health = clamp_pool(self.health, self.max_health);
        self.qi = clamp_pool(self.qi, self.max_qi);
        self.stamina = clamp_pool(self.stamina, self.max_stamina);
    }

    /// Adds signed deltas, rounds to tenths and clamps.
    pub fn shift(&mut self, health: f64, qi: f64, stamina: f64) {
        self.health = settle(self.health + health, self.max_health);
        self.qi = settle(self.qi + qi, self.max_qi);
        self.stamina = settle(self.stamina + stamina, self.max_stamina);
    }

    /// Fraction of a pool remaining in `[0, 1]`; zero-max pools report 0.
    pub fn ratio(&self, kind: ResourceKind) -> f64 {
        let max = self.max(kind);
        if max <= 0.0 {
            0.0
        } else {
            (self.current(kind) / max).clamp(0.0, 1.0)
        }
    }
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self::full(100.0, 50.0, 150.0)
    }
}

/// Clamp to `[0, max]`; NaN collapses to 0.
pub(crate) fn clamp_pool(value: f64, max: f64) -> f64 {
    let max = max.max(0.0);
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// Clamp, round to tenths, then clamp again so rounding can never cross a bound.
pub(crate) fn settle(value: f64, max: f64) -> f64 {
    clamp_pool(round_tenths(clamp_pool(value, max)), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_clamps_both_ends() {
        let mut pool = ResourcePool::full(100.0, 50.0, 150.0);
        pool.shift(-250.0, 10.0, -0.04);
        assert_eq!(pool.health, 0.0);
        assert_eq!(pool.qi, 50.0);
        assert_eq!(pool.stamina, 150.0);
    }

    #[test]
    fn clamp_all_pulls_values_inside_maxima() {
        let mut pool = ResourcePool {
            health: 120.0,
            max_health: 100.0,
            qi: -5.0,
            max_qi: 50.0,
            stamina: f64::NAN,
            max_stamina: 150.0,
        };
        pool.clamp_all();
        assert_eq!(pool.health, 100.0);
        assert_eq!(pool.qi, 0.0);
        assert_eq!(pool.stamina, 0.0);
        assert_eq!(pool.ratio(ResourceKind::Health), 1.0);
    }
}
