//! Wall-clock timestamps supplied by callers.
//!
//! The engine never reads a clock. Every time-dependent operation takes an
//! explicit `now: Timestamp`, so expiry and regeneration are reproducible
//! with synthetic time.

use std::fmt;

/// Milliseconds since an arbitrary epoch (usually the Unix epoch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_secs(secs: f64) -> Self {
        Self::ZERO.add_secs(secs)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Seconds elapsed since `earlier`.
    ///
    /// Saturates at zero when `earlier` lies in the future.
    pub fn elapsed_secs_since(self, earlier: Timestamp) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / 1000.0
    }

    /// Advances the timestamp by a (possibly fractional) number of seconds.
    ///
    /// Negative and non-finite inputs leave the timestamp unchanged.
    pub fn add_secs(self, secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return self;
        }
        Self(self.0.saturating_add((secs * 1000.0).round() as u64))
    }

    /// Moves the timestamp back by `secs`, saturating at the epoch.
    ///
    /// Negative and non-finite inputs leave the timestamp unchanged.
    pub fn sub_secs(self, secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return self;
        }
        Self(self.0.saturating_sub((secs * 1000.0).round() as u64))
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_saturates_for_future_start() {
        let now = Timestamp::from_millis(1_000);
        let later = Timestamp::from_millis(5_000);
        assert_eq!(now.elapsed_secs_since(later), 0.0);
        assert_eq!(later.elapsed_secs_since(now), 4.0);
    }

    #[test]
    fn add_secs_ignores_negative_and_nan() {
        let t = Timestamp::from_millis(500);
        assert_eq!(t.add_secs(-3.0), t);
        assert_eq!(t.add_secs(f64::NAN), t);
        assert_eq!(t.add_secs(1.5), Timestamp::from_millis(2_000));
    }

    #[test]
    fn sub_secs_saturates_at_epoch() {
        let t = Timestamp::from_millis(1_500);
        assert_eq!(t.sub_secs(1.0), Timestamp::from_millis(500));
        assert_eq!(t.sub_secs(10.0), Timestamp::ZERO);
        assert_eq!(t.sub_secs(f64::NAN), t);
    }
}
