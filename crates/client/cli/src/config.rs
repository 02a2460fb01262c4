//! Simulator configuration: defaults, environment, then command-line flags.
use std::env;
use std::path::PathBuf;

/// Tick-loop settings for a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Seconds of game time advanced per tick.
    pub tick_seconds: f64,
    /// Number of ticks to run.
    pub ticks: u64,
    /// Directory holding `config.toml`, `effects.ron`, `characters/`, `scenarios/`.
    pub data_dir: PathBuf,
}

impl SimConfig {
    pub const DEFAULT_TICK_SECONDS: f64 = 1.0;
    pub const DEFAULT_TICKS: u64 = 30;
    pub const DEFAULT_DATA_DIR: &'static str = "crates/game/content/data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_TICK_SECONDS` - Seconds per tick, must be positive (default: 1.0)
    /// - `SIM_TICKS` - Number of ticks (default: 30)
    /// - `SIM_DATA_DIR` - Content data directory (default: crates/game/content/data)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seconds) = read_env::<f64>("SIM_TICK_SECONDS") {
            config = config.with_tick_seconds(seconds);
        }
        if let Some(ticks) = read_env::<u64>("SIM_TICKS") {
            config.ticks = ticks;
        }
        if let Ok(dir) = env::var("SIM_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config
    }

    /// Applies command-line overrides on top of the current values.
    pub fn with_overrides(
        mut self,
        tick_seconds: Option<f64>,
        ticks: Option<u64>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(seconds) = tick_seconds {
            self = self.with_tick_seconds(seconds);
        }
        if let Some(ticks) = ticks {
            self.ticks = ticks;
        }
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// Sets the tick length; non-positive or non-finite values are ignored.
    pub fn with_tick_seconds(mut self, seconds: f64) -> Self {
        if seconds.is_finite() && seconds > 0.0 {
            self.tick_seconds = seconds;
        } else {
            tracing::warn!(seconds, "ignoring invalid tick length");
        }
        self
    }

    /// Total simulated seconds.
    pub fn duration_secs(&self) -> f64 {
        self.tick_seconds * self.ticks as f64
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_seconds: Self::DEFAULT_TICK_SECONDS,
            ticks: Self::DEFAULT_TICKS,
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = SimConfig::default().with_overrides(Some(0.5), Some(8), None);
        assert_eq!(config.tick_seconds, 0.5);
        assert_eq!(config.ticks, 8);
        assert_eq!(config.data_dir, PathBuf::from(SimConfig::DEFAULT_DATA_DIR));
        assert_eq!(config.duration_secs(), 4.0);
    }

    #[test]
    fn invalid_tick_length_is_ignored() {
        let config = SimConfig::default()
            .with_tick_seconds(0.0)
            .with_tick_seconds(f64::NAN)
            .with_tick_seconds(-2.0);
        assert_eq!(config.tick_seconds, SimConfig::DEFAULT_TICK_SECONDS);
    }
}
