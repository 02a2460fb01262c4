//! Engine configuration loader.

use std::path::Path;

use cultivation_core::EngineConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load an [`EngineConfig`] from a TOML file.
    ///
    /// Missing keys fall back to the engine defaults, so an empty file is a
    /// valid config. Non-positive caps and negative per-strength scalings
    /// are rejected.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Parse and check a TOML document.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(config.progress_cap.is_finite() && config.progress_cap > 0.0) {
            anyhow::bail!("progress_cap must be positive, got {}", config.progress_cap);
        }
        for (field, value) in [
            ("stamina_regen_per_strength", config.stamina_regen_per_strength),
            ("base_max_stamina", config.base_max_stamina),
            ("max_stamina_per_strength", config.max_stamina_per_strength),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                anyhow::bail!("{} must be a non-negative number, got {}", field, value);
            }
        }

        Ok(config)
    }
}
