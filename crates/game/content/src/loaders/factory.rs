//! Content factory for loading everything a simulation needs from one directory.

use std::path::{Path, PathBuf};

use cultivation_core::{Character, EngineConfig};

use crate::loaders::{
    CharacterLoader, ConfigLoader, EffectCatalog, EffectCatalogLoader, LoadResult, Scenario,
    ScenarioLoader,
};

/// Content factory that loads engine content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── effects.ron
/// ├── characters/
/// │   └── lin_feng.ron
/// └── scenarios/
///     └── viper_ambush.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine tunables from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the effect catalog from `effects.ron`.
    pub fn load_effects(&self) -> LoadResult<EffectCatalog> {
        let path = self.data_dir.join("effects.ron");
        EffectCatalogLoader::load(&path)
    }

    /// Load `characters/{name}.ron` and build the character.
    pub fn load_character(&self, name: &str, config: &EngineConfig) -> LoadResult<Character> {
        let path = self.data_dir.join("characters").join(format!("{}.ron", name));
        CharacterLoader::load(&path, config)
    }

    /// Load `scenarios/{name}.ron` and check it against `catalog`.
    pub fn load_scenario(&self, name: &str, catalog: &EffectCatalog) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        let scenario = ScenarioLoader::load(&path)?;
        scenario.check_against(catalog)?;
        Ok(scenario)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
