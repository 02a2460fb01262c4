//! Content loaders for reading engine data from files.
//!
//! RON for catalogs, character sheets and scenarios; TOML for engine tunables.
//! Every loader validates what it reads before handing it to the engine.

pub mod character;
pub mod config;
pub mod effects;
pub mod factory;
pub mod scenario;

pub use character::{CharacterLoader, CharacterSheet};
pub use config::ConfigLoader;
pub use effects::{EffectCatalog, EffectCatalogLoader};
pub use factory::ContentFactory;
pub use scenario::{Scenario, ScenarioLoader, ScriptedAction, ScriptedEvent};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
