//! Effect catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use cultivation_core::{ActiveEffect, EffectInstruction};
use tracing::info;

use crate::definition::EffectSpec;
use crate::loaders::{LoadResult, read_file};

/// Validated effect definitions addressed by catalog id.
///
/// The catalog id names an entry in the data file; it is independent of the
/// effect's stacking key, so several entries may share a key (weak and
/// strong variants of the same poison, for instance).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectCatalog {
    effects: BTreeMap<String, ActiveEffect>,
}

impl EffectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `spec` and stores it under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<String>, spec: &EffectSpec) -> LoadResult<()> {
        let id = id.into();
        let effect = spec
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid effect '{}': {}", id, e))?;
        self.effects.insert(id, effect);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ActiveEffect> {
        self.effects.get(id)
    }

    /// An add-instruction for the catalog entry, ready for `apply_instructions`.
    pub fn instruction(&self, id: &str) -> Option<EffectInstruction> {
        self.get(id).cloned().map(EffectInstruction::Add)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.effects.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActiveEffect)> {
        self.effects.iter().map(|(id, effect)| (id.as_str(), effect))
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Loader for effect catalogs from RON files.
pub struct EffectCatalogLoader;

impl EffectCatalogLoader {
    /// Load and validate an effect catalog.
    ///
    /// RON format: `{ "catalog_id": EffectSpec, ... }`. Files may enable
    /// `implicit_some` so optional modifier blocks are written bare.
    ///
    /// A single invalid entry fails the whole load.
    pub fn load(path: &Path) -> LoadResult<EffectCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))?;

        info!(path = %path.display(), count = catalog.len(), "loaded effect catalog");
        Ok(catalog)
    }

    /// Parse and validate catalog RON.
    pub fn parse(content: &str) -> LoadResult<EffectCatalog> {
        let raw: BTreeMap<String, EffectSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effect catalog RON: {}", e))?;

        let mut catalog = EffectCatalog::new();
        for (id, spec) in &raw {
            catalog.insert(id.as_str(), spec)?;
        }
        Ok(catalog)
    }
}
