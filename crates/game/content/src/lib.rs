//! Data-driven content definitions and loaders.
//!
//! This crate is the boundary between untrusted data files and the engine:
//! - Effect definitions (raw [`EffectSpec`], validated into `ActiveEffect`)
//! - Effect catalogs (data-driven via RON)
//! - Character sheets (data-driven via RON)
//! - Scripted scenarios for the simulator (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Nothing past this crate sees an unvalidated effect: optional modifier
//! blocks, free-form type strings and out-of-range numbers stop here.

pub mod definition;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use definition::{EffectSpec, EffectSpecError};

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, CharacterSheet, ConfigLoader, ContentFactory, EffectCatalog,
    EffectCatalogLoader, LoadResult, Scenario, ScenarioLoader, ScriptedAction, ScriptedEvent,
};
