//! Scripted scenario loader.
//!
//! A scenario is a timeline of narrative events the simulator replays while
//! ticking a character forward: effects applied and cleansed, wounds,
//! training, breakthroughs.

use std::path::Path;

use cultivation_core::{ResourceDelta, StatModifiers};
use tracing::debug;

use crate::loaders::{EffectCatalog, LoadResult, read_file};

/// One narrative event on the scenario timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptedAction {
    /// Apply the catalog entry with this id.
    Apply(String),
    /// Remove the effect with this stacking key.
    Remove(String),
    /// Instant damage or healing.
    Resources(ResourceDelta),
    /// Permanent base attribute change.
    Attributes(StatModifiers),
    Karma(i64),
    Progress(f64),
    Breakthrough,
}

/// An action scheduled at `at` seconds after the scenario starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptedEvent {
    pub at: f64,
    pub action: ScriptedAction,
}

/// A timeline of events, sorted by time.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

impl Scenario {
    /// Checks timestamps and sorts events by time, keeping authored order
    /// for events at the same instant.
    pub fn normalized(mut self) -> LoadResult<Self> {
        for (index, event) in self.events.iter().enumerate() {
            if !(event.at.is_finite() && event.at >= 0.0) {
                anyhow::bail!("Event #{} has invalid time {}", index, event.at);
            }
        }
        self.events.sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(self)
    }

    /// Fails if any `Apply` names an id missing from `catalog`.
    pub fn check_against(&self, catalog: &EffectCatalog) -> LoadResult<()> {
        for event in &self.events {
            if let ScriptedAction::Apply(id) = &event.action {
                if catalog.get(id).is_none() {
                    anyhow::bail!("Scenario applies unknown effect '{}' at {}s", id, event.at);
                }
            }
        }
        Ok(())
    }

    /// Events with `from < at <= to`.
    pub fn between(&self, from: f64, to: f64) -> impl Iterator<Item = &ScriptedEvent> {
        self.events
            .iter()
            .filter(move |event| event.at > from && event.at <= to)
    }

    /// Events at the very start (`at == 0`).
    pub fn at_start(&self) -> impl Iterator<Item = &ScriptedEvent> {
        self.events.iter().filter(|event| event.at == 0.0)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario.
    ///
    /// RON format: `(events: [(at: 0.0, action: apply("viper_venom")), ...])`
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario: Scenario = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON at {:?}: {}", path, e))?;
        let scenario = scenario.normalized()?;
        debug!(path = %path.display(), events = scenario.events.len(), "loaded scenario");
        Ok(scenario)
    }
}
