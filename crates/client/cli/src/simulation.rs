//! Fixed-step tick loop that replays a scenario against a character.
//!
//! Game time starts at zero. Each tick reconciles regeneration up to the next
//! scripted event (or the tick boundary) with [`Resolver::catch_up`], so
//! effects expire at their exact instant even when ticks are coarse.

use anyhow::Result;
use cultivation_content::{EffectCatalog, Scenario, ScriptedAction, ScriptedEvent};
use cultivation_core::{
    Character, EffectBadge, EffectInstruction, EffectKey, EngineError, Realm, RegenRates, Resolver,
    Timestamp, add_cultivation_progress, adjust_karma, apply_attribute_changes, apply_instructions,
    apply_resource_changes, attempt_breakthrough, effect_badges,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::SimConfig;

/// Snapshot taken at the end of a tick.
#[derive(Clone, Debug, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub time: f64,
    pub realm: Realm,
    pub health: f64,
    pub max_health: f64,
    pub qi: f64,
    pub max_qi: f64,
    pub stamina: f64,
    pub max_stamina: f64,
    pub rates: RegenRates,
    pub effects: Vec<EffectBadge>,
}

/// Full run output.
#[derive(Clone, Debug, Serialize)]
pub struct SimReport {
    pub tick_seconds: f64,
    pub ticks: Vec<TickReport>,
    pub final_state: Character,
}

pub struct Simulation<'a> {
    resolver: Resolver,
    catalog: &'a EffectCatalog,
    scenario: &'a Scenario,
}

impl<'a> Simulation<'a> {
    pub fn new(resolver: Resolver, catalog: &'a EffectCatalog, scenario: &'a Scenario) -> Self {
        Self {
            resolver,
            catalog,
            scenario,
        }
    }

    /// Runs `config.ticks` ticks of `config.tick_seconds` each.
    ///
    /// Stops early, after reporting, once the character's health hits zero.
    pub fn run(&self, mut character: Character, config: &SimConfig) -> Result<SimReport> {
        character.last_regeneration = Some(Timestamp::ZERO);
        for event in self.scenario.at_start() {
            character = self.apply_event(character, event, Timestamp::ZERO)?;
        }

        let step = config.tick_seconds;
        let mut ticks = Vec::new();
        for tick in 1..=config.ticks {
            let from = step * (tick - 1) as f64;
            let mut to = step * tick as f64;

            for event in self.scenario.between(from, to) {
                let at = Timestamp::from_secs(event.at);
                character = self.resolver.catch_up(character, at, step);
                character = self.apply_event(character, event, at)?;
                if !character.is_alive() {
                    to = event.at;
                    break;
                }
            }

            let now = Timestamp::from_secs(to);
            if character.is_alive() {
                character = self.resolver.catch_up(character, now, step);
            }

            let report = self.snapshot(&character, tick, to, now);
            info!(
                tick,
                time = to,
                health = report.health,
                qi = report.qi,
                stamina = report.stamina,
                rates = %report.rates,
                effects = report.effects.len(),
                "tick"
            );
            ticks.push(report);

            if !character.is_alive() {
                warn!(character = %character.name, tick, time = to, "character died; stopping");
                break;
            }
        }

        Ok(SimReport {
            tick_seconds: step,
            ticks,
            final_state: character,
        })
    }

    fn apply_event(
        &self,
        character: Character,
        event: &ScriptedEvent,
        now: Timestamp,
    ) -> Result<Character> {
        info!(at = event.at, action = ?event.action, "scripted event");
        let config = self.resolver.config();

        let character = match &event.action {
            ScriptedAction::Apply(id) => {
                let Some(instruction) = self.catalog.instruction(id) else {
                    anyhow::bail!("Unknown effect '{}' at {}s", id, event.at);
                };
                apply_instructions(character, [instruction], now)
            }
            ScriptedAction::Remove(key) => apply_instructions(
                character,
                [EffectInstruction::Remove(EffectKey::from(key.as_str()))],
                now,
            ),
            ScriptedAction::Resources(delta) => apply_resource_changes(character, *delta),
            ScriptedAction::Attributes(delta) => apply_attribute_changes(character, *delta, config),
            ScriptedAction::Karma(delta) => adjust_karma(character, *delta),
            ScriptedAction::Progress(amount) => {
                add_cultivation_progress(character, *amount, config)
            }
            ScriptedAction::Breakthrough => match attempt_breakthrough(character.clone()) {
                Ok(advanced) => advanced,
                Err(e) => {
                    warn!(error = %e, code = e.error_code(), "breakthrough refused");
                    character
                }
            },
        };
        Ok(character)
    }

    fn snapshot(&self, c: &Character, tick: u64, time: f64, now: Timestamp) -> TickReport {
        TickReport {
            tick,
            time,
            realm: c.realm(),
            health: c.resources.health,
            max_health: c.resources.max_health,
            qi: c.resources.qi,
            max_qi: c.resources.max_qi,
            stamina: c.resources.stamina,
            max_stamina: c.resources.max_stamina,
            rates: self.resolver.calculate_regeneration(c),
            effects: effect_badges(c, now),
        }
    }
}
