//! Effect Registry - lifecycle of the timed modifiers on a character.
//!
//! Every mutating operation consumes the `Character` and returns it, so no
//! caller can observe a half-updated effect list. Queries borrow.
//!
//! Expiry is lazy: only [`update_effects`] removes lapsed effects. The
//! resolver's `tick` bundles it with every regeneration step.

use tracing::debug;

use crate::effects::{ActiveEffect, AddOutcome, EffectKey, MaxStatModifiers, StatModifiers};
use crate::state::{Attributes, Character};
use crate::time::Timestamp;

/// A mutation requested by the narrative layer, applied in the order received.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectInstruction {
    Add(ActiveEffect),
    Remove(EffectKey),
}

/// Resource ceilings after max-stat modifiers, for display.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveMaximums {
    pub max_health: f64,
    pub max_qi: f64,
    pub max_stamina: f64,
}

/// Adds an effect, stacking or replacing any entry with the same key.
///
/// - stackable existing entry: `stacks += 1`, timer restarts at `now`
/// - non-stackable existing entry: replaced by `effect` with one stack
/// - otherwise: appended with one stack
///
/// Resource pools are untouched; any damage or healing is realized by later
/// regeneration ticks.
pub fn add_effect(mut character: Character, effect: ActiveEffect, now: Timestamp) -> Character {
    let key = effect.key.clone();
    let outcome = character
        .effects
        .add(effect, now, &mut character.next_effect_id);

    match outcome {
        AddOutcome::Inserted { id } => {
            debug!(character = %character.name, %key, %id, "effect applied");
        }
        AddOutcome::Stacked { id, stacks } => {
            debug!(character = %character.name, %key, %id, stacks, "effect stacked");
        }
        AddOutcome::Replaced { previous, id } => {
            debug!(character = %character.name, %key, %previous, %id, "effect replaced");
        }
    }

    character
}

/// Removes the effect with exactly this key. No-op when absent.
pub fn remove_effect(mut character: Character, key: &str) -> Character {
    if let Some(removed) = character.effects.remove(key) {
        debug!(character = %character.name, key, id = %removed.id, "effect removed");
    }
    character
}

/// Whether an effect with this key is on the list.
///
/// Presence only: a lapsed effect counts until [`update_effects`] sweeps it.
pub fn has_effect(character: &Character, key: &str) -> bool {
    character.effects.contains(key)
}

/// Remaining seconds for the keyed effect.
///
/// `-1` for permanent effects; `0` when absent or lapsed.
pub fn effect_remaining_time(character: &Character, key: &str, now: Timestamp) -> f64 {
    character.effects.remaining_time(key, now)
}

/// Expiry sweep: drops every timed effect with `elapsed >= duration`.
pub fn update_effects(mut character: Character, now: Timestamp) -> Character {
    for expired in character.effects.remove_expired(now) {
        debug!(
            character = %character.name,
            key = %expired.key,
            id = %expired.id,
            duration = expired.duration,
            "effect expired"
        );
    }
    character
}

/// Applies add/remove instructions in order.
pub fn apply_instructions(
    character: Character,
    instructions: impl IntoIterator<Item = EffectInstruction>,
    now: Timestamp,
) -> Character {
    instructions
        .into_iter()
        .fold(character, |character, instruction| match instruction {
            EffectInstruction::Add(effect) => add_effect(character, effect, now),
            EffectInstruction::Remove(key) => remove_effect(character, key.as_str()),
        })
}

/// Sum of `stat_modifiers × stacks` over all active effects.
pub fn calculate_stat_modifiers(character: &Character) -> StatModifiers {
    character
        .effects
        .iter()
        .fold(StatModifiers::ZERO, |acc, e| acc + e.scaled_stat_modifiers())
}

/// Sum of `max_stat_modifiers × stacks` over all active effects.
pub fn calculate_max_stat_modifiers(character: &Character) -> MaxStatModifiers {
    let mut total = MaxStatModifiers::default();
    for effect in &character.effects {
        total += effect.scaled_max_stat_modifiers();
    }
    total
}

/// Base attributes plus every active stat modifier.
///
/// This is what combat or meditation math should read when current
/// capability matters; the base attributes stay untouched.
pub fn effective_stats(character: &Character) -> Attributes {
    character
        .attributes
        .plus(&calculate_stat_modifiers(character))
}

/// Stored maxima plus aggregated max-stat modifiers, floored at zero.
pub fn effective_maximums(character: &Character) -> EffectiveMaximums {
    let bonus = calculate_max_stat_modifiers(character);
    let pools = &character.resources;
    EffectiveMaximums {
        max_health: (pools.max_health + bonus.max_health).max(0.0),
        max_qi: (pools.max_qi + bonus.max_qi).max(0.0),
        max_stamina: (pools.max_stamina + bonus.max_stamina).max(0.0),
    }
}
