//! Ordered list of a character's active effects.
//!
//! # Lazy expiry
//!
//! Effects store their `start_time` and `duration`; nothing removes them on
//! its own. [`ActiveEffects::remove_expired`] is the only expiry path and
//! must be called whenever time advances, otherwise a lapsed effect keeps
//! contributing its modifiers.

use crate::time::Timestamp;

use super::effect::{ActiveEffect, EffectId, EffectKey};

/// How an [`ActiveEffects::add`] call resolved against the existing list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// No effect with this key existed; appended with one stack.
    Inserted { id: EffectId },
    /// A stackable effect with this key existed; stack count bumped and timer restarted.
    Stacked { id: EffectId, stacks: u32 },
    /// A non-stackable effect with this key existed; definition swapped out.
    Replaced { previous: EffectId, id: EffectId },
}

/// Active effects in insertion order.
///
/// Keys are unique within the list.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActiveEffects {
    effects: Vec<ActiveEffect>,
}

impl ActiveEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether an effect with this key is on the list (expired or not).
    pub fn contains(&self, key: &str) -> bool {
        self.effects.iter().any(|e| e.key.as_str() == key)
    }

    pub fn get(&self, key: &str) -> Option<&ActiveEffect> {
        self.effects.iter().find(|e| e.key.as_str() == key)
    }

    /// Adds an effect, stacking or replacing an existing entry with the same key.
    ///
    /// Stacking refreshes the timer, it does not extend it. Replacement keeps
    /// the list position of the old entry. `next_id` supplies fresh ids.
    pub fn add(
        &mut self,
        mut effect: ActiveEffect,
        now: Timestamp,
        next_id: &mut u64,
    ) -> AddOutcome {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.key == effect.key) {
            if existing.stackable {
                existing.stacks = existing.stacks.max(1).saturating_add(1);
                existing.start_time = now;
                return AddOutcome::Stacked {
                    id: existing.id,
                    stacks: existing.stacks,
                };
            }

            let previous = existing.id;
            effect.id = allocate(next_id);
            effect.stacks = 1;
            effect.start_time = now;
            *existing = effect;
            return AddOutcome::Replaced {
                previous,
                id: existing.id,
            };
        }

        effect.id = allocate(next_id);
        effect.stacks = 1;
        effect.start_time = now;
        let id = effect.id;
        self.effects.push(effect);
        AddOutcome::Inserted { id }
    }

    /// Removes the effect with this key, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<ActiveEffect> {
        let index = self.effects.iter().position(|e| e.key.as_str() == key)?;
        Some(self.effects.remove(index))
    }

    /// Drops every timed effect whose elapsed time has reached its duration.
    ///
    /// Permanent effects are never touched. Returns the removed effects in
    /// their original order.
    pub fn remove_expired(&mut self, now: Timestamp) -> Vec<ActiveEffect> {
        let (expired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.effects)
            .into_iter()
            .partition(|e| e.is_expired(now));
        self.effects = kept;
        expired
    }

    /// Remaining seconds for the keyed effect.
    ///
    /// `-1` for permanent effects, `0` when absent (indistinguishable from
    /// "just expired"; check [`Self::contains`] first if that matters).
    pub fn remaining_time(&self, key: &str, now: Timestamp) -> f64 {
        self.get(key).map_or(0.0, |e| e.remaining_secs(now))
    }

    /// The timed effect that runs out soonest, with its remaining seconds.
    ///
    /// Ties resolve to the earlier entry on the list.
    pub fn next_expiry(&self, now: Timestamp) -> Option<(&EffectKey, f64)> {
        self.effects
            .iter()
            .filter(|e| !e.is_permanent())
            .map(|e| (&e.key, e.remaining_secs(now)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Count of effects that never expire.
    pub fn permanent_count(&self) -> usize {
        self.effects.iter().filter(|e| e.is_permanent()).count()
    }
}

impl<'a> IntoIterator for &'a ActiveEffects {
    type Item = &'a ActiveEffect;
    type IntoIter = std::slice::Iter<'a, ActiveEffect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

fn allocate(next_id: &mut u64) -> EffectId {
    let id = EffectId(*next_id);
    *next_id = next_id.saturating_add(1);
    id
}
