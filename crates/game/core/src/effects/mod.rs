//! Status effects: buffs, debuffs, poisons, curses, blessings and qi deviations.
//!
//! ```text
//! ActiveEffect (definition + timer + stacks)
//!      ↓ stored in
//! ActiveEffects (ordered, unique keys, lazy expiry)
//!      ↓ aggregated by
//! registry::{calculate_stat_modifiers, calculate_max_stat_modifiers, effective_stats}
//! ```

pub mod collection;
pub mod effect;
pub mod modifiers;

pub use collection::{ActiveEffects, AddOutcome};
pub use effect::{ActiveEffect, EffectId, EffectKey, EffectType};
pub use modifiers::{DamageOverTime, MaxStatModifiers, RegenModifiers, StatModifiers};
