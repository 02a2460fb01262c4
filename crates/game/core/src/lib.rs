//! Deterministic status-effect and regeneration engine for cultivation characters.
//!
//! `cultivation-core` owns the rules that turn elapsed time and narrative
//! events into character state: stacking timed effects, realm-based
//! regeneration, damage over time, effective stats and breakthroughs.
//! Every operation is a pure transform over a caller-owned [`Character`]
//! with an explicit [`Timestamp`]; nothing here reads a clock or does I/O.
pub mod adjustments;
pub mod config;
pub mod display;
pub mod effects;
pub mod error;
pub mod progression;
pub mod registry;
pub mod resolver;
pub mod state;
pub mod time;

pub use adjustments::{ResourceDelta, adjust_karma, apply_attribute_changes, apply_resource_changes};
pub use config::{EngineConfig, round_tenths};
pub use display::{EffectBadge, effect_badges, format_remaining_time};
pub use effects::{
    ActiveEffect, ActiveEffects, AddOutcome, DamageOverTime, EffectId, EffectKey, EffectType,
    MaxStatModifiers, RegenModifiers, StatModifiers,
};
pub use error::{BreakthroughError, EngineError, ErrorSeverity};
pub use progression::{add_cultivation_progress, attempt_breakthrough};
pub use registry::{
    EffectInstruction, EffectiveMaximums, add_effect, apply_instructions,
    calculate_max_stat_modifiers, calculate_stat_modifiers, effect_remaining_time,
    effective_maximums, effective_stats, has_effect, remove_effect, update_effects,
};
pub use resolver::{RegenRates, Resolver, damage_over_time};
pub use state::{
    Attributes, Character, CultivationState, Realm, RealmProfile, ResourceKind, ResourcePool,
};
pub use time::Timestamp;
