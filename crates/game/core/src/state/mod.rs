//! Stored character state.
//!
//! Everything here is persisted by the caller. Derived values (effective
//! stats, regeneration rates, effective maxima) live in the registry and
//! resolver modules and are never written back.

pub mod attributes;
pub mod character;
pub mod cultivation;
pub mod resources;

pub use attributes::Attributes;
pub use character::Character;
pub use cultivation::{CultivationState, Realm, RealmProfile};
pub use resources::{ResourceKind, ResourcePool};
