//! The character aggregate.

use crate::config::EngineConfig;
use crate::effects::ActiveEffects;
use crate::time::Timestamp;

use super::attributes::Attributes;
use super::cultivation::{CultivationState, Realm};
use super::resources::{ResourcePool, clamp_pool};

/// Aggregate root passed by value through every engine operation.
///
/// The engine never holds a `Character` between calls; the caller owns the
/// canonical copy and should drop stale clones after a mutating call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub resources: ResourcePool,
    pub cultivation: CultivationState,
    pub attributes: Attributes,
    /// Moral standing; unbounded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub karma: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: ActiveEffects,
    /// Time of the last regeneration tick, used by callers to compute the next delta.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_regeneration: Option<Timestamp>,
    /// Next id handed out to an inserted effect.
    #[cfg_attr(feature = "serde", serde(default))]
    pub next_effect_id: u64,
}

impl Character {
    /// A fresh Mortal with full pools.
    pub fn new(name: impl Into<String>, attributes: Attributes, config: &EngineConfig) -> Self {
        Self::at_realm(name, attributes, Realm::Mortal, config)
    }

    /// A fresh character at `realm` with full pools sized from the realm table.
    pub fn at_realm(
        name: impl Into<String>,
        attributes: Attributes,
        realm: Realm,
        config: &EngineConfig,
    ) -> Self {
        let attributes = attributes.clamped();
        let profile = realm.profile();
        let max_stamina = config.max_stamina_for(attributes.strength);

        Self {
            name: name.into(),
            resources: ResourcePool::full(profile.max_health, profile.max_qi, max_stamina),
            cultivation: CultivationState::new(realm),
            attributes,
            karma: 0,
            effects: ActiveEffects::new(),
            last_regeneration: None,
            next_effect_id: 0,
        }
    }

    pub fn realm(&self) -> Realm {
        self.cultivation.realm
    }

    pub fn is_alive(&self) -> bool {
        self.resources.health > 0.0
    }

    /// Re-derives `max_stamina` from current strength and clamps stamina to it.
    pub fn recompute_max_stamina(&mut self, config: &EngineConfig) {
        self.resources.max_stamina = config.max_stamina_for(self.attributes.strength);
        self.resources.stamina = clamp_pool(self.resources.stamina, self.resources.max_stamina);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_character_starts_full_at_mortal() {
        let config = EngineConfig::default();
        let hero = Character::new("Lin Feng", Attributes::new(10, 8, 12, 9, 7, 0), &config);

        assert_eq!(hero.realm(), Realm::Mortal);
        assert_eq!(hero.resources.max_health, 100.0);
        assert_eq!(hero.resources.max_qi, 50.0);
        assert_eq!(hero.resources.max_stamina, 150.0);
        assert_eq!(hero.resources.stamina, 150.0);
        assert!(hero.is_alive());
        assert!(hero.effects.is_empty());
    }

    #[test]
    fn recompute_clamps_stamina_after_strength_drop() {
        let config = EngineConfig::default();
        let mut hero = Character::new("Lin Feng", Attributes::default(), &config);
        hero.attributes.strength = 2;
        hero.recompute_max_stamina(&config);

        assert_eq!(hero.resources.max_stamina, 110.0);
        assert_eq!(hero.resources.stamina, 110.0);
    }
}
