//! Direct base-value changes requested by the narrative layer.
//!
//! Unlike effects these are permanent and immediate: a manual that raises
//! strength, a sword cut, a good deed. All results are clamped.

use crate::config::EngineConfig;
use crate::effects::StatModifiers;
use crate::state::Character;

/// Signed instant changes to the current pools.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourceDelta {
    pub health: f64,
    pub qi: f64,
    pub stamina: f64,
}

/// Permanently shifts base attributes.
///
/// Attributes other than cultivation floor at 1. `max_stamina` is re-derived
/// from the new strength and stamina re-clamped against it.
pub fn apply_attribute_changes(
    mut character: Character,
    delta: StatModifiers,
    config: &EngineConfig,
) -> Character {
    character.attributes = character.attributes.plus(&delta).clamped();
    character.recompute_max_stamina(config);
    character
}

/// Instant damage or healing, clamped to `[0, max]` and rounded to tenths.
pub fn apply_resource_changes(mut character: Character, delta: ResourceDelta) -> Character {
    let clean = |v: f64| if v.is_finite() { v } else { 0.0 };
    character
        .resources
        .shift(clean(delta.health), clean(delta.qi), clean(delta.stamina));
    character
}

/// Shifts karma; unbounded apart from saturating at the integer limits.
pub fn adjust_karma(mut character: Character, delta: i64) -> Character {
    character.karma = character.karma.saturating_add(delta);
    character
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Attributes;

    fn hero() -> Character {
        Character::new("Lin Feng", Attributes::default(), &EngineConfig::default())
    }

    #[test]
    fn attribute_loss_floors_and_resizes_stamina() {
        let config = EngineConfig::default();
        let c = apply_attribute_changes(
            hero(),
            StatModifiers {
                strength: -30,
                cultivation: -4,
                intelligence: 2,
                ..StatModifiers::ZERO
            },
            &config,
        );

        assert_eq!(c.attributes.strength, 1);
        assert_eq!(c.attributes.cultivation, -4);
        assert_eq!(c.attributes.intelligence, 12);
        assert_eq!(c.resources.max_stamina, 105.0);
        assert_eq!(c.resources.stamina, 105.0);
    }

    #[test]
    fn resource_changes_clamp() {
        let c = apply_resource_changes(
            hero(),
            ResourceDelta {
                health: -130.0,
                qi: 5.0,
                stamina: f64::NAN,
            },
        );
        assert_eq!(c.resources.health, 0.0);
        assert_eq!(c.resources.qi, 50.0);
        assert_eq!(c.resources.stamina, 150.0);
        assert!(!c.is_alive());
    }

    #[test]
    fn karma_is_unbounded_but_saturating() {
        let c = adjust_karma(hero(), -500);
        assert_eq!(c.karma, -500);
        let c = adjust_karma(c, i64::MIN);
        assert_eq!(c.karma, i64::MIN);
    }
}
