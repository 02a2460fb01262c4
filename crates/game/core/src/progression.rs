//! Cultivation progress and realm breakthroughs.
//!
//! Progress saturates at the configured cap (100 by default). Reaching the
//! cap only marks the character ready; the realm changes when the caller
//! explicitly attempts the breakthrough.

use tracing::info;

use crate::config::EngineConfig;
use crate::error::BreakthroughError;
use crate::state::Character;

/// Adds (or, for negative amounts, removes) cultivation progress.
///
/// The result is clamped to `[0, cap]`; `breakthrough_ready` tracks whether
/// the cap has been reached. A negative or NaN cap counts as zero.
pub fn add_cultivation_progress(
    mut character: Character,
    amount: f64,
    config: &EngineConfig,
) -> Character {
    if !amount.is_finite() {
        return character;
    }

    let cap = config.progress_cap.max(0.0);
    let state = &mut character.cultivation;
    state.progress = (state.progress + amount).clamp(0.0, cap);
    state.breakthrough_ready = state.progress >= cap;
    character
}

/// Advances the character to the next realm.
///
/// Progress resets to zero, health and qi ceilings move to the new realm's
/// table values, and both pools are refilled to those maxima.
pub fn attempt_breakthrough(mut character: Character) -> Result<Character, BreakthroughError> {
    let state = &character.cultivation;
    if !state.breakthrough_ready {
        return Err(BreakthroughError::NotReady {
            progress: state.progress,
        });
    }
    let from = state.realm;
    let to = from.next().ok_or(BreakthroughError::PeakRealm { realm: from })?;

    let profile = to.profile();
    character.cultivation.realm = to;
    character.cultivation.progress = 0.0;
    character.cultivation.breakthrough_ready = false;

    let pools = &mut character.resources;
    pools.max_health = profile.max_health;
    pools.max_qi = profile.max_qi;
    pools.health = profile.max_health;
    pools.qi = profile.max_qi;

    info!(character = %character.name, %from, %to, "breakthrough");
    Ok(character)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, ErrorSeverity};
    use crate::state::{Attributes, Realm};

    fn mortal() -> Character {
        Character::new("Lin Feng", Attributes::default(), &EngineConfig::default())
    }

    #[test]
    fn progress_saturates_and_flags_readiness() {
        let config = EngineConfig::default();
        let c = add_cultivation_progress(mortal(), 60.0, &config);
        assert!(!c.cultivation.breakthrough_ready);

        let c = add_cultivation_progress(c, 75.0, &config);
        assert_eq!(c.cultivation.progress, 100.0);
        assert!(c.cultivation.breakthrough_ready);

        let c = add_cultivation_progress(c, -250.0, &config);
        assert_eq!(c.cultivation.progress, 0.0);
        assert!(!c.cultivation.breakthrough_ready);
    }

    #[test]
    fn degenerate_cap_clamps_to_zero() {
        for cap in [-1.0, f64::NAN] {
            let config = EngineConfig {
                progress_cap: cap,
                ..EngineConfig::default()
            };
            let c = add_cultivation_progress(mortal(), 10.0, &config);
            assert_eq!(c.cultivation.progress, 0.0);
            assert!(c.cultivation.breakthrough_ready);
        }
    }

    #[test]
    fn breakthrough_resets_progress_and_refills_pools() {
        let config = EngineConfig::default();
        let mut c = add_cultivation_progress(mortal(), 100.0, &config);
        c.resources.health = 12.5;
        c.resources.qi = 3.0;
        let stamina_before = c.resources.stamina;

        let c = attempt_breakthrough(c).unwrap();
        assert_eq!(c.realm(), Realm::QiCondensation);
        assert_eq!(c.cultivation.progress, 0.0);
        assert!(!c.cultivation.breakthrough_ready);
        assert_eq!(c.resources.max_qi, 100.0);
        assert_eq!(c.resources.max_health, 150.0);
        assert_eq!(c.resources.qi, 100.0);
        assert_eq!(c.resources.health, 150.0);
        assert_eq!(c.resources.stamina, stamina_before);
    }

    #[test]
    fn premature_breakthrough_is_refused() {
        let c = add_cultivation_progress(mortal(), 99.9, &EngineConfig::default());
        let err = attempt_breakthrough(c).unwrap_err();
        assert!(matches!(err, BreakthroughError::NotReady { .. }));
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
    }

    #[test]
    fn peak_realm_cannot_break_through() {
        let config = EngineConfig::default();
        let immortal = Character::at_realm(
            "Old Ancestor",
            Attributes::default(),
            Realm::ImmortalAscension,
            &config,
        );
        let ready = add_cultivation_progress(immortal, 100.0, &config);
        let err = attempt_breakthrough(ready).unwrap_err();
        assert_eq!(
            err,
            BreakthroughError::PeakRealm {
                realm: Realm::ImmortalAscension
            }
        );
    }
}
