//! Display helpers for status panels and effect badges.

use crate::config::EngineConfig;
use crate::effects::{EffectKey, EffectType};
use crate::state::Character;
use crate::time::Timestamp;

/// Formats remaining seconds for a badge timer.
///
/// - `-1` → `"Permanent"`
/// - `0` (or less) → `"Expired"`
/// - under a minute → `"45s"`
/// - under an hour → `"3m 05s"`
/// - otherwise → `"1h 02m"`
pub fn format_remaining_time(seconds: f64) -> String {
    if seconds == EngineConfig::PERMANENT_REMAINING {
        return "Permanent".to_string();
    }
    if !seconds.is_finite() || seconds <= 0.0 {
        return "Expired".to_string();
    }

    let total = seconds.ceil() as u64;
    match total {
        0..=59 => format!("{total}s"),
        60..=3599 => format!("{}m {:02}s", total / 60, total % 60),
        _ => format!("{}h {:02}m", total / 3600, (total % 3600) / 60),
    }
}

/// What a status panel shows for one effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectBadge {
    pub key: EffectKey,
    pub name: String,
    pub kind: EffectType,
    pub stacks: u32,
    /// Seconds left, `-1` for permanent.
    pub remaining: f64,
    pub remaining_label: String,
}

/// One badge per active effect, in list order.
pub fn effect_badges(character: &Character, now: Timestamp) -> Vec<EffectBadge> {
    character
        .effects
        .iter()
        .map(|effect| {
            let remaining = effect.remaining_secs(now);
            EffectBadge {
                key: effect.key.clone(),
                name: effect.name.clone(),
                kind: effect.kind,
                stacks: effect.stack_multiplier(),
                remaining,
                remaining_label: format_remaining_time(remaining),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::ActiveEffect;
    use crate::registry::add_effect;
    use crate::state::Attributes;

    #[test]
    fn remaining_time_labels() {
        assert_eq!(format_remaining_time(-1.0), "Permanent");
        assert_eq!(format_remaining_time(0.0), "Expired");
        assert_eq!(format_remaining_time(44.2), "45s");
        assert_eq!(format_remaining_time(185.0), "3m 05s");
        assert_eq!(format_remaining_time(3720.0), "1h 02m");
    }

    #[test]
    fn badges_follow_list_order() {
        let config = EngineConfig::default();
        let c = Character::new("Lin Feng", Attributes::default(), &config);
        let c = add_effect(c, ActiveEffect::new("Haste", EffectType::Buff, 90.0), Timestamp::ZERO);
        let c = add_effect(
            c,
            ActiveEffect::permanent("Meridian Scar", EffectType::QiDeviation),
            Timestamp::ZERO,
        );

        let badges = effect_badges(&c, Timestamp::from_secs(30.0));
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].name, "Haste");
        assert_eq!(badges[0].remaining_label, "1m 00s");
        assert_eq!(badges[1].remaining, -1.0);
        assert_eq!(badges[1].remaining_label, "Permanent");
    }
}
