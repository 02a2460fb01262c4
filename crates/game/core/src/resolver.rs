//! Regeneration & Stat Resolver.
//!
//! Advances resource pools over elapsed time from three sources:
//!
//! ```text
//! realm base rate  +  strength × 0.1 (stamina only)  +  Σ regen × stacks   → gain
//! Σ damage_over_time × stacks                                              → loss
//! ```
//!
//! Gain and loss are applied as separate terms. The displayed rate
//! ([`Resolver::calculate_regeneration`]) is their difference floored at
//! zero, but the applied delta keeps the full loss, so a poison stronger
//! than natural healing still drains health.

use std::fmt;

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::effects::{ActiveEffect, DamageOverTime};
use crate::registry::update_effects;
use crate::state::resources::settle;
use crate::state::{Character, Realm};
use crate::time::Timestamp;

/// Per-second rates for each pool.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegenRates {
    pub health: f64,
    pub qi: f64,
    pub stamina: f64,
}

impl RegenRates {
    pub const fn new(health: f64, qi: f64, stamina: f64) -> Self {
        Self {
            health,
            qi,
            stamina,
        }
    }

    /// Natural regeneration for a realm, straight from the realm table.
    pub const fn for_realm(realm: Realm) -> Self {
        let profile = realm.profile();
        Self::new(profile.health_regen, profile.qi_regen, profile.stamina_regen)
    }

    fn floored(self) -> Self {
        Self::new(self.health.max(0.0), self.qi.max(0.0), self.stamina.max(0.0))
    }
}

impl fmt::Display for RegenRates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+.1}/s HP, {:+.1}/s Qi, {:+.1}/s Stamina",
            self.health, self.qi, self.stamina
        )
    }
}

/// Sum of `damage_over_time × stacks` across all active effects.
pub fn damage_over_time(character: &Character) -> DamageOverTime {
    damage_where(character, |_| true)
}

fn damage_where(character: &Character, live: impl Fn(&ActiveEffect) -> bool) -> DamageOverTime {
    let mut total = DamageOverTime::default();
    for effect in character.effects.iter().filter(|e| live(e)) {
        total += effect.scaled_damage();
    }
    total
}

/// Stateless resolver parameterized by engine tunables.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    config: EngineConfig,
}

impl Resolver {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Base + strength bonus + regen modifiers, before damage-over-time.
    fn raw_gain(&self, character: &Character) -> RegenRates {
        self.raw_gain_where(character, |_| true)
    }

    fn raw_gain_where(
        &self,
        character: &Character,
        live: impl Fn(&ActiveEffect) -> bool,
    ) -> RegenRates {
        let mut rates = RegenRates::for_realm(character.realm());
        rates.stamina += self.config.stamina_regen_bonus(character.attributes.strength);

        for effect in character.effects.iter().filter(|e| live(e)) {
            let regen = effect.scaled_regen();
            rates.health += regen.health_regen;
            rates.qi += regen.qi_regen;
            rates.stamina += regen.stamina_regen;
        }
        rates
    }

    /// Per-second healing applied during a tick, floored at zero.
    pub fn gain_rates(&self, character: &Character) -> RegenRates {
        self.raw_gain(character).floored()
    }

    /// Net per-second regeneration for display.
    ///
    /// Floored at zero: damage exceeding healing is not visible here, though
    /// [`Self::apply_regeneration`] still applies it in full.
    pub fn calculate_regeneration(&self, character: &Character) -> RegenRates {
        let gain = self.raw_gain(character);
        let loss = damage_over_time(character);
        RegenRates::new(
            gain.health - loss.health_damage,
            gain.qi - loss.qi_drain,
            gain.stamina - loss.stamina_drain,
        )
        .floored()
    }

    /// Advances pools by `delta_seconds`.
    ///
    /// `max_stamina` is re-derived from strength before stamina is clamped.
    /// Each pool ends clamped to `[0, max]` and rounded to tenths.
    /// `last_regeneration` is set to `now`; a zero (or negative, or
    /// non-finite) delta changes nothing else, so stamina stays within the
    /// stored `max_stamina` until the next real step re-derives it.
    ///
    /// Every effect on the list contributes for the whole delta and expiry is
    /// not evaluated. Use [`Self::tick`] or [`Self::catch_up`] unless the
    /// caller sweeps effects itself at least as often as durations matter.
    pub fn apply_regeneration(
        &self,
        character: Character,
        delta_seconds: f64,
        now: Timestamp,
    ) -> Character {
        self.regenerate(character, delta_seconds, now, |_| true)
    }

    fn regenerate(
        &self,
        mut character: Character,
        delta_seconds: f64,
        now: Timestamp,
        live: impl Fn(&ActiveEffect) -> bool,
    ) -> Character {
        character.last_regeneration = Some(now);
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return character;
        }

        let gain = self.raw_gain_where(&character, &live).floored();
        let loss = damage_where(&character, &live);
        trace!(character = %character.name, ?gain, ?loss, delta_seconds, "regeneration tick");

        character.resources.max_stamina =
            self.config.max_stamina_for(character.attributes.strength);

        let was_alive = character.is_alive();
        let pools = &mut character.resources;
        pools.health = settle(
            pools.health + gain.health * delta_seconds - loss.health_damage * delta_seconds,
            pools.max_health,
        );
        pools.qi = settle(
            pools.qi + gain.qi * delta_seconds - loss.qi_drain * delta_seconds,
            pools.max_qi,
        );
        pools.stamina = settle(
            pools.stamina + gain.stamina * delta_seconds - loss.stamina_drain * delta_seconds,
            pools.max_stamina,
        );

        if was_alive && !character.is_alive() {
            debug!(character = %character.name, "health depleted by damage over time");
        }
        character
    }

    /// Regeneration over the `delta_seconds` that end at `now`.
    ///
    /// Expiry is swept at the start of the interval and again at every
    /// expiry inside it, so a timed effect contributes for exactly the part
    /// of the interval it was live. Ends with a sweep at `now`.
    pub fn tick(&self, character: Character, delta_seconds: f64, now: Timestamp) -> Character {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            let character = update_effects(character, now);
            return self.apply_regeneration(character, delta_seconds, now);
        }
        let from = now.sub_secs(delta_seconds);
        self.advance(character, from, now, u64::MAX)
    }

    /// Reconciles the gap since `last_regeneration` up to `now`.
    ///
    /// Steps are at most `step_seconds` long and additionally split at every
    /// effect expiry, so no modifier is applied past its duration. An effect
    /// whose `start_time` lies inside the gap only contributes from that
    /// instant on. A character that never regenerated is only stamped with
    /// `now`.
    pub fn catch_up(
        &self,
        mut character: Character,
        now: Timestamp,
        step_seconds: f64,
    ) -> Character {
        let Some(cursor) = character.last_regeneration else {
            character.last_regeneration = Some(now);
            return character;
        };

        let step_ms = if step_seconds.is_finite() && step_seconds > 0.0 {
            ((step_seconds * 1000.0).round() as u64).max(1)
        } else {
            u64::MAX
        };
        self.advance(character, cursor, now, step_ms)
    }

    /// Steps from `from` to `now`, never crossing a step limit, an expiry or
    /// an effect start.
    fn advance(
        &self,
        mut character: Character,
        from: Timestamp,
        now: Timestamp,
        step_ms: u64,
    ) -> Character {
        let mut cursor = from;
        while cursor < now {
            character = update_effects(character, cursor);

            let mut boundary = now.as_millis().min(cursor.as_millis().saturating_add(step_ms));
            if let Some((_, remaining)) = character.effects.next_expiry(cursor) {
                let remaining_ms = ((remaining * 1000.0).ceil() as u64).max(1);
                boundary = boundary.min(cursor.as_millis().saturating_add(remaining_ms));
            }
            if let Some(start) = character
                .effects
                .iter()
                .map(|e| e.start_time)
                .filter(|&start| start > cursor)
                .min()
            {
                boundary = boundary.min(start.as_millis());
            }

            let next = Timestamp::from_millis(boundary);
            let delta = next.elapsed_secs_since(cursor);
            character = self.regenerate(character, delta, next, |e| e.start_time <= cursor);
            cursor = next;
        }

        let mut character = update_effects(character, now);
        character.last_regeneration = Some(now);
        character
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{ActiveEffect, EffectType, RegenModifiers};
    use crate::registry::{add_effect, has_effect};
    use crate::state::Attributes;

    fn t(secs: f64) -> Timestamp {
        Timestamp::from_secs(secs)
    }

    fn mortal() -> Character {
        Character::new("Lin Feng", Attributes::default(), &EngineConfig::default())
    }

    fn poison(per_second: f64, duration: f64) -> ActiveEffect {
        ActiveEffect::new("Poison", EffectType::Poison, duration).with_damage_over_time(
            DamageOverTime {
                health_damage: per_second,
                ..Default::default()
            },
        )
    }

    #[test]
    fn base_rates_include_strength_on_stamina_only() {
        let rates = Resolver::default().calculate_regeneration(&mortal());
        assert_eq!(rates, RegenRates::new(0.1, 0.2, 2.0));
    }

    #[test]
    fn displayed_rate_is_floored_but_damage_still_lands() {
        let resolver = Resolver::default();
        let c = add_effect(mortal(), poison(5.1, 30.0), t(0.0));

        assert_eq!(resolver.calculate_regeneration(&c).health, 0.0);

        let c = resolver.apply_regeneration(c, 1.0, t(1.0));
        assert_eq!(c.resources.health, 95.0);
    }

    #[test]
    fn stacks_multiply_regen_and_damage() {
        let resolver = Resolver::default();
        let salve = ActiveEffect::new("Salve", EffectType::Buff, 30.0)
            .stackable(true)
            .with_regen(RegenModifiers {
                qi_regen: 1.0,
                ..Default::default()
            });
        let c = add_effect(mortal(), salve.clone(), t(0.0));
        let c = add_effect(c, salve, t(0.0));

        assert_eq!(resolver.calculate_regeneration(&c).qi, 2.2);
    }

    #[test]
    fn negative_regen_modifier_floors_gain_at_zero() {
        let resolver = Resolver::default();
        let sap = ActiveEffect::new("Sapped", EffectType::Debuff, 30.0).with_regen(RegenModifiers {
            stamina_regen: -10.0,
            ..Default::default()
        });
        let mut c = add_effect(mortal(), sap, t(0.0));
        c.resources.stamina = 50.0;

        assert_eq!(resolver.gain_rates(&c).stamina, 0.0);
        let c = resolver.apply_regeneration(c, 5.0, t(5.0));
        assert_eq!(c.resources.stamina, 50.0);
    }

    #[test]
    fn zero_delta_only_stamps_timestamp() {
        let resolver = Resolver::default();
        let mut c = add_effect(mortal(), poison(3.0, 10.0), t(0.0));
        c.resources.health = 42.37;
        let before = c.resources.clone();

        let c = resolver.apply_regeneration(c, 0.0, t(7.0));
        assert_eq!(c.resources, before);
        assert_eq!(c.last_regeneration, Some(t(7.0)));
    }

    #[test]
    fn strength_change_resizes_stamina_before_clamp() {
        let resolver = Resolver::default();
        let mut c = mortal();
        c.attributes.strength = 4;

        let c = resolver.apply_regeneration(c, 1.0, t(1.0));
        assert_eq!(c.resources.max_stamina, 120.0);
        assert_eq!(c.resources.stamina, 120.0);
    }

    #[test]
    fn large_delta_without_sweep_over_applies_expired_poison() {
        let resolver = Resolver::default();
        let c = add_effect(mortal(), poison(3.0, 10.0), t(0.0));

        let unswept = resolver.apply_regeneration(c.clone(), 20.0, t(20.0));
        assert_eq!(unswept.resources.health, 42.0);

        let stepped = resolver.catch_up(
            Character {
                last_regeneration: Some(t(0.0)),
                ..c
            },
            t(20.0),
            1.0,
        );
        assert!(!has_effect(&stepped, "Poison"));
        assert!(stepped.resources.health > unswept.resources.health);
        assert_eq!(stepped.resources.health, 72.0);
    }

    #[test]
    fn catch_up_splits_at_expiry_even_with_one_big_step() {
        let resolver = Resolver::default();
        let mut c = add_effect(mortal(), poison(3.0, 10.0), t(0.0));
        c.last_regeneration = Some(t(0.0));

        let c = resolver.catch_up(c, t(20.0), 3600.0);
        assert!(!has_effect(&c, "Poison"));
        assert_eq!(c.resources.health, 72.0);
        assert_eq!(c.last_regeneration, Some(t(20.0)));
    }

    #[test]
    fn tick_covers_the_last_second_of_an_effect() {
        let resolver = Resolver::default();
        let c = add_effect(mortal(), poison(3.0, 10.0), t(0.0));

        let mut ticked = c.clone();
        for second in 1..=12 {
            ticked = resolver.tick(ticked, 1.0, t(f64::from(second)));
        }
        let single = resolver.tick(c.clone(), 12.0, t(12.0));
        let caught_up = resolver.catch_up(
            Character {
                last_regeneration: Some(t(0.0)),
                ..c
            },
            t(12.0),
            1.0,
        );

        // Ten seconds at -2.9/s, then two at +0.1/s.
        assert_eq!(ticked.resources.health, 71.2);
        assert_eq!(single.resources.health, 71.2);
        assert_eq!(caught_up.resources.health, 71.2);
        assert!(!has_effect(&single, "Poison"));
        assert_eq!(single.last_regeneration, Some(t(12.0)));
    }

    #[test]
    fn catch_up_counts_effects_from_their_start() {
        let resolver = Resolver::default();
        let mut c = mortal();
        c.last_regeneration = Some(t(0.0));
        let c = add_effect(c, poison(3.0, 10.0), t(5.0));

        let c = resolver.catch_up(c, t(10.0), 3600.0);
        assert!(has_effect(&c, "Poison"));
        assert_eq!(c.resources.health, 85.5);
    }

    #[test]
    fn catch_up_without_history_only_stamps() {
        let c = Resolver::default().catch_up(mortal(), t(50.0), 1.0);
        assert_eq!(c.last_regeneration, Some(t(50.0)));
        assert_eq!(c.resources.health, 100.0);
    }

    #[test]
    fn rates_display_with_sign() {
        let rates = RegenRates::new(0.1, 0.2, 2.0);
        assert_eq!(rates.to_string(), "+0.1/s HP, +0.2/s Qi, +2.0/s Stamina");
    }
}
