//! Cultivation realms and progress toward the next breakthrough.
//!
//! The realm table is a pure constant: it is the single source of truth for
//! resource ceilings and natural regeneration at every tier.

/// Cultivation power tier, ordered from weakest to strongest.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum Realm {
    #[default]
    #[strum(to_string = "Mortal", serialize = "mortal")]
    Mortal,
    #[strum(to_string = "Qi Condensation", serialize = "qi_condensation")]
    QiCondensation,
    #[strum(
        to_string = "Foundation Establishment",
        serialize = "foundation_establishment"
    )]
    FoundationEstablishment,
    #[strum(to_string = "Core Formation", serialize = "core_formation")]
    CoreFormation,
    #[strum(to_string = "Nascent Soul", serialize = "nascent_soul")]
    NascentSoul,
    #[strum(to_string = "Spirit Severing", serialize = "spirit_severing")]
    SpiritSevering,
    #[strum(to_string = "Dao Seeking", serialize = "dao_seeking")]
    DaoSeeking,
    #[strum(to_string = "Immortal Ascension", serialize = "immortal_ascension")]
    ImmortalAscension,
}

/// Fixed per-realm constants: resource ceilings and per-second base regeneration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealmProfile {
    pub max_health: f64,
    pub max_qi: f64,
    pub health_regen: f64,
    pub qi_regen: f64,
    pub stamina_regen: f64,
}

impl RealmProfile {
    const fn new(
        max_health: f64,
        max_qi: f64,
        health_regen: f64,
        qi_regen: f64,
        stamina_regen: f64,
    ) -> Self {
        Self {
            max_health,
            max_qi,
            health_regen,
            qi_regen,
            stamina_regen,
        }
    }
}

impl Realm {
    /// Realms in ascending order.
    pub const ALL: [Realm; 8] = [
        Realm::Mortal,
        Realm::QiCondensation,
        Realm::FoundationEstablishment,
        Realm::CoreFormation,
        Realm::NascentSoul,
        Realm::SpiritSevering,
        Realm::DaoSeeking,
        Realm::ImmortalAscension,
    ];

    /// Zero-based tier index (Mortal = 0).
    pub const fn tier(self) -> usize {
        self as usize
    }

    /// The realm reached by breaking through, or `None` at the peak.
    pub const fn next(self) -> Option<Realm> {
        match self {
            Realm::Mortal => Some(Realm::QiCondensation),
            Realm::QiCondensation => Some(Realm::FoundationEstablishment),
            Realm::FoundationEstablishment => Some(Realm::CoreFormation),
            Realm::CoreFormation => Some(Realm::NascentSoul),
            Realm::NascentSoul => Some(Realm::SpiritSevering),
            Realm::SpiritSevering => Some(Realm::DaoSeeking),
            Realm::DaoSeeking => Some(Realm::ImmortalAscension),
            Realm::ImmortalAscension => None,
        }
    }

    /// Table row for this realm.
    pub const fn profile(self) -> RealmProfile {
        match self {
            Realm::Mortal => RealmProfile::new(100.0, 50.0, 0.1, 0.2, 1.0),
            Realm::QiCondensation => RealmProfile::new(150.0, 100.0, 0.2, 0.5, 1.5),
            Realm::FoundationEstablishment => RealmProfile::new(250.0, 200.0, 0.5, 1.0, 2.0),
            Realm::CoreFormation => RealmProfile::new(400.0, 400.0, 1.0, 2.5, 3.0),
            Realm::NascentSoul => RealmProfile::new(650.0, 800.0, 2.0, 5.0, 4.0),
            Realm::SpiritSevering => RealmProfile::new(1000.0, 1500.0, 3.5, 10.0, 5.5),
            Realm::DaoSeeking => RealmProfile::new(1600.0, 3000.0, 6.0, 18.0, 7.5),
            Realm::ImmortalAscension => RealmProfile::new(2500.0, 6000.0, 10.0, 30.0, 10.0),
        }
    }
}

/// Where a character stands on the cultivation path.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CultivationState {
    pub realm: Realm,
    /// Progress toward the next breakthrough, 0–100.
    pub progress: f64,
    pub breakthrough_ready: bool,
}

impl CultivationState {
    pub fn new(realm: Realm) -> Self {
        Self {
            realm,
            progress: 0.0,
            breakthrough_ready: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn realm_table_is_monotonic() {
        let realms: Vec<Realm> = Realm::iter().collect();
        assert_eq!(realms, Realm::ALL);

        for pair in realms.windows(2) {
            let (lo, hi) = (pair[0].profile(), pair[1].profile());
            assert!(hi.max_health > lo.max_health);
            assert!(hi.max_qi > lo.max_qi);
            assert!(hi.health_regen > lo.health_regen);
            assert!(hi.qi_regen > lo.qi_regen);
            assert!(hi.stamina_regen > lo.stamina_regen);
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
        assert_eq!(Realm::ImmortalAscension.next(), None);
    }

    #[test]
    fn realm_names_round_trip_through_strings() {
        assert_eq!(Realm::QiCondensation.to_string(), "Qi Condensation");
        assert_eq!("qi_condensation".parse::<Realm>(), Ok(Realm::QiCondensation));
        assert_eq!("Nascent Soul".parse::<Realm>(), Ok(Realm::NascentSoul));
        assert!("Golden Core".parse::<Realm>().is_err());
    }
}
