//! Attribute resolvers: name → category, defaulting on unknown input.
//!
//! Each fallback is logged at debug level; the aggregator warns once per
//! profile.
//!
//! Fallbacks: Varna Shudra, Yoni Ashwa, Gana Manushya, Nadi Aadi,
//! Vashya Manushya, Lord Surya for the boy and Chandra for the girl.

use std::fmt::Debug;

use milan_vedic_base::{Graha, Nakshatra, Rashi, rashi_lord};
use tracing::debug;

use crate::category::{Gana, Nadi, Varna, Vashya, Yoni};
use crate::profile::PersonRole;
use crate::quality::Resolution;
use crate::tables::{gana_of, nadi_of, varna_of, vashya_of, yoni_of};

pub const DEFAULT_VARNA: Varna = Varna::Shudra;
pub const DEFAULT_GANA: Gana = Gana::Manushya;
pub const DEFAULT_YONI: Yoni = Yoni::Ashwa;
pub const DEFAULT_NADI: Nadi = Nadi::Aadi;
pub const DEFAULT_VASHYA: Vashya = Vashya::Manushya;

/// Fallback lord for an unrecognised moon sign.
pub const fn default_lord(role: PersonRole) -> Graha {
    match role {
        PersonRole::Boy => Graha::Surya,
        PersonRole::Girl => Graha::Chandra,
    }
}

fn from_nakshatra<T: Copy + Debug>(
    name: &str,
    attribute: &'static str,
    map: fn(Nakshatra) -> T,
    fallback: T,
) -> Resolution<T> {
    match Nakshatra::from_name(name) {
        Some(n) => Resolution::Resolved(map(n)),
        None => {
            debug!(input = name, attribute, ?fallback, "unknown nakshatra, using default");
            Resolution::Defaulted(fallback)
        }
    }
}

fn from_rashi<T: Copy + Debug>(
    name: &str,
    attribute: &'static str,
    map: fn(Rashi) -> T,
    fallback: T,
) -> Resolution<T> {
    match Rashi::from_name(name) {
        Some(r) => Resolution::Resolved(map(r)),
        None => {
            debug!(input = name, attribute, ?fallback, "unknown rashi, using default");
            Resolution::Defaulted(fallback)
        }
    }
}

pub fn resolve_varna(nakshatra: &str) -> Resolution<Varna> {
    from_nakshatra(nakshatra, "varna", varna_of, DEFAULT_VARNA)
}

pub fn resolve_gana(nakshatra: &str) -> Resolution<Gana> {
    from_nakshatra(nakshatra, "gana", gana_of, DEFAULT_GANA)
}

pub fn resolve_yoni(nakshatra: &str) -> Resolution<Yoni> {
    from_nakshatra(nakshatra, "yoni", yoni_of, DEFAULT_YONI)
}

pub fn resolve_nadi(nakshatra: &str) -> Resolution<Nadi> {
    from_nakshatra(nakshatra, "nadi", nadi_of, DEFAULT_NADI)
}

pub fn resolve_vashya(rashi: &str) -> Resolution<Vashya> {
    from_rashi(rashi, "vashya", vashya_of, DEFAULT_VASHYA)
}

/// Ruling graha of a moon sign. The fallback depends on the person's role.
pub fn resolve_lord(rashi: &str, role: PersonRole) -> Resolution<Graha> {
    from_rashi(rashi, "lord", rashi_lord, default_lord(role))
}

/// Every category derived from one person's nakshatra and moon sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonAttributes {
    pub varna: Resolution<Varna>,
    pub gana: Resolution<Gana>,
    pub yoni: Resolution<Yoni>,
    pub nadi: Resolution<Nadi>,
    pub vashya: Resolution<Vashya>,
    pub lord: Resolution<Graha>,
}

impl PersonAttributes {
    pub fn resolve(nakshatra: &str, moon_sign: &str, role: PersonRole) -> Self {
        Self {
            varna: resolve_varna(nakshatra),
            gana: resolve_gana(nakshatra),
            yoni: resolve_yoni(nakshatra),
            nadi: resolve_nadi(nakshatra),
            vashya: resolve_vashya(moon_sign),
            lord: resolve_lord(moon_sign, role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_nakshatra_resolves() {
        assert_eq!(resolve_varna("Ashwini"), Resolution::Resolved(Varna::Brahmin));
        assert_eq!(resolve_gana("Ashwini"), Resolution::Resolved(Gana::Deva));
        assert_eq!(resolve_yoni("Ashwini"), Resolution::Resolved(Yoni::Ashwa));
        assert_eq!(resolve_nadi("Ashwini"), Resolution::Resolved(Nadi::Aadi));
    }

    #[test]
    fn unknown_nakshatra_defaults() {
        assert_eq!(resolve_varna("Unknownstar"), Resolution::Defaulted(Varna::Shudra));
        assert_eq!(resolve_gana("Unknownstar"), Resolution::Defaulted(Gana::Manushya));
        assert_eq!(resolve_yoni("Unknownstar"), Resolution::Defaulted(Yoni::Ashwa));
        assert_eq!(resolve_nadi("Unknownstar"), Resolution::Defaulted(Nadi::Aadi));
    }

    #[test]
    fn unknown_rashi_defaults_by_role() {
        assert_eq!(resolve_vashya("Nowhere"), Resolution::Defaulted(Vashya::Manushya));
        assert_eq!(
            resolve_lord("Nowhere", PersonRole::Boy),
            Resolution::Defaulted(Graha::Surya)
        );
        assert_eq!(
            resolve_lord("Nowhere", PersonRole::Girl),
            Resolution::Defaulted(Graha::Chandra)
        );
    }

    #[test]
    fn lord_ignores_role_when_known() {
        assert_eq!(
            resolve_lord("Karka", PersonRole::Boy),
            resolve_lord("Karka", PersonRole::Girl)
        );
        assert_eq!(resolve_lord("Leo", PersonRole::Girl), Resolution::Resolved(Graha::Surya));
    }

    #[test]
    fn person_attributes_bundle() {
        let attrs = PersonAttributes::resolve("Hasta", "Kanya", PersonRole::Girl);
        assert_eq!(attrs.gana.category(), Gana::Deva);
        assert_eq!(attrs.yoni.category(), Yoni::Mahisha);
        assert_eq!(attrs.vashya.category(), Vashya::Manushya);
        assert_eq!(attrs.lord.category(), Graha::Budha);
        assert!(!attrs.varna.is_defaulted());
    }
}
