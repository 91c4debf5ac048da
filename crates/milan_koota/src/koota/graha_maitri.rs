//! Graha Maitri koota (5 points): friendship of the moon-sign lords.

use milan_vedic_base::Graha;
use serde::Serialize;

use crate::attributes::resolve_lord;
use crate::profile::PersonRole;
use crate::quality::DataQuality;
use crate::tables::{GRAHA_MAITRI_POINTS, lookup};

pub const GRAHA_MAITRI_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrahaMaitriResult {
    pub score: u8,
    pub max: u8,
    pub boy_lord: Graha,
    pub girl_lord: Graha,
    pub description: &'static str,
    pub data_quality: DataQuality,
}

/// Score Graha Maitri from two moon-sign names. Directional: `[boy][girl]`.
pub fn graha_maitri_koota(boy_rashi: &str, girl_rashi: &str) -> GrahaMaitriResult {
    let boy = resolve_lord(boy_rashi, PersonRole::Boy);
    let girl = resolve_lord(girl_rashi, PersonRole::Girl);
    let score = lookup(
        &GRAHA_MAITRI_POINTS,
        boy.category().index() as usize,
        girl.category().index() as usize,
    );

    GrahaMaitriResult {
        score,
        max: GRAHA_MAITRI_MAX,
        boy_lord: boy.category(),
        girl_lord: girl.category(),
        description: describe(score),
        data_quality: DataQuality::of_pair(&boy, &girl),
    }
}

fn describe(score: u8) -> &'static str {
    match score {
        5.. => "Excellent mental compatibility",
        4 => "Good mental compatibility",
        3 => "Average mental compatibility",
        _ => "Mental incompatibility",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_lord_is_excellent() {
        // Mesha and Vrischika are both ruled by Mangal
        let r = graha_maitri_koota("Mesha", "Vrischika");
        assert_eq!(r.boy_lord, Graha::Mangal);
        assert_eq!(r.girl_lord, Graha::Mangal);
        assert_eq!(r.score, 5);
    }

    #[test]
    fn moon_and_venus_depend_on_direction() {
        // Karka = Chandra, Tula = Shukra
        assert_eq!(graha_maitri_koota("Karka", "Tula").score, 1);
        assert_eq!(graha_maitri_koota("Tula", "Karka").score, 0);
    }

    #[test]
    fn sun_and_saturn_are_hostile() {
        let r = graha_maitri_koota("Simha", "Makara");
        assert_eq!(r.score, 0);
        assert_eq!(r.description, "Mental incompatibility");
    }

    #[test]
    fn unknown_signs_default_by_role() {
        let r = graha_maitri_koota("", "");
        assert_eq!(r.boy_lord, Graha::Surya);
        assert_eq!(r.girl_lord, Graha::Chandra);
        assert_eq!(r.score, 5);
        assert_eq!(r.data_quality, DataQuality::Defaulted);
    }
}
