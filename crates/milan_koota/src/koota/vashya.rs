//! Vashya koota (2 points): mutual dominance by moon-sign group.

use serde::Serialize;

use crate::attributes::resolve_vashya;
use crate::category::Vashya;
use crate::quality::DataQuality;
use crate::tables::{VASHYA_COMPATIBILITY, lookup};

pub const VASHYA_MAX: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VashyaResult {
    pub score: u8,
    pub max: u8,
    pub boy_vashya: Vashya,
    pub girl_vashya: Vashya,
    pub description: &'static str,
    pub data_quality: DataQuality,
}

/// Score Vashya from two moon-sign names.
pub fn vashya_koota(boy_rashi: &str, girl_rashi: &str) -> VashyaResult {
    let boy = resolve_vashya(boy_rashi);
    let girl = resolve_vashya(girl_rashi);
    let score = lookup(
        &VASHYA_COMPATIBILITY,
        boy.category().index(),
        girl.category().index(),
    );

    VashyaResult {
        score,
        max: VASHYA_MAX,
        boy_vashya: boy.category(),
        girl_vashya: girl.category(),
        description: describe(score),
        data_quality: DataQuality::of_pair(&boy, &girl),
    }
}

fn describe(score: u8) -> &'static str {
    match score {
        2.. => "Excellent dominance compatibility",
        1 => "Moderate dominance compatibility",
        0 => "Dominance conflict",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_group_is_excellent() {
        let r = vashya_koota("Mesha", "Mesha");
        assert_eq!(r.boy_vashya, Vashya::Chatushpada);
        assert_eq!(r.girl_vashya, Vashya::Chatushpada);
        assert_eq!(r.score, 2);
        assert_eq!(r.description, "Excellent dominance compatibility");
    }

    #[test]
    fn lion_and_quadruped_conflict() {
        let r = vashya_koota("Simha", "Vrishabha");
        assert_eq!(r.score, 0);
        assert_eq!(r.description, "Dominance conflict");
    }

    #[test]
    fn human_and_water_is_moderate() {
        let r = vashya_koota("Mithuna", "Karka");
        assert_eq!(r.score, 1);
        assert_eq!(r.description, "Moderate dominance compatibility");
    }

    #[test]
    fn unknown_rashi_defaults_to_manushya() {
        let r = vashya_koota("Ophiuchus", "Tula");
        assert_eq!(r.boy_vashya, Vashya::Manushya);
        assert_eq!(r.score, 2);
        assert_eq!(r.data_quality, DataQuality::Defaulted);
    }
}
