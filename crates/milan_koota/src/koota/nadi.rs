//! Nadi koota (8 points): humor; same nadi is Nadi dosha.

use serde::Serialize;

use crate::attributes::resolve_nadi;
use crate::category::Nadi;
use crate::quality::DataQuality;
use crate::tables::{NADI_COMPATIBILITY, lookup};

pub const NADI_MAX: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NadiResult {
    pub score: u8,
    pub max: u8,
    pub boy_nadi: Nadi,
    pub girl_nadi: Nadi,
    pub description: &'static str,
    /// Always equal to `score == 0`.
    pub dosha: bool,
    pub data_quality: DataQuality,
}

/// Score Nadi from two nakshatra names.
pub fn nadi_koota(boy_nakshatra: &str, girl_nakshatra: &str) -> NadiResult {
    let boy = resolve_nadi(boy_nakshatra);
    let girl = resolve_nadi(girl_nakshatra);
    let score = lookup(
        &NADI_COMPATIBILITY,
        boy.category().index(),
        girl.category().index(),
    );
    let dosha = score == 0;

    NadiResult {
        score,
        max: NADI_MAX,
        boy_nadi: boy.category(),
        girl_nadi: girl.category(),
        description: if dosha { "Nadi dosha present" } else { "No Nadi dosha" },
        dosha,
        data_quality: DataQuality::of_pair(&boy, &girl),
    }
}
