//! Varna koota (1 point): spiritual rank.

use serde::Serialize;

use crate::attributes::resolve_varna;
use crate::category::Varna;
use crate::quality::DataQuality;
use crate::tables::{VARNA_COMPATIBILITY, lookup};

pub const VARNA_MAX: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarnaResult {
    pub score: u8,
    pub max: u8,
    pub boy_varna: Varna,
    pub girl_varna: Varna,
    pub description: &'static str,
    pub data_quality: DataQuality,
}

/// Score Varna from two nakshatra names. Directional: `[boy][girl]`.
pub fn varna_koota(boy_nakshatra: &str, girl_nakshatra: &str) -> VarnaResult {
    let boy = resolve_varna(boy_nakshatra);
    let girl = resolve_varna(girl_nakshatra);
    let score = lookup(
        &VARNA_COMPATIBILITY,
        boy.category().index(),
        girl.category().index(),
    );

    VarnaResult {
        score,
        max: VARNA_MAX,
        boy_varna: boy.category(),
        girl_varna: girl.category(),
        description: describe(score),
        data_quality: DataQuality::of_pair(&boy, &girl),
    }
}

fn describe(score: u8) -> &'static str {
    if score > 0 { "Compatible varna" } else { "Varna mismatch" }
}
