//! Gana koota (6 points): temperament.

use serde::Serialize;

use crate::attributes::resolve_gana;
use crate::category::Gana;
use crate::quality::DataQuality;
use crate::tables::{GANA_COMPATIBILITY, lookup};

pub const GANA_MAX: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanaResult {
    pub score: u8,
    pub max: u8,
    pub boy_gana: Gana,
    pub girl_gana: Gana,
    pub description: &'static str,
    pub data_quality: DataQuality,
}

/// Score Gana from two nakshatra names. Directional: `[boy][girl]`.
pub fn gana_koota(boy_nakshatra: &str, girl_nakshatra: &str) -> GanaResult {
    let boy = resolve_gana(boy_nakshatra);
    let girl = resolve_gana(girl_nakshatra);
    let score = lookup(
        &GANA_COMPATIBILITY,
        boy.category().index(),
        girl.category().index(),
    );

    GanaResult {
        score,
        max: GANA_MAX,
        boy_gana: boy.category(),
        girl_gana: girl.category(),
        description: describe(score),
        data_quality: DataQuality::of_pair(&boy, &girl),
    }
}

fn describe(score: u8) -> &'static str {
    match score {
        6.. => "Perfect temperament match",
        4 | 5 => "Good temperament compatibility",
        _ => "Temperament conflict",
    }
}
