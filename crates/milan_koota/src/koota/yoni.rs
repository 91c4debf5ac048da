//! Yoni koota (4 points): physical compatibility by animal archetype.

use serde::Serialize;

use crate::attributes::resolve_yoni;
use crate::category::Yoni;
use crate::quality::DataQuality;
use crate::tables::{YONI_COMPATIBILITY, lookup};

pub const YONI_MAX: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoniResult {
    pub score: u8,
    pub max: u8,
    pub boy_yoni: Yoni,
    pub girl_yoni: Yoni,
    pub description: &'static str,
    pub data_quality: DataQuality,
}

/// Score Yoni from two nakshatra names.
pub fn yoni_koota(boy_nakshatra: &str, girl_nakshatra: &str) -> YoniResult {
    let boy = resolve_yoni(boy_nakshatra);
    let girl = resolve_yoni(girl_nakshatra);
    let score = lookup(
        &YONI_COMPATIBILITY,
        boy.category().index(),
        girl.category().index(),
    );

    YoniResult {
        score,
        max: YONI_MAX,
        boy_yoni: boy.category(),
        girl_yoni: girl.category(),
        description: describe(score),
        data_quality: DataQuality::of_pair(&boy, &girl),
    }
}

fn describe(score: u8) -> &'static str {
    match score {
        4.. => "Excellent physical compatibility",
        3 => "Good physical compatibility",
        2 => "Average physical compatibility",
        1 => "Poor physical compatibility",
        0 => "Enemy yoni",
    }
}
