//! Tara koota (3 points): birth-star distance.

use milan_vedic_base::Nakshatra;
use serde::Serialize;
use tracing::debug;

use crate::quality::DataQuality;
use crate::tables::{TARA_POINTS, lookup_distance};

pub const TARA_MAX: u8 = 3;

pub const INVALID_NAKSHATRA: &str = "Invalid nakshatra data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaraResult {
    pub score: u8,
    pub max: u8,
    /// Count from the boy's nakshatra to the girl's, 1..=27. None when
    /// either nakshatra could not be placed in the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u8>,
    pub description: &'static str,
    pub data_quality: DataQuality,
}

/// Forward count from ordinal `from` to ordinal `to`, both 1..=27.
pub fn tara_distance(from: u8, to: u8) -> u8 {
    let mut distance = (to as i32 - from as i32 + 27) % 27 + 1;
    if distance > 27 {
        distance -= 27;
    }
    distance as u8
}

/// Score Tara from two nakshatra names.
///
/// An unknown nakshatra has no ordinal, so this returns the invalid sentinel
/// rather than a defaulted category.
pub fn tara_koota(boy_nakshatra: &str, girl_nakshatra: &str) -> TaraResult {
    let boy_ord = Nakshatra::ordinal_of(boy_nakshatra);
    let girl_ord = Nakshatra::ordinal_of(girl_nakshatra);

    if boy_ord == 0 || girl_ord == 0 {
        debug!(
            boy = boy_nakshatra,
            girl = girl_nakshatra,
            "tara: nakshatra ordinal not found"
        );
        return TaraResult {
            score: 0,
            max: TARA_MAX,
            distance: None,
            description: INVALID_NAKSHATRA,
            data_quality: DataQuality::Invalid,
        };
    }

    let distance = tara_distance(boy_ord, girl_ord);
    let score = lookup_distance(&TARA_POINTS, distance as usize);

    TaraResult {
        score,
        max: TARA_MAX,
        distance: Some(distance),
        description: describe(score),
        data_quality: DataQuality::Confident,
    }
}

fn describe(score: u8) -> &'static str {
    match score {
        3.. => "Favorable Tara",
        1 | 2 => "Neutral Tara",
        0 => "Unfavorable Tara",
    }
}
