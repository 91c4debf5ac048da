//! Bhakoot (Rashi) koota (7 points): relative placement of the moon signs.

use milan_vedic_base::Rashi;
use serde::Serialize;
use tracing::debug;

use crate::quality::DataQuality;
use crate::tables::{BHAKOOT_POINTS, lookup_distance};

pub const BHAKOOT_MAX: u8 = 7;

pub const INVALID_RASHI: &str = "Invalid rashi data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BhakootResult {
    pub score: u8,
    pub max: u8,
    /// Sign relation key `min(d, 12 - d) + 1`, always 1..=7.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u8>,
    pub boy_rashi: Option<Rashi>,
    pub girl_rashi: Option<Rashi>,
    pub description: &'static str,
    pub data_quality: DataQuality,
}

/// Shorter way round the zodiac between two ordinals, 0..=6.
pub fn min_sign_distance(from: u8, to: u8) -> u8 {
    let d1 = (to as i16 - from as i16).unsigned_abs() as u8;
    let d2 = 12 - d1;
    d1.min(d2)
}

/// Score Bhakoot from two moon-sign names.
pub fn bhakoot_koota(boy_rashi: &str, girl_rashi: &str) -> BhakootResult {
    let boy = Rashi::from_name(boy_rashi);
    let girl = Rashi::from_name(girl_rashi);

    let (Some(boy_sign), Some(girl_sign)) = (boy, girl) else {
        debug!(boy = boy_rashi, girl = girl_rashi, "bhakoot: rashi ordinal not found");
        return BhakootResult {
            score: 0,
            max: BHAKOOT_MAX,
            distance: None,
            boy_rashi: boy,
            girl_rashi: girl,
            description: INVALID_RASHI,
            data_quality: DataQuality::Invalid,
        };
    };

    let key = min_sign_distance(boy_sign.ordinal(), girl_sign.ordinal()) + 1;
    let score = lookup_distance(&BHAKOOT_POINTS, key as usize);

    BhakootResult {
        score,
        max: BHAKOOT_MAX,
        distance: Some(key),
        boy_rashi: boy,
        girl_rashi: girl,
        description: describe(score),
        data_quality: DataQuality::Confident,
    }
}

fn describe(score: u8) -> &'static str {
    if score > 0 { "No Bhakoot dosha" } else { "Bhakoot dosha present" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_sign_scores_full() {
        let r = bhakoot_koota("Mesha", "Mesha");
        assert_eq!(r.distance, Some(1));
        assert_eq!(r.score, 7);
    }

    #[test]
    fn second_twelfth_is_dosha() {
        let r = bhakoot_koota("Mesha", "Vrishabha");
        assert_eq!(r.distance, Some(2));
        assert_eq!(r.score, 0);
        assert_eq!(r.description, "Bhakoot dosha present");
        // Meena → Mesha wraps to the same relation
        assert_eq!(bhakoot_koota("Meena", "Mesha").distance, Some(2));
    }

    #[test]
    fn sixth_eighth_is_dosha() {
        // Mesha (1) → Kanya (6): d1 = 5, key 6
        assert_eq!(bhakoot_koota("Mesha", "Kanya").score, 0);
    }

    #[test]
    fn seventh_is_auspicious() {
        let r = bhakoot_koota("Mesha", "Tula");
        assert_eq!(r.distance, Some(7));
        assert_eq!(r.score, 7);
        assert_eq!(r.description, "No Bhakoot dosha");
    }

    #[test]
    fn min_distance_range() {
        for a in 1..=12u8 {
            for b in 1..=12u8 {
                assert!(min_sign_distance(a, b) <= 6);
            }
        }
    }

    #[test]
    fn unknown_rashi_is_invalid() {
        let r = bhakoot_koota("Mesha", "Ophiuchus");
        assert_eq!(r.score, 0);
        assert_eq!(r.distance, None);
        assert_eq!(r.boy_rashi, Some(Rashi::Mesha));
        assert_eq!(r.girl_rashi, None);
        assert_eq!(r.description, INVALID_RASHI);
        assert_eq!(r.data_quality, DataQuality::Invalid);
    }
}
