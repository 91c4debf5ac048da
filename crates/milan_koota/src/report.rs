//! Aggregation of the eight kootas into a 36-point report.

use milan_vedic_base::{Nakshatra, Rashi};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::MilanError;
use crate::koota::{
    BhakootResult, GanaResult, GrahaMaitriResult, KootaResult, KootaScore, NadiResult,
    TaraResult, VarnaResult, VashyaResult, YoniResult, bhakoot_koota, gana_koota,
    graha_maitri_koota, nadi_koota, tara_koota, varna_koota, vashya_koota, yoni_koota,
};
use crate::profile::{BirthProfile, PersonRole};
use crate::quality::DataQuality;

/// Maximum Ashtakoot score.
pub const MAX_SCORE: u8 = 36;

/// Classification band for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchVerdict {
    /// Below 18.
    NotRecommended,
    /// 18 to 24.
    Average,
    /// 25 to 32.
    VeryGood,
    /// 33 to 36.
    Excellent,
}

impl MatchVerdict {
    pub const fn from_total(total: u8) -> Self {
        match total {
            0..=17 => Self::NotRecommended,
            18..=24 => Self::Average,
            25..=32 => Self::VeryGood,
            _ => Self::Excellent,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotRecommended => "Not recommended",
            Self::Average => "Average match",
            Self::VeryGood => "Very good match",
            Self::Excellent => "Excellent match",
        }
    }
}

/// Full Gun Milan result for one boy/girl pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GunMilanReport {
    pub total_score: u8,
    pub max_score: u8,
    pub percentage: u8,
    pub verdict: MatchVerdict,
    /// Worst data quality across the eight kootas.
    pub data_quality: DataQuality,
    pub varna: VarnaResult,
    pub vashya: VashyaResult,
    pub tara: TaraResult,
    pub yoni: YoniResult,
    pub graha: GrahaMaitriResult,
    pub gana: GanaResult,
    pub rashi: BhakootResult,
    pub nadi: NadiResult,
}

impl GunMilanReport {
    /// The eight results in koota order (Varna first, Nadi last).
    pub fn kootas(&self) -> [KootaResult; 8] {
        [
            self.varna.into(),
            self.vashya.into(),
            self.tara.into(),
            self.yoni.into(),
            self.graha.into(),
            self.gana.into(),
            self.rashi.into(),
            self.nadi.into(),
        ]
    }

    /// True when Nadi or Bhakoot dosha is present.
    pub fn has_major_dosha(&self) -> bool {
        self.nadi.dosha || (self.rashi.distance.is_some() && self.rashi.score == 0)
    }
}

/// `round(total / 36 * 100)`.
pub fn percentage(total: u8) -> u8 {
    ((total as f64 / MAX_SCORE as f64) * 100.0).round() as u8
}

/// Score a boy/girl pair.
///
/// Never fails: unknown names are defaulted (or, for Tara and Bhakoot,
/// scored with the invalid sentinel) and reflected in `data_quality`.
pub fn calculate_gun_milan(boy: &BirthProfile, girl: &BirthProfile) -> GunMilanReport {
    warn_unrecognised(boy, PersonRole::Boy);
    warn_unrecognised(girl, PersonRole::Girl);

    let varna = varna_koota(&boy.nakshatra, &girl.nakshatra);
    let vashya = vashya_koota(&boy.moon_sign, &girl.moon_sign);
    let tara = tara_koota(&boy.nakshatra, &girl.nakshatra);
    let yoni = yoni_koota(&boy.nakshatra, &girl.nakshatra);
    let graha = graha_maitri_koota(&boy.moon_sign, &girl.moon_sign);
    let gana = gana_koota(&boy.nakshatra, &girl.nakshatra);
    let rashi = bhakoot_koota(&boy.moon_sign, &girl.moon_sign);
    let nadi = nadi_koota(&boy.nakshatra, &girl.nakshatra);

    let scores: [&dyn KootaScore; 8] =
        [&varna, &vashya, &tara, &yoni, &graha, &gana, &rashi, &nadi];
    let total_score: u8 = scores.iter().map(|k| k.score()).sum();
    let data_quality = scores
        .iter()
        .map(|k| k.data_quality())
        .fold(DataQuality::Confident, DataQuality::worst);

    debug!(
        boy = %boy.nakshatra,
        girl = %girl.nakshatra,
        total_score,
        quality = data_quality.name(),
        "gun milan computed"
    );

    GunMilanReport {
        total_score,
        max_score: MAX_SCORE,
        percentage: percentage(total_score),
        verdict: MatchVerdict::from_total(total_score),
        data_quality,
        varna,
        vashya,
        tara,
        yoni,
        graha,
        gana,
        rashi,
        nadi,
    }
}

fn warn_unrecognised(profile: &BirthProfile, role: PersonRole) {
    let fields = profile.unrecognised_fields();
    if !fields.is_empty() {
        warn!(
            %role,
            nakshatra = %profile.nakshatra,
            moon_sign = %profile.moon_sign,
            ?fields,
            "unrecognised birth data, affected kootas use defaults"
        );
    }
}

/// Score a pair from already-parsed signs.
pub fn calculate_from_signs(
    boy_nakshatra: Nakshatra,
    boy_rashi: Rashi,
    girl_nakshatra: Nakshatra,
    girl_rashi: Rashi,
) -> GunMilanReport {
    calculate_gun_milan(
        &BirthProfile::from_signs(boy_nakshatra, boy_rashi),
        &BirthProfile::from_signs(girl_nakshatra, girl_rashi),
    )
}

fn parse_profile(
    profile: &BirthProfile,
    role: PersonRole,
) -> Result<(Nakshatra, Rashi), MilanError> {
    let nakshatra =
        Nakshatra::from_name(&profile.nakshatra).ok_or_else(|| MilanError::UnknownNakshatra {
            role,
            input: profile.nakshatra.clone(),
        })?;
    let rashi = Rashi::from_name(&profile.moon_sign).ok_or_else(|| MilanError::UnknownRashi {
        role,
        input: profile.moon_sign.clone(),
    })?;
    Ok((nakshatra, rashi))
}

/// Strict variant of [`calculate_gun_milan`]: rejects unknown names.
///
/// On success the report is identical to the lenient one and every koota
/// is tagged [`DataQuality::Confident`].
pub fn try_calculate_gun_milan(
    boy: &BirthProfile,
    girl: &BirthProfile,
) -> Result<GunMilanReport, MilanError> {
    let (boy_nakshatra, boy_rashi) = parse_profile(boy, PersonRole::Boy)?;
    let (girl_nakshatra, girl_rashi) = parse_profile(girl, PersonRole::Girl)?;
    Ok(calculate_from_signs(boy_nakshatra, boy_rashi, girl_nakshatra, girl_rashi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_bands() {
        assert_eq!(MatchVerdict::from_total(0), MatchVerdict::NotRecommended);
        assert_eq!(MatchVerdict::from_total(17), MatchVerdict::NotRecommended);
        assert_eq!(MatchVerdict::from_total(18), MatchVerdict::Average);
        assert_eq!(MatchVerdict::from_total(24), MatchVerdict::Average);
        assert_eq!(MatchVerdict::from_total(25), MatchVerdict::VeryGood);
        assert_eq!(MatchVerdict::from_total(32), MatchVerdict::VeryGood);
        assert_eq!(MatchVerdict::from_total(33), MatchVerdict::Excellent);
        assert_eq!(MatchVerdict::from_total(36), MatchVerdict::Excellent);
    }

    #[test]
    fn percentage_rounds() {
        assert_eq!(percentage(0), 0);
        assert_eq!(percentage(18), 50);
        assert_eq!(percentage(25), 69); // 69.44
        assert_eq!(percentage(26), 72); // 72.22
        assert_eq!(percentage(36), 100);
    }

    #[test]
    fn total_is_sum_of_kootas() {
        let r = calculate_gun_milan(
            &BirthProfile::new("Rohini", "Vrishabha"),
            &BirthProfile::new("Hasta", "Kanya"),
        );
        let sum: u8 = r.kootas().iter().map(|k| k.score()).sum();
        assert_eq!(r.total_score, sum);
        assert_eq!(r.max_score, 36);
    }

    #[test]
    fn strict_rejects_unknown_nakshatra() {
        let err = try_calculate_gun_milan(
            &BirthProfile::new("Ashwini", "Mesha"),
            &BirthProfile::new("Unknownstar", "Mesha"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MilanError::UnknownNakshatra {
                role: PersonRole::Girl,
                input: "Unknownstar".to_string()
            }
        );
    }

    #[test]
    fn strict_rejects_unknown_rashi() {
        let err = try_calculate_gun_milan(
            &BirthProfile::new("Ashwini", "Ophiuchus"),
            &BirthProfile::new("Bharani", "Mesha"),
        )
        .unwrap_err();
        assert!(matches!(err, MilanError::UnknownRashi { role: PersonRole::Boy, .. }));
    }

    #[test]
    fn strict_matches_lenient_on_valid_input() {
        let boy = BirthProfile::new("purva phalguni", "leo");
        let girl = BirthProfile::new("Anuradha", "Vrischika");
        let strict = try_calculate_gun_milan(&boy, &girl).unwrap();
        let lenient = calculate_gun_milan(&boy, &girl);
        assert_eq!(strict.total_score, lenient.total_score);
        assert_eq!(strict.data_quality, DataQuality::Confident);
    }

    #[test]
    fn defaulted_input_marks_report() {
        let r = calculate_gun_milan(
            &BirthProfile::new("Unknownstar", "Mesha"),
            &BirthProfile::new("Ashwini", "Mesha"),
        );
        assert_eq!(r.data_quality, DataQuality::Invalid);
        assert_eq!(r.varna.data_quality, DataQuality::Defaulted);
        assert_eq!(r.vashya.data_quality, DataQuality::Confident);
    }
}
