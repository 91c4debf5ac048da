//! End-to-end scenarios for the Gun Milan aggregator.

use milan_koota::{
    ALL_KOOTAS, BirthProfile, DataQuality, Koota, KootaScore, MatchVerdict, MilanError,
    PersonRole, Varna, calculate_from_signs, calculate_gun_milan, tara_koota,
    try_calculate_gun_milan, varna_koota,
};
use milan_vedic_base::{Nakshatra, Rashi};
use pretty_assertions::assert_eq;
use serde_json::json;

// ---------------------------------------------------------------------------
// Single-koota scenarios
// ---------------------------------------------------------------------------

#[test]
fn same_nakshatra_varna_gana_nadi() {
    let r = calculate_gun_milan(
        &BirthProfile::new("Ashwini", "Mesha"),
        &BirthProfile::new("Ashwini", "Mesha"),
    );
    assert_eq!(r.varna.boy_varna, Varna::Brahmin);
    assert_eq!(r.varna.score, 1);
    assert_eq!(r.gana.score, 6);
    assert_eq!(r.nadi.score, 0);
    assert!(r.nadi.dosha);
}

#[test]
fn same_rashi_vashya_and_bhakoot() {
    let r = calculate_gun_milan(
        &BirthProfile::new("Ashwini", "Mesha"),
        &BirthProfile::new("Bharani", "Mesha"),
    );
    assert_eq!(r.vashya.score, 2);
    assert_eq!(r.vashya.description, "Excellent dominance compatibility");
    assert_eq!(r.rashi.distance, Some(1));
    assert_eq!(r.rashi.score, 7);
}

#[test]
fn adjacent_nakshatras_tara() {
    let t = tara_koota("Ashwini", "Bharani");
    assert_eq!(t.distance, Some(2));
    assert_eq!(t.score, 0);
    assert_eq!(t.description, "Unfavorable Tara");
}

#[test]
fn unknown_nakshatra_defaults_varna_but_invalidates_tara() {
    let v = varna_koota("Unknownstar", "Ashwini");
    assert_eq!(v.boy_varna, Varna::Shudra);
    assert_eq!(v.data_quality, DataQuality::Defaulted);

    let t = tara_koota("Unknownstar", "Ashwini");
    assert_eq!(t.score, 0);
    assert_eq!(t.max, 3);
    assert_eq!(t.description, "Invalid nakshatra data");
    assert_eq!(t.data_quality, DataQuality::Invalid);
}

// ---------------------------------------------------------------------------
// Aggregate scenarios
// ---------------------------------------------------------------------------

#[test]
fn self_match_sums_sub_scores() {
    for &n in Nakshatra::all() {
        for &r in Rashi::all() {
            let report = calculate_from_signs(n, r, n, r);
            let sum: u8 = report.kootas().iter().map(|k| k.score()).sum();
            assert_eq!(report.total_score, sum, "{n}/{r}");
            // Same nadi always carries dosha, so a self-match never reaches 36.
            assert!(report.nadi.dosha);
            assert!(report.total_score <= 28, "{n}/{r}: {}", report.total_score);
        }
    }
}

#[test]
fn kootas_come_back_in_order() {
    let report = calculate_gun_milan(
        &BirthProfile::new("Rohini", "Vrishabha"),
        &BirthProfile::new("Hasta", "Kanya"),
    );
    let order: Vec<Koota> = report.kootas().iter().map(|k| k.koota()).collect();
    assert_eq!(order, ALL_KOOTAS.to_vec());
}

#[test]
fn report_json_shape() {
    let report = calculate_gun_milan(
        &BirthProfile::new("Ashwini", "Mesha"),
        &BirthProfile::new("Ashwini", "Mesha"),
    );
    let value = serde_json::to_value(report).unwrap();
    let expected = json!({
        "totalScore": 28,
        "maxScore": 36,
        "percentage": 78,
        "verdict": "veryGood",
        "dataQuality": "confident",
        "varna": {
            "score": 1, "max": 1,
            "boyVarna": "Brahmin", "girlVarna": "Brahmin",
            "description": "Compatible varna", "dataQuality": "confident"
        },
        "vashya": {
            "score": 2, "max": 2,
            "boyVashya": "Chatushpada", "girlVashya": "Chatushpada",
            "description": "Excellent dominance compatibility", "dataQuality": "confident"
        },
        "tara": {
            "score": 3, "max": 3, "distance": 1,
            "description": "Favorable Tara", "dataQuality": "confident"
        },
        "yoni": {
            "score": 4, "max": 4,
            "boyYoni": "Ashwa", "girlYoni": "Ashwa",
            "description": "Excellent physical compatibility", "dataQuality": "confident"
        },
        "graha": {
            "score": 5, "max": 5,
            "boyLord": "Mangal", "girlLord": "Mangal",
            "description": "Excellent mental compatibility", "dataQuality": "confident"
        },
        "gana": {
            "score": 6, "max": 6,
            "boyGana": "Deva", "girlGana": "Deva",
            "description": "Perfect temperament match", "dataQuality": "confident"
        },
        "rashi": {
            "score": 7, "max": 7, "distance": 1,
            "boyRashi": "Mesha", "girlRashi": "Mesha",
            "description": "No Bhakoot dosha", "dataQuality": "confident"
        },
        "nadi": {
            "score": 0, "max": 8,
            "boyNadi": "Aadi", "girlNadi": "Aadi",
            "description": "Nadi dosha present", "dosha": true, "dataQuality": "confident"
        }
    });
    assert_eq!(value, expected);
}

#[test]
fn invalid_tara_omits_distance_in_json() {
    let report = calculate_gun_milan(
        &BirthProfile::new("Unknownstar", "Mesha"),
        &BirthProfile::new("Ashwini", "Mesha"),
    );
    let value = serde_json::to_value(report).unwrap();
    assert!(value["tara"].get("distance").is_none());
    assert_eq!(value["tara"]["dataQuality"], "invalid");
    assert_eq!(value["dataQuality"], "invalid");
}

#[test]
fn good_match_verdict() {
    // Boy Magha/Simha, girl Hasta/Kanya: different nadis.
    let report = calculate_from_signs(Nakshatra::Magha, Rashi::Simha, Nakshatra::Hasta, Rashi::Kanya);
    assert!(!report.nadi.dosha);
    assert_eq!(report.verdict, MatchVerdict::from_total(report.total_score));
    assert_eq!(report.data_quality, DataQuality::Confident);
}

#[test]
fn lenient_accepts_aliases_and_case() {
    let a = calculate_gun_milan(
        &BirthProfile::new("poorva phalguni", "LEO"),
        &BirthProfile::new("ashvini", "aries"),
    );
    let b = calculate_from_signs(
        Nakshatra::PurvaPhalguni,
        Rashi::Simha,
        Nakshatra::Ashwini,
        Rashi::Mesha,
    );
    assert_eq!(a, b);
}

#[test]
fn strict_reports_role_and_input() {
    let err = try_calculate_gun_milan(
        &BirthProfile::new("Ashwini", "Mesha"),
        &BirthProfile::new("Hasta", "Atlantis"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        MilanError::UnknownRashi {
            role: PersonRole::Girl,
            input: "Atlantis".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown moon sign for girl: \"Atlantis\"");
}
