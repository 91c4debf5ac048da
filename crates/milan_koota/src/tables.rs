//! Static attribute mappings and compatibility matrices.
//!
//! Matrices are indexed `[boy][girl]` by the category's `index()`. Varna,
//! Gana and Graha Maitri are directional and must never be read transposed.
//! Distance tables (Tara, Bhakoot) are 1-based; slot 0 is unused.

use milan_vedic_base::{Nakshatra, Rashi};

use crate::category::{Gana, Nadi, Varna, Vashya, Yoni};

// ---------------------------------------------------------------------------
// Nakshatra / Rashi attribute mappings
// ---------------------------------------------------------------------------

/// Varna per nakshatra, cycling Brahmin → Kshatriya → Vaishya → Shudra from Ashwini.
///
/// Placeholder scheme: classical texts assign varna by moon sign (water
/// signs Brahmin, fire Kshatriya, earth Vaishya, air Shudra), not by this
/// cycle. It is kept because existing scores depend on it; replace it with
/// a sourced nakshatra-varna list before treating Varna points as classical.
pub const NAKSHATRA_VARNA: [Varna; 27] = {
    const CYCLE: [Varna; 4] = [Varna::Brahmin, Varna::Kshatriya, Varna::Vaishya, Varna::Shudra];
    let mut out = [Varna::Brahmin; 27];
    let mut i = 0;
    while i < 27 {
        out[i] = CYCLE[i % 4];
        i += 1;
    }
    out
};

/// Gana per nakshatra (9 Deva, 9 Manushya, 9 Rakshasa).
pub const NAKSHATRA_GANA: [Gana; 27] = {
    use Gana::*;
    [
        Deva,     // Ashwini
        Manushya, // Bharani
        Rakshasa, // Krittika
        Manushya, // Rohini
        Deva,     // Mrigashira
        Manushya, // Ardra
        Deva,     // Punarvasu
        Deva,     // Pushya
        Rakshasa, // Ashlesha
        Rakshasa, // Magha
        Manushya, // Purva Phalguni
        Manushya, // Uttara Phalguni
        Deva,     // Hasta
        Rakshasa, // Chitra
        Deva,     // Swati
        Rakshasa, // Vishakha
        Deva,     // Anuradha
        Rakshasa, // Jyeshtha
        Rakshasa, // Mula
        Manushya, // Purva Ashadha
        Manushya, // Uttara Ashadha
        Deva,     // Shravana
        Rakshasa, // Dhanishtha
        Rakshasa, // Shatabhisha
        Manushya, // Purva Bhadrapada
        Manushya, // Uttara Bhadrapada
        Deva,     // Revati
    ]
};

/// Yoni per nakshatra. Every yoni except Nakula covers two nakshatras;
/// Nakula's second nakshatra is Abhijit, which is outside the 27-scheme.
pub const NAKSHATRA_YONI: [Yoni; 27] = {
    use Yoni::*;
    [
        Ashwa,   // Ashwini
        Gaja,    // Bharani
        Mesha,   // Krittika
        Sarpa,   // Rohini
        Sarpa,   // Mrigashira
        Shwan,   // Ardra
        Marjara, // Punarvasu
        Mesha,   // Pushya
        Marjara, // Ashlesha
        Mushaka, // Magha
        Mushaka, // Purva Phalguni
        Go,      // Uttara Phalguni
        Mahisha, // Hasta
        Vyaghra, // Chitra
        Mahisha, // Swati
        Vyaghra, // Vishakha
        Mriga,   // Anuradha
        Mriga,   // Jyeshtha
        Shwan,   // Mula
        Vanara,  // Purva Ashadha
        Nakula,  // Uttara Ashadha
        Vanara,  // Shravana
        Simha,   // Dhanishtha
        Ashwa,   // Shatabhisha
        Simha,   // Purva Bhadrapada
        Go,      // Uttara Bhadrapada
        Gaja,    // Revati
    ]
};

/// Nadi per nakshatra, zig-zagging Aadi → Madhya → Antya → Antya → Madhya → Aadi.
pub const NAKSHATRA_NADI: [Nadi; 27] = {
    const ZIGZAG: [Nadi; 6] = [Nadi::Aadi, Nadi::Madhya, Nadi::Antya, Nadi::Antya, Nadi::Madhya, Nadi::Aadi];
    let mut out = [Nadi::Aadi; 27];
    let mut i = 0;
    while i < 27 {
        out[i] = ZIGZAG[i % 6];
        i += 1;
    }
    out
};

/// Vashya group per rashi. Dual-natured signs take the group of their
/// dominant half (Dhanu → Manushya, Makara → Jalochara).
pub const RASHI_VASHYA: [Vashya; 12] = {
    use Vashya::*;
    [
        Chatushpada, // Mesha
        Chatushpada, // Vrishabha
        Manushya,    // Mithuna
        Jalochara,   // Karka
        Vanachara,   // Simha
        Manushya,    // Kanya
        Manushya,    // Tula
        Keetochara,  // Vrischika
        Manushya,    // Dhanu
        Jalochara,   // Makara
        Manushya,    // Kumbha
        Jalochara,   // Meena
    ]
};

pub const fn varna_of(nakshatra: Nakshatra) -> Varna {
    NAKSHATRA_VARNA[nakshatra.index() as usize]
}

pub const fn gana_of(nakshatra: Nakshatra) -> Gana {
    NAKSHATRA_GANA[nakshatra.index() as usize]
}

pub const fn yoni_of(nakshatra: Nakshatra) -> Yoni {
    NAKSHATRA_YONI[nakshatra.index() as usize]
}

pub const fn nadi_of(nakshatra: Nakshatra) -> Nadi {
    NAKSHATRA_NADI[nakshatra.index() as usize]
}

pub const fn vashya_of(rashi: Rashi) -> Vashya {
    RASHI_VASHYA[rashi.index() as usize]
}

// ---------------------------------------------------------------------------
// Compatibility matrices
// ---------------------------------------------------------------------------

/// Varna: 1 when the boy's varna ranks at or above the girl's.
pub const VARNA_COMPATIBILITY: [[u8; 4]; 4] = [
    // Brahmin Kshatriya Vaishya Shudra  (girl)
    [1, 1, 1, 1], // Brahmin
    [0, 1, 1, 1], // Kshatriya
    [0, 0, 1, 1], // Vaishya
    [0, 0, 0, 1], // Shudra
];

/// Vashya: same group 2; predator/prey pairs with the wild group 0.
pub const VASHYA_COMPATIBILITY: [[u8; 5]; 5] = [
    // Chat Vana Jalo Keet Manu
    [2, 0, 1, 1, 1], // Chatushpada
    [0, 2, 1, 0, 0], // Vanachara
    [1, 1, 2, 1, 1], // Jalochara
    [1, 0, 1, 2, 1], // Keetochara
    [1, 0, 1, 1, 2], // Manushya
];

/// Tara points by distance 1..=27 (three per nine-tara cycle).
pub const TARA_POINTS: [u8; 28] = [
    0, // unused
    3, 0, 1, 3, 0, 1, 3, 0, 1, // 1-9
    3, 0, 1, 3, 0, 1, 3, 0, 1, // 10-18
    3, 0, 1, 3, 0, 1, 3, 0, 1, // 19-27
];

/// Yoni: full 14 x 14 classical table. Symmetric; the seven sworn-enemy
/// pairs (horse/buffalo, elephant/lion, sheep/monkey, serpent/mongoose,
/// dog/deer, cat/rat, cow/tiger) score 0.
pub const YONI_COMPATIBILITY: [[u8; 14]; 14] = [
    // Ash Gaj Mes Sar Shw Mar Mus Go Mah Vya Mri Van Nak Sim
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1], // Ashwa
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0], // Gaja
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1], // Mesha
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2], // Sarpa
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1], // Shwan
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1], // Marjara
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2], // Mushaka
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1], // Go
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1], // Mahisha
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1], // Vyaghra
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1], // Mriga
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2], // Vanara
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2], // Nakula
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4], // Simha
];

/// Graha Maitri by rashi lords, in `SAPTA_GRAHAS` order.
///
/// Built from naisargika friendship read both ways (boy's view, girl's view):
/// FF 5, FN/NF 4, NN 3, FE/EF 1, NE 1, EN 0, EE 0. Same lord scores 5.
pub const GRAHA_MAITRI_POINTS: [[u8; 7]; 7] = [
    // Sur Cha Man Bud Gur Shu Sha
    [5, 5, 5, 4, 5, 0, 0], // Surya
    [5, 5, 4, 1, 4, 1, 1], // Chandra
    [5, 4, 5, 0, 5, 3, 1], // Mangal
    [4, 1, 1, 5, 1, 5, 4], // Budha
    [5, 4, 5, 0, 5, 0, 3], // Guru
    [0, 0, 3, 5, 1, 5, 5], // Shukra
    [0, 0, 0, 4, 3, 5, 5], // Shani
];

/// Gana: directional; a Deva boy tolerates a Manushya girl better than the reverse.
pub const GANA_COMPATIBILITY: [[u8; 3]; 3] = [
    // Deva Manu Rakh
    [6, 6, 1], // Deva
    [5, 6, 0], // Manushya
    [1, 0, 6], // Rakshasa
];

/// Bhakoot points by sign relation 1..=12 (the n-th sign from the other).
///
/// 2/12, 5/9 and 6/8 relations carry dosha and score 0; 1/1, 3/11, 4/10
/// and 7/7 score 7. The engine only reaches keys 1..=7.
pub const BHAKOOT_POINTS: [u8; 13] = [
    0, // unused
    7, 0, 7, 7, 0, 0, 7, 0, 0, 7, 7, 0,
];

/// Nadi: same nadi is dosha (0), different nadi scores the full 8.
pub const NADI_COMPATIBILITY: [[u8; 3]; 3] = [
    [0, 8, 8], // Aadi
    [8, 0, 8], // Madhya
    [8, 8, 0], // Antya
];

/// Safe matrix lookup; out-of-range keys score 0.
pub fn lookup<const N: usize>(table: &[[u8; N]; N], row: usize, col: usize) -> u8 {
    table
        .get(row)
        .and_then(|r| r.get(col))
        .copied()
        .unwrap_or(0)
}

/// Safe distance-table lookup; out-of-range keys score 0.
pub fn lookup_distance(table: &[u8], key: usize) -> u8 {
    table.get(key).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{ALL_GANAS, ALL_NADIS, ALL_YONIS};
    use milan_vedic_base::{
        ALL_NAKSHATRAS_27, Graha, NaisargikaMaitri, SAPTA_GRAHAS, naisargika_maitri,
    };

    fn maitri_points(boy_view: NaisargikaMaitri, girl_view: NaisargikaMaitri) -> u8 {
        use NaisargikaMaitri::*;
        match (boy_view, girl_view) {
            (Friend, Friend) => 5,
            (Friend, Neutral) | (Neutral, Friend) => 4,
            (Neutral, Neutral) => 3,
            (Friend, Enemy) | (Enemy, Friend) => 1,
            (Neutral, Enemy) => 1,
            (Enemy, Neutral) | (Enemy, Enemy) => 0,
        }
    }

    #[test]
    fn graha_table_matches_naisargika_friendship() {
        for boy in SAPTA_GRAHAS {
            for girl in SAPTA_GRAHAS {
                let expected = if boy == girl {
                    5
                } else {
                    maitri_points(naisargika_maitri(boy, girl), naisargika_maitri(girl, boy))
                };
                assert_eq!(
                    GRAHA_MAITRI_POINTS[boy.index() as usize][girl.index() as usize],
                    expected,
                    "{boy} -> {girl}"
                );
            }
        }
    }

    #[test]
    fn graha_table_is_directional() {
        let c = Graha::Chandra.index() as usize;
        let k = Graha::Shukra.index() as usize;
        assert_ne!(GRAHA_MAITRI_POINTS[c][k], GRAHA_MAITRI_POINTS[k][c]);
    }

    #[test]
    fn yoni_table_is_symmetric_with_full_diagonal() {
        for a in ALL_YONIS {
            assert_eq!(YONI_COMPATIBILITY[a.index()][a.index()], 4);
            for b in ALL_YONIS {
                assert_eq!(
                    YONI_COMPATIBILITY[a.index()][b.index()],
                    YONI_COMPATIBILITY[b.index()][a.index()],
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn yoni_enemy_pairs() {
        let zeros: usize = YONI_COMPATIBILITY
            .iter()
            .map(|row| row.iter().filter(|&&v| v == 0).count())
            .sum();
        // seven pairs, each counted from both sides
        assert_eq!(zeros, 14);
        assert_eq!(YONI_COMPATIBILITY[Yoni::Marjara.index()][Yoni::Mushaka.index()], 0);
        assert_eq!(YONI_COMPATIBILITY[Yoni::Sarpa.index()][Yoni::Nakula.index()], 0);
    }

    #[test]
    fn every_yoni_is_reachable() {
        for y in ALL_YONIS {
            assert!(NAKSHATRA_YONI.contains(&y), "{y} never assigned");
        }
    }

    #[test]
    fn gana_and_nadi_split_evenly() {
        for g in ALL_GANAS {
            assert_eq!(NAKSHATRA_GANA.iter().filter(|&&x| x == g).count(), 9);
        }
        for n in ALL_NADIS {
            assert_eq!(NAKSHATRA_NADI.iter().filter(|&&x| x == n).count(), 9);
        }
    }

    #[test]
    fn nadi_classical_members() {
        assert_eq!(nadi_of(Nakshatra::Ashwini), Nadi::Aadi);
        assert_eq!(nadi_of(Nakshatra::Ardra), Nadi::Aadi);
        assert_eq!(nadi_of(Nakshatra::Bharani), Nadi::Madhya);
        assert_eq!(nadi_of(Nakshatra::Krittika), Nadi::Antya);
        assert_eq!(nadi_of(Nakshatra::Rohini), Nadi::Antya);
        assert_eq!(nadi_of(Nakshatra::PurvaBhadrapada), Nadi::Aadi);
        assert_eq!(nadi_of(Nakshatra::UttaraBhadrapada), Nadi::Madhya);
        assert_eq!(nadi_of(Nakshatra::Revati), Nadi::Antya);
    }

    #[test]
    fn nadi_diagonal_is_dosha() {
        for (i, row) in NADI_COMPATIBILITY.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                assert_eq!(v, if i == j { 0 } else { 8 });
            }
        }
    }

    #[test]
    fn varna_cycle_starts_at_brahmin() {
        assert_eq!(varna_of(Nakshatra::Ashwini), Varna::Brahmin);
        assert_eq!(varna_of(Nakshatra::Rohini), Varna::Shudra);
        assert_eq!(varna_of(Nakshatra::Mrigashira), Varna::Brahmin);
        assert_eq!(varna_of(Nakshatra::Revati), Varna::Vaishya);
    }

    #[test]
    fn varna_table_is_directional() {
        let b = Varna::Brahmin.index();
        let s = Varna::Shudra.index();
        assert_eq!(VARNA_COMPATIBILITY[b][s], 1);
        assert_eq!(VARNA_COMPATIBILITY[s][b], 0);
    }

    #[test]
    fn tara_table_values() {
        assert_eq!(TARA_POINTS.len(), 28);
        assert!(TARA_POINTS[1..].iter().all(|v| [0, 1, 3].contains(v)));
        assert_eq!(TARA_POINTS[2], 0);
    }

    #[test]
    fn bhakoot_table_follows_dosha_rule() {
        for n in 1..=12usize {
            // n-th from one side is (14 - n)-th from the other
            let reverse = if n == 1 { 1 } else { 14 - n };
            assert_eq!(BHAKOOT_POINTS[n], BHAKOOT_POINTS[reverse], "relation {n}/{reverse}");
            let dosha = matches!(n, 2 | 12 | 5 | 9 | 6 | 8);
            assert_eq!(BHAKOOT_POINTS[n] == 0, dosha, "relation {n}");
        }
    }

    #[test]
    fn vashya_mapping_spot_checks() {
        assert_eq!(vashya_of(Rashi::Mesha), Vashya::Chatushpada);
        assert_eq!(vashya_of(Rashi::Simha), Vashya::Vanachara);
        assert_eq!(vashya_of(Rashi::Vrischika), Vashya::Keetochara);
        assert_eq!(vashya_of(Rashi::Meena), Vashya::Jalochara);
    }

    #[test]
    fn lookup_out_of_range_is_zero() {
        assert_eq!(lookup(&GANA_COMPATIBILITY, 3, 0), 0);
        assert_eq!(lookup(&GANA_COMPATIBILITY, 0, 7), 0);
        assert_eq!(lookup_distance(&BHAKOOT_POINTS, 13), 0);
        assert_eq!(lookup_distance(&TARA_POINTS, 0), 0);
    }

    #[test]
    fn mappings_cover_every_nakshatra() {
        for n in ALL_NAKSHATRAS_27 {
            let _ = (varna_of(n), gana_of(n), yoni_of(n), nadi_of(n));
        }
    }
}
