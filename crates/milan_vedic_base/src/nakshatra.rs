//! Nakshatra (lunar mansion) list, name parsing, and longitude lookup.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, starting from Ashwini at 0 deg sidereal. Each
//! nakshatra has 4 padas (quarters) of 3 deg 20' each.
//!
//! The order of [`ALL_NAKSHATRAS_27`] is the only source of ordinals. Tara
//! distance in the matching engine is computed from [`Nakshatra::ordinal`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::VedicError;
use crate::util::{normalize_360, normalize_name};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Common alternate transliterations, keyed by [`normalize_name`] output.
const NAKSHATRA_ALIASES: &[(&str, Nakshatra)] = &[
    ("ashvini", Nakshatra::Ashwini),
    ("aswini", Nakshatra::Ashwini),
    ("krithika", Nakshatra::Krittika),
    ("kritika", Nakshatra::Krittika),
    ("mrigasira", Nakshatra::Mrigashira),
    ("mrigashirsha", Nakshatra::Mrigashira),
    ("arudra", Nakshatra::Ardra),
    ("ardhra", Nakshatra::Ardra),
    ("pushyami", Nakshatra::Pushya),
    ("pushyam", Nakshatra::Pushya),
    ("aslesha", Nakshatra::Ashlesha),
    ("ashlesa", Nakshatra::Ashlesha),
    ("makha", Nakshatra::Magha),
    ("poorvaphalguni", Nakshatra::PurvaPhalguni),
    ("hastha", Nakshatra::Hasta),
    ("chithra", Nakshatra::Chitra),
    ("swathi", Nakshatra::Swati),
    ("svati", Nakshatra::Swati),
    ("visakha", Nakshatra::Vishakha),
    ("vishaka", Nakshatra::Vishakha),
    ("jyestha", Nakshatra::Jyeshtha),
    ("jyeshta", Nakshatra::Jyeshtha),
    ("moola", Nakshatra::Mula),
    ("mool", Nakshatra::Mula),
    ("purvashadha", Nakshatra::PurvaAshadha),
    ("poorvashadha", Nakshatra::PurvaAshadha),
    ("uttarashadha", Nakshatra::UttaraAshadha),
    ("sravana", Nakshatra::Shravana),
    ("shravan", Nakshatra::Shravana),
    ("dhanishta", Nakshatra::Dhanishtha),
    ("shatabhishak", Nakshatra::Shatabhisha),
    ("satabhisha", Nakshatra::Shatabhisha),
    ("poorvabhadrapada", Nakshatra::PurvaBhadrapada),
    ("purvabhadra", Nakshatra::PurvaBhadrapada),
    ("uttarabhadra", Nakshatra::UttaraBhadrapada),
    ("revathi", Nakshatra::Revati),
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26), the position in [`ALL_NAKSHATRAS_27`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// 1-based ordinal (Ashwini=1 .. Revati=27).
    pub const fn ordinal(self) -> u8 {
        self.index() + 1
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }

    /// Look up a nakshatra by name.
    ///
    /// Case, spaces, hyphens and underscores are ignored; a few common
    /// alternate spellings are accepted. Returns None for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        ALL_NAKSHATRAS_27
            .iter()
            .copied()
            .find(|n| normalize_name(n.name()) == key)
            .or_else(|| {
                NAKSHATRA_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|&(_, n)| n)
            })
    }

    /// 1-based ordinal of a nakshatra name, or 0 when the name is not in the list.
    pub fn ordinal_of(name: &str) -> u8 {
        Self::from_name(name).map_or(0, Self::ordinal)
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| VedicError::UnknownNakshatra(s.to_string()))
    }
}

/// Result of a nakshatra lookup from longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
///
/// Each nakshatra spans 13 deg 20' (13.3333... deg). Each pada spans 3 deg 20'.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = (lon / NAKSHATRA_SPAN_27).floor() as u8;
    // Clamp to 26 in case of floating point edge (exactly 360.0)
    let nak_idx = nak_idx.min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = degrees_in_nakshatra - (pada_idx as f64) * PADA_SPAN;

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}
