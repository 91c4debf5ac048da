//! The eight Ashtakoot sub-scores.
//!
//! Every koota function takes the boy's input first and the girl's second.
//! None of them fail: unknown names are defaulted and tagged, and the two
//! ordinal-based kootas (Tara, Bhakoot) return a sentinel result instead.

pub mod bhakoot;
pub mod gana;
pub mod graha_maitri;
pub mod nadi;
pub mod tara;
pub mod varna;
pub mod vashya;
pub mod yoni;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use milan_vedic_base::{Nakshatra, Rashi, normalize_name};
use serde::Serialize;
use tracing::warn;

use crate::error::MilanError;
use crate::profile::{BirthProfile, PersonRole};
use crate::quality::DataQuality;

pub use bhakoot::{BhakootResult, bhakoot_koota};
pub use gana::{GanaResult, gana_koota};
pub use graha_maitri::{GrahaMaitriResult, graha_maitri_koota};
pub use nadi::{NadiResult, nadi_koota};
pub use tara::{TaraResult, tara_koota};
pub use varna::{VarnaResult, varna_koota};
pub use vashya::{VashyaResult, vashya_koota};
pub use yoni::{YoniResult, yoni_koota};

/// The eight kootas, in ascending order of weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    /// Maximum points (1 for Varna up to 8 for Nadi).
    pub const fn max_points(self) -> u8 {
        match self {
            Self::Varna => 1,
            Self::Vashya => 2,
            Self::Tara => 3,
            Self::Yoni => 4,
            Self::GrahaMaitri => 5,
            Self::Gana => 6,
            Self::Bhakoot => 7,
            Self::Nadi => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Whether this koota reads the moon sign rather than the nakshatra.
    pub const fn uses_moon_sign(self) -> bool {
        matches!(self, Self::Vashya | Self::GrahaMaitri | Self::Bhakoot)
    }

    /// Score this koota from the two names it reads (nakshatras, or moon
    /// signs when [`Koota::uses_moon_sign`] holds).
    pub fn score_names(self, boy: &str, girl: &str) -> KootaResult {
        for (name, role) in [(boy, PersonRole::Boy), (girl, PersonRole::Girl)] {
            if let Err(e) = self.check_name(name, role) {
                warn!(koota = self.name(), error = %e, "scoring with default category");
            }
        }
        match self {
            Self::Varna => varna_koota(boy, girl).into(),
            Self::Vashya => vashya_koota(boy, girl).into(),
            Self::Tara => tara_koota(boy, girl).into(),
            Self::Yoni => yoni_koota(boy, girl).into(),
            Self::GrahaMaitri => graha_maitri_koota(boy, girl).into(),
            Self::Gana => gana_koota(boy, girl).into(),
            Self::Bhakoot => bhakoot_koota(boy, girl).into(),
            Self::Nadi => nadi_koota(boy, girl).into(),
        }
    }

    /// Strict form of [`Koota::score_names`]: both names must be recognised.
    pub fn try_score_names(self, boy: &str, girl: &str) -> Result<KootaResult, MilanError> {
        self.check_name(boy, PersonRole::Boy)?;
        self.check_name(girl, PersonRole::Girl)?;
        Ok(self.score_names(boy, girl))
    }

    fn check_name(self, input: &str, role: PersonRole) -> Result<(), MilanError> {
        let known = if self.uses_moon_sign() {
            Rashi::from_name(input).is_some()
        } else {
            Nakshatra::from_name(input).is_some()
        };
        match (known, self.uses_moon_sign()) {
            (true, _) => Ok(()),
            (false, true) => Err(MilanError::UnknownRashi {
                role,
                input: input.to_string(),
            }),
            (false, false) => Err(MilanError::UnknownNakshatra {
                role,
                input: input.to_string(),
            }),
        }
    }

    /// Score this koota alone for two profiles.
    pub fn evaluate(self, boy: &BirthProfile, girl: &BirthProfile) -> KootaResult {
        if self.uses_moon_sign() {
            self.score_names(&boy.moon_sign, &girl.moon_sign)
        } else {
            self.score_names(&boy.nakshatra, &girl.nakshatra)
        }
    }
}

impl Display for Koota {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Koota {
    type Err = MilanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "varna" => Ok(Self::Varna),
            "vashya" => Ok(Self::Vashya),
            "tara" => Ok(Self::Tara),
            "yoni" => Ok(Self::Yoni),
            "graha" | "grahamaitri" | "maitri" => Ok(Self::GrahaMaitri),
            "gana" => Ok(Self::Gana),
            "bhakoot" | "rashi" => Ok(Self::Bhakoot),
            "nadi" => Ok(Self::Nadi),
            _ => Err(MilanError::UnknownKoota(s.to_string())),
        }
    }
}

/// Common view over every koota result.
pub trait KootaScore {
    fn koota(&self) -> Koota;

    fn score(&self) -> u8;

    fn description(&self) -> &'static str;

    fn data_quality(&self) -> DataQuality;

    fn max_points(&self) -> u8 {
        self.koota().max_points()
    }
}

macro_rules! impl_koota_score {
    ($($ty:ty => $koota:expr),+ $(,)?) => {
        $(
            impl KootaScore for $ty {
                fn koota(&self) -> Koota {
                    $koota
                }

                fn score(&self) -> u8 {
                    self.score
                }

                fn description(&self) -> &'static str {
                    self.description
                }

                fn data_quality(&self) -> DataQuality {
                    self.data_quality
                }
            }
        )+
    };
}

impl_koota_score!(
    VarnaResult => Koota::Varna,
    VashyaResult => Koota::Vashya,
    TaraResult => Koota::Tara,
    YoniResult => Koota::Yoni,
    GrahaMaitriResult => Koota::GrahaMaitri,
    GanaResult => Koota::Gana,
    BhakootResult => Koota::Bhakoot,
    NadiResult => Koota::Nadi,
);

/// Any single koota result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KootaResult {
    Varna(VarnaResult),
    Vashya(VashyaResult),
    Tara(TaraResult),
    Yoni(YoniResult),
    GrahaMaitri(GrahaMaitriResult),
    Gana(GanaResult),
    Bhakoot(BhakootResult),
    Nadi(NadiResult),
}

impl KootaResult {
    fn inner(&self) -> &dyn KootaScore {
        match self {
            Self::Varna(r) => r,
            Self::Vashya(r) => r,
            Self::Tara(r) => r,
            Self::Yoni(r) => r,
            Self::GrahaMaitri(r) => r,
            Self::Gana(r) => r,
            Self::Bhakoot(r) => r,
            Self::Nadi(r) => r,
        }
    }
}

impl KootaScore for KootaResult {
    fn koota(&self) -> Koota {
        self.inner().koota()
    }

    fn score(&self) -> u8 {
        self.inner().score()
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }

    fn data_quality(&self) -> DataQuality {
        self.inner().data_quality()
    }
}

macro_rules! koota_result_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for KootaResult {
                fn from(r: $ty) -> Self {
                    Self::$variant(r)
                }
            }
        )+
    };
}

koota_result_from!(
    Varna(VarnaResult),
    Vashya(VashyaResult),
    Tara(TaraResult),
    Yoni(YoniResult),
    GrahaMaitri(GrahaMaitriResult),
    Gana(GanaResult),
    Bhakoot(BhakootResult),
    Nadi(NadiResult),
);
