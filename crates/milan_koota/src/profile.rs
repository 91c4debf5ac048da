//! Per-person input records.

use std::fmt::{Display, Formatter};

use milan_vedic_base::{Nakshatra, Rashi};
use serde::{Deserialize, Serialize};

/// Which side of the match a person is on.
///
/// Matrices are read `[boy][girl]`, so the role decides argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonRole {
    Boy,
    Girl,
}

impl PersonRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boy => "boy",
            Self::Girl => "girl",
        }
    }
}

impl Display for PersonRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Upstream birth-chart output consumed by the engine.
///
/// Names are taken as given; the lenient engine defaults unknown values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthProfile {
    pub nakshatra: String,
    pub moon_sign: String,
}

impl BirthProfile {
    pub fn new(nakshatra: impl Into<String>, moon_sign: impl Into<String>) -> Self {
        Self {
            nakshatra: nakshatra.into(),
            moon_sign: moon_sign.into(),
        }
    }

    /// Names of the fields that do not parse: `"nakshatra"`, `"moonSign"`.
    pub fn unrecognised_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if Nakshatra::from_name(&self.nakshatra).is_none() {
            fields.push("nakshatra");
        }
        if Rashi::from_name(&self.moon_sign).is_none() {
            fields.push("moonSign");
        }
        fields
    }

    /// Profile from already-parsed signs, using their canonical names.
    pub fn from_signs(nakshatra: Nakshatra, moon_sign: Rashi) -> Self {
        Self::new(nakshatra.name(), moon_sign.name())
    }
}

/// A matching request as accepted over JSON: `{ "boy": {...}, "girl": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub boy: BirthProfile,
    pub girl: BirthProfile,
}
