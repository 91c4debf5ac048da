//! Input resolution and data-quality tagging.

use serde::Serialize;

/// Outcome of mapping a user-supplied name to a category.
///
/// Unknown names never fail: they resolve to a fixed fallback category,
/// but the fallback is kept distinguishable from a real match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution<T> {
    /// The name was recognised and mapped.
    Resolved(T),
    /// The name was not recognised; the fallback category is used.
    Defaulted(T),
}

impl<T: Copy> Resolution<T> {
    /// The category used for scoring, whether resolved or defaulted.
    pub fn category(&self) -> T {
        match *self {
            Self::Resolved(c) | Self::Defaulted(c) => c,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }

    pub fn quality(&self) -> DataQuality {
        if self.is_defaulted() {
            DataQuality::Defaulted
        } else {
            DataQuality::Confident
        }
    }
}

/// How much a score can be trusted. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DataQuality {
    /// Every input was recognised.
    Confident,
    /// At least one input fell back to a default category.
    Defaulted,
    /// An ordinal could not be found; the score is a sentinel 0.
    Invalid,
}

impl DataQuality {
    /// The worse of two tags.
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }

    /// Combined tag for a pair of resolutions.
    pub fn of_pair<T: Copy>(boy: &Resolution<T>, girl: &Resolution<T>) -> Self {
        boy.quality().worst(girl.quality())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Confident => "confident",
            Self::Defaulted => "defaulted",
            Self::Invalid => "invalid",
        }
    }
}
