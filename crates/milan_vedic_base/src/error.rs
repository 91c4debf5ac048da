//! Error types for reference-data parsing.

use thiserror::Error;

/// Errors from parsing classical names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Name does not match any of the 27 nakshatras or a known alias.
    #[error("unknown nakshatra: {0:?}")]
    UnknownNakshatra(String),
    /// Name does not match any of the 12 rashis, their Western names, or a known alias.
    #[error("unknown rashi: {0:?}")]
    UnknownRashi(String),
}
