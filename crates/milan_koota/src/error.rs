//! Error types for strict matching.

use thiserror::Error;

use crate::profile::PersonRole;

/// Errors raised by the strict entry points.
///
/// The lenient engine never returns these; it defaults and tags instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MilanError {
    #[error("unknown nakshatra for {role}: {input:?}")]
    UnknownNakshatra { role: PersonRole, input: String },
    #[error("unknown moon sign for {role}: {input:?}")]
    UnknownRashi { role: PersonRole, input: String },
    #[error(
        "unknown koota: {0:?} (expected varna, vashya, tara, yoni, graha, gana, bhakoot or nadi)"
    )]
    UnknownKoota(String),
}
