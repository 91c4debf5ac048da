//! Classical reference data shared by the Ashtakoot matching engine.
//!
//! This crate provides:
//! - The ordered 27-nakshatra and 12-rashi lists (ordinals derive from order)
//! - The seven sapta-graha lords and rashi lordship
//! - Natural (naisargika) planetary friendship
//! - Lenient name parsing for nakshatras and rashis
//! - Sidereal moon longitude to nakshatra/rashi helpers
//!
//! Everything here is static data and pure arithmetic; there is no I/O.

pub mod error;
pub mod graha;
pub mod maitri;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use error::VedicError;
pub use graha::{Graha, SAPTA_GRAHAS, rashi_lord};
pub use maitri::{NaisargikaMaitri, naisargika_maitri};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::{normalize_360, normalize_name};
