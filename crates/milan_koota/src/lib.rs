//! Ashtakoot (Gun Milan) compatibility scoring.
//!
//! This crate provides:
//! - Attribute resolvers (varna, vashya, yoni, gana, nadi, rashi lord)
//! - The eight koota scorers, each returning a self-describing result
//! - The 36-point aggregator with verdict bands and data-quality tagging
//! - A strict entry point that rejects unknown names instead of defaulting
//!
//! Matrices are read `[boy][girl]`; several kootas are directional.
//! All tables follow the classical Parashari conventions.

pub mod attributes;
pub mod category;
pub mod error;
pub mod koota;
pub mod profile;
pub mod quality;
pub mod report;
pub mod tables;

pub use attributes::{
    PersonAttributes, resolve_gana, resolve_lord, resolve_nadi, resolve_varna, resolve_vashya,
    resolve_yoni,
};
pub use category::{
    ALL_GANAS, ALL_NADIS, ALL_VARNAS, ALL_VASHYAS, ALL_YONIS, Gana, Nadi, Varna, Vashya, Yoni,
};
pub use error::MilanError;
pub use koota::{
    ALL_KOOTAS, BhakootResult, GanaResult, GrahaMaitriResult, Koota, KootaResult, KootaScore,
    NadiResult, TaraResult, VarnaResult, VashyaResult, YoniResult, bhakoot_koota, gana_koota,
    graha_maitri_koota, nadi_koota, tara_koota, varna_koota, vashya_koota, yoni_koota,
};
pub use profile::{BirthProfile, MatchRequest, PersonRole};
pub use quality::{DataQuality, Resolution};
pub use report::{
    GunMilanReport, MAX_SCORE, MatchVerdict, calculate_from_signs, calculate_gun_milan,
    try_calculate_gun_milan,
};
