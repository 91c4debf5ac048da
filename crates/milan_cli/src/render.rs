//! Output views and their JSON/text rendering.

use anyhow::{Result, ensure};
use milan_koota::tables::{gana_of, nadi_of, varna_of, vashya_of, yoni_of};
use milan_koota::{
    DataQuality, Gana, GunMilanReport, KootaResult, KootaScore, Nadi, PersonRole, Varna, Vashya,
    Yoni, resolve_gana, resolve_lord, resolve_nadi, resolve_varna, resolve_vashya, resolve_yoni,
};
use milan_vedic_base::{
    ALL_NAKSHATRAS_27, ALL_RASHIS, Graha, Nakshatra, NakshatraInfo, RashiInfo,
    nakshatra_from_longitude, rashi_from_longitude, rashi_lord,
};
use serde::Serialize;

use crate::config::{OutputFormat, RunSettings};

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}

fn render<T: Serialize>(value: &T, settings: &RunSettings, text: impl FnOnce(&T) -> String) -> Result<String> {
    match settings.format {
        OutputFormat::Json => to_json(value, settings.pretty),
        OutputFormat::Text => Ok(text(value)),
    }
}

fn quality_suffix(quality: DataQuality) -> String {
    match quality {
        DataQuality::Confident => String::new(),
        q => format!(" [{}]", q.name()),
    }
}

// ---------------------------------------------------------------------------
// Match report
// ---------------------------------------------------------------------------

fn koota_line(k: &KootaResult) -> String {
    format!(
        "  {:<13} {}/{}  {}{}",
        k.koota().name(),
        k.score(),
        k.max_points(),
        k.description(),
        quality_suffix(k.data_quality())
    )
}

pub fn report_text(report: &GunMilanReport) -> String {
    let mut lines = vec![format!(
        "Gun Milan: {}/{} ({}%) - {}",
        report.total_score,
        report.max_score,
        report.percentage,
        report.verdict.label()
    )];
    lines.extend(report.kootas().iter().map(koota_line));
    if report.has_major_dosha() {
        lines.push("Major dosha present (Nadi or Bhakoot)".to_string());
    }
    lines.push(format!("Data quality: {}", report.data_quality.name()));
    lines.join("\n")
}

pub fn report(report: &GunMilanReport, settings: &RunSettings) -> Result<String> {
    render(report, settings, report_text)
}

pub fn koota(result: &KootaResult, settings: &RunSettings) -> Result<String> {
    render(result, settings, |k| koota_line(k).trim_start().to_string())
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Categories resolved for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeView {
    pub nakshatra: String,
    /// 1-based ordinal; absent for an unknown name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u8>,
    pub varna: Varna,
    pub gana: Gana,
    pub yoni: Yoni,
    pub animal: &'static str,
    pub nadi: Nadi,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon_sign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vashya: Option<Vashya>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lord: Option<Graha>,
    pub data_quality: DataQuality,
}

impl AttributeView {
    pub fn resolve(nakshatra: &str, moon_sign: Option<&str>, role: PersonRole) -> Self {
        let varna = resolve_varna(nakshatra);
        let gana = resolve_gana(nakshatra);
        let yoni = resolve_yoni(nakshatra);
        let nadi = resolve_nadi(nakshatra);
        let mut quality = varna.quality();

        let (vashya, lord) = match moon_sign {
            Some(sign) => {
                let vashya = resolve_vashya(sign);
                let lord = resolve_lord(sign, role);
                quality = quality.worst(vashya.quality()).worst(lord.quality());
                (Some(vashya.category()), Some(lord.category()))
            }
            None => (None, None),
        };

        let ordinal = Nakshatra::ordinal_of(nakshatra);
        Self {
            nakshatra: nakshatra.to_string(),
            ordinal: (ordinal > 0).then_some(ordinal),
            varna: varna.category(),
            gana: gana.category(),
            yoni: yoni.category(),
            animal: yoni.category().animal(),
            nadi: nadi.category(),
            moon_sign: moon_sign.map(str::to_string),
            vashya,
            lord,
            data_quality: quality,
        }
    }
}

fn attributes_text(view: &AttributeView) -> String {
    let mut lines = vec![format!(
        "{}{}: varna {}, gana {}, yoni {} ({}), nadi {}",
        view.nakshatra,
        view.ordinal.map(|o| format!(" (#{o})")).unwrap_or_default(),
        view.varna,
        view.gana,
        view.yoni,
        view.animal,
        view.nadi
    )];
    if let (Some(sign), Some(vashya), Some(lord)) = (&view.moon_sign, view.vashya, view.lord) {
        lines.push(format!("{sign}: vashya {vashya}, lord {} ({})", lord.name(), lord.english_name()));
    }
    lines.push(format!("Data quality: {}", view.data_quality.name()));
    lines.join("\n")
}

pub fn attributes(view: &AttributeView, settings: &RunSettings) -> Result<String> {
    render(view, settings, attributes_text)
}

// ---------------------------------------------------------------------------
// Moon longitude
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPosition {
    pub longitude: f64,
    pub nakshatra: NakshatraInfo,
    pub rashi: RashiInfo,
}

impl MoonPosition {
    /// Fails on NaN or infinite input, which has no place on the zodiac.
    pub fn from_longitude(lon: f64) -> Result<Self> {
        ensure!(lon.is_finite(), "longitude must be finite, got {lon}");
        Ok(Self {
            longitude: lon,
            nakshatra: nakshatra_from_longitude(lon),
            rashi: rashi_from_longitude(lon),
        })
    }
}

fn moon_text(pos: &MoonPosition) -> String {
    let n = &pos.nakshatra;
    let r = &pos.rashi;
    format!(
        "{} (#{}) - Pada {} ({:.4} deg in nakshatra)\n{} ({}) - {} deg {} min {:.1} sec",
        n.nakshatra.name(),
        n.nakshatra.ordinal(),
        n.pada,
        n.degrees_in_nakshatra,
        r.rashi.name(),
        r.rashi.western_name(),
        r.dms.degrees,
        r.dms.minutes,
        r.dms.seconds
    )
}

pub fn moon_position(pos: &MoonPosition, settings: &RunSettings) -> Result<String> {
    render(pos, settings, moon_text)
}

// ---------------------------------------------------------------------------
// Reference lists
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraRow {
    pub ordinal: u8,
    pub name: &'static str,
    pub varna: Varna,
    pub gana: Gana,
    pub yoni: Yoni,
    pub nadi: Nadi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiRow {
    pub ordinal: u8,
    pub name: &'static str,
    pub western_name: &'static str,
    pub lord: Graha,
    pub vashya: Vashya,
}

pub fn nakshatra_rows() -> Vec<NakshatraRow> {
    ALL_NAKSHATRAS_27
        .iter()
        .map(|&n| NakshatraRow {
            ordinal: n.ordinal(),
            name: n.name(),
            varna: varna_of(n),
            gana: gana_of(n),
            yoni: yoni_of(n),
            nadi: nadi_of(n),
        })
        .collect()
}

pub fn rashi_rows() -> Vec<RashiRow> {
    ALL_RASHIS
        .iter()
        .map(|&r| RashiRow {
            ordinal: r.ordinal(),
            name: r.name(),
            western_name: r.western_name(),
            lord: rashi_lord(r),
            vashya: vashya_of(r),
        })
        .collect()
}

pub fn nakshatra_list(settings: &RunSettings) -> Result<String> {
    render(&nakshatra_rows(), settings, |rows| {
        rows.iter()
            .map(|r| {
                format!(
                    "{:>2}  {:<18} {:<9} {:<9} {:<8} {}",
                    r.ordinal, r.name, r.varna, r.gana, r.yoni, r.nadi
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn rashi_list(settings: &RunSettings) -> Result<String> {
    render(&rashi_rows(), settings, |rows| {
        rows.iter()
            .map(|r| {
                format!(
                    "{:>2}  {:<10} {:<12} {:<8} {}",
                    r.ordinal,
                    r.name,
                    r.western_name,
                    r.lord.name(),
                    r.vashya
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}
