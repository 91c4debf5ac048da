use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use milan_cli::config::{MilanConfig, OutputFormat, RunSettings};
use milan_cli::logging::init_tracing;
use milan_cli::render::{self, AttributeView, MoonPosition};
use milan_koota::{
    BirthProfile, GunMilanReport, Koota, MatchRequest, PersonRole, calculate_gun_milan,
    try_calculate_gun_milan,
};
use milan_vedic_base::{Nakshatra, Rashi};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "milan", about = "Ashtakoot (Gun Milan) compatibility CLI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, env = "MILAN_CONFIG")]
    config: Option<PathBuf>,
    /// Reject unknown nakshatra/rashi names instead of defaulting them
    #[arg(long, global = true)]
    strict: bool,
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full 36-point match for a boy and a girl
    Match {
        /// Boy's birth nakshatra
        #[arg(long)]
        boy_nakshatra: String,
        /// Boy's moon sign
        #[arg(long)]
        boy_rashi: String,
        /// Girl's birth nakshatra
        #[arg(long)]
        girl_nakshatra: String,
        /// Girl's moon sign
        #[arg(long)]
        girl_rashi: String,
    },
    /// Full match from a JSON request file: {"boy": {...}, "girl": {...}}
    MatchFile {
        /// Path to the request JSON
        path: PathBuf,
    },
    /// Score a single koota
    Koota {
        /// varna, vashya, tara, yoni, graha, gana, bhakoot or nadi
        name: String,
        /// Boy's nakshatra (or moon sign for vashya, graha, bhakoot)
        #[arg(long)]
        boy: String,
        /// Girl's nakshatra (or moon sign for vashya, graha, bhakoot)
        #[arg(long)]
        girl: String,
    },
    /// Categories resolved for one person
    Attributes {
        /// Birth nakshatra
        nakshatra: String,
        /// Moon sign (adds vashya and rashi lord)
        #[arg(long)]
        rashi: Option<String>,
        /// Whose chart this is; picks the lord fallback for unknown signs
        #[arg(long, value_enum, default_value = "boy")]
        role: RoleArg,
    },
    /// Nakshatra, pada and rashi for a sidereal moon longitude
    FromLongitude {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Ordered reference lists
    List {
        #[arg(value_enum)]
        what: ListKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Boy,
    Girl,
}

impl From<RoleArg> for PersonRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Boy => PersonRole::Boy,
            RoleArg::Girl => PersonRole::Girl,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Nakshatras,
    Rashis,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = MilanConfig::load(cli.config.as_deref())?;
    init_tracing(&config.logging.filter);
    let settings = config.settings(cli.strict, cli.format);
    debug!(?settings, "settings resolved");

    let output = match cli.command {
        Commands::Match {
            boy_nakshatra,
            boy_rashi,
            girl_nakshatra,
            girl_rashi,
        } => {
            let boy = BirthProfile::new(boy_nakshatra, boy_rashi);
            let girl = BirthProfile::new(girl_nakshatra, girl_rashi);
            let report = score(&boy, &girl, &settings)?;
            render::report(&report, &settings)?
        }

        Commands::MatchFile { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let request: MatchRequest = serde_json::from_str(&content)
                .with_context(|| format!("invalid match request in {}", path.display()))?;
            let report = score(&request.boy, &request.girl, &settings)?;
            render::report(&report, &settings)?
        }

        Commands::Koota { name, boy, girl } => {
            let koota: Koota = name.parse()?;
            let result = if settings.strict {
                koota.try_score_names(&boy, &girl)?
            } else {
                koota.score_names(&boy, &girl)
            };
            render::koota(&result, &settings)?
        }

        Commands::Attributes {
            nakshatra,
            rashi,
            role,
        } => {
            if settings.strict {
                nakshatra.parse::<Nakshatra>()?;
                if let Some(r) = &rashi {
                    r.parse::<Rashi>()?;
                }
            }
            let view = AttributeView::resolve(&nakshatra, rashi.as_deref(), role.into());
            render::attributes(&view, &settings)?
        }

        Commands::FromLongitude { lon } => {
            render::moon_position(&MoonPosition::from_longitude(lon)?, &settings)?
        }

        Commands::List { what } => match what {
            ListKind::Nakshatras => render::nakshatra_list(&settings)?,
            ListKind::Rashis => render::rashi_list(&settings)?,
        },
    };

    println!("{output}");
    Ok(())
}

fn score(boy: &BirthProfile, girl: &BirthProfile, settings: &RunSettings) -> Result<GunMilanReport> {
    let report = if settings.strict {
        try_calculate_gun_milan(boy, girl)?
    } else {
        calculate_gun_milan(boy, girl)
    };
    info!(
        total = report.total_score,
        verdict = report.verdict.label(),
        "match scored"
    );
    Ok(report)
}
