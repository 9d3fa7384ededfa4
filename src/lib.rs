#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use analysis::{ScoringKind, TransitDetector};
pub use app::{HistoryFilter, run};
pub use config::{DETECTION, DetectionConfig, PERSISTENCE, SAMPLE};
pub use domain::{InvalidInputError, LightCurve, LightCurveSummary};
pub use models::{DetectionRecord, DetectionResult, TransitEvent};

// CLI argument parsing
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Detect transits in one or more light curves
    Detect(DetectArgs),
    /// List saved detections, newest first
    History(HistoryArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    /// CSV or JSON light curve files
    pub files: Vec<PathBuf>,

    /// Also run on a generated sample curve
    #[arg(long, default_value_t = false)]
    pub sample: bool,

    #[arg(long, value_enum, default_value_t = ScoringKind::Significance)]
    pub scoring: ScoringKind,

    /// Seed for the sample curve and the legacy-random scorer
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file overriding detection thresholds
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write detection records as JSON to this path
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Write detection records to the default report directory
    #[arg(long, default_value_t = false, conflicts_with = "out")]
    pub save: bool,

    /// Hold results back for this many milliseconds
    #[arg(long, default_value_t = 0, conflicts_with = "legacy_pacing")]
    pub pace_ms: u64,

    /// Use the fixed pacing delay of the interactive front end
    #[arg(long, default_value_t = false)]
    pub legacy_pacing: bool,
}

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// JSON reports written by `detect --out` or `--save`
    #[arg(required = true)]
    pub reports: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = HistoryFilter::All)]
    pub filter: HistoryFilter,

    /// Case-insensitive match on the dataset name
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long, default_value_t = config::constants::history::DEFAULT_LIMIT)]
    pub limit: usize,
}
