// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod domain;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{compute_aggregate_series, compute_series, compute_table_metrics};
pub use config::PresetBook;
pub use domain::{Investment, Location, LocationSelector, LookupError, ReportingPeriod, Roster};
pub use models::{BucketReading, LocationMetrics, Series, TableMetrics};

use crate::config::constants::{DEFAULT_CUSTOM_YEARS, DEFAULT_GROWTH_RATE_PCT};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Practice preset to load (see --list for available names)
    #[arg(long, default_value = "Chicago Dental Group")]
    pub practice: String,

    /// List the built-in practice presets and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Reporting period: monthly | quarterly | yearly | total | custom
    #[arg(long, default_value = "yearly")]
    pub period: String,

    /// Year count when --period custom
    #[arg(long, default_value_t = DEFAULT_CUSTOM_YEARS)]
    pub years: u32,

    /// Assumed future growth rate in percent (clamped to 0-100)
    #[arg(long, default_value_t = DEFAULT_GROWTH_RATE_PCT)]
    pub growth_rate: f64,

    /// Location name, or "all" for the aggregate view
    #[arg(long, default_value = "all")]
    pub location: String,

    /// Evaluation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<chrono::NaiveDate>,

    /// Emit the raw TableMetrics + Series data contract as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
