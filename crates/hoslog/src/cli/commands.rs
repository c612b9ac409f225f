//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Chart command arguments.
#[derive(Debug, Args)]
pub struct ChartCommand {
    /// Trip JSON file
    pub trip: PathBuf,

    /// Zero-based index of the daily log to draw
    #[arg(short, long, default_value = "0")]
    pub day: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: ChartFormat,
}

/// Remarks command arguments.
#[derive(Debug, Args)]
pub struct RemarksCommand {
    /// Trip JSON file
    pub trip: PathBuf,

    /// Zero-based index of the daily log
    #[arg(short, long, default_value = "0")]
    pub day: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Sheets command arguments.
#[derive(Debug, Args)]
pub struct SheetsCommand {
    /// Trip JSON file
    pub trip: PathBuf,

    /// Total trip distance in miles (defaults to the trip's own figure)
    #[arg(long)]
    pub distance: Option<f64>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Plan command arguments.
#[derive(Debug, Args)]
pub struct PlanCommand {
    /// Where the trip starts
    #[arg(long, value_name = "LOCATION")]
    pub from: String,

    /// Where the load is picked up
    #[arg(long, value_name = "LOCATION")]
    pub pickup: String,

    /// Where the load is delivered
    #[arg(long, value_name = "LOCATION")]
    pub dropoff: String,

    /// Miles from the start to the pickup
    #[arg(long, value_name = "MILES")]
    pub pickup_miles: f64,

    /// Driving hours to the pickup (defaults to miles at the average speed)
    #[arg(long, value_name = "HOURS")]
    pub pickup_hours: Option<f64>,

    /// Miles from the pickup to the dropoff
    #[arg(long, value_name = "MILES")]
    pub dropoff_miles: f64,

    /// Driving hours to the dropoff (defaults to miles at the average speed)
    #[arg(long, value_name = "HOURS")]
    pub dropoff_hours: Option<f64>,

    /// On-duty hours already used in the current 70-hour cycle
    #[arg(long, value_name = "HOURS", default_value = "0")]
    pub cycle_used: f64,

    /// Start time, RFC 3339 (defaults to 08:00 today, local)
    #[arg(long, value_name = "TIME")]
    pub start: Option<String>,

    /// Output the full trip document as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChartFormat {
    /// Standalone SVG document
    #[default]
    Svg,
    /// Segments as JSON
    Json,
    /// One line per segment
    Text,
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
