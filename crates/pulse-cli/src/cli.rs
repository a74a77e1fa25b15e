//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Pulse - heuristic insights for a single numeric series
#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Trend, volatility and spike insights for a numeric series", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Panel options file (defaults to the data dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the series comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SeriesSource {
    /// Data file: .csv with a header row, or .json panel data
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Inline comma-separated values (e.g. "1,2,3,4,5,6")
    #[arg(long, allow_hyphen_values = true)]
    pub values: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a series and print the insight panel
    Analyze {
        #[command(flatten)]
        source: SeriesSource,

        /// Anomaly preset: safe, balanced, aggressive
        #[arg(short, long)]
        mode: Option<String>,

        /// Sensitivity 0-100 (higher flags spikes more easily)
        #[arg(short, long, allow_hyphen_values = true)]
        sensitivity: Option<String>,

        /// Explain how the insight figures are derived
        #[arg(long)]
        explain: bool,

        /// Print the panel as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify the data quality of a series
    Quality {
        #[command(flatten)]
        source: SeriesSource,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show panel configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective panel options
    Show,
    /// Show the override config location
    Path,
}
