//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Insight panel rendering
//! - `quality` - Data quality badge
//! - `config` - Panel option inspection
//!
//! Shared helpers for loading series and resolving options live here.

pub mod analyze;
pub mod config;
pub mod quality;

// Re-export command functions for main.rs
pub use analyze::*;
pub use config::*;
pub use quality::*;

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use pulse_core::{InsightMode, PanelData, PanelOptions, SensitivityInput};

use crate::cli::SeriesSource;

/// Load panel data from a file or inline values
pub fn load_source(source: &SeriesSource) -> Result<PanelData> {
    if let Some(ref path) = source.file {
        return PanelData::from_path(path)
            .with_context(|| format!("Failed to load series from {}", path.display()));
    }

    let values = parse_values(source.values.as_deref().unwrap_or_default())?;
    Ok(PanelData::from_values(&values))
}

/// Parse a comma-separated list of numbers
pub fn parse_values(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("Invalid value in --values: {}", s))
        })
        .collect()
}

/// Load options from config, then apply command-line overrides
///
/// An unknown `--mode` is an error; a malformed `--sensitivity` falls back to
/// the default the same way a config value does.
pub fn resolve_options(
    config: Option<&Path>,
    mode: Option<&str>,
    sensitivity: Option<&str>,
    explain: bool,
) -> Result<PanelOptions> {
    let mut options = PanelOptions::load(config).context("Failed to load panel options")?;

    if let Some(mode) = mode {
        options.mode = InsightMode::from_str(mode)?;
    }
    if let Some(sensitivity) = sensitivity {
        options.sensitivity = SensitivityInput::from(sensitivity).normalize();
    }
    if explain {
        options.show_explanation = true;
    }

    tracing::debug!(
        mode = options.mode.as_str(),
        sensitivity = options.sensitivity,
        "Resolved panel options"
    );
    Ok(options)
}
