//! Panel options and config resolution
//!
//! Options arrive loosely typed from the host: the mode is a string and the
//! sensitivity may be a number or a numeric string. Both are normalized here
//! so the insight engine only ever sees a closed mode and a finite number.
//!
//! ## Configuration Resolution
//!
//! 1. Explicit path (e.g. `--config`)
//! 2. Override in data dir (~/.local/share/pulse/config/panel.toml)
//! 3. Embedded defaults (compiled into binary)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::insights::InsightMode;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/panel.toml");

pub const DEFAULT_SENSITIVITY: f64 = 60.0;

/// Sensitivity as supplied by the host, before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensitivityInput {
    Number(f64),
    Text(String),
}

impl SensitivityInput {
    /// Finite value, or the default when the input is not a finite number
    pub fn normalize(&self) -> f64 {
        let value = match self {
            SensitivityInput::Number(n) => Some(*n),
            SensitivityInput::Text(s) => s.trim().parse::<f64>().ok(),
        };

        match value.filter(|v| v.is_finite()) {
            Some(v) => v,
            None => {
                tracing::warn!(
                    input = ?self,
                    fallback = DEFAULT_SENSITIVITY,
                    "Sensitivity is not a finite number, using default"
                );
                DEFAULT_SENSITIVITY
            }
        }
    }
}

impl From<f64> for SensitivityInput {
    fn from(v: f64) -> Self {
        SensitivityInput::Number(v)
    }
}

impl From<&str> for SensitivityInput {
    fn from(s: &str) -> Self {
        SensitivityInput::Text(s.to_string())
    }
}

/// Normalize a mode string, falling back to balanced
pub fn normalize_mode(raw: &str) -> InsightMode {
    InsightMode::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default insight mode");
        InsightMode::default()
    })
}

/// Normalized panel options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelOptions {
    /// Show the insight card
    pub show_insight: bool,
    pub mode: InsightMode,
    pub sensitivity: f64,
    /// Show the data quality badge
    pub show_data_quality: bool,
    /// Show how the insight figures are derived
    pub show_explanation: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            show_insight: true,
            mode: InsightMode::default(),
            sensitivity: DEFAULT_SENSITIVITY,
            show_data_quality: true,
            show_explanation: false,
        }
    }
}

impl PanelOptions {
    /// Load options (explicit path, then data dir override, then defaults)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) if path.exists() => read_config(path)?,
            Some(path) => {
                return Err(Error::InvalidConfig(format!(
                    "Config file not found: {}",
                    path.display()
                )))
            }
            None => match default_config_path() {
                Some(path) if path.exists() => read_config(&path)?,
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::parse(&content)
    }

    /// Parse options from TOML content, layered over the defaults
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid config TOML: {}", e)))?;

        let mut options = Self::default();

        if let Some(insight) = raw.insight {
            if let Some(enabled) = insight.enabled {
                options.show_insight = enabled;
            }
            if let Some(mode) = insight.mode {
                options.mode = normalize_mode(&mode);
            }
            if let Some(sensitivity) = insight.sensitivity {
                options.sensitivity = sensitivity.normalize();
            }
            if let Some(show) = insight.show_data_quality {
                options.show_data_quality = show;
            }
            if let Some(show) = insight.show_explanation {
                options.show_explanation = show;
            }
        }

        Ok(options)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("pulse").join("config").join("panel.toml"))
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::InvalidConfig(format!("Failed to read config: {}", e)))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    insight: Option<RawInsight>,
}

#[derive(Debug, Deserialize)]
struct RawInsight {
    enabled: Option<bool>,
    mode: Option<String>,
    sensitivity: Option<SensitivityInput>,
    show_data_quality: Option<bool>,
    show_explanation: Option<bool>,
}
