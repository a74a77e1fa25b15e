//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Anomaly sensitivity preset selected by the panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightMode {
    /// Flags only pronounced spikes
    Safe,
    /// Default preset
    #[default]
    Balanced,
    /// Flags spikes most readily
    Aggressive,
}

impl InsightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightMode::Safe => "safe",
            InsightMode::Balanced => "balanced",
            InsightMode::Aggressive => "aggressive",
        }
    }

    /// Base z-score threshold before the sensitivity adjustment
    pub fn base_z_threshold(&self) -> f64 {
        match self {
            InsightMode::Safe => 3.2,
            InsightMode::Balanced => 2.7,
            InsightMode::Aggressive => 2.2,
        }
    }
}

impl fmt::Display for InsightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "safe" => Ok(InsightMode::Safe),
            "balanced" => Ok(InsightMode::Balanced),
            "aggressive" => Ok(InsightMode::Aggressive),
            _ => Err(Error::InvalidConfig(format!(
                "Unknown insight mode: {}. Available: safe, balanced, aggressive",
                s
            ))),
        }
    }
}

/// Direction of the first-to-last change of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
    /// Too few samples to analyze
    LowData,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "UP",
            TrendDirection::Down => "DOWN",
            TrendDirection::Flat => "FLAT",
            TrendDirection::LowData => "LOW_DATA",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured result of a single insight analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Heuristic severity, 0-100
    pub risk_score: u8,
    pub title: String,
    /// Canned sentence picked by risk band
    pub summary: String,
    /// One observation per category (trend, volatility, anomalies)
    pub bullets: Vec<String>,
    /// z-score threshold used for spike counting
    pub z_thresh: Option<f64>,
    /// Standard deviation relative to |mean|
    pub volatility: Option<f64>,
    pub spike_count: usize,
    /// Percent change from first to last sample
    pub trend_pct: f64,
    pub trend_dir: TrendDirection,
}

/// Data quality badge level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityLabel {
    Low,
    Medium,
    Good,
}

impl QualityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLabel::Low => "LOW",
            QualityLabel::Medium => "MEDIUM",
            QualityLabel::Good => "GOOD",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    pub label: QualityLabel,
    pub reason: String,
}

impl DataQuality {
    pub fn new(label: QualityLabel, reason: impl Into<String>) -> Self {
        Self {
            label,
            reason: reason.into(),
        }
    }
}
