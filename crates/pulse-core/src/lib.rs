//! Pulse Core Library
//!
//! Shared functionality for the Pulse series insight panel:
//! - Heuristic insight engine (trend, volatility, spikes, risk score)
//! - Data quality classification
//! - Data frames and numeric series extraction (JSON and CSV)
//! - Panel options with TOML config resolution
//! - Panel view assembly for display

pub mod error;
pub mod frame;
pub mod insights;
pub mod options;
pub mod panel;

pub use error::{Error, Result};
pub use frame::{Field, FieldKind, Frame, PanelData};
pub use insights::{
    analyze, classify, DataQuality, InsightMode, InsightReport, QualityLabel, TrendDirection,
};
pub use options::{PanelOptions, SensitivityInput};
pub use panel::{InsightCard, PanelState, PanelView};
