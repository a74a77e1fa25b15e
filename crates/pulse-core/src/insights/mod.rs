//! Insight Engine - heuristic series insights
//!
//! Turns a single numeric series into a small, explainable summary for the
//! panel. Everything here is a pure function of its inputs: no state is kept
//! between calls and identical inputs always produce identical reports.
//!
//! ## Components
//!
//! - **Engine** - trend direction, relative volatility, z-score spikes and a
//!   0-100 risk score with narrative bullets
//! - **Quality** - LOW/MEDIUM/GOOD data quality badge
//!
//! ## Usage
//!
//! ```rust
//! use pulse_core::insights::{analyze, classify, InsightMode, QualityLabel};
//!
//! let samples = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
//! let report = analyze(&samples, InsightMode::Balanced, 60.0);
//! assert_eq!(report.spike_count, 0);
//! assert_eq!(classify(&samples).label, QualityLabel::Good);
//! ```

pub mod engine;
pub mod quality;
pub mod stats;
pub mod types;

pub use engine::{analyze, InsightEngine, MIN_DATAPOINTS};
pub use quality::classify;
pub use types::{DataQuality, InsightMode, InsightReport, QualityLabel, TrendDirection};
