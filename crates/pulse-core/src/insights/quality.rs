//! Data quality classification for the panel badge

use super::engine::MIN_DATAPOINTS;
use super::stats;
use super::types::{DataQuality, QualityLabel};

/// Volatility above which the signal is considered noisy
const NOISY_VOLATILITY: f64 = 0.5;

/// Classify a series by length and volatility
pub fn classify(samples: &[f64]) -> DataQuality {
    if samples.len() < MIN_DATAPOINTS {
        return DataQuality::new(QualityLabel::Low, "Not enough data points (< 6)");
    }

    if stats::volatility(samples) > NOISY_VOLATILITY {
        return DataQuality::new(QualityLabel::Medium, "High volatility (noisy signal)");
    }

    DataQuality::new(QualityLabel::Good, "Sufficient points and stable signal")
}
