//! Property-based tests for the insight engine.
//!
//! These check the bounds and determinism guarantees of `analyze` and
//! `classify` across generated series, modes and sensitivities.

use proptest::prelude::*;
use pulse_core::insights::{
    analyze, classify, InsightEngine, InsightMode, QualityLabel, TrendDirection, MIN_DATAPOINTS,
};

fn mode_strategy() -> impl Strategy<Value = InsightMode> {
    prop_oneof![
        Just(InsightMode::Safe),
        Just(InsightMode::Balanced),
        Just(InsightMode::Aggressive),
    ]
}

fn sample_strategy() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

fn series_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(sample_strategy(), 0..64)
}

// Out-of-range sensitivities must be tolerated
fn sensitivity_strategy() -> impl Strategy<Value = f64> {
    -500.0f64..500.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn short_series_always_low_data(
        samples in prop::collection::vec(sample_strategy(), 0..MIN_DATAPOINTS),
        mode in mode_strategy(),
        sensitivity in sensitivity_strategy(),
    ) {
        let report = analyze(&samples, mode, sensitivity);
        prop_assert_eq!(report.risk_score, 10);
        prop_assert_eq!(report.trend_dir, TrendDirection::LowData);
        prop_assert_eq!(report.bullets.len(), 1);
        prop_assert!(report.z_thresh.is_none());
        prop_assert!(report.volatility.is_none());
        prop_assert_eq!(report.spike_count, 0);
        prop_assert_eq!(report.trend_pct, 0.0);

        prop_assert_eq!(classify(&samples).label, QualityLabel::Low);
    }

    #[test]
    fn report_stays_in_bounds(
        samples in series_strategy(),
        mode in mode_strategy(),
        sensitivity in sensitivity_strategy(),
    ) {
        let report = analyze(&samples, mode, sensitivity);
        prop_assert!(report.risk_score <= 100);
        prop_assert!(report.spike_count <= samples.len());
        if let Some(z) = report.z_thresh {
            prop_assert!((1.8..=4.0).contains(&z), "z_thresh out of range: {}", z);
        }
        if samples.len() >= MIN_DATAPOINTS {
            prop_assert_eq!(report.bullets.len(), 3);
            prop_assert!(report.volatility.is_some());
        }
    }

    #[test]
    fn analyze_is_deterministic(
        samples in series_strategy(),
        mode in mode_strategy(),
        sensitivity in sensitivity_strategy(),
    ) {
        let a = analyze(&samples, mode, sensitivity);
        let b = analyze(&samples, mode, sensitivity);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(classify(&samples), classify(&samples));
    }

    #[test]
    fn higher_sensitivity_never_raises_threshold(
        mode in mode_strategy(),
        low in sensitivity_strategy(),
        delta in 0.0f64..200.0,
    ) {
        let lower = InsightEngine::new(mode, low).z_threshold();
        let higher = InsightEngine::new(mode, low + delta).z_threshold();
        prop_assert!(higher <= lower, "{} > {}", higher, lower);
    }
}
