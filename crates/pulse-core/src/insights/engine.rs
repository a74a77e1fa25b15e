//! Insight Engine - heuristic trend, volatility and spike scoring

use super::stats::{self, EPSILON};
use super::types::{InsightMode, InsightReport, TrendDirection};

/// Series shorter than this get the low-confidence report
pub const MIN_DATAPOINTS: usize = 6;

const TITLE: &str = "AI Insight Engine";
const LOW_DATA_TITLE: &str = "AI Insight";
const LOW_DATA_SUMMARY: &str =
    "Not enough data points for deeper analysis. Try a time series query with more samples.";
const LOW_DATA_BULLET: &str = "Add more datapoints (>= 6) to enable trend/volatility checks.";

const SUMMARY_HIGH: &str = "High risk pattern detected. Consider alert rules and anomaly review.";
const SUMMARY_MODERATE: &str = "Moderate risk. Monitor trend & spikes; consider thresholds.";
const SUMMARY_HEALTHY: &str = "Looks healthy. Keep monitoring and validate with business context.";

const Z_THRESH_MIN: f64 = 1.8;
const Z_THRESH_MAX: f64 = 4.0;

/// Percent change beyond which the trend counts as up or down
const TREND_FLAT_BAND: f64 = 1.0;

/// Scores a single numeric series for a given mode and sensitivity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightEngine {
    mode: InsightMode,
    sensitivity: f64,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new(InsightMode::default(), 60.0)
    }
}

impl InsightEngine {
    /// Sensitivity is used as given, out-of-range values included
    pub fn new(mode: InsightMode, sensitivity: f64) -> Self {
        Self { mode, sensitivity }
    }

    /// z-score at or above which a sample counts as a spike
    pub fn z_threshold(&self) -> f64 {
        let adj = (60.0 - self.sensitivity) / 100.0;
        stats::clamp(
            self.mode.base_z_threshold() + adj,
            Z_THRESH_MIN,
            Z_THRESH_MAX,
        )
    }

    /// Risk points contributed by sensitivity alone, in [-5, 8]
    fn sensitivity_points(&self) -> i32 {
        stats::clamp(stats::round_half_up((self.sensitivity - 50.0) * 0.2), -5.0, 8.0) as i32
    }

    pub fn analyze(&self, samples: &[f64]) -> InsightReport {
        if samples.len() < MIN_DATAPOINTS {
            tracing::debug!(
                samples = samples.len(),
                "Not enough datapoints for insight analysis"
            );
            return low_data_report();
        }

        let first = samples[0];
        let last = samples[samples.len() - 1];
        let trend_pct = (last - first) / (first.abs() + EPSILON) * 100.0;
        let trend_dir = if trend_pct > TREND_FLAT_BAND {
            TrendDirection::Up
        } else if trend_pct < -TREND_FLAT_BAND {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        let (mean, std) = stats::mean_std(samples);
        let volatility = std / (mean.abs() + EPSILON);

        let z_thresh = self.z_threshold();
        let spike_count = samples
            .iter()
            .filter(|&&v| {
                let z = if std > 0.0 {
                    ((v - mean) / std).abs()
                } else {
                    0.0
                };
                z >= z_thresh
            })
            .count();

        let risk_score = self.risk_score(trend_dir, volatility, spike_count);

        let bullets = vec![
            trend_bullet(trend_dir, trend_pct),
            volatility_bullet(volatility),
            anomaly_bullet(spike_count, z_thresh),
        ];

        tracing::debug!(
            mode = self.mode.as_str(),
            sensitivity = self.sensitivity,
            samples = samples.len(),
            trend = trend_dir.as_str(),
            trend_pct,
            volatility,
            z_thresh,
            spikes = spike_count,
            risk = risk_score,
            "Insight analysis complete"
        );

        InsightReport {
            risk_score,
            title: TITLE.to_string(),
            summary: summary_for_risk(risk_score).to_string(),
            bullets,
            z_thresh: Some(z_thresh),
            volatility: Some(volatility),
            spike_count,
            trend_pct,
            trend_dir,
        }
    }

    /// Additive point system; the volatility and spike bands stack
    fn risk_score(&self, trend_dir: TrendDirection, volatility: f64, spike_count: usize) -> u8 {
        let mut risk: i32 = 0;
        if trend_dir == TrendDirection::Down {
            risk += 18;
        }
        if volatility > 0.25 {
            risk += 22;
        }
        if volatility > 0.45 {
            risk += 18;
        }
        if spike_count >= 1 {
            risk += 20;
        }
        if spike_count >= 3 {
            risk += 12;
        }
        risk += self.sensitivity_points();
        risk.clamp(0, 100) as u8
    }
}

/// Analyze a series with the given mode and sensitivity
pub fn analyze(samples: &[f64], mode: InsightMode, sensitivity: f64) -> InsightReport {
    InsightEngine::new(mode, sensitivity).analyze(samples)
}

fn low_data_report() -> InsightReport {
    InsightReport {
        risk_score: 10,
        title: LOW_DATA_TITLE.to_string(),
        summary: LOW_DATA_SUMMARY.to_string(),
        bullets: vec![LOW_DATA_BULLET.to_string()],
        z_thresh: None,
        volatility: None,
        spike_count: 0,
        trend_pct: 0.0,
        trend_dir: TrendDirection::LowData,
    }
}

pub(crate) fn summary_for_risk(risk_score: u8) -> &'static str {
    if risk_score >= 70 {
        SUMMARY_HIGH
    } else if risk_score >= 40 {
        SUMMARY_MODERATE
    } else {
        SUMMARY_HEALTHY
    }
}

fn trend_bullet(trend_dir: TrendDirection, trend_pct: f64) -> String {
    match trend_dir {
        TrendDirection::Up => {
            format!("Trend: rising (~{}%).", stats::format_fixed1(trend_pct))
        }
        TrendDirection::Down => format!(
            "Trend: decreasing (~{}%). Consider investigating causes.",
            stats::format_fixed1(trend_pct)
        ),
        TrendDirection::Flat | TrendDirection::LowData => "Trend: mostly stable.".to_string(),
    }
}

fn volatility_bullet(volatility: f64) -> String {
    if volatility <= 0.15 {
        "Volatility: low (stable signal).".to_string()
    } else if volatility <= 0.35 {
        "Volatility: medium (watch for changes).".to_string()
    } else {
        "Volatility: high (noisy/unstable). Consider smoothing/alerts.".to_string()
    }
}

fn anomaly_bullet(spike_count: usize, z_thresh: f64) -> String {
    if spike_count == 0 {
        "Anomalies: no strong spikes detected.".to_string()
    } else {
        format!(
            "Anomalies: {} potential spike(s) detected (z ≥ {}).",
            spike_count,
            stats::format_fixed1(z_thresh)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// 40 samples: 100 at every tenth position, 10 elsewhere (mean 19, std 27)
    fn spiky_declining_series() -> Vec<f64> {
        (0..40)
            .map(|i| if i % 10 == 0 { 100.0 } else { 10.0 })
            .collect()
    }

    #[test]
    fn test_short_series_gets_low_data_report() {
        for len in 0..MIN_DATAPOINTS {
            let samples = vec![5.0; len];
            let report = analyze(&samples, InsightMode::Aggressive, 100.0);
            assert_eq!(report.risk_score, 10);
            assert_eq!(report.trend_dir, TrendDirection::LowData);
            assert_eq!(report.bullets.len(), 1);
            assert!(report.z_thresh.is_none());
            assert!(report.volatility.is_none());
            assert_eq!(report.spike_count, 0);
            assert_eq!(report.trend_pct, 0.0);
            assert_eq!(report.title, LOW_DATA_TITLE);
        }
    }

    #[test]
    fn test_constant_series() {
        let report = analyze(&[1.0; 6], InsightMode::Balanced, 60.0);

        assert_eq!(report.trend_dir, TrendDirection::Flat);
        assert_eq!(report.trend_pct, 0.0);
        assert_eq!(report.volatility, Some(0.0));
        assert_eq!(report.spike_count, 0);
        // only the sensitivity points: round((60 - 50) * 0.2)
        assert_eq!(report.risk_score, 2);
        assert_eq!(report.summary, SUMMARY_HEALTHY);
        assert_eq!(
            report.bullets,
            vec![
                "Trend: mostly stable.",
                "Volatility: low (stable signal).",
                "Anomalies: no strong spikes detected.",
            ]
        );
    }

    #[test]
    fn test_late_jump_is_volatile_but_not_a_spike() {
        let report = analyze(
            &[10.0, 10.0, 10.0, 10.0, 10.0, 100.0],
            InsightMode::Balanced,
            60.0,
        );

        assert_eq!(report.trend_dir, TrendDirection::Up);
        assert!((report.trend_pct - 900.0).abs() < 1e-3);
        let vol = report.volatility.unwrap();
        assert!((vol - 1.3416).abs() < 1e-3);
        // six samples cap |z| at sqrt(5) ~ 2.24, under the 2.7 threshold
        assert_eq!(report.spike_count, 0);
        assert_eq!(report.risk_score, 42);
        assert_eq!(report.summary, SUMMARY_MODERATE);
        assert_eq!(report.bullets[0], "Trend: rising (~900.0%).");
        assert_eq!(
            report.bullets[1],
            "Volatility: high (noisy/unstable). Consider smoothing/alerts."
        );
    }

    #[test]
    fn test_single_spike_in_flat_series() {
        let mut samples = vec![10.0; 20];
        samples[10] = 100.0;

        let report = analyze(&samples, InsightMode::Balanced, 60.0);

        assert_eq!(report.trend_dir, TrendDirection::Flat);
        assert_eq!(report.spike_count, 1);
        // 22 + 18 volatility, 20 spike, 2 sensitivity
        assert_eq!(report.risk_score, 62);
        assert_eq!(
            report.bullets[2],
            "Anomalies: 1 potential spike(s) detected (z ≥ 2.7)."
        );
    }

    #[test]
    fn test_threshold_on_a_tie_rounds_up_in_bullet() {
        let mut samples = vec![10.0; 20];
        samples[10] = 100.0;

        let report = analyze(&samples, InsightMode::Aggressive, 55.0);
        assert_eq!(report.z_thresh, Some(2.25));
        assert_eq!(
            report.bullets[2],
            "Anomalies: 1 potential spike(s) detected (z ≥ 2.3)."
        );

        let report = analyze(&samples, InsightMode::Safe, 55.0);
        assert_eq!(
            report.bullets[2],
            "Anomalies: 1 potential spike(s) detected (z ≥ 3.3)."
        );
    }

    #[test]
    fn test_sample_exactly_at_threshold_is_a_spike() {
        // mean 1, std 4: the 17 sits at z = 4.0, the clamped ceiling
        let mut samples = vec![0.0; 17];
        samples[8] = 17.0;

        let report = analyze(&samples, InsightMode::Safe, -1000.0);
        assert_eq!(report.z_thresh, Some(Z_THRESH_MAX));
        assert_eq!(report.spike_count, 1);
    }

    #[test]
    fn test_all_risk_factors_stack() {
        let report = analyze(&spiky_declining_series(), InsightMode::Balanced, 60.0);

        assert_eq!(report.trend_dir, TrendDirection::Down);
        assert!((report.trend_pct + 90.0).abs() < 1e-3);
        assert_eq!(report.spike_count, 4);
        assert_eq!(report.risk_score, 18 + 22 + 18 + 20 + 12 + 2);
        assert_eq!(report.summary, SUMMARY_HIGH);
        assert_eq!(
            report.bullets[0],
            "Trend: decreasing (~-90.0%). Consider investigating causes."
        );
    }

    #[test]
    fn test_safe_mode_misses_borderline_spikes() {
        // the spikes sit at exactly z = 3.0
        let report = analyze(&spiky_declining_series(), InsightMode::Safe, 60.0);
        assert_eq!(report.spike_count, 0);
    }

    #[test]
    fn test_medium_volatility_band() {
        let samples = [10.0, 12.0, 8.0, 13.0, 7.0, 10.0];
        let report = analyze(&samples, InsightMode::Balanced, 60.0);
        let vol = report.volatility.unwrap();
        assert!(vol > 0.15 && vol <= 0.35, "volatility was {}", vol);
        assert_eq!(report.bullets[1], "Volatility: medium (watch for changes).");
    }

    #[test]
    fn test_zero_first_value_does_not_divide_by_zero() {
        let report = analyze(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], InsightMode::Balanced, 60.0);
        assert!(report.trend_pct.is_finite());
        assert_eq!(report.trend_dir, TrendDirection::Up);
    }

    #[test]
    fn test_z_threshold_bounds() {
        assert!(approx(
            InsightEngine::new(InsightMode::Safe, 0.0).z_threshold(),
            3.8
        ));
        assert!(approx(
            InsightEngine::new(InsightMode::Aggressive, 100.0).z_threshold(),
            1.8
        ));
        assert_eq!(
            InsightEngine::new(InsightMode::Aggressive, 1000.0).z_threshold(),
            Z_THRESH_MIN
        );
        assert_eq!(
            InsightEngine::new(InsightMode::Safe, -1000.0).z_threshold(),
            Z_THRESH_MAX
        );
        assert!(approx(InsightEngine::default().z_threshold(), 2.7));
    }

    #[test]
    fn test_sensitivity_points_are_clamped() {
        assert_eq!(InsightEngine::new(InsightMode::Balanced, -500.0).sensitivity_points(), -5);
        assert_eq!(InsightEngine::new(InsightMode::Balanced, 500.0).sensitivity_points(), 8);
        assert_eq!(InsightEngine::new(InsightMode::Balanced, 50.0).sensitivity_points(), 0);
        // (47.5 - 50) * 0.2 = -0.5 rounds up to zero
        assert_eq!(InsightEngine::new(InsightMode::Balanced, 47.5).sensitivity_points(), 0);
    }

    #[test]
    fn test_risk_floor_at_zero() {
        let report = analyze(&[1.0; 6], InsightMode::Balanced, 0.0);
        assert_eq!(report.risk_score, 0);
    }

    #[test]
    fn test_summary_band_boundaries() {
        assert_eq!(summary_for_risk(100), SUMMARY_HIGH);
        assert_eq!(summary_for_risk(70), SUMMARY_HIGH);
        assert_eq!(summary_for_risk(69), SUMMARY_MODERATE);
        assert_eq!(summary_for_risk(40), SUMMARY_MODERATE);
        assert_eq!(summary_for_risk(39), SUMMARY_HEALTHY);
        assert_eq!(summary_for_risk(0), SUMMARY_HEALTHY);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let samples = spiky_declining_series();
        let a = analyze(&samples, InsightMode::Aggressive, 73.5);
        let b = analyze(&samples, InsightMode::Aggressive, 73.5);
        assert_eq!(a, b);
    }
}
