//! Panel view assembly
//!
//! Combines the insight report, the data quality badge and the option-driven
//! extras into read-only display data. Nothing here flows back into the
//! engine.

use serde::Serialize;

use crate::frame::PanelData;
use crate::insights::{classify, DataQuality, InsightEngine, InsightReport};
use crate::options::PanelOptions;

/// How the insight figures are derived, shown when explanation is enabled
pub const EXPLANATION: [&str; 4] = [
    "Trend is estimated from first vs last value (direction & percentage change).",
    "Volatility is measured using standard deviation relative to the mean.",
    "Anomalies are detected using a z-score threshold (mode + sensitivity affect threshold).",
    "Risk score combines trend direction, volatility, and anomaly count.",
];

/// Outcome of building a panel for one data refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelState {
    /// The host returned no series at all
    NoData,
    Ready(PanelView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub series_count: usize,
    /// Number of samples fed to the engine
    pub sample_count: usize,
    pub insight: Option<InsightCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightCard {
    pub report: InsightReport,
    pub quality: Option<DataQuality>,
    /// e.g. "Mode: balanced • Sensitivity: 60 • Risk: 42/100"
    pub header: String,
    pub explanation: Option<Vec<String>>,
}

impl InsightCard {
    /// Badge text for the quality indicator, if shown
    pub fn quality_badge(&self) -> Option<String> {
        self.quality
            .as_ref()
            .map(|q| format!("Data Quality: {}", q.label))
    }
}

impl PanelView {
    pub fn build(data: &PanelData, options: &PanelOptions) -> PanelState {
        if data.is_empty() {
            tracing::debug!("No series received");
            return PanelState::NoData;
        }

        let samples = data.numeric_values();
        let insight = options
            .show_insight
            .then(|| build_card(&samples, options));

        PanelState::Ready(PanelView {
            series_count: data.series.len(),
            sample_count: samples.len(),
            insight,
        })
    }
}

fn build_card(samples: &[f64], options: &PanelOptions) -> InsightCard {
    let engine = InsightEngine::new(options.mode, options.sensitivity);
    let report = engine.analyze(samples);

    let header = format!(
        "Mode: {} • Sensitivity: {} • Risk: {}/100",
        options.mode, options.sensitivity, report.risk_score
    );

    InsightCard {
        quality: options.show_data_quality.then(|| classify(samples)),
        explanation: options
            .show_explanation
            .then(|| EXPLANATION.iter().map(|s| s.to_string()).collect()),
        header,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{InsightMode, QualityLabel, TrendDirection};

    fn ready(state: PanelState) -> PanelView {
        match state {
            PanelState::Ready(view) => view,
            PanelState::NoData => panic!("expected a ready panel"),
        }
    }

    #[test]
    fn test_no_series_is_no_data() {
        let state = PanelView::build(&PanelData::default(), &PanelOptions::default());
        assert_eq!(state, PanelState::NoData);
    }

    #[test]
    fn test_default_panel() {
        let data = PanelData::from_values(&[10.0, 10.0, 10.0, 10.0, 10.0, 100.0]);
        let view = ready(PanelView::build(&data, &PanelOptions::default()));

        assert_eq!(view.series_count, 1);
        assert_eq!(view.sample_count, 6);
        let card = view.insight.unwrap();
        assert_eq!(card.report.risk_score, 42);
        assert_eq!(card.header, "Mode: balanced • Sensitivity: 60 • Risk: 42/100");
        assert_eq!(card.quality.as_ref().unwrap().label, QualityLabel::Medium);
        assert_eq!(card.quality_badge().unwrap(), "Data Quality: MEDIUM");
        assert!(card.explanation.is_none());
    }

    #[test]
    fn test_options_toggle_sections() {
        let data = PanelData::from_values(&[1.0, 2.0, 3.0]);
        let options = PanelOptions {
            mode: InsightMode::Safe,
            sensitivity: 72.5,
            show_data_quality: false,
            show_explanation: true,
            ..Default::default()
        };

        let card = ready(PanelView::build(&data, &options)).insight.unwrap();
        assert_eq!(card.report.trend_dir, TrendDirection::LowData);
        assert!(card.quality.is_none());
        assert_eq!(card.explanation.unwrap().len(), EXPLANATION.len());
        assert_eq!(card.header, "Mode: safe • Sensitivity: 72.5 • Risk: 10/100");
    }

    #[test]
    fn test_insight_can_be_hidden() {
        let data = PanelData::from_values(&[1.0; 8]);
        let options = PanelOptions {
            show_insight: false,
            ..Default::default()
        };

        let view = ready(PanelView::build(&data, &options));
        assert!(view.insight.is_none());
        assert_eq!(view.sample_count, 8);
    }

    #[test]
    fn test_series_without_numbers_gets_low_data_card() {
        let data = PanelData::new(vec![crate::frame::Frame::default()]);
        let card = ready(PanelView::build(&data, &PanelOptions::default()))
            .insight
            .unwrap();
        assert_eq!(card.report.trend_dir, TrendDirection::LowData);
        assert_eq!(card.quality.unwrap().label, QualityLabel::Low);
    }
}
