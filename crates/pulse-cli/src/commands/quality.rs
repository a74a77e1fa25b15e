//! Data quality command

use anyhow::Result;
use pulse_core::{classify, PanelData, QualityLabel};

pub fn cmd_quality(data: &PanelData, json: bool) -> Result<()> {
    let samples = data.numeric_values();
    let quality = classify(&samples);

    if json {
        println!("{}", serde_json::to_string_pretty(&quality)?);
        return Ok(());
    }

    let icon = match quality.label {
        QualityLabel::Good => "✅",
        QualityLabel::Medium => "⚠️",
        QualityLabel::Low => "❌",
    };
    println!();
    println!("{} Data Quality: {}", icon, quality.label);
    println!("   {} ({} samples)", quality.reason, samples.len());
    Ok(())
}
