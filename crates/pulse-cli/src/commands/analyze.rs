//! Insight panel command

use anyhow::Result;
use pulse_core::{PanelData, PanelOptions, PanelState, PanelView};

pub fn cmd_analyze(data: &PanelData, options: &PanelOptions, json: bool) -> Result<()> {
    let state = PanelView::build(data, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render_panel(&state));
    }
    Ok(())
}

/// Render the panel as terminal text
pub fn render_panel(state: &PanelState) -> String {
    let mut out = String::new();
    out.push('\n');

    let view = match state {
        PanelState::NoData => {
            out.push_str("⚠️  No data received\n");
            out.push_str("   Provide a series with at least one numeric column.\n");
            return out;
        }
        PanelState::Ready(view) => view,
    };

    out.push_str(&format!(
        "   Received {} series ({} samples)\n",
        view.series_count, view.sample_count
    ));

    let Some(ref card) = view.insight else {
        return out;
    };

    out.push('\n');
    match card.quality_badge() {
        Some(badge) => out.push_str(&format!("🔎 {}  [{}]\n", card.report.title, badge)),
        None => out.push_str(&format!("🔎 {}\n", card.report.title)),
    }
    out.push_str(&format!("   {}\n", card.header));
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    out.push_str(&format!("   {}\n", card.report.summary));
    for bullet in &card.report.bullets {
        out.push_str(&format!("   • {}\n", bullet));
    }

    if let Some(ref quality) = card.quality {
        out.push_str(&format!("\n   \x1b[2m{}\x1b[0m\n", quality.reason));
    }

    if let Some(ref explanation) = card.explanation {
        out.push_str("\n   How this works:\n");
        for line in explanation {
            out.push_str(&format!("   • {}\n", line));
        }
    }

    out
}
