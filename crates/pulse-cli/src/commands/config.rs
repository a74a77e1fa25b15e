//! Panel configuration commands

use std::path::Path;

use anyhow::{Context, Result};
use pulse_core::options::default_config_path;
use pulse_core::PanelOptions;

pub fn cmd_config_show(config: Option<&Path>) -> Result<()> {
    let options = PanelOptions::load(config).context("Failed to load panel options")?;

    println!();
    println!("⚙️  Panel Options");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:20} {}", "Insight card", on_off(options.show_insight));
    println!("   {:20} {}", "Mode", options.mode);
    println!("   {:20} {}", "Sensitivity", options.sensitivity);
    println!("   {:20} {}", "Data quality badge", on_off(options.show_data_quality));
    println!("   {:20} {}", "Explanation", on_off(options.show_explanation));
    Ok(())
}

pub fn cmd_config_path() -> Result<()> {
    match default_config_path() {
        Some(path) => {
            let state = if path.exists() { "exists" } else { "not created" };
            println!("{} ({})", path.display(), state);
        }
        None => println!("No data directory available on this platform"),
    }
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
