//! Pulse CLI - series insight panel
//!
//! Usage:
//!   pulse analyze --file data.csv          Analyze the first numeric column
//!   pulse analyze --values 1,2,3,4,5,6     Analyze inline values
//!   pulse quality --file data.json         Data quality badge only
//!   pulse config show                      Effective panel options

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Analyze {
            source,
            mode,
            sensitivity,
            explain,
            json,
        } => {
            let data = commands::load_source(&source)?;
            let options = commands::resolve_options(
                config,
                mode.as_deref(),
                sensitivity.as_deref(),
                explain,
            )?;
            commands::cmd_analyze(&data, &options, json)
        }
        Commands::Quality { source, json } => {
            let data = commands::load_source(&source)?;
            commands::cmd_quality(&data, json)
        }
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(config),
            Some(ConfigAction::Path) => commands::cmd_config_path(),
        },
    }
}
