//! Tic-tac-toe against a perfect computer opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe::{autoplay, prompt};
use tictactoe_cli::{Cli, GameConfig, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(config.log_file().as_deref())?;

    info!(?config, autoplay = cli.autoplay, "Starting tic-tac-toe");

    let settings = config.settings();
    let mut game = if cli.autoplay {
        autoplay(Terminal::new(), &settings)
    } else {
        prompt(Terminal::new(), &settings)
    }
    .context("Failed to set up game")?;

    let outcome = game.run().context("Game aborted")?;
    info!(?outcome, "Exiting");
    Ok(())
}

/// Logs to `log_file` if given, otherwise to stderr; `RUST_LOG` overrides
/// the default `warn` filter.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
