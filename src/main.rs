//! Tic-tac-toe - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{AppConfig, Cli, Command, headless, logging, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config } => {
            let config = AppConfig::load(config.as_deref()).context("Failed to load config")?;
            tui::run_tui(config)
        }
        Command::Play {
            config,
            json,
            inputs,
        } => {
            let config = AppConfig::load(config.as_deref()).context("Failed to load config")?;
            logging::init_stderr_logging(config.log_filter());
            info!(inputs = inputs.len(), "Running headless game");

            let (session, rejected) = headless::play(*config.rules(), &inputs);
            let snapshot = session.snapshot();

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                for error in &rejected {
                    eprintln!("ignored: {}", error);
                }
                println!("{}", headless::render_text(&snapshot));
            }
            Ok(())
        }
    }
}
