//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tictactoe_engine::Position;

/// Tic-tac-toe in the terminal, with a running score
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a session score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Feed a sequence of taps and print the resulting game
    Play {
        /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices 0-8 (row-major from the top left), cell labels such
        /// as `center` or `top-left`, or `r` to restart
        #[arg(required = true)]
        inputs: Vec<Input>,
    },
}

/// One user action, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Tap the cell with this index.
    Tap(usize),
    /// Press restart.
    Restart,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "r" | "R" | "restart" => Ok(Input::Restart),
            other => match other.parse::<usize>() {
                // Out-of-range indices still reach the session, which rejects them.
                Ok(index) => Ok(Input::Tap(index)),
                Err(_) => Position::from_label_or_number(other)
                    .map(|pos| Input::Tap(pos.to_index()))
                    .ok_or_else(|| {
                        format!("expected a cell index 0-8, a cell label or `r`, got {:?}", other)
                    }),
            },
        }
    }
}
