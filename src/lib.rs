//! Tic-tac-toe front ends.
//!
//! The game rules live in [`tictactoe_engine`]; this crate adds the pieces a
//! player touches.
//!
//! # Architecture
//!
//! - **CLI**: `tui` and `play` subcommands ([`cli`])
//! - **Config**: TOML file with logging and rule options ([`config`])
//! - **TUI**: interactive board, score and notification ([`tui`])
//! - **Headless**: scripted taps for automation and tests ([`headless`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod tui;

pub use cli::{Cli, Command, Input};
pub use config::{AppConfig, ConfigError};
pub use tictactoe_engine as engine;
