//! Tic-tac-toe against a random computer opponent.
//!
//! The game rules live in [`tictactoe_core`]; this crate adds the front
//! ends and the plumbing around them.
//!
//! # Architecture
//!
//! - **TUI**: full-screen board, mouse clicks and keyboard ([`tui`])
//! - **Console**: line-based play on any reader/writer ([`console`])
//! - **Config**: TOML settings with CLI overrides ([`GameConfig`])
//! - **Logging**: `tracing` output to a file ([`init_logging`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod score;

/// Line-based front end.
pub mod console;
/// Full-screen terminal front end.
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Logging
pub use logging::init_logging;

// Crate-level exports - Score keeping
pub use score::Score;
