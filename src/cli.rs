//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// How to play (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Full-screen board with mouse and keyboard input
    #[default]
    Tui,
    /// Line-based play on stdin/stdout
    Console,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::Tui);
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_console_with_overrides() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--seed",
            "12",
            "--ai-delay-ms",
            "0",
            "-c",
            "custom.toml",
            "console",
        ]);
        assert_eq!(cli.command, Some(Command::Console));
        assert_eq!(cli.seed, Some(12));
        assert_eq!(cli.ai_delay_ms, Some(0));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
