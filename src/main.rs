//! Tic Tac Toe - play against a random computer opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe::{Cli, Command, GameConfig, console, init_logging, tui};
use tictactoe_core::GameSession;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.seed, cli.ai_delay_ms);
    init_logging(&config)?;
    info!(?config, command = ?cli.command, "Starting");

    let mut session = match config.seed() {
        Some(seed) => GameSession::seeded(seed),
        None => GameSession::new(),
    };

    match cli.command.unwrap_or_default() {
        Command::Tui => tui::run_tui(session, config.ai_delay()),
        Command::Console => {
            let stdin = io::stdin();
            let score =
                console::run_console(&mut session, stdin.lock(), io::stdout(), config.ai_delay())?;
            info!(%score, "Console session ended");
            Ok(())
        }
    }
}
