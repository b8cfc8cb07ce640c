//! Line-based play over any reader and writer.

use crate::score::Score;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_core::{GameSession, Opponent, Position, SessionState};
use tracing::{debug, info, instrument, warn};

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play `(row, col)`; range checking is left to the session.
    Play(usize, usize),
    /// Start over.
    NewGame,
    /// Stop playing.
    Quit,
}

/// Parses `row col` (0-based, space or comma separated), a cell number
/// `1`-`9`, a cell label, `n` or `q`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "q" | "quit" => return Some(Command::Quit),
        "n" | "new" => return Some(Command::NewGame),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => Some(Command::Play(row.parse().ok()?, col.parse().ok()?)),
        _ => Position::from_label_or_number(line).map(|pos| Command::Play(pos.row(), pos.col())),
    }
}

/// Plays games on `input`/`output` until the user quits or input ends.
///
/// Invalid or occupied cells re-prompt. Returns the tally of finished games.
#[instrument(skip_all)]
pub fn run_console<O, R, W>(
    session: &mut GameSession<O>,
    mut input: R,
    mut output: W,
    ai_delay: Duration,
) -> Result<Score>
where
    O: Opponent,
    R: BufRead,
    W: Write,
{
    let mut score = Score::default();
    writeln!(output, "Tic Tac Toe. You are X.")?;

    loop {
        writeln!(output, "\n{}\n", session.grid())?;
        write!(output, "Your move (row col, or 1-9; n = new game, q = quit): ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            info!("Input closed");
            break;
        };

        let (row, col) = match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::NewGame) => {
                session.new_game();
                writeln!(output, "Starting new game")?;
                continue;
            }
            Some(Command::Play(row, col)) => (row, col),
            None => {
                writeln!(output, "Couldn't read that move, try again.")?;
                continue;
            }
        };

        if let Err(e) = session.apply_human_move(row, col) {
            debug!(error = %e, "Move rejected");
            writeln!(output, "Invalid move: {e}. Try again.")?;
            continue;
        }

        if session.state() == SessionState::AwaitingAiMove {
            if !ai_delay.is_zero() {
                std::thread::sleep(ai_delay);
            }
            match session.apply_ai_move_if_pending() {
                Ok(Some(mv)) => writeln!(
                    output,
                    "Computer plays {} (row {}, col {})",
                    mv.position(),
                    mv.row(),
                    mv.col()
                )?,
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "Computer could not move");
                    session.new_game();
                    writeln!(output, "Computer couldn't move: {e}. Starting new game")?;
                    continue;
                }
            }
        }

        if let Some(outcome) = session.outcome() {
            score.record(outcome);
            writeln!(output, "\n{}\n\n{outcome}", session.grid())?;
            writeln!(output, "{score}")?;
            write!(output, "Play again? [y/N] ")?;
            output.flush()?;

            let again = read_line(&mut input)?
                .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"));
            if !again {
                break;
            }
            session.new_game();
            writeln!(output, "Starting new game")?;
        }
    }

    writeln!(output, "Goodbye.")?;
    Ok(score)
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    Ok((read > 0).then_some(line))
}
