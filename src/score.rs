//! Running tally of finished games.

use tictactoe_core::{COMPUTER, HUMAN, Outcome};
use tracing::debug;

/// Wins and draws across the games of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Games the human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Games that filled the board.
    pub draws: u32,
}

impl Score {
    /// Counts a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(symbol) if symbol == HUMAN => self.human_wins += 1,
            Some(symbol) if symbol == COMPUTER => self.computer_wins += 1,
            Some(_) => {}
            None => self.draws += 1,
        }
        debug!(?outcome, score = ?self, "Recorded game");
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - Computer {} - Draws {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}
