//! Human-versus-computer game session.
//!
//! The session owns the grid and the opponent, and enforces strict
//! alternation: the human (X) moves, then the computer (O), checking
//! for a win or a full grid after every move.

use crate::action::{Move, MoveError};
use crate::ai::{Opponent, RandomAi};
use crate::rules;
use crate::types::{Grid, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Symbol played by the human.
pub const HUMAN: Symbol = Symbol::X;

/// Symbol played by the computer.
pub const COMPUTER: Symbol = Symbol::O;

/// Where the session is in its turn cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum SessionState {
    /// Waiting for the human to pick a cell.
    #[display("Your move")]
    AwaitingHumanMove,
    /// The computer is due to reply.
    #[display("Computer is thinking...")]
    AwaitingAiMove,
    /// Human completed a line.
    #[display("X wins")]
    HumanWon,
    /// Computer completed a line.
    #[display("O wins")]
    AiWon,
    /// Grid filled up with no line.
    #[display("Board full")]
    Draw,
}

impl SessionState {
    /// True for states that accept no further moves.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::HumanWon | Self::AiWon | Self::Draw)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A symbol got three in a row.
    Winner(Symbol),
    /// Full grid, no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(symbol),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "{symbol} wins"),
            Outcome::Draw => write!(f, "Board full"),
        }
    }
}

/// One game of human versus computer.
#[derive(Debug)]
pub struct GameSession<O = RandomAi> {
    grid: Grid,
    opponent: O,
    state: SessionState,
    history: Vec<Move>,
}

impl GameSession<RandomAi> {
    /// Creates a session against a random opponent seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_opponent(RandomAi::new(COMPUTER))
    }

    /// Creates a session against a seeded random opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::with_opponent(RandomAi::seeded(COMPUTER, seed))
    }
}

impl Default for GameSession<RandomAi> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Opponent> GameSession<O> {
    /// Creates a session against the given opponent.
    pub fn with_opponent(opponent: O) -> Self {
        Self {
            grid: Grid::new(),
            opponent,
            state: SessionState::AwaitingHumanMove,
            history: Vec::new(),
        }
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Moves played this game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The opponent.
    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    /// Winner or draw once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::HumanWon => Some(Outcome::Winner(HUMAN)),
            SessionState::AiWon => Some(Outcome::Winner(COMPUTER)),
            SessionState::Draw => Some(Outcome::Draw),
            SessionState::AwaitingHumanMove | SessionState::AwaitingAiMove => None,
        }
    }

    /// Plays the human's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Rejects the move without changing anything when the game is over,
    /// the computer is due, the coordinates are off the grid, or the cell
    /// is taken.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<SessionState, MoveError> {
        match self.state {
            SessionState::AwaitingHumanMove => {}
            SessionState::AwaitingAiMove => return Err(MoveError::NotHumansTurn),
            _ => return Err(MoveError::GameOver),
        }

        let mv = Move::at(HUMAN, row, col)?;
        self.grid.apply(mv).inspect_err(|e| debug!(error = %e, "Human move rejected"))?;
        self.history.push(mv);

        self.state = self.next_state(HUMAN, SessionState::HumanWon, SessionState::AwaitingAiMove);
        info!(mv = %mv, state = ?self.state, "Human moved");
        Ok(self.state)
    }

    /// Lets the computer move if it is due.
    ///
    /// Returns the move played, or `Ok(None)` when it isn't the computer's
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns the opponent's error, [`MoveError::Occupied`] for a taken
    /// cell, or [`MoveError::WrongSymbol`] when the opponent places anything
    /// but [`COMPUTER`]. The session is left untouched and still awaits the
    /// computer, so the caller can retry or start a new game.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn apply_ai_move_if_pending(&mut self) -> Result<Option<Move>, MoveError> {
        if self.state != SessionState::AwaitingAiMove {
            return Ok(None);
        }

        // AwaitingAiMove is only entered with an empty cell left.
        let mv = self.opponent.pick_move(&self.grid).inspect_err(|e| {
            warn!(error = %e, opponent = self.opponent.name(), "Opponent could not move");
        })?;
        if mv.symbol() != COMPUTER {
            warn!(mv = %mv, "Opponent played the wrong symbol");
            return Err(MoveError::WrongSymbol(mv.symbol()));
        }
        self.grid.apply(mv).inspect_err(|e| {
            warn!(error = %e, mv = %mv, "Opponent picked an illegal move");
        })?;
        self.history.push(mv);

        self.state = self.next_state(
            mv.symbol(),
            SessionState::AiWon,
            SessionState::AwaitingHumanMove,
        );
        info!(
            mv = %mv,
            opponent = self.opponent.name(),
            state = ?self.state,
            "Computer moved"
        );
        Ok(Some(mv))
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn new_game(&mut self) {
        self.grid = Grid::new();
        self.history.clear();
        self.state = SessionState::AwaitingHumanMove;
        info!("Starting new game");
    }

    fn next_state(
        &self,
        mover: Symbol,
        won: SessionState,
        otherwise: SessionState,
    ) -> SessionState {
        if rules::winner(&self.grid) == Some(mover) {
            won
        } else if self.grid.is_full() {
            SessionState::Draw
        } else {
            otherwise
        }
    }
}
