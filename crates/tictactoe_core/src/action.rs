//! Moves and the errors raised when one can't be played.

use crate::position::Position;
use crate::types::Symbol;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A symbol placed at a grid position.
///
/// Fields are private so a move can't change once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Move {
    /// The mark being placed.
    #[getter(copy)]
    symbol: Symbol,
    /// Where the mark goes.
    #[getter(copy)]
    position: Position,
}

impl Move {
    /// Creates a move from row/column coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when either coordinate is above 2.
    pub fn at(symbol: Symbol, row: usize, col: usize) -> Result<Self, MoveError> {
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        Ok(Self::new(symbol, position))
    }

    /// Row of the target cell.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of the target cell.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target cell already holds a symbol.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// Row or column outside `0..=2`.
    #[display("Cell ({}, {}) is outside the grid", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The computer is due to move.
    #[display("It's not the human's turn")]
    NotHumansTurn,

    /// The game has finished; start a new one first.
    #[display("Game is already over")]
    GameOver,

    /// Every cell is taken, there is nothing to pick from.
    #[display("No empty cells left")]
    NoEmptyCells,

    /// The opponent tried to place a symbol other than the computer's.
    #[display("Opponent played {} instead of the computer's mark", _0)]
    WrongSymbol(#[error(not(source))] Symbol),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_at_valid() {
        let mv = Move::at(Symbol::X, 2, 1).unwrap();
        assert_eq!(mv.symbol(), Symbol::X);
        assert_eq!(mv.position(), Position::BottomCenter);
        assert_eq!((mv.row(), mv.col()), (2, 1));
    }

    #[test]
    fn test_move_at_out_of_range() {
        assert_eq!(
            Move::at(Symbol::O, 0, 3),
            Err(MoveError::OutOfRange { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoveError::Occupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::OutOfRange { row: 4, col: 1 }.to_string(),
            "Cell (4, 1) is outside the grid"
        );
        assert_eq!(
            MoveError::WrongSymbol(Symbol::X).to_string(),
            "Opponent played X instead of the computer's mark"
        );
    }
}
