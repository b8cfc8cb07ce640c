//! Core domain types for tic-tac-toe.

use crate::action::{Move, MoveError};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Mark placed on the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Symbol {
    /// The human's mark.
    X,
    /// The computer's mark.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 tic-tac-toe grid.
///
/// Cells only ever go from [`Cell::Empty`] to [`Cell::Occupied`]; the
/// only way back is a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Grid {
    /// Creates a new empty grid.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a row/column pair, `None` when out of range.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// True once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Empty positions in row-major scan order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Places the move's symbol on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the target cell is taken. The
    /// grid is left untouched in that case.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let pos = mv.position();
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(mv.symbol());
        Ok(())
    }

    /// Returns all cells as a read-only snapshot.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(symbol) => write!(f, "{symbol}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert!(grid.cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(grid.empty_positions().len(), 9);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_apply_sets_cell() {
        let mut grid = Grid::new();
        grid.apply(Move::new(Symbol::X, Position::Center)).unwrap();
        assert_eq!(grid.get(Position::Center), Cell::Occupied(Symbol::X));
        assert_eq!(grid.get_at(1, 1), Some(Cell::Occupied(Symbol::X)));
    }

    #[test]
    fn test_apply_occupied_rejected_and_unchanged() {
        let mut grid = Grid::new();
        grid.apply(Move::new(Symbol::X, Position::TopLeft)).unwrap();
        let before = grid.clone();

        let result = grid.apply(Move::new(Symbol::O, Position::TopLeft));
        assert_eq!(result, Err(MoveError::Occupied(Position::TopLeft)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_get_at_out_of_range() {
        let grid = Grid::new();
        assert_eq!(grid.get_at(3, 0), None);
        assert_eq!(grid.get_at(0, 3), None);
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut grid = Grid::new();
        grid.apply(Move::new(Symbol::X, Position::TopCenter)).unwrap();
        grid.apply(Move::new(Symbol::O, Position::Center)).unwrap();

        let empty = grid.empty_positions();
        assert_eq!(
            empty,
            vec![
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new();
        grid.apply(Move::new(Symbol::X, Position::TopLeft)).unwrap();
        grid.apply(Move::new(Symbol::O, Position::BottomRight)).unwrap();
        assert_eq!(grid.to_string(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
