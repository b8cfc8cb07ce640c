//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Grid, Symbol};
use tracing::instrument;

/// The eight winning lines, in the order they are scanned.
pub const LINES: [[Position; 3]; 8] = [
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
];

/// Returns the symbol holding three in a row, if any.
///
/// The first matching line in [`LINES`] order wins.
#[instrument(skip(grid))]
pub fn winner(grid: &Grid) -> Option<Symbol> {
    LINES.iter().find_map(|&[a, b, c]| {
        let symbol = grid.get(a).symbol()?;
        (grid.get(b).symbol() == Some(symbol) && grid.get(c).symbol() == Some(symbol))
            .then_some(symbol)
    })
}
