//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::Grid;
use tracing::instrument;

/// A full grid with no three in a row.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    grid.is_full() && winner(grid).is_none()
}
