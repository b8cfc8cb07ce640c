//! Computer opponents.

use crate::action::{Move, MoveError};
use crate::types::{Grid, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Something that can choose the computer's next move.
pub trait Opponent {
    /// The symbol this opponent plays.
    fn symbol(&self) -> Symbol;

    /// Picks a move on the given grid.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoEmptyCells`] if the grid is full.
    fn pick_move(&mut self, grid: &Grid) -> Result<Move, MoveError>;

    /// Display name.
    fn name(&self) -> &str;
}

/// Opponent that plays a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomAi<R = StdRng> {
    symbol: Symbol,
    rng: R,
}

impl RandomAi<StdRng> {
    /// Creates a random opponent seeded from OS entropy.
    pub fn new(symbol: Symbol) -> Self {
        Self::with_rng(symbol, StdRng::from_os_rng())
    }

    /// Creates a random opponent with a fixed seed, for reproducible games.
    pub fn seeded(symbol: Symbol, seed: u64) -> Self {
        Self::with_rng(symbol, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAi<R> {
    /// Creates a random opponent drawing from the given generator.
    pub fn with_rng(symbol: Symbol, rng: R) -> Self {
        Self { symbol, rng }
    }
}

impl<R: Rng> Opponent for RandomAi<R> {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[instrument(skip(self, grid), fields(symbol = %self.symbol))]
    fn pick_move(&mut self, grid: &Grid) -> Result<Move, MoveError> {
        let options = grid.empty_positions();
        let Some(last) = options.len().checked_sub(1) else {
            return Err(MoveError::NoEmptyCells);
        };
        let choice = options[self.rng.random_range(0..=last)];
        debug!(position = %choice, options = options.len(), "AI chose position");
        Ok(Move::new(self.symbol, choice))
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_random_ai_picks_empty_cell() {
        let mut ai = RandomAi::seeded(Symbol::O, 7);
        let mut grid = Grid::new();
        grid.apply(Move::new(Symbol::X, Position::Center)).unwrap();
        grid.apply(Move::new(Symbol::X, Position::TopLeft)).unwrap();

        for _ in 0..100 {
            let mv = ai.pick_move(&grid).unwrap();
            assert_eq!(mv.symbol(), Symbol::O);
            assert!(grid.is_empty(mv.position()), "{mv} is occupied");
        }
    }

    #[test]
    fn test_random_ai_single_option() {
        let mut ai = RandomAi::seeded(Symbol::O, 1);
        let mut grid = Grid::new();
        for pos in &Position::ALL[..8] {
            grid.apply(Move::new(Symbol::X, *pos)).unwrap();
        }
        let mv = ai.pick_move(&grid).unwrap();
        assert_eq!(mv.position(), Position::BottomRight);
    }

    #[test]
    fn test_random_ai_full_grid_errors() {
        let mut ai = RandomAi::seeded(Symbol::O, 1);
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid.apply(Move::new(Symbol::X, pos)).unwrap();
        }
        assert_eq!(ai.pick_move(&grid), Err(MoveError::NoEmptyCells));
    }

    #[test]
    fn test_random_ai_reaches_every_cell() {
        let mut ai = RandomAi::seeded(Symbol::O, 42);
        let grid = Grid::new();
        let mut seen = [false; 9];
        for _ in 0..1000 {
            seen[ai.pick_move(&grid).unwrap().position().to_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = RandomAi::seeded(Symbol::O, 99);
        let mut b = RandomAi::seeded(Symbol::O, 99);
        let grid = Grid::new();
        for _ in 0..20 {
            assert_eq!(a.pick_move(&grid), b.pick_move(&grid));
        }
    }

    #[test]
    fn test_random_ai_name() {
        assert_eq!(RandomAi::new(Symbol::O).name(), "Random");
    }
}
