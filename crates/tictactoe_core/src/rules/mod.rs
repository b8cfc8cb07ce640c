//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a grid. Rules are kept apart from grid
//! storage so the session and the tests can compose them freely.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, winner};
