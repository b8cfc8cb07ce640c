//! Pure tic-tac-toe game logic.
//!
//! A 3x3 [`Grid`], immutable [`Move`]s, the win detector in [`rules`],
//! a uniformly random computer opponent ([`RandomAi`]) and the
//! [`GameSession`] that alternates human and computer turns.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, SessionState};
//!
//! let mut session = GameSession::seeded(7);
//! assert_eq!(session.apply_human_move(1, 1), Ok(SessionState::AwaitingAiMove));
//! let reply = session
//!     .apply_ai_move_if_pending()
//!     .expect("random opponent only picks empty cells")
//!     .expect("computer is due");
//! assert!(session.grid().get(reply.position()).symbol().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use ai::{Opponent, RandomAi};
pub use position::Position;
pub use session::{COMPUTER, GameSession, HUMAN, Outcome, SessionState};
pub use types::{Cell, Grid, Symbol};
