//! End-to-end console games driven through in-memory input.

use std::io::Cursor;
use std::time::Duration;
use tictactoe::console::run_console;
use tictactoe_core::{
    GameSession, Grid, Move, MoveError, Opponent, Position, RandomAi, SessionState, Symbol,
};

/// Opponent that always takes the first empty cell in row-major order.
struct FirstEmpty;

impl Opponent for FirstEmpty {
    fn symbol(&self) -> Symbol {
        Symbol::O
    }

    fn pick_move(&mut self, grid: &Grid) -> Result<Move, MoveError> {
        grid.empty_positions()
            .first()
            .map(|pos| Move::new(Symbol::O, *pos))
            .ok_or(MoveError::NoEmptyCells)
    }

    fn name(&self) -> &str {
        "FirstEmpty"
    }
}

fn play<O: Opponent>(session: &mut GameSession<O>, input: &str) -> (tictactoe::Score, String) {
    let mut output = Vec::new();
    let score = run_console(session, Cursor::new(input), &mut output, Duration::ZERO)
        .expect("console run succeeds");
    (score, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_human_wins_left_column() {
    let mut session = GameSession::with_opponent(FirstEmpty);
    // Computer takes (0,1) and (0,2) while X fills column 0.
    let (score, output) = play(&mut session, "0 0\n1 0\n2 0\nn\n");

    assert_eq!(score.human_wins, 1);
    assert!(output.contains("X wins"));
    assert!(output.contains("Play again?"));
    assert!(output.contains("Goodbye."));
    assert_eq!(session.state(), SessionState::HumanWon);
}

#[test]
fn test_invalid_input_reprompts() {
    let mut session = GameSession::with_opponent(FirstEmpty);
    let (score, output) = play(&mut session, "hello\n3 3\n1 1\n1 1\n0 0\nq\n");

    assert!(output.contains("Couldn't read that move"));
    assert!(output.contains("Invalid move: Cell (3, 3) is outside the grid"));
    assert!(output.contains("Invalid move: Square Center is already occupied"));
    // (0,0) was taken by the computer's first reply.
    assert!(output.contains("Invalid move: Square Top-left is already occupied"));
    assert_eq!(score.games(), 0);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_new_game_command_resets() {
    let mut session = GameSession::with_opponent(FirstEmpty);
    let (_, output) = play(&mut session, "5\nn\n");

    assert!(output.contains("Computer plays Top-left (row 0, col 0)"));
    assert!(output.contains("Starting new game"));
    assert!(session.history().is_empty());
    assert_eq!(session.state(), SessionState::AwaitingHumanMove);
}

#[test]
fn test_play_again_then_eof() {
    let mut session = GameSession::with_opponent(FirstEmpty);
    let (score, _) = play(&mut session, "1\n4\n7\ny\n9\n");

    assert_eq!(score.human_wins, 1);
    assert_eq!(
        session.grid().get(Position::BottomRight),
        tictactoe_core::Cell::Occupied(Symbol::X)
    );
    assert_eq!(session.state(), SessionState::AwaitingHumanMove);
}

#[test]
fn test_seeded_random_game_finishes() {
    let mut session = GameSession::seeded(77);
    let mut input = String::new();
    // Offer every cell; occupied ones are rejected and re-prompted.
    for _ in 0..5 {
        for cell in 1..=9 {
            input.push_str(&format!("{cell}\n"));
        }
    }
    let mut output = Vec::new();
    let score = run_console(&mut session, Cursor::new(input), &mut output, Duration::ZERO)
        .expect("console run succeeds");

    assert_eq!(score.games(), 1);
    assert!(session.state().is_terminal());
}

#[test]
fn test_failed_computer_move_starts_new_game() {
    let mut session = GameSession::with_opponent(RandomAi::seeded(Symbol::X, 1));
    let (score, output) = play(&mut session, "5\n5\nq\n");

    assert!(output.contains("Computer couldn't move: Opponent played X instead of"));
    assert!(output.contains("computer's mark. Starting new game"));
    // The second "5" lands on a fresh grid instead of hitting NotHumansTurn.
    assert!(!output.contains("Invalid move"));
    assert_eq!(score.games(), 0);
    assert!(session.history().is_empty());
    assert_eq!(session.state(), SessionState::AwaitingHumanMove);
}
