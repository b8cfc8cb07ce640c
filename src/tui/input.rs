//! Keyboard and mouse translation.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tictactoe_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Throw away the current game.
    NewGame,
    /// Play the given cell.
    Play(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Move the cursor one cell.
    MoveCursor(KeyCode),
    /// Nothing bound to this key.
    Ignore,
}

/// Maps a key event to an [`Action`].
pub fn key_action(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }

    match key.code {
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::NewGame,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::Ignore, Action::Play),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Action::MoveCursor(code)
        }
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Finds the cell under terminal coordinates `(x, y)` inside `board`.
///
/// Each axis is split into thirds, so `row = (y - top) * 3 / height`.
pub fn cell_at(board: Rect, x: u16, y: u16) -> Option<Position> {
    let inside = x >= board.x
        && y >= board.y
        && x < board.x.saturating_add(board.width)
        && y < board.y.saturating_add(board.height);
    if !inside {
        return None;
    }

    let row = usize::from(y - board.y) * 3 / usize::from(board.height);
    let col = usize::from(x - board.x) * 3 / usize::from(board.width);
    Position::from_row_col(row, col)
}

/// Returns the clicked cell for a left-button press on the board.
pub fn clicked_cell(board: Rect, mouse: MouseEvent) -> Option<Position> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => cell_at(board, mouse.column, mouse.row),
        _ => None,
    }
}
