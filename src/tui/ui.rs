//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, Grid, Opponent, Position, Symbol};

/// Draws the whole screen and returns the board area for mouse hit-testing.
pub fn draw<O: Opponent>(frame: &mut Frame, app: &App<O>) -> Rect {
    let [title, menu, board, status, score] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(9),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title_text = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title_text, title);

    let menu_text = Paragraph::new(Line::from(vec![
        Span::styled("File: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("New Game (Ctrl+N)  Quit (q)"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(menu_text, menu);

    let board_area = board_rect(board);
    draw_board(frame, board_area, app.session().grid(), app.cursor());

    let status_text = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, status);

    let score_text = Paragraph::new(app.score().to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(score_text, score);

    board_area
}

/// Largest centered board whose cells look roughly square.
///
/// Terminal cells are about twice as tall as wide, so each board cell is
/// twice as many columns as rows.
pub fn board_rect(area: Rect) -> Rect {
    let cell_height = (area.height / 3).min(area.width / 6);
    let (cell_width, cell_height) = if cell_height >= 3 {
        (cell_height * 2, cell_height)
    } else {
        (area.width / 3, area.height / 3)
    };

    let width = cell_width * 3;
    let height = cell_height * 3;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_board(frame: &mut Frame, area: Rect, grid: &Grid, cursor: Position) {
    let cell_width = area.width / 3;
    let cell_height = area.height / 3;

    for pos in Position::ALL {
        // Same thirds that `input::cell_at` uses for clicks.
        let cell_area = Rect::new(
            area.x + pos.col() as u16 * cell_width,
            area.y + pos.row() as u16 * cell_height,
            cell_width,
            cell_height,
        );
        draw_cell(frame, cell_area, grid.get(pos), pos, pos == cursor);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, pos: Position, highlighted: bool) {
    let (symbol, style) = match cell {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Symbol::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Symbol::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let border_style = if highlighted {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);

    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::default(); usize::from(inner_height.saturating_sub(1) / 2)];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}
