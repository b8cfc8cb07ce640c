//! Terminal UI: a full-screen board played with the mouse or keyboard.

mod app;
mod input;
mod ui;

pub use app::App;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tictactoe_core::{GameSession, Opponent};
use tracing::{error, info, instrument};

/// Longest wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the terminal UI until the user quits.
pub fn run_tui<O: Opponent>(session: GameSession<O>, ai_delay: Duration) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(session, ai_delay);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_app<O: Opponent>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<O>,
) -> Result<()> {
    loop {
        let mut board = Rect::default();
        terminal.draw(|f| board = ui::draw(f, &app))?;
        app.set_board_area(board);

        let now = Instant::now();
        let timeout = app
            .time_until_due(now)
            .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));

        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => app.handle_key(key, now),
                Event::Mouse(mouse) => app.handle_mouse(mouse, now),
                _ => {}
            }
        }

        if app.should_quit() {
            info!(score = %app.score(), "User quit");
            return Ok(());
        }

        app.tick(Instant::now());
    }
}
