//! Application state and logic.

use super::input::{self, Action};
use crate::score::Score;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tictactoe_core::{GameSession, Opponent, Position, RandomAi, SessionState};
use tracing::{debug, info, instrument, warn};

const PROMPT: &str = "Your move: click a cell or press 1-9.";

/// Main application state.
pub struct App<O = RandomAi> {
    session: GameSession<O>,
    cursor: Position,
    status_message: String,
    ai_delay: Duration,
    ai_due: Option<Instant>,
    board_area: Rect,
    score: Score,
    should_quit: bool,
}

impl<O: Opponent> App<O> {
    /// Creates a new application around a session.
    pub fn new(session: GameSession<O>, ai_delay: Duration) -> Self {
        Self {
            session,
            cursor: Position::Center,
            status_message: PROMPT.to_string(),
            ai_delay,
            ai_due: None,
            board_area: Rect::default(),
            score: Score::default(),
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession<O> {
        &self.session
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Cell highlighted for keyboard play.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Games finished so far.
    pub fn score(&self) -> Score {
        self.score
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was last drawn, for mouse hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match input::key_action(key) {
            Action::Quit => self.should_quit = true,
            Action::NewGame => self.new_game(),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos, now);
            }
            Action::PlayCursor => self.play(self.cursor, now),
            Action::MoveCursor(code) => self.cursor = input::move_cursor(self.cursor, code),
            Action::Ignore => {}
        }
    }

    /// Handles a mouse event; clicks off the board do nothing.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if let Some(pos) = input::clicked_cell(self.board_area, mouse) {
            self.cursor = pos;
            self.play(pos, now);
        }
    }

    /// Plays the computer's reply once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.ai_due else {
            return;
        };
        if now < due {
            return;
        }
        self.ai_due = None;

        match self.session.apply_ai_move_if_pending() {
            Ok(Some(mv)) => {
                debug!(mv = %mv, "Computer reply applied");
                self.status_message = match self.session.state() {
                    SessionState::AwaitingHumanMove => {
                        format!("Computer played {}. {}", mv.position(), PROMPT)
                    }
                    _ => self.finish_message(),
                };
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Computer could not move");
                self.status_message =
                    format!("Computer couldn't move: {e}. Press Ctrl+N for a new game.");
            }
        }
    }

    /// How long the event loop may sleep before the next [`App::tick`].
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.ai_due.map(|due| due.saturating_duration_since(now))
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.session.new_game();
        self.ai_due = None;
        self.cursor = Position::Center;
        self.status_message = format!("Starting new game. {}", PROMPT);
    }

    /// Plays the human's mark at `pos`; illegal moves are silently ignored.
    #[instrument(skip(self, now))]
    fn play(&mut self, pos: Position, now: Instant) {
        match self.session.apply_human_move(pos.row(), pos.col()) {
            Ok(SessionState::AwaitingAiMove) => {
                self.ai_due = Some(now + self.ai_delay);
                self.status_message = SessionState::AwaitingAiMove.to_string();
            }
            Ok(_) => self.status_message = self.finish_message(),
            Err(e) => debug!(error = %e, "Ignoring move"),
        }
    }

    /// End-of-game message; also counts the game in the score.
    fn finish_message(&mut self) -> String {
        match self.session.outcome() {
            Some(outcome) => {
                self.score.record(outcome);
                info!(%outcome, "Game over");
                format!("{}! Press Ctrl+N for a new game or q to quit.", outcome)
            }
            None => PROMPT.to_string(),
        }
    }
}
