//! Application state and logic.

use super::input::{self, Action};
use crate::config::AppConfig;
use crossterm::event::KeyEvent;
use derive_getters::Getters;
use tictactoe_engine::{Position, Session};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// Board and score being played.
    session: Session,
    /// Highlighted cell.
    cursor: Position,
    /// Show 1-9 in empty cells.
    show_cell_numbers: bool,
    /// Set once the user asks to leave.
    should_quit: bool,
}

impl App {
    /// Creates a new application from config.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: Session::with_rules(*config.rules()),
            cursor: Position::Center,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = input::action_for(key) else {
            return;
        };

        match action {
            Action::MoveCursor(code) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            Action::TapCursor => self.tap(self.cursor.to_index()),
            Action::Tap(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.tap(index);
            }
            Action::Restart => self.session.restart_tapped(),
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Forwards a tap to the session. Rejected taps change nothing on screen.
    fn tap(&mut self, index: usize) {
        if let Err(error) = self.session.cell_tapped(index) {
            debug!(index, %error, "Tap ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_engine::{Cell, GameStatus, Mark};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_cursor_tap_places_mark() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session().board().get(Position::TopCenter),
            Cell::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_digit_taps_and_restart_keeps_score() {
        let mut app = App::new(&AppConfig::default());
        // 1,4,2,5,3 on the keypad are indices 0,3,1,4,2.
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.session().status(), GameStatus::Won(Mark::X));
        assert_eq!(app.cursor(), &Position::TopRight);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session().status(), GameStatus::InProgress(Mark::X));
        assert_eq!(app.session().score().get(Mark::X), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&AppConfig::default());
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(*app.should_quit());
    }
}
