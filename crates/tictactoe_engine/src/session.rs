//! The board and score of one play session.
//!
//! A [`Session`] is what a presentation layer holds. It forwards taps and
//! restarts to the engine and keeps the board and the score in step: a
//! winning tap updates both before its status is returned.

use super::engine;
use super::error::MoveError;
use super::rules_config::RulesConfig;
use super::score::Score;
use super::types::{Board, GameStatus};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Board and score for the lifetime of a running game session.
#[derive(Debug, Clone, Default, Getters)]
pub struct Session {
    /// Current board.
    board: Board,
    /// Wins so far this session.
    score: Score,
    /// Rule switches.
    rules: RulesConfig,
}

impl Session {
    /// Starts a session with an empty board and zero score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with the given rules.
    #[instrument]
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        engine::evaluate(&self.board)
    }

    /// Text for the notification line, e.g. `Player X's turn`.
    pub fn status_message(&self) -> String {
        self.status().to_string()
    }

    /// Handles a tap on cell `index`.
    ///
    /// On success the board holds the new mark and, if the tap completed a
    /// line, the winner's score has gone up by one. The returned status is
    /// the status of the new board.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] for an out-of-range index, an occupied cell,
    /// or (unless the rules allow it) a finished game. The session is left
    /// unchanged.
    #[instrument(skip(self), fields(status = %self.status()))]
    pub fn cell_tapped(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let previous = self.status();

        let (board, status) = if *self.rules.allow_moves_after_game_over() {
            let board = engine::place(&self.board, index)?;
            (board, engine::evaluate(&board))
        } else {
            engine::try_move(&self.board, index)?
        };

        // Credit a mark each time it becomes the winner. Later moves that
        // leave the same winner in place do not score again.
        if let GameStatus::Won(mark) = status
            && previous.winner() != Some(mark)
        {
            self.score.record_win(mark);
            info!(%mark, score = %self.score, "Game won");
        } else if status == GameStatus::Tied && !previous.is_over() {
            info!("Game tied");
        }
        self.board = board;

        #[cfg(debug_assertions)]
        self.check_invariants();

        debug!(%status, "Tap applied");
        Ok(status)
    }

    /// Clears the board. The score is kept.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn restart_tapped(&mut self) {
        self.board = engine::restart();
        info!("Board restarted");
    }

    /// Captures everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        let status = self.status();
        Snapshot {
            board: self.board,
            score: self.score,
            status,
            message: status.to_string(),
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{BoardInvariants, InvariantSet};
        use tracing::warn;

        if let Err(violations) = BoardInvariants::check_all(&self.board) {
            for violation in violations {
                warn!(%violation, board = %self.board, "Board invariant violated");
            }
        }
    }
}

/// Point-in-time view of a session, ready to render or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current board.
    board: Board,
    /// Current score.
    score: Score,
    /// Status derived from the board.
    status: GameStatus,
    /// Human-readable status line.
    message: String,
}
