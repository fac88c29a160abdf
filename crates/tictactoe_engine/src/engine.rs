//! State transitions for tic-tac-toe.
//!
//! Every function here is pure: boards go in, new boards and derived
//! statuses come out. Holding the latest board and the score is the job of
//! [`Session`](crate::Session).

use super::error::MoveError;
use super::position::Position;
use super::rules::{self, MarkCounts};
use super::types::{Board, Cell, GameStatus, Mark};
use tracing::{debug, instrument};

/// Returns the mark whose turn it is on `board`.
///
/// X plays when both marks appear equally often, otherwise O. This is total
/// over every board, reachable or not.
#[instrument]
pub fn current_player(board: &Board) -> Mark {
    rules::next_to_move(MarkCounts::of(board))
}

/// Classifies a board as won, tied, or in progress.
///
/// Lines are checked in [`rules::LINES`] order and the first complete one
/// wins. A board with no line and no empty cell is tied. Otherwise the game
/// is in progress and the status names the mark to play next.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = rules::check_winner(board) {
        return GameStatus::Won(winner);
    }

    if rules::is_draw(board) {
        return GameStatus::Tied;
    }

    GameStatus::InProgress(current_player(board))
}

/// Places the current player's mark at `index`.
///
/// Occupancy is the only rule checked: a finished board still accepts a
/// mark on an empty cell. Use [`try_move`] to reject those too.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `index` is not in `0..=8`.
/// - [`MoveError::CellOccupied`] if the cell already holds a mark.
#[instrument]
pub fn place(board: &Board, index: usize) -> Result<Board, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }

    let mark = current_player(board);
    let mut next = *board;
    next.set(pos, Cell::Occupied(mark));
    debug!(%mark, position = %pos, "Mark placed");
    Ok(next)
}

/// Applies a move, ignoring taps that cannot change the board.
///
/// Returns the new board and its status. An out-of-range index or an
/// occupied cell leaves the board as it was, and the status is that of the
/// unchanged board.
#[instrument]
pub fn apply_move(board: &Board, index: usize) -> (Board, GameStatus) {
    let next = match place(board, index) {
        Ok(next) => next,
        Err(error) => {
            debug!(%error, "Move ignored");
            *board
        }
    };
    let status = evaluate(&next);
    (next, status)
}

/// Applies a move on an unfinished board.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if `board` is already won or tied.
/// - Any error from [`place`].
#[instrument]
pub fn try_move(board: &Board, index: usize) -> Result<(Board, GameStatus), MoveError> {
    let status = evaluate(board);
    if status.is_over() {
        return Err(MoveError::GameOver(status));
    }

    let next = place(board, index)?;
    Ok((next, evaluate(&next)))
}

/// Returns a fresh board of nine empty cells.
#[instrument]
pub fn restart() -> Board {
    Board::new()
}
