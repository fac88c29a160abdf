//! Error types for move validation and board parsing.

use super::position::Position;
use super::types::GameStatus;
use derive_more::{Display, Error};

/// Reason a move was rejected.
///
/// Rejected moves never change the board or the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name one of the nine cells.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The board is already won or tied.
    #[display("Game is already over: {}", _0)]
    GameOver(#[error(not(source))] GameStatus),
}

/// Failure to read a board from its nine-symbol text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not contain exactly nine symbols.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A symbol other than a mark or an empty marker.
    #[display("Unknown cell symbol {:?} at index {}", symbol, index)]
    UnknownSymbol {
        /// Row-major index of the offending symbol.
        index: usize,
        /// The offending symbol.
        symbol: char,
    },
}
