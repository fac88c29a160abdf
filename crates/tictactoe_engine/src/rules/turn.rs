//! Turn derivation from mark counts.
//!
//! Whose turn it is never gets stored. It is recomputed from the board, so a
//! board rebuilt from any source always agrees with the turn order.

use super::super::{Board, Mark};
use tracing::instrument;

/// Number of cells held by each mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkCounts {
    /// Cells holding X.
    pub x: usize,
    /// Cells holding O.
    pub o: usize,
}

impl MarkCounts {
    /// Counts both marks on `board`.
    #[instrument]
    pub fn of(board: &Board) -> Self {
        Self {
            x: board.count(Mark::X),
            o: board.count(Mark::O),
        }
    }
}

/// X when the counts are equal (including the empty board), else O.
pub fn next_to_move(counts: MarkCounts) -> Mark {
    if counts.x == counts.o { Mark::X } else { Mark::O }
}
