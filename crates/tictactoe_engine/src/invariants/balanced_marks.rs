//! Balanced marks invariant: X leads O by zero or one.

use super::Invariant;
use crate::Board;
use crate::rules::MarkCounts;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// Holds for every board reached from empty by alternating moves, since X
/// always moves first.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let counts = MarkCounts::of(board);
        counts.x == counts.o || counts.x == counts.o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_boards_hold() {
        for s in [".........", "X........", "XO.......", "XOX......"] {
            let board: Board = s.parse().unwrap();
            assert!(BalancedMarks::holds(&board), "{s}");
        }
    }

    #[test]
    fn test_unbalanced_boards_violate() {
        for s in ["O........", "XX.......", "XXXO....."] {
            let board: Board = s.parse().unwrap();
            assert!(!BalancedMarks::holds(&board), "{s}");
        }
    }
}
