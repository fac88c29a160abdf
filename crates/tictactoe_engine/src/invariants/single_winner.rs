//! Single winner invariant: at most one mark owns a complete line.

use super::Invariant;
use crate::rules::LINES;
use crate::{Board, Mark};

/// Invariant: X and O never both complete a line.
///
/// Legal play stops being meaningful after the first line, so two owners
/// means moves were accepted on a finished board.
pub struct SingleWinner;

impl SingleWinner {
    fn owns_line(board: &Board, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|pos| board.get(*pos).mark() == Some(mark)))
    }
}

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        !(Self::owns_line(board, Mark::X) && Self::owns_line(board, Mark::O))
    }

    fn description() -> &'static str {
        "At most one mark completes a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_winner_holds() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert!(SingleWinner::holds(&board));
    }

    #[test]
    fn test_two_winners_violate() {
        let board: Board = "XXX...OOO".parse().unwrap();
        assert!(!SingleWinner::holds(&board));
    }
}
