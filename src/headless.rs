//! Non-interactive play: apply a list of inputs and report the result.

use crate::cli::Input;
use tictactoe_engine::{MoveError, RulesConfig, Session, Snapshot};
use tracing::{debug, instrument, warn};

/// Runs `inputs` against a fresh session.
///
/// Rejected taps do not stop the run; they are returned alongside the
/// session in the order they happened.
#[instrument(skip(inputs), fields(count = inputs.len()))]
pub fn play(rules: RulesConfig, inputs: &[Input]) -> (Session, Vec<MoveError>) {
    let mut session = Session::with_rules(rules);
    let mut rejected = Vec::new();

    for input in inputs {
        match *input {
            Input::Tap(index) => match session.cell_tapped(index) {
                Ok(status) => debug!(index, %status, "Tap accepted"),
                Err(error) => {
                    warn!(index, %error, "Tap ignored");
                    rejected.push(error);
                }
            },
            Input::Restart => session.restart_tapped(),
        }
    }

    (session, rejected)
}

/// Formats a snapshot as the board followed by status and score lines.
pub fn render_text(snapshot: &Snapshot) -> String {
    format!(
        "{}\n\n{}\n{}",
        snapshot.board(),
        snapshot.message(),
        snapshot.score()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameStatus, Mark, Position};

    #[test]
    fn test_play_collects_rejections() {
        let inputs = [Input::Tap(4), Input::Tap(4), Input::Tap(11)];
        let (session, rejected) = play(RulesConfig::default(), &inputs);

        assert_eq!(
            rejected,
            vec![
                MoveError::CellOccupied(Position::Center),
                MoveError::OutOfBounds(11)
            ]
        );
        assert_eq!(session.status(), GameStatus::InProgress(Mark::O));
    }

    #[test]
    fn test_render_text() {
        let inputs = [0, 3, 1, 4, 2].map(Input::Tap);
        let (session, _) = play(RulesConfig::default(), &inputs);

        assert_eq!(
            render_text(&session.snapshot()),
            "X|X|X\n-+-+-\nO|O|.\n-+-+-\n.|.|.\n\nPlayer X wins!\nX: 1  O: 0"
        );
    }
}
