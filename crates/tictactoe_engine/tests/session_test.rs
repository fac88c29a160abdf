//! Tests for the session: taps, scoring, restart.

use tictactoe_engine::{
    Board, GameStatus, Mark, MoveError, Position, RulesConfig, Session,
};

fn play(session: &mut Session, taps: &[usize]) -> GameStatus {
    let mut status = session.status();
    for &index in taps {
        status = session.cell_tapped(index).expect("legal tap");
    }
    status
}

#[test]
fn test_end_to_end_win_then_restart() {
    let mut session = Session::new();

    assert_eq!(session.cell_tapped(0), Ok(GameStatus::InProgress(Mark::O)));
    assert_eq!(session.cell_tapped(3), Ok(GameStatus::InProgress(Mark::X)));
    assert_eq!(session.cell_tapped(1), Ok(GameStatus::InProgress(Mark::O)));
    assert_eq!(session.cell_tapped(4), Ok(GameStatus::InProgress(Mark::X)));
    assert_eq!(session.cell_tapped(2), Ok(GameStatus::Won(Mark::X)));

    assert_eq!(session.status_message(), "Player X wins!");
    assert_eq!(session.score().get(Mark::X), 1);
    assert_eq!(session.score().get(Mark::O), 0);

    session.restart_tapped();
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.score().get(Mark::X), 1);
    assert_eq!(session.score().get(Mark::O), 0);
    assert_eq!(session.status_message(), "Player X's turn");
}

#[test]
fn test_winning_tap_increments_only_winner() {
    let mut session = Session::new();
    // Reach X X . / O O . / . . . with X to move.
    play(&mut session, &[0, 3, 1, 4]);
    let o_before = session.score().get(Mark::O);

    assert_eq!(session.cell_tapped(2), Ok(GameStatus::Won(Mark::X)));
    assert_eq!(session.score().get(Mark::X), 1);
    assert_eq!(session.score().get(Mark::O), o_before);
}

#[test]
fn test_score_accumulates_across_restarts() {
    let mut session = Session::new();

    play(&mut session, &[0, 3, 1, 4, 2]);
    session.restart_tapped();
    // O wins the middle column: X 0, O 1, X 2, O 4, X 8, O 7.
    let status = play(&mut session, &[0, 1, 2, 4, 8, 7]);
    assert_eq!(status, GameStatus::Won(Mark::O));
    session.restart_tapped();

    assert_eq!(session.score().get(Mark::X), 1);
    assert_eq!(session.score().get(Mark::O), 1);
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_occupied_tap_is_reported_and_ignored() {
    let mut session = Session::new();
    session.cell_tapped(4).expect("legal tap");

    assert_eq!(
        session.cell_tapped(4),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(session.status(), GameStatus::InProgress(Mark::O));
}

#[test]
fn test_moves_after_game_over_rejected_by_default() {
    let mut session = Session::new();
    play(&mut session, &[0, 3, 1, 4, 2]);
    let board = *session.board();

    assert_eq!(
        session.cell_tapped(5),
        Err(MoveError::GameOver(GameStatus::Won(Mark::X)))
    );
    assert_eq!(session.board(), &board);
    assert_eq!(session.status_message(), "Player X wins!");
}

#[test]
fn test_moves_after_game_over_allowed_by_rules() {
    let mut session = Session::with_rules(RulesConfig::new(true));
    play(&mut session, &[0, 3, 1, 4, 2]);

    assert!(session.cell_tapped(8).is_ok());
    assert_eq!(session.board().count(Mark::O), 3);
    assert_eq!(session.score().get(Mark::X), 1);
}

#[test]
fn test_snapshot_serializes() {
    let mut session = Session::new();
    play(&mut session, &[4]);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.message(), "Player O's turn");

    let json = serde_json::to_value(&snapshot).expect("serializable");
    assert_eq!(json["message"], "Player O's turn");
    assert_eq!(json["score"]["x"], 0);
    assert_eq!(json["status"]["InProgress"], "O");
}
