//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so the engine and the invariant checks share one definition.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::{MarkCounts, next_to_move};
pub use win::{LINES, check_winner, winning_line};
