//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Mark`] and the derived [`GameStatus`]
//! - **Rules**: line table, win and draw detection, turn derivation
//! - **Engine**: [`current_player`], [`apply_move`], [`evaluate`], [`restart`]
//!   plus the explicit-result variants [`place`] and [`try_move`]
//! - **Session**: [`Session`] keeps a board and a [`Score`] in step for a
//!   presentation layer
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameStatus, Mark, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.cell_tapped(index).unwrap();
//! }
//! assert_eq!(session.status(), GameStatus::Won(Mark::X));
//! assert_eq!(session.score().get(Mark::X), 1);
//!
//! session.restart_tapped();
//! assert_eq!(session.status_message(), "Player X's turn");
//! assert_eq!(session.score().get(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod rules_config;
mod score;
mod session;
mod types;

pub use engine::{apply_move, current_player, evaluate, place, restart, try_move};
pub use error::{BoardParseError, MoveError};
pub use position::Position;
pub use rules_config::RulesConfig;
pub use score::Score;
pub use session::{Session, Snapshot};
pub use types::{Board, Cell, GameStatus, Mark};
