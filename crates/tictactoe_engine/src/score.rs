//! Running win tally for a session.

use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per mark. Counters only ever go up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Games won by X.
    x: u32,
    /// Games won by O.
    o: u32,
}

impl Score {
    /// Creates a tally with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Adds one win for `mark`.
    #[instrument]
    pub(crate) fn record_win(&mut self, mark: Mark) {
        let counter = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *counter = counter.saturating_add(1);
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x, self.o)
    }
}
