//! Session-level rule options.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Rule switches applied by [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Accept taps on empty cells after the game is won or tied.
    ///
    /// Off by default: a finished board only changes through restart.
    allow_moves_after_game_over: bool,
}

impl RulesConfig {
    /// Creates rules with the given post-game move policy.
    pub fn new(allow_moves_after_game_over: bool) -> Self {
        Self {
            allow_moves_after_game_over,
        }
    }
}
