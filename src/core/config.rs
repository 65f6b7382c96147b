//! Game configuration.
//!
//! The engine never hardcodes game shape or pacing - callers configure both
//! here. Defaults reproduce the original game: 8 pairs, 800 ms before a
//! mismatched pair flips back down.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a match game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of symbol pairs per game. Deck length is twice this.
    pub pair_count: usize,

    /// How long the presentation layer should leave a mismatched pair
    /// face-up before clearing it. Pacing only; carried on the
    /// [`ClearToken`](crate::engine::ClearToken) so the caller doesn't
    /// need to read it back from config.
    pub mismatch_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: 8,
            mismatch_delay: Duration::from_millis(800),
        }
    }
}

impl GameConfig {
    /// Deck length implied by this configuration.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.pair_count * 2
    }
}
