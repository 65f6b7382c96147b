//! Derived board state: phase and snapshots.
//!
//! The engine stores only the face-up and matched position sets; everything
//! else (phase, solved) is derived. [`BoardSnapshot`] packages a consistent
//! point-in-time view for observers that want to diff renders or log games.
//!
//! Snapshots use `im` persistent sets, so taking one is O(1) in the matched
//! set's size.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Where the flip state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No unconfirmed cards face-up.
    Idle,
    /// One card face-up, waiting for its candidate pair.
    OneRevealed,
    /// Two mismatched cards face-up, waiting to be cleared.
    Evaluating,
    /// Every position is matched. Terminal until the next game.
    Solved,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::OneRevealed => "one-revealed",
            Phase::Evaluating => "evaluating",
            Phase::Solved => "solved",
        };
        write!(f, "{name}")
    }
}

/// A point-in-time view of the board.
///
/// `face_up` and `matched` are always disjoint; `face_up` never holds more
/// than two positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Unconfirmed face-up positions, in flip order.
    pub face_up: SmallVec<[usize; 2]>,

    /// Permanently revealed positions.
    pub matched: ImHashSet<usize>,

    /// True iff every position is matched.
    pub solved: bool,

    /// Derived phase at snapshot time.
    pub phase: Phase,

    /// Game generation the snapshot belongs to.
    pub generation: u64,
}

impl BoardSnapshot {
    /// Check whether a position reads as revealed to a renderer
    /// (face-up or matched).
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.matched.contains(&position) || self.face_up.contains(&position)
    }
}
