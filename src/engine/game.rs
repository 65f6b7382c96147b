//! The match engine: flip rules, match promotion, deferred clearing.
//!
//! ## Flip rules
//!
//! A flip is rejected (a no-op) when the position is already matched,
//! already face-up, the board is solved, or two cards are already up and
//! awaiting their clear. Otherwise the card is revealed; a second card
//! either matches (both positions promote to the matched set immediately)
//! or mismatches.
//!
//! ## Deferred clearing
//!
//! A mismatch leaves both cards face-up and hands the caller a
//! [`ClearToken`] carrying the configured pacing delay. The caller waits,
//! then passes the token back to [`MatchEngine::clear_mismatch`]. Tokens are
//! keyed to the game generation: starting a new game invalidates any token
//! still in flight, so a stale timer firing against a fresh board does
//! nothing. No timer APIs, nothing to cancel.

use std::time::Duration;

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::state::{BoardSnapshot, Phase};
use crate::core::{GameConfig, GameRng, SymbolCatalog};
use crate::deck::{Deck, DeckError};

/// Errors from [`MatchEngine::flip`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FlipError {
    /// The position does not exist on the board.
    #[error("position {position} out of range for deck of {deck_len}")]
    OutOfRange {
        /// Requested position.
        position: usize,
        /// Current deck length.
        deck_len: usize,
    },
}

/// Why an in-range flip was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The position was already matched.
    AlreadyMatched,
    /// The position is already face-up.
    AlreadyFaceUp,
    /// Two cards are face-up and waiting to be cleared.
    EvaluationPending,
    /// The board is solved.
    Solved,
}

/// Handle for clearing a mismatched pair after the pacing delay.
///
/// Tokens compare by value; the engine only honors the token it issued for
/// the currently pending mismatch of the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearToken {
    generation: u64,
    first: usize,
    second: usize,
    delay: Duration,
}

impl ClearToken {
    /// Game generation this token was issued for.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The mismatched positions, in flip order.
    #[must_use]
    pub fn positions(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// How long to wait before passing the token back.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Result of a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Rejected(RejectReason),

    /// First card of a candidate pair revealed.
    Revealed {
        /// The revealed position.
        position: usize,
    },

    /// Second card matched the first; both are now permanently revealed.
    Matched {
        /// First flipped position of the pair.
        first: usize,
        /// Second flipped position of the pair.
        second: usize,
        /// True if this was the last pair.
        solved: bool,
    },

    /// Second card did not match. Both stay face-up until the caller
    /// returns the token after [`ClearToken::delay`].
    Mismatched {
        /// Pass back to [`MatchEngine::clear_mismatch`].
        token: ClearToken,
    },
}

/// A memory-matching game: one dealt deck plus the flip state machine.
///
/// ## Example
///
/// ```
/// use memory_match::engine::{FlipOutcome, MatchEngine};
///
/// let mut engine = MatchEngine::new(42);
/// assert_eq!(engine.deck().len(), 16);
///
/// match engine.flip(0).unwrap() {
///     FlipOutcome::Revealed { position } => assert_eq!(position, 0),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// assert!(engine.is_face_up(0));
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    catalog: SymbolCatalog,
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    /// Unconfirmed face-up positions, in flip order.
    face_up: SmallVec<[usize; 2]>,
    /// Permanently revealed positions.
    matched: ImHashSet<usize>,
    /// The token issued for the current mismatch, if one is outstanding.
    pending_clear: Option<ClearToken>,
    /// Bumped on every `new_game`; invalidates outstanding tokens.
    generation: u64,
}

impl MatchEngine {
    /// Create an engine over the builtin catalog with default settings.
    ///
    /// The first game is dealt immediately.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(SymbolCatalog::builtin(), GameConfig::default(), GameRng::new(seed))
            .expect("builtin catalog covers the default pair count")
    }

    /// Create an engine with explicit catalog, configuration, and RNG.
    ///
    /// Fails if the catalog cannot supply `config.pair_count` distinct
    /// symbols. Later deals reuse the validated inputs, so `new_game`
    /// cannot fail.
    pub fn with_config(
        catalog: SymbolCatalog,
        config: GameConfig,
        mut rng: GameRng,
    ) -> Result<Self, DeckError> {
        let deck = Deck::deal(&catalog, config.pair_count, &mut rng)?;

        Ok(Self {
            catalog,
            config,
            rng,
            deck,
            face_up: SmallVec::new(),
            matched: ImHashSet::new(),
            pending_clear: None,
            generation: 0,
        })
    }

    /// Start a new game: redeal the deck and reset all board state.
    ///
    /// Bumps the game generation, so any [`ClearToken`] issued before this
    /// call is dead. Returns the fresh deck.
    pub fn new_game(&mut self) -> &Deck {
        self.deck = Deck::deal(&self.catalog, self.config.pair_count, &mut self.rng)
            .expect("catalog was validated at construction");
        self.face_up.clear();
        self.matched = ImHashSet::new();
        self.pending_clear = None;
        self.generation += 1;
        &self.deck
    }

    /// Flip the card at `position`.
    ///
    /// Out-of-range positions are an error; in-range but ineligible flips
    /// return [`FlipOutcome::Rejected`] and leave the board untouched.
    pub fn flip(&mut self, position: usize) -> Result<FlipOutcome, FlipError> {
        if position >= self.deck.len() {
            return Err(FlipError::OutOfRange {
                position,
                deck_len: self.deck.len(),
            });
        }

        if self.is_solved() {
            return Ok(FlipOutcome::Rejected(RejectReason::Solved));
        }
        if self.matched.contains(&position) {
            return Ok(FlipOutcome::Rejected(RejectReason::AlreadyMatched));
        }
        if self.face_up.contains(&position) {
            return Ok(FlipOutcome::Rejected(RejectReason::AlreadyFaceUp));
        }
        if self.face_up.len() == 2 {
            return Ok(FlipOutcome::Rejected(RejectReason::EvaluationPending));
        }

        self.face_up.push(position);
        if self.face_up.len() < 2 {
            return Ok(FlipOutcome::Revealed { position });
        }

        let first = self.face_up[0];
        let second = self.face_up[1];

        if self.deck.symbol_at(first) == self.deck.symbol_at(second) {
            self.face_up.clear();
            self.matched.insert(first);
            self.matched.insert(second);
            Ok(FlipOutcome::Matched {
                first,
                second,
                solved: self.is_solved(),
            })
        } else {
            let token = ClearToken {
                generation: self.generation,
                first,
                second,
                delay: self.config.mismatch_delay,
            };
            self.pending_clear = Some(token);
            Ok(FlipOutcome::Mismatched { token })
        }
    }

    /// Clear a mismatched pair.
    ///
    /// Honored only for the token of the currently outstanding mismatch:
    /// tokens from a previous game, or already-consumed tokens, are no-ops.
    /// Returns whether anything was cleared. Never touches the matched set.
    pub fn clear_mismatch(&mut self, token: ClearToken) -> bool {
        if self.pending_clear != Some(token) {
            return false;
        }

        self.pending_clear = None;
        self.face_up.clear();
        true
    }

    // === Read-only queries ===

    /// Is the position face-up but not yet confirmed matched?
    ///
    /// Matched positions answer `false` here; a renderer shows a card's
    /// face when either this or [`MatchEngine::is_matched`] is true.
    #[must_use]
    pub fn is_face_up(&self, position: usize) -> bool {
        self.face_up.contains(&position)
    }

    /// Is the position permanently revealed?
    #[must_use]
    pub fn is_matched(&self, position: usize) -> bool {
        self.matched.contains(&position)
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.matched.len() == self.deck.len()
    }

    /// Derived state machine phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_solved() {
            Phase::Solved
        } else {
            match self.face_up.len() {
                0 => Phase::Idle,
                1 => Phase::OneRevealed,
                _ => Phase::Evaluating,
            }
        }
    }

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The catalog this engine deals from.
    #[must_use]
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current game generation. Starts at 0, +1 per `new_game`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Take a consistent point-in-time view of the board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            face_up: self.face_up.clone(),
            matched: self.matched.clone(),
            solved: self.is_solved(),
            phase: self.phase(),
            generation: self.generation,
        }
    }
}
