//! # memory-match
//!
//! The engine behind a memory-matching (concentration) card puzzle: deal a
//! shuffled deck of symbol pairs, track flips, promote matches, and report
//! when the board is solved. A presentation layer owns rendering, input, and
//! timers; this crate owns the state transitions.
//!
//! ## Design Principles
//!
//! 1. **Deterministic by injection**: All randomness flows through
//!    [`GameRng`]. Seed it and every deal is reproducible; tests never
//!    assert on "looks random".
//!
//! 2. **Invalid flips are no-ops, not errors**: Flipping a matched card,
//!    a card already face-up, or anything while two cards await resolution
//!    returns [`FlipOutcome::Rejected`] and changes nothing. The only
//!    `Err` is a position outside the deck.
//!
//! 3. **No timers inside the engine**: The pacing delay after a mismatch is
//!    the caller's to schedule. The engine hands out a generation-keyed
//!    [`ClearToken`]; a token from a superseded game clears nothing.
//!
//! ## Modules
//!
//! - `core`: Symbol catalog, RNG, configuration
//! - `deck`: Deck dealing (subset selection + shuffle)
//! - `engine`: Flip state machine and board queries
//! - `typewriter`: Phrase-cycling typewriter loop (deterministic stepper)

pub mod core;
pub mod deck;
pub mod engine;
pub mod typewriter;

// Re-export commonly used types
pub use crate::core::{
    GameConfig,
    GameRng, GameRngState,
    SymbolCatalog, SymbolDef, SymbolId,
};

pub use crate::deck::{Deck, DeckError};

pub use crate::engine::{
    BoardSnapshot, ClearToken, FlipError, FlipOutcome, MatchEngine, Phase, RejectReason,
};

pub use crate::typewriter::{Stage, Typewriter, TypewriterConfig};
