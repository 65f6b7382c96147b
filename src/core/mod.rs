//! Core types: symbols, RNG, configuration.
//!
//! This module contains the building blocks the rest of the crate is
//! assembled from. Nothing here knows about flips or boards.

pub mod config;
pub mod rng;
pub mod symbol;

pub use config::GameConfig;
pub use rng::{GameRng, GameRngState};
pub use symbol::{SymbolCatalog, SymbolDef, SymbolId};
