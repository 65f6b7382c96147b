//! Deck dealing: subset selection plus shuffle.
//!
//! A deal picks `pair_count` distinct symbols from the catalog, duplicates
//! them, and lays the `2 * pair_count` cards out in a uniformly random
//! order. Positions are the indices `0..len` and never move afterwards.
//!
//! Invariant: every symbol present in a deck appears exactly twice.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameRng, SymbolCatalog, SymbolId};

/// Errors from dealing a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A game needs at least one pair.
    #[error("pair count must be at least 1")]
    NoPairs,

    /// The catalog cannot supply enough distinct symbols.
    #[error("catalog has {available} symbols, {requested} pairs requested")]
    CatalogTooSmall {
        /// Pairs asked for.
        requested: usize,
        /// Distinct symbols the catalog holds.
        available: usize,
    },
}

/// An ordered deck of cards for one game.
///
/// Each card is a position (its index) assigned a symbol. Decks are
/// immutable once dealt; a new game deals a new deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<SymbolId>,
}

impl Deck {
    /// Deal a new deck.
    ///
    /// Picks `pair_count` distinct symbols from `catalog` uniformly without
    /// replacement, duplicates them, and Fisher-Yates-shuffles the result.
    /// The catalog is not mutated.
    pub fn deal(
        catalog: &SymbolCatalog,
        pair_count: usize,
        rng: &mut GameRng,
    ) -> Result<Self, DeckError> {
        if pair_count == 0 {
            return Err(DeckError::NoPairs);
        }
        if catalog.len() < pair_count {
            return Err(DeckError::CatalogTooSmall {
                requested: pair_count,
                available: catalog.len(),
            });
        }

        let ids = catalog.ids();
        let chosen = rng.sample_distinct(ids.len(), pair_count);

        let mut cards = Vec::with_capacity(pair_count * 2);
        for &idx in &chosen {
            cards.push(ids[idx]);
            cards.push(ids[idx]);
        }
        rng.shuffle(&mut cards);

        Ok(Self { cards })
    }

    /// Number of cards (always `2 * pair_count`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A dealt deck is never empty; here for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of symbol pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Symbol at a position, or `None` if out of range.
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Option<SymbolId> {
        self.cards.get(position).copied()
    }

    /// All card symbols in position order.
    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.cards
    }

    /// Positions holding the given symbol (two for any symbol in the deck).
    pub fn positions_of(&self, symbol: SymbolId) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, &s)| s == symbol)
            .map(|(pos, _)| pos)
    }
}
