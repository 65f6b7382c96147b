//! Symbol catalog: the fixed set of card faces.
//!
//! A [`SymbolId`] is an opaque identifier; the catalog maps it to a
//! [`SymbolDef`] carrying the short string key the presentation layer uses
//! to pick an icon ("react", "docker", ...). The engine never interprets
//! keys - it only compares IDs.
//!
//! Iteration and sampling order is registration order, so a seeded
//! [`GameRng`](crate::core::GameRng) always selects the same symbols.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifier for a symbol in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A symbol definition: an ID plus its display key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDef {
    /// Unique identifier for this symbol.
    pub id: SymbolId,

    /// Short key the presentation layer maps to an icon.
    pub key: String,
}

/// Registry of symbol definitions.
///
/// Stores the catalog a game deals from and provides lookup by ID.
///
/// ## Example
///
/// ```
/// use memory_match::core::SymbolCatalog;
///
/// let mut catalog = SymbolCatalog::new();
/// let rust = catalog.register("rust");
///
/// assert_eq!(catalog.get(rust).unwrap().key, "rust");
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SymbolCatalog {
    defs: FxHashMap<SymbolId, SymbolDef>,
    /// Registration order; sampling indexes into this for determinism.
    order: Vec<SymbolId>,
    next_id: u32,
}

impl SymbolCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of the original site: icon keys for popular
    /// programming tools.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for key in [
            "react", "laravel", "php", "java", "js", "nodejs", "python", "html5", "css3",
            "git", "github", "docker", "linux", "aws", "npm", "yarn", "vuejs", "angular",
            "swift", "android", "apple", "database", "server", "code", "terminal", "cubes",
        ] {
            catalog.register(key);
        }
        catalog
    }

    /// Register a symbol with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register(&mut self, key: impl Into<String>) -> SymbolId {
        let id = SymbolId::new(self.next_id);
        self.next_id += 1;

        self.defs.insert(id, SymbolDef { id, key: key.into() });
        self.order.push(id);
        id
    }

    /// Get a symbol definition by ID.
    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&SymbolDef> {
        self.defs.get(&id)
    }

    /// Get a symbol's key, panicking if not found.
    ///
    /// Use when you're certain the symbol exists (e.g. IDs read back out
    /// of a deck dealt from this catalog).
    #[must_use]
    pub fn key_unchecked(&self, id: SymbolId) -> &str {
        &self.defs.get(&id).expect("Symbol not found in catalog").key
    }

    /// Check if a symbol ID is registered.
    #[must_use]
    pub fn contains(&self, id: SymbolId) -> bool {
        self.defs.contains_key(&id)
    }

    /// Get the number of registered symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Symbol IDs in registration order.
    #[must_use]
    pub fn ids(&self) -> &[SymbolId] {
        &self.order
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolDef> {
        self.order.iter().map(|id| &self.defs[id])
    }
}
