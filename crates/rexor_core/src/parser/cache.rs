//! Parse-cache collaborator interface.
//!
//! Caching parsed trees is the caller's business — this crate only fixes
//! the contract. A cache key is the exact parsed text plus every option
//! that changes the grammar; a cache hit must hand back an owned tree that
//! shares nothing with what was stored.
//!
//! [`Ast`] is an index arena, so [`Clone`] already produces a deep copy
//! with consistent parent links; implementations simply clone on both
//! `put` and `get`. Implementations shared across threads must serialize
//! access internally (a mutex around the underlying map is enough).

use crate::parser::ast::Ast;
use crate::parser::EcmaVersion;

/// Identity of one parse: the text and the grammar switches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// The parsed text (the literal or bare pattern).
    pub source: String,
    /// Annex B disabled?
    pub strict: bool,
    /// Grammar edition.
    pub ecma_version: EcmaVersion,
    /// `u` mode (bare-pattern parses; literals carry it in the text).
    pub unicode: bool,
    /// `v` mode (bare-pattern parses; literals carry it in the text).
    pub unicode_sets: bool,
}

/// A cache of parsed trees.
pub trait ParseCache {
    /// Returns an owned, mutation-isolated copy of the cached tree.
    fn get(&self, key: &CacheKey) -> Option<Ast>;
    /// Stores a copy of `ast` under `key`.
    fn put(&self, key: CacheKey, ast: &Ast);
}
