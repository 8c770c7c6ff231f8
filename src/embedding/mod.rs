//! Similarity oracles backing synonym expansion.
//!
//! A [`SimilarityOracle`] answers one question: which terms are semantically
//! close to this one? The synonym expansion filter asks it once per base
//! token. Oracles are read-only at query time and are shared between streams
//! through a [`SharedOracle`] handle.
//!
//! # Implementations
//!
//! - [`WordVectors`](word_vectors::WordVectors) - cosine similarity over an in-memory embedding vocabulary
//! - [`SimilarityTable`](table::SimilarityTable) - fixed table of scored candidates, loadable from JSON
//! - [`CachedOracle`](cached::CachedOracle) - memoizing wrapper around another oracle

use std::sync::Arc;

use crate::error::Result;

pub mod cached;
pub mod table;
pub mod word_vectors;

pub use cached::CachedOracle;
pub use table::SimilarityTable;
pub use word_vectors::WordVectors;

/// Source of semantically related terms.
pub trait SimilarityOracle: Send + Sync {
    /// Terms related to `term` with a similarity of at least `min_score`.
    ///
    /// The returned order is the order in which alternatives are emitted.
    /// The result may be empty and may contain `term` itself. An error means
    /// the oracle could not be queried at all.
    fn similar_terms(&self, term: &str, min_score: f64) -> Result<Vec<String>>;

    /// Get the name of this oracle (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Shared, read-only oracle handle.
pub type SharedOracle = Arc<dyn SimilarityOracle>;
