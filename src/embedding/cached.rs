//! Memoizing oracle wrapper.
//!
//! Nearest-neighbour scans over a large vocabulary are expensive and query
//! terms repeat a lot, so [`CachedOracle`] remembers answers per
//! `(term, min_score)`. Failed lookups are not remembered.

use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;

use crate::embedding::{SharedOracle, SimilarityOracle};
use crate::error::Result;

/// Default number of cached lookups before the cache is flushed.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

type CacheKey = (String, u64);

/// Oracle decorator that caches successful lookups.
pub struct CachedOracle {
    inner: SharedOracle,
    cache: RwLock<AHashMap<CacheKey, Vec<String>>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedOracle {
    pub fn new(inner: SharedOracle) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Cache at most `capacity` lookups; the cache is flushed when full.
    pub fn with_capacity(inner: SharedOracle, capacity: usize) -> Self {
        CachedOracle {
            inner,
            cache: RwLock::new(AHashMap::new()),
            capacity: capacity.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Number of cached lookups.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}

impl SimilarityOracle for CachedOracle {
    fn similar_terms(&self, term: &str, min_score: f64) -> Result<Vec<String>> {
        let key = (term.to_string(), min_score.to_bits());
        if let Some(cached) = self.cache.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(cached.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let terms = self.inner.similar_terms(term, min_score)?;

        let mut cache = self.cache.write();
        if cache.len() >= self.capacity {
            debug!("similarity cache full ({} entries), flushing", cache.len());
            cache.clear();
        }
        cache.insert(key, terms.clone());

        Ok(terms)
    }

    fn name(&self) -> &'static str {
        "cached"
    }
}

impl std::fmt::Debug for CachedOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedOracle")
            .field("inner", &self.inner.name())
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}
