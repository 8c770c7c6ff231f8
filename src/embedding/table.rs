//! Fixed similarity table.
//!
//! Maps a term to an ordered list of `(candidate, score)` pairs. Useful when
//! similarities were computed offline, and in tests.
//!
//! The JSON form is an object of arrays of pairs:
//!
//! ```json
//! {
//!   "quick": [["fast", 0.93], ["speedy", 0.91]],
//!   "car": [["automobile", 0.99]]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use ahash::AHashMap;

use crate::embedding::SimilarityOracle;
use crate::error::{Result, VecsynError};

/// In-memory table of scored candidates per term.
#[derive(Clone, Debug, Default)]
pub struct SimilarityTable {
    entries: AHashMap<String, Vec<(String, f64)>>,
}

impl SimilarityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<(String, f64)>> = serde_json::from_str(json)?;
        Ok(SimilarityTable {
            entries: entries.into_iter().collect(),
        })
    }

    /// Load a table from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            VecsynError::config(format!(
                "Failed to read similarity table '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Set the candidates of `term`, replacing any previous entry.
    pub fn insert<S: Into<String>>(&mut self, term: S, candidates: Vec<(String, f64)>) {
        self.entries.insert(term.into(), candidates);
    }

    /// Scored candidates of `term`, in table order.
    pub fn get(&self, term: &str) -> Option<&[(String, f64)]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SimilarityOracle for SimilarityTable {
    fn similar_terms(&self, term: &str, min_score: f64) -> Result<Vec<String>> {
        Ok(self
            .get(term)
            .unwrap_or_default()
            .iter()
            .filter(|(_, score)| *score >= min_score)
            .map(|(candidate, _)| candidate.clone())
            .collect())
    }

    fn name(&self) -> &'static str {
        "table"
    }
}
