//! In-memory word embedding vocabulary.
//!
//! [`WordVectors`] holds one dense vector per vocabulary word and answers
//! nearest-neighbour questions by cosine similarity. The vocabulary is scanned
//! in parallel, which keeps lookups tolerable for vocabularies in the
//! hundreds of thousands of words.
//!
//! # Examples
//!
//! ```
//! use vecsyn::embedding::{SimilarityOracle, WordVectors};
//!
//! let vectors = WordVectors::from_pairs(
//!     2,
//!     vec![
//!         ("quick", vec![1.0, 0.1]),
//!         ("fast", vec![1.0, 0.0]),
//!         ("fox", vec![0.0, 1.0]),
//!     ],
//! )
//! .unwrap();
//!
//! let similar = vectors.similar_terms("quick", 0.9).unwrap();
//! assert_eq!(similar, vec!["quick", "fast"]);
//! ```

use std::cmp::Ordering;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::embedding::SimilarityOracle;
use crate::error::{Result, VecsynError};
use crate::util::simd;

/// Word embedding vocabulary with cosine-similarity lookups.
#[derive(Clone, Debug)]
pub struct WordVectors {
    dimension: usize,
    words: Vec<String>,
    vectors: Vec<Vec<f32>>,
    norms: Vec<f32>,
    index: AHashMap<String, usize>,
}

impl WordVectors {
    /// Create an empty vocabulary of the given vector dimension.
    pub fn new(dimension: usize) -> Self {
        WordVectors {
            dimension,
            words: Vec::new(),
            vectors: Vec::new(),
            norms: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Build a vocabulary from `(word, vector)` pairs.
    pub fn from_pairs<I, S>(dimension: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors = Self::new(dimension);
        for (word, vector) in pairs {
            vectors.insert(word, vector)?;
        }
        Ok(vectors)
    }

    /// Add a word, replacing the vector of an existing one.
    pub fn insert<S: Into<String>>(&mut self, word: S, vector: Vec<f32>) -> Result<()> {
        let word = word.into();
        if vector.len() != self.dimension {
            return Err(VecsynError::invalid_argument(format!(
                "vector for '{}' has dimension {}, expected {}",
                word,
                vector.len(),
                self.dimension
            )));
        }
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(VecsynError::invalid_argument(format!(
                "vector for '{word}' contains non-finite values"
            )));
        }

        let norm = simd::magnitude(&vector);
        match self.index.get(&word) {
            Some(&i) => {
                self.vectors[i] = vector;
                self.norms[i] = norm;
            }
            None => {
                self.index.insert(word.clone(), self.words.len());
                self.words.push(word);
                self.vectors.push(vector);
                self.norms.push(norm);
            }
        }
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        self.index.get(word).map(|&i| self.vectors[i].as_slice())
    }

    /// Cosine similarity of two vocabulary words.
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let i = *self.index.get(a)?;
        let j = *self.index.get(b)?;
        Some(self.cosine(i, j))
    }

    fn cosine(&self, i: usize, j: usize) -> f64 {
        let norm = self.norms[i] * self.norms[j];
        if norm == 0.0 {
            return 0.0;
        }
        (simd::dot_product(&self.vectors[i], &self.vectors[j]) / norm) as f64
    }

    /// Vocabulary words whose similarity to `word` is at least `min_similarity`,
    /// most similar first. `word` itself is part of the result.
    ///
    /// Words outside the vocabulary have no neighbours.
    pub fn similar_words_in_vocab(&self, word: &str, min_similarity: f64) -> Vec<(String, f64)> {
        let Some(&target) = self.index.get(word) else {
            return Vec::new();
        };

        let mut similar: Vec<(usize, f64)> = (0..self.words.len())
            .into_par_iter()
            .map(|i| (i, self.cosine(target, i)))
            .filter(|(_, score)| *score >= min_similarity)
            .collect();

        similar.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| self.words[a.0].cmp(&self.words[b.0]))
        });

        similar
            .into_iter()
            .map(|(i, score)| (self.words[i].clone(), score))
            .collect()
    }
}

impl SimilarityOracle for WordVectors {
    fn similar_terms(&self, term: &str, min_score: f64) -> Result<Vec<String>> {
        Ok(self
            .similar_words_in_vocab(term, min_score)
            .into_iter()
            .map(|(word, _)| word)
            .collect())
    }

    fn name(&self) -> &'static str {
        "word_vectors"
    }
}
