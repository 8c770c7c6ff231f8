//! # vecsyn
//!
//! Word-embedding synonym expansion for full-text analysis pipelines.
//!
//! ## Features
//!
//! - Pull-based token streams with stackable filters
//! - Synonym injection driven by a pluggable similarity oracle
//! - In-memory word vectors with SIMD cosine similarity
//! - English analysis chain with possessive, stop word and Porter stemming stages
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use vecsyn::analysis::analyzer::Analyzer;
//! use vecsyn::config::AnalyzerConfig;
//! use vecsyn::embedding::word_vectors::WordVectors;
//!
//! let vectors = WordVectors::from_pairs(
//!     2,
//!     vec![("car", vec![1.0, 0.0]), ("automobile", vec![0.99, 0.01])],
//! )
//! .unwrap();
//!
//! let config = AnalyzerConfig { stem: false, ..AnalyzerConfig::default() };
//! let analyzer = config.build(Arc::new(vectors)).unwrap();
//! let tokens = analyzer.analyze("A car").unwrap();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["car", "automobile"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod util;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, SynonymAnalyzer};
    pub use crate::analysis::token::{Token, TokenType};
    pub use crate::analysis::token_filter::synonym_expansion::{
        PositionMode, SynonymExpansionFilter,
    };
    pub use crate::analysis::token_stream::TokenStream;
    pub use crate::config::AnalyzerConfig;
    pub use crate::embedding::{SharedOracle, SimilarityOracle};
    pub use crate::error::{Result, VecsynError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
