//! Core analyzer trait definition.
//!
//! An [`Analyzer`] turns raw text into a token stream by combining a
//! tokenizer with a chain of filters:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Consumer
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`](super::StandardAnalyzer) - lowercase and English stop words
//! - [`PipelineAnalyzer`](super::PipelineAnalyzer) - custom tokenizer + filter chains
//! - [`SynonymAnalyzer`](super::SynonymAnalyzer) - English analysis with embedding synonym expansion
//!
//! # Examples
//!
//! ```
//! use vecsyn::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens = analyzer.analyze("Hello World").unwrap();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::Token;
use crate::analysis::token_stream::{BoxTokenStream, collect_tokens};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve many threads;
/// every call to [`token_stream`](Self::token_stream) builds an independent
/// stream with its own state.
pub trait Analyzer: Send + Sync {
    /// Build a fresh token stream over `text`.
    fn token_stream(&self, text: &str) -> Result<BoxTokenStream>;

    /// Analyze `text` and collect the resulting tokens.
    ///
    /// The stream is driven through the full reset/pull/end/close protocol.
    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let mut stream = self.token_stream(text)?;
        collect_tokens(stream.as_mut())
    }

    /// Normalize a single term the way indexed terms are normalized, without
    /// tokenizing or expanding it.
    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
