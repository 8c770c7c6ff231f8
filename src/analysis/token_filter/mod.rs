//! Token filter implementations for token transformation.
//!
//! A [`Filter`] wraps an upstream [`BoxTokenStream`] in a decorator stream.
//! Decorators implement the same pull contract as their input, so filters can
//! be chained in any order:
//!
//! ```text
//! Tokenizer → Possessive → Lowercase → Stop → Synonym expansion → Stem → Consumer
//! ```
//!
//! # Examples
//!
//! ```
//! use vecsyn::analysis::token::Token;
//! use vecsyn::analysis::token_filter::Filter;
//! use vecsyn::analysis::token_filter::lowercase::LowercaseFilter;
//! use vecsyn::analysis::token_stream::{collect_tokens, IntoTokenStream};
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello"), Token::new("WORLD")];
//! let mut stream = filter.filter(tokens.into_token_stream()).unwrap();
//! let filtered = collect_tokens(stream.as_mut()).unwrap();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token_stream::BoxTokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// A filter is a reusable, shareable factory: each call to [`filter`](Self::filter)
/// builds a fresh decorator that owns its own per-stream state.
pub trait Filter: Send + Sync {
    /// Wrap the input stream with this filter.
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod keyword_marker;
pub mod lowercase;
pub mod possessive;
pub mod stem;
pub mod stop;
pub mod synonym_expansion;

// Re-export all filters for convenient access
pub use keyword_marker::KeywordMarkerFilter;
pub use lowercase::LowercaseFilter;
pub use possessive::EnglishPossessiveFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
pub use synonym_expansion::{PositionMode, SynonymExpansionFilter, SynonymExpansionStream};
