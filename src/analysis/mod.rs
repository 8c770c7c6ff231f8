//! Text analysis for vecsyn.
//!
//! This module provides tokenizers, token filters and analyzers. Analysis is
//! pull-based: a tokenizer produces a [`TokenStream`] and every filter wraps
//! the stream of the stage before it.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod token_stream;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer, SynonymAnalyzer};
pub use token::{Token, TokenType};
pub use token_filter::{Filter, PositionMode, SynonymExpansionFilter};
pub use token_stream::{BoxTokenStream, TokenStream, collect_tokens, display_tokens};
pub use tokenizer::Tokenizer;
