//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and drops
//! segments that contain no alphanumeric character (punctuation and
//! whitespace). This is the default tokenizer of the synonym analyzer.
//!
//! # Examples
//!
//! ```
//! use vecsyn::analysis::token_stream::collect_tokens;
//! use vecsyn::analysis::tokenizer::Tokenizer;
//! use vecsyn::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let mut stream = tokenizer.tokenize("Hello, world!").unwrap();
//! let tokens = collect_tokens(stream.as_mut()).unwrap();
//!
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;
use crate::analysis::token_stream::{BoxTokenStream, IntoTokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Apostrophes inside words are kept (`"fox's"` is one token), which is what
/// the possessive filter expects downstream.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<BoxTokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .map(|(start, word)| Token::with_offsets(word, start, start + word.len()))
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
