//! Stop filter implementation.
//!
//! Removes common words that do not contribute to search relevance. The
//! position increments of removed tokens are added to the next surviving
//! token, so phrase queries still see the gap.
//!
//! # Examples
//!
//! ```
//! use vecsyn::analysis::token::Token;
//! use vecsyn::analysis::token_filter::Filter;
//! use vecsyn::analysis::token_filter::stop::StopFilter;
//! use vecsyn::analysis::token_stream::{collect_tokens, IntoTokenStream};
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//! let tokens = vec![Token::new("the"), Token::new("quick"), Token::new("fox")];
//!
//! let mut stream = filter.filter(tokens.into_token_stream()).unwrap();
//! let result = collect_tokens(stream.as_mut()).unwrap();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[0].position_increment, 2);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

/// Default English stop words list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        ENGLISH_STOP_WORDS
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    )
});

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
        }
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use vecsyn::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(StopStream {
            input,
            stop_words: Arc::clone(&self.stop_words),
        }))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

struct StopStream {
    input: BoxTokenStream,
    stop_words: Arc<HashSet<String>>,
}

impl TokenStream for StopStream {
    fn reset(&mut self) -> Result<()> {
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        let mut skipped = 0;
        while let Some(mut token) = self.input.next_token()? {
            if self.stop_words.contains(&token.text) {
                skipped += token.position_increment;
                continue;
            }
            token.position_increment += skipped;
            return Ok(Some(token));
        }
        Ok(None)
    }

    fn end(&mut self) -> Result<()> {
        self.input.end()
    }

    fn close(&mut self) -> Result<()> {
        self.input.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_stream::{collect_tokens, IntoTokenStream};

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello"),
            Token::new("the"),
            Token::new("world"),
            Token::new("and"),
            Token::new("or"),
            Token::new("test"),
        ];

        let mut stream = filter.filter(tokens.into_token_stream()).unwrap();
        let result = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[0].position_increment, 1);
        assert_eq!(result[1].text, "world");
        assert_eq!(result[1].position_increment, 2);
        assert_eq!(result[2].text, "test");
        assert_eq!(result[2].position_increment, 3);
    }

    #[test]
    fn test_trailing_stop_words() {
        let filter = StopFilter::new();
        let tokens = vec![Token::new("fox"), Token::new("is"), Token::new("it")];

        let mut stream = filter.filter(tokens.into_token_stream()).unwrap();
        let result = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "fox");
    }

    #[test]
    fn test_default_stop_words() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), ENGLISH_STOP_WORDS.len());
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("fox"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
