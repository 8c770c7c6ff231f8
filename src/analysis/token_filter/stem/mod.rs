//! Stemming token filter and stemmer implementations.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::Token;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod porter;

// Re-export stemmers
pub use porter::PorterStemmer;

/// Filter that applies stemming to tokens.
///
/// Tokens marked as keywords are passed through unchanged. Synonym tokens
/// are stemmed like any other token.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(StemStream {
            input,
            stemmer: Arc::clone(&self.stemmer),
        }))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

struct StemStream {
    input: BoxTokenStream,
    stemmer: Arc<dyn Stemmer>,
}

impl TokenStream for StemStream {
    fn reset(&mut self) -> Result<()> {
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token()?.map(|mut token| {
            if !token.keyword {
                token.text = self.stemmer.stem(&token.text);
            }
            token
        }))
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
    use crate::analysis::token::TokenType;
    use crate::analysis::token_stream::{collect_tokens, IntoTokenStream};

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("running"),
            Token::new("flies"),
            Token::new("hopping").with_keyword(true),
            Token::new("ponies").with_token_type(TokenType::Synonym),
        ];

        let mut stream = filter.filter(tokens.into_token_stream()).unwrap();
        let result = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "fli");
        assert_eq!(result[2].text, "hopping"); // Keywords are not stemmed
        assert_eq!(result[3].text, "poni");
        assert!(result[3].is_synonym());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
        assert_eq!(format!("{:?}", StemFilter::new()), "StemFilter { stemmer: \"porter\" }");
    }
}
