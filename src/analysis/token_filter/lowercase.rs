//! Lowercase filter implementation.
//!
//! Converts all token text to lowercase, which is essential for
//! case-insensitive search and for looking terms up in a lowercase
//! embedding vocabulary.

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Positions, offsets, and the token type are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(LowercaseStream { input }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

struct LowercaseStream {
    input: BoxTokenStream,
}

impl TokenStream for LowercaseStream {
    fn reset(&mut self) -> Result<()> {
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token()?.map(|mut token| {
            if token.text.chars().any(char::is_uppercase) {
                token.text = token.text.to_lowercase();
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
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello"),
            Token::new("WORLD"),
            Token::new("Fast").with_token_type(TokenType::Synonym),
        ];

        let mut stream = filter.filter(tokens.into_token_stream()).unwrap();
        let result = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "fast");
        assert!(result[2].is_synonym());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
