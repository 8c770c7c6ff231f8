//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::Token;
use crate::analysis::token_stream::{BoxTokenStream, IntoTokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<BoxTokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    tokens.push(Token::with_offsets(&text[s..i], s, i));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }

        if let Some(s) = start {
            tokens.push(Token::with_offsets(&text[s..], s, text.len()));
        }

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_stream::collect_tokens;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let mut stream = tokenizer.tokenize("  Hello,\tworld! \n").unwrap();
        let tokens = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hello,");
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[0].end_offset, 8);
        assert_eq!(tokens[1].text, "world!");
        assert_eq!(tokens[1].start_offset, 9);
        assert_eq!(tokens[1].end_offset, 15);
    }

    #[test]
    fn test_empty_input() {
        let mut stream = WhitespaceTokenizer::new().tokenize("   ").unwrap();
        assert!(collect_tokens(stream.as_mut()).unwrap().is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
