//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline. Tokens
//! produced by a tokenizer are tagged [`TokenType::Base`]; alternatives
//! injected by the synonym expansion filter are tagged
//! [`TokenType::Synonym`].
//!
//! # Position increments
//!
//! `position_increment` encodes where a token sits relative to the running
//! position counter. Tokenizers emit 1; the stop filter adds the increments
//! of removed tokens to the next surviving token. The synonym expansion
//! filter rewrites the field, see
//! [`PositionMode`](crate::analysis::token_filter::synonym_expansion::PositionMode).
//!
//! # Examples
//!
//! ```
//! use vecsyn::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("quick", 4, 9);
//! assert_eq!(token.text, "quick");
//! assert_eq!(token.position_increment, 1);
//! assert_eq!(token.token_type, TokenType::Base);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Whether this token came from the input or was synthesized
    pub token_type: TokenType,

    /// Position relative to the running position counter (default: 1)
    pub position_increment: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Protected from stemming
    pub keyword: bool,
}

/// Distinguishes input tokens from synthesized alternatives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Produced by a tokenizer (possibly rewritten by filters)
    #[default]
    Base,
    /// Alternative injected at the position of a base token
    Synonym,
}

impl TokenType {
    /// The type tag as rendered in token listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Base => "word",
            TokenType::Synonym => "SYNONYM",
        }
    }

    pub fn is_synonym(&self) -> bool {
        matches!(self, TokenType::Synonym)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Create a new base token with no offsets.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::with_offsets(text, 0, 0)
    }

    /// Create a new base token with byte offsets into the original text.
    pub fn with_offsets<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            token_type: TokenType::Base,
            position_increment: 1,
            start_offset,
            end_offset,
            keyword: false,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_synonym(&self) -> bool {
        self.token_type.is_synonym()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Mark the token as a keyword.
    pub fn with_keyword(mut self, keyword: bool) -> Self {
        self.keyword = keyword;
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
