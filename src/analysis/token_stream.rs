//! Pull-based token stream contract.
//!
//! Every tokenizer output and every filter implements [`TokenStream`]. Filters
//! wrap a boxed inner stream, so they can be stacked in any order and a
//! consumer only ever sees the outermost stream.
//!
//! The consumer protocol is:
//!
//! ```text
//! reset() → next_token()* → end() → close()
//! ```
//!
//! `next_token` returns `Ok(None)` once the source is exhausted.
//!
//! # Examples
//!
//! ```
//! use vecsyn::analysis::token::Token;
//! use vecsyn::analysis::token_stream::{collect_tokens, display_tokens, VecTokenStream};
//!
//! let mut stream = VecTokenStream::new(vec![Token::new("quick"), Token::new("fox")]);
//! let tokens = collect_tokens(&mut stream).unwrap();
//! assert_eq!(display_tokens(&tokens), "[quick] [fox]");
//! ```

use crate::analysis::token::Token;
use crate::error::{Result, VecsynError};

/// A stream that hands out tokens one at a time.
pub trait TokenStream: Send {
    /// Prepare the stream for (re)consumption from the first token.
    fn reset(&mut self) -> Result<()>;

    /// Pull the next token, or `None` once the stream is exhausted.
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Signal that the consumer has seen the last token.
    fn end(&mut self) -> Result<()>;

    /// Release held resources. Pulling afterwards is an error.
    fn close(&mut self) -> Result<()>;
}

/// Boxed token stream, the currency passed between pipeline stages.
pub type BoxTokenStream = Box<dyn TokenStream>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> BoxTokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> BoxTokenStream {
        Box::new(VecTokenStream::new(self))
    }
}

/// An in-memory, resettable token stream.
#[derive(Clone, Debug, Default)]
pub struct VecTokenStream {
    tokens: Vec<Token>,
    cursor: usize,
    closed: bool,
}

impl VecTokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        VecTokenStream {
            tokens,
            cursor: 0,
            closed: false,
        }
    }

    /// Number of tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(VecsynError::invalid_state("token stream is closed"));
        }
        Ok(())
    }
}

impl TokenStream for VecTokenStream {
    fn reset(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.cursor = 0;
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.ensure_open()?;
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        Ok(token)
    }

    fn end(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.cursor = self.tokens.len();
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

/// Drive a stream through the full consumer protocol and collect its tokens.
pub fn collect_tokens(stream: &mut dyn TokenStream) -> Result<Vec<Token>> {
    stream.reset()?;

    let mut tokens = Vec::new();
    let pulled = loop {
        match stream.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    // Close even when a pull failed, then report the first error.
    let finished = pulled.and_then(|_| stream.end());
    let closed = stream.close();
    finished?;
    closed?;

    Ok(tokens)
}

/// Render tokens as `[term] [term] ...`.
pub fn display_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("[{}]", t.text))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_stream_pull_and_reset() {
        let mut stream = VecTokenStream::new(vec![Token::new("hello"), Token::new("world")]);

        assert_eq!(stream.next_token().unwrap().unwrap().text, "hello");
        assert_eq!(stream.remaining(), 1);
        assert_eq!(stream.next_token().unwrap().unwrap().text, "world");
        assert!(stream.next_token().unwrap().is_none());

        stream.reset().unwrap();
        assert_eq!(stream.next_token().unwrap().unwrap().text, "hello");
    }

    #[test]
    fn test_vec_stream_closed() {
        let mut stream = VecTokenStream::new(vec![Token::new("hello")]);
        stream.close().unwrap();

        let err = stream.next_token().unwrap_err();
        assert!(matches!(err, VecsynError::InvalidState(_)));
        assert!(stream.reset().is_err());
    }

    #[test]
    fn test_collect_tokens() {
        let mut stream = vec![Token::new("a"), Token::new("b")].into_token_stream();
        let tokens = collect_tokens(stream.as_mut()).unwrap();
        assert_eq!(tokens.len(), 2);

        // The protocol closes the stream.
        assert!(stream.next_token().is_err());
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(display_tokens(&[]), "");
        assert_eq!(
            display_tokens(&[Token::new("quick"), Token::new("fast")]),
            "[quick] [fast]"
        );
    }
}
