//! English possessive filter.
//!
//! Removes a trailing possessive `'s` from tokens (`"fox's"` → `"fox"`). The
//! ASCII apostrophe, the right single quotation mark (U+2019) and the
//! fullwidth apostrophe (U+FF07) are recognised.

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

const APOSTROPHES: [char; 3] = ['\'', '\u{2019}', '\u{FF07}'];

/// A filter that strips English possessives.
#[derive(Clone, Debug, Default)]
pub struct EnglishPossessiveFilter;

impl EnglishPossessiveFilter {
    pub fn new() -> Self {
        EnglishPossessiveFilter
    }

    /// Strip a trailing `'s` if present.
    pub fn strip(text: &str) -> Option<&str> {
        let without_s = text.strip_suffix(['s', 'S'])?;
        without_s.strip_suffix(APOSTROPHES)
    }
}

impl Filter for EnglishPossessiveFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(PossessiveStream { input }))
    }

    fn name(&self) -> &'static str {
        "english_possessive"
    }
}

struct PossessiveStream {
    input: BoxTokenStream,
}

impl TokenStream for PossessiveStream {
    fn reset(&mut self) -> Result<()> {
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token()?.map(|mut token| {
            if let Some(stripped) = EnglishPossessiveFilter::strip(&token.text) {
                let len = stripped.len();
                token.text.truncate(len);
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
    use crate::analysis::token_stream::{collect_tokens, IntoTokenStream};

    #[test]
    fn test_strip() {
        assert_eq!(EnglishPossessiveFilter::strip("fox's"), Some("fox"));
        assert_eq!(EnglishPossessiveFilter::strip("FOX'S"), Some("FOX"));
        assert_eq!(EnglishPossessiveFilter::strip("fox\u{2019}s"), Some("fox"));
        assert_eq!(EnglishPossessiveFilter::strip("'s"), Some(""));
        assert_eq!(EnglishPossessiveFilter::strip("foxes"), None);
        assert_eq!(EnglishPossessiveFilter::strip("s"), None);
    }

    #[test]
    fn test_possessive_filter() {
        let tokens = vec![Token::with_offsets("fox's", 4, 9), Token::new("den")];
        let mut stream = EnglishPossessiveFilter::new()
            .filter(tokens.into_token_stream())
            .unwrap();
        let result = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(result[0].text, "fox");
        assert_eq!(result[0].end_offset, 9);
        assert_eq!(result[1].text, "den");
    }
}
