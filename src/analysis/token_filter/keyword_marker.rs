//! Keyword marker filter.
//!
//! Flags tokens whose text is in a protected set so that later stages (the
//! stem filter) leave them untouched. Tokens that are already marked stay
//! marked.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

/// A filter that marks protected terms as keywords.
#[derive(Clone, Debug)]
pub struct KeywordMarkerFilter {
    keywords: Arc<HashSet<String>>,
}

impl KeywordMarkerFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeywordMarkerFilter {
            keywords: Arc::new(keywords.into_iter().map(Into::into).collect()),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }
}

impl Filter for KeywordMarkerFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(KeywordMarkerStream {
            input,
            keywords: Arc::clone(&self.keywords),
        }))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}

struct KeywordMarkerStream {
    input: BoxTokenStream,
    keywords: Arc<HashSet<String>>,
}

impl TokenStream for KeywordMarkerStream {
    fn reset(&mut self) -> Result<()> {
        self.input.reset()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.input.next_token()?.map(|mut token| {
            if self.keywords.contains(&token.text) {
                token.keyword = true;
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
