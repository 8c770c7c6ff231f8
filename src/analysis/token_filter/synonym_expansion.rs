//! Embedding-based synonym expansion filter.
//!
//! For every base token pulled from its input, the filter asks a
//! [`SimilarityOracle`] for semantically related terms and injects each one
//! as a [`TokenType::Synonym`] token directly after the base token. The
//! alternatives are buffered and handed out on subsequent pulls; the input is
//! not pulled again until the buffer is drained.
//!
//! ```text
//! input:   quick            fox
//! oracle:  quick → {fast}   fox → {}
//! output:  quick  fast      fox
//!          (base) (synonym) (base)
//! ```
//!
//! # Position increments
//!
//! The filter counts every base token it sees. With the default
//! [`PositionMode::RunningCount`], a base token that gains alternatives gets
//! that running count written into `position_increment`, and each of its
//! alternatives gets the same value. Base tokens without alternatives pass
//! through unchanged. The stamp is an absolute position marker, not the
//! usual relative step, so a consumer that sums increments will see
//! positions jump. Phrase and proximity matching over such a stream should
//! be checked first when positions look off. [`PositionMode::Relative`] keeps the incoming
//! increment on base tokens and gives alternatives an increment of 0.
//!
//! # Oracle failures
//!
//! A failed lookup is returned from the pull that triggered it. The base
//! token is held back, and the next pull queries the oracle for it again
//! before reading further input. `reset`, `end` and `close` discard it.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use vecsyn::analysis::token::Token;
//! use vecsyn::analysis::token_filter::Filter;
//! use vecsyn::analysis::token_filter::synonym_expansion::SynonymExpansionFilter;
//! use vecsyn::analysis::token_stream::{collect_tokens, IntoTokenStream};
//! use vecsyn::embedding::table::SimilarityTable;
//!
//! let mut table = SimilarityTable::new();
//! table.insert("quick", vec![("fast".to_string(), 0.95)]);
//!
//! let filter = SynonymExpansionFilter::new(Arc::new(table), 0.9);
//! let input = vec![Token::new("quick"), Token::new("fox")].into_token_stream();
//! let mut stream = filter.filter(input).unwrap();
//! let tokens = collect_tokens(stream.as_mut()).unwrap();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["quick", "fast", "fox"]);
//! assert!(tokens[1].is_synonym());
//! ```

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenType};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::embedding::SharedOracle;
use crate::error::{Result, VecsynError};

/// Minimum similarity used when none is configured.
pub const DEFAULT_MIN_ACCURACY: f64 = 0.98;

/// How the filter writes `position_increment`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionMode {
    /// Base tokens and their alternatives carry the running base-token count.
    #[default]
    RunningCount,
    /// Base tokens keep their increment; alternatives get 0.
    Relative,
}

/// Factory for [`SynonymExpansionStream`]s sharing one oracle.
#[derive(Clone)]
pub struct SynonymExpansionFilter {
    oracle: SharedOracle,
    min_accuracy: f64,
    position_mode: PositionMode,
}

impl SynonymExpansionFilter {
    /// Create a filter that keeps candidates scoring at least `min_accuracy`.
    pub fn new(oracle: SharedOracle, min_accuracy: f64) -> Self {
        SynonymExpansionFilter {
            oracle,
            min_accuracy,
            position_mode: PositionMode::default(),
        }
    }

    pub fn with_position_mode(mut self, position_mode: PositionMode) -> Self {
        self.position_mode = position_mode;
        self
    }

    pub fn min_accuracy(&self) -> f64 {
        self.min_accuracy
    }

    pub fn position_mode(&self) -> PositionMode {
        self.position_mode
    }

    /// Wrap `input` in a new expansion stream.
    pub fn wrap(&self, input: BoxTokenStream) -> SynonymExpansionStream {
        SynonymExpansionStream {
            input,
            oracle: SharedOracle::clone(&self.oracle),
            min_accuracy: self.min_accuracy,
            position_mode: self.position_mode,
            pending: VecDeque::new(),
            retry: None,
            positions: 0,
            closed: false,
        }
    }
}

impl std::fmt::Debug for SynonymExpansionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynonymExpansionFilter")
            .field("oracle", &self.oracle.name())
            .field("min_accuracy", &self.min_accuracy)
            .field("position_mode", &self.position_mode)
            .finish()
    }
}

impl Filter for SynonymExpansionFilter {
    fn filter(&self, input: BoxTokenStream) -> Result<BoxTokenStream> {
        Ok(Box::new(self.wrap(input)))
    }

    fn name(&self) -> &'static str {
        "synonym_expansion"
    }
}

/// An alternative waiting to be emitted.
#[derive(Clone, Debug)]
struct PendingAlternative {
    /// Snapshot of the triggering base token.
    state: Token,
    term: String,
    position_increment: usize,
}

impl PendingAlternative {
    fn into_token(self) -> Token {
        let mut token = self.state;
        token.text = self.term;
        token.token_type = TokenType::Synonym;
        token.position_increment = self.position_increment;
        token
    }
}

/// Stream that interleaves oracle-supplied alternatives with base tokens.
///
/// One instance serves one stream at a time; the oracle may be shared by
/// many instances.
pub struct SynonymExpansionStream {
    input: BoxTokenStream,
    oracle: SharedOracle,
    min_accuracy: f64,
    position_mode: PositionMode,
    pending: VecDeque<PendingAlternative>,
    /// Base token whose lookup failed, queried again on the next pull.
    retry: Option<Token>,
    positions: usize,
    closed: bool,
}

impl SynonymExpansionStream {
    /// Alternatives buffered for upcoming pulls.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Base tokens seen since the last reset or end.
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Whether a failed lookup is waiting to be retried.
    pub fn has_retry(&self) -> bool {
        self.retry.is_some()
    }

    fn clear(&mut self) {
        self.pending.clear();
        self.retry = None;
        self.positions = 0;
    }

    /// Look up alternatives for `token` and stamp its position.
    ///
    /// The oracle is queried before any state changes, so a failed lookup
    /// leaves the counter and queue as they were. A token without surviving
    /// alternatives is left untouched.
    fn expand(&mut self, token: &mut Token) -> Result<()> {
        let term = token.text.trim();
        let candidates = if term.is_empty() {
            Vec::new()
        } else {
            self.oracle.similar_terms(term, self.min_accuracy)?
        };

        self.positions += 1;

        let term = token.text.trim();
        let alternatives: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| candidate != term)
            .collect();
        if alternatives.is_empty() {
            return Ok(());
        }

        let alternative_increment = match self.position_mode {
            PositionMode::RunningCount => {
                token.position_increment = self.positions;
                self.positions
            }
            PositionMode::Relative => 0,
        };

        for alternative in alternatives {
            trace!("expanding '{}' with '{}'", token.text.trim(), alternative);
            self.pending.push_back(PendingAlternative {
                state: token.clone(),
                term: alternative,
                position_increment: alternative_increment,
            });
        }

        Ok(())
    }
}

impl TokenStream for SynonymExpansionStream {
    fn reset(&mut self) -> Result<()> {
        if self.closed {
            return Err(VecsynError::invalid_state(
                "synonym expansion stream is closed",
            ));
        }
        self.input.reset()?;
        self.clear();
        debug!("synonym expansion stream reset");
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.closed {
            return Err(VecsynError::invalid_state(
                "pulled from a closed synonym expansion stream",
            ));
        }

        if let Some(alternative) = self.pending.pop_front() {
            return Ok(Some(alternative.into_token()));
        }

        let mut token = match self.retry.take() {
            Some(token) => token,
            None => match self.input.next_token()? {
                Some(token) => token,
                None => return Ok(None),
            },
        };

        // Alternatives from an upstream stage are never expanded again.
        if !token.is_synonym() {
            if let Err(e) = self.expand(&mut token) {
                debug!("lookup for '{}' failed, kept for retry", token.text);
                self.retry = Some(token);
                return Err(e);
            }
        }

        Ok(Some(token))
    }

    fn end(&mut self) -> Result<()> {
        self.input.end()?;
        debug!(
            "synonym expansion stream ended after {} base tokens",
            self.positions
        );
        self.clear();
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.clear();
        self.closed = true;
        self.input.close()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::analysis::token_stream::{IntoTokenStream, VecTokenStream, collect_tokens};
    use crate::embedding::SimilarityOracle;
    use crate::embedding::table::SimilarityTable;

    fn table(entries: &[(&str, &[&str])]) -> SharedOracle {
        let mut table = SimilarityTable::new();
        for (term, candidates) in entries {
            table.insert(
                *term,
                candidates.iter().map(|c| (c.to_string(), 1.0)).collect(),
            );
        }
        Arc::new(table)
    }

    fn words(words: &[&str]) -> BoxTokenStream {
        words
            .iter()
            .map(|w| Token::new(*w))
            .collect::<Vec<_>>()
            .into_token_stream()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    struct CountingOracle {
        calls: AtomicUsize,
    }

    impl SimilarityOracle for CountingOracle {
        fn similar_terms(&self, term: &str, _min_score: f64) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![format!("{term}-alt")])
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[test]
    fn test_quick_fox_example() {
        let filter = SynonymExpansionFilter::new(table(&[("quick", &["fast"])]), 0.9);
        let mut stream = filter.filter(words(&["quick", "fox"])).unwrap();
        let tokens = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(texts(&tokens), vec!["quick", "fast", "fox"]);
        assert_eq!(tokens[0].token_type, TokenType::Base);
        assert_eq!(tokens[1].token_type, TokenType::Synonym);
        assert_eq!(tokens[2].token_type, TokenType::Base);
        assert_eq!(tokens[1].position_increment, tokens[0].position_increment);
    }

    #[test]
    fn test_running_count_positions() {
        // Expanded base tokens carry the running count, not a step of one.
        let filter =
            SynonymExpansionFilter::new(table(&[("b", &["b1", "b2"]), ("d", &["d1"])]), 0.5);
        let mut stream = filter.filter(words(&["a", "b", "c", "d"])).unwrap();
        let tokens = collect_tokens(stream.as_mut()).unwrap();

        let increments: Vec<_> = tokens.iter().map(|t| t.position_increment).collect();
        assert_eq!(texts(&tokens), vec!["a", "b", "b1", "b2", "c", "d", "d1"]);
        assert_eq!(increments, vec![1, 2, 2, 2, 1, 4, 4]);
    }

    #[test]
    fn test_unexpanded_tokens_keep_increment() {
        let filter = SynonymExpansionFilter::new(table(&[("quick", &["quick"])]), 0.5);
        let input = vec![
            Token::new("the"),
            Token::new("quick").with_position_increment(2),
            Token::new("fox"),
        ];
        let mut stream = filter.filter(input.clone().into_token_stream()).unwrap();

        // Only a self match came back, so nothing is stamped.
        assert_eq!(collect_tokens(stream.as_mut()).unwrap(), input);
    }

    #[test]
    fn test_relative_positions() {
        let filter = SynonymExpansionFilter::new(table(&[("b", &["b1"])]), 0.5)
            .with_position_mode(PositionMode::Relative);
        let input = vec![
            Token::new("a"),
            Token::new("b").with_position_increment(2),
            Token::new("c"),
        ];
        let mut stream = filter.filter(input.into_token_stream()).unwrap();
        let tokens = collect_tokens(stream.as_mut()).unwrap();

        let increments: Vec<_> = tokens.iter().map(|t| t.position_increment).collect();
        assert_eq!(increments, vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_self_match_dropped() {
        let filter =
            SynonymExpansionFilter::new(table(&[("quick", &["quick", "fast", "quick"])]), 0.5);
        let mut stream = filter.filter(words(&["quick"])).unwrap();
        let tokens = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(texts(&tokens), vec!["quick", "fast"]);
    }

    #[test]
    fn test_alternative_restores_base_state() {
        let filter = SynonymExpansionFilter::new(table(&[("quick", &["fast"])]), 0.5);
        let input = vec![Token::with_offsets("quick", 4, 9).with_keyword(true)];
        let mut stream = filter.filter(input.into_token_stream()).unwrap();
        let tokens = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 9);
        assert!(tokens[1].keyword);
    }

    #[test]
    fn test_trimmed_lookup_key() {
        let filter = SynonymExpansionFilter::new(table(&[("quick", &["fast"])]), 0.5);
        let mut stream = filter.filter(words(&[" quick "])).unwrap();
        let tokens = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(texts(&tokens), vec![" quick ", "fast"]);
    }

    #[test]
    fn test_one_query_per_base_token() {
        let oracle = Arc::new(CountingOracle {
            calls: AtomicUsize::new(0),
        });
        let filter = SynonymExpansionFilter::new(oracle.clone(), 0.5);
        let input = vec![
            Token::new("a"),
            Token::new("b"),
            Token::new("up").with_token_type(TokenType::Synonym),
            Token::new(""),
        ];
        let mut stream = filter.filter(input.into_token_stream()).unwrap();
        let tokens = collect_tokens(stream.as_mut()).unwrap();

        assert_eq!(texts(&tokens), vec!["a", "a-alt", "b", "b-alt", "up", ""]);
        // Alternatives, upstream synonyms and empty terms are not looked up.
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_queue_drained_before_next_pull() {
        let filter = SynonymExpansionFilter::new(table(&[("a", &["x", "y"])]), 0.5);
        let mut stream = filter.wrap(words(&["a", "b"]));
        stream.reset().unwrap();

        assert_eq!(stream.next_token().unwrap().unwrap().text, "a");
        assert_eq!(stream.pending_len(), 2);
        assert_eq!(stream.next_token().unwrap().unwrap().text, "x");
        assert_eq!(stream.next_token().unwrap().unwrap().text, "y");
        assert_eq!(stream.pending_len(), 0);
        assert_eq!(stream.positions(), 1);
        assert_eq!(stream.next_token().unwrap().unwrap().text, "b");
        assert!(stream.next_token().unwrap().is_none());
    }

    #[test]
    fn test_end_clears_state() {
        let filter = SynonymExpansionFilter::new(table(&[("a", &["x", "y"])]), 0.5);
        let mut stream = filter.wrap(words(&["a"]));
        stream.reset().unwrap();
        stream.next_token().unwrap();
        assert_eq!(stream.pending_len(), 2);

        stream.end().unwrap();
        assert_eq!(stream.pending_len(), 0);
        assert_eq!(stream.positions(), 0);

        stream.reset().unwrap();
        let first = stream.next_token().unwrap().unwrap();
        assert_eq!(first.text, "a");
        assert_eq!(first.position_increment, 1);
    }

    #[test]
    fn test_pull_after_close_fails() {
        let filter = SynonymExpansionFilter::new(table(&[]), 0.5);
        let mut stream = filter.wrap(Box::new(VecTokenStream::new(vec![Token::new("a")])));
        stream.close().unwrap();

        let err = stream.next_token().unwrap_err();
        assert!(matches!(err, VecsynError::InvalidState(_)));
        assert!(stream.reset().is_err());
    }

    #[test]
    fn test_filter_name() {
        let filter = SynonymExpansionFilter::new(table(&[]), DEFAULT_MIN_ACCURACY);
        assert_eq!(filter.name(), "synonym_expansion");
        assert_eq!(filter.min_accuracy(), 0.98);
        assert_eq!(filter.position_mode(), PositionMode::RunningCount);
    }
}
