//! Configuration for the synonym analysis chain.
//!
//! An [`AnalyzerConfig`] describes every stage of a
//! [`SynonymAnalyzer`](crate::analysis::analyzer::SynonymAnalyzer). All fields
//! are optional in the JSON form; missing ones take their defaults.
//!
//! ```json
//! {
//!   "tokenizer": { "type": "regex", "pattern": "[a-z]+" },
//!   "stop_words": ["the", "a"],
//!   "min_accuracy": 0.9,
//!   "position_mode": "relative",
//!   "stem_exclusions": ["running"]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::SynonymAnalyzer;
use crate::analysis::token_filter::synonym_expansion::{DEFAULT_MIN_ACCURACY, PositionMode};
use crate::analysis::tokenizer::{
    RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
};
use crate::embedding::SharedOracle;
use crate::error::{Result, VecsynError};

/// Tokenizer selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Unicode word boundaries.
    #[default]
    UnicodeWord,
    /// Split on whitespace.
    Whitespace,
    /// Every match of `pattern` is a token.
    Regex { pattern: String },
}

impl TokenizerConfig {
    /// Instantiate the configured tokenizer.
    pub fn build(&self) -> Result<Arc<dyn Tokenizer>> {
        Ok(match self {
            TokenizerConfig::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerConfig::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerConfig::Regex { pattern } => Arc::new(RegexTokenizer::with_pattern(pattern)?),
        })
    }
}

/// Configuration for the synonym analysis chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Tokenizer producing base tokens.
    pub tokenizer: TokenizerConfig,
    /// Strip trailing `'s`.
    pub possessive: bool,
    /// Lowercase tokens before expansion.
    pub lowercase: bool,
    /// Stop words. `None` uses the English list; an empty list disables the filter.
    pub stop_words: Option<Vec<String>>,
    /// Minimum similarity for an alternative to be injected.
    pub min_accuracy: f64,
    /// How position increments are written by the expansion stage.
    pub position_mode: PositionMode,
    /// Apply the Porter stemmer after expansion.
    pub stem: bool,
    /// Terms protected from stemming.
    pub stem_exclusions: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            possessive: true,
            lowercase: true,
            stop_words: None,
            min_accuracy: DEFAULT_MIN_ACCURACY,
            position_mode: PositionMode::default(),
            stem: true,
            stem_exclusions: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            VecsynError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.min_accuracy.is_finite() || self.min_accuracy > 1.0 {
            return Err(VecsynError::config(format!(
                "min_accuracy must be a finite value no greater than 1.0, got {}",
                self.min_accuracy
            )));
        }
        if let TokenizerConfig::Regex { pattern } = &self.tokenizer {
            if pattern.is_empty() {
                return Err(VecsynError::config("regex tokenizer pattern is empty"));
            }
        }
        Ok(())
    }

    /// Build the analyzer this configuration describes.
    pub fn build(&self, oracle: SharedOracle) -> Result<SynonymAnalyzer> {
        SynonymAnalyzer::from_config(self, oracle)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_analyzer_config_default() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.tokenizer, TokenizerConfig::UnicodeWord);
        assert!(config.possessive);
        assert!(config.lowercase);
        assert!(config.stop_words.is_none());
        assert_eq!(config.min_accuracy, 0.98);
        assert_eq!(config.position_mode, PositionMode::RunningCount);
        assert!(config.stem);
        assert!(config.stem_exclusions.is_empty());
    }

    #[test]
    fn test_from_json_partial() {
        let config = AnalyzerConfig::from_json(
            r#"{"tokenizer": {"type": "regex", "pattern": "[a-z]+"}, "min_accuracy": 0.5, "position_mode": "relative"}"#,
        )
        .unwrap();

        assert_eq!(
            config.tokenizer,
            TokenizerConfig::Regex {
                pattern: "[a-z]+".to_string()
            }
        );
        assert_eq!(config.min_accuracy, 0.5);
        assert_eq!(config.position_mode, PositionMode::Relative);
        assert!(config.stem);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(AnalyzerConfig::from_json(r#"{"min_accuracy": 1.5}"#).is_err());

        let config = AnalyzerConfig {
            min_accuracy: f64::INFINITY,
            ..AnalyzerConfig::default()
        };
        assert!(matches!(config.validate(), Err(VecsynError::Config(_))));

        let config = AnalyzerConfig {
            tokenizer: TokenizerConfig::Regex {
                pattern: String::new(),
            },
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_tokenizer_rejected() {
        let result = AnalyzerConfig::from_json(r#"{"tokenizer": {"type": "ngram"}}"#);
        assert!(matches!(result, Err(VecsynError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"stop_words": ["fox"], "stem": false}}"#).unwrap();

        let config = AnalyzerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.stop_words, Some(vec!["fox".to_string()]));
        assert!(!config.stem);

        assert!(AnalyzerConfig::from_file("/nonexistent/vecsyn.json").is_err());
    }

    #[test]
    fn test_tokenizer_build() {
        assert_eq!(TokenizerConfig::Whitespace.build().unwrap().name(), "whitespace");
        let invalid = TokenizerConfig::Regex {
            pattern: "(".to_string(),
        };
        assert!(invalid.build().is_err());
    }
}
