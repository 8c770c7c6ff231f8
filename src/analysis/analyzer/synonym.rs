//! English analyzer with embedding-based synonym expansion.
//!
//! # Pipeline
//!
//! 1. Tokenizer (Unicode words by default)
//! 2. EnglishPossessiveFilter
//! 3. LowercaseFilter
//! 4. StopFilter (English stop words by default)
//! 5. SynonymExpansionFilter
//! 6. KeywordMarkerFilter (only with stem exclusions)
//! 7. StemFilter (Porter)
//!
//! Expansion runs before stemming, so the oracle sees surface forms and the
//! injected alternatives are stemmed like every other token.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use vecsyn::analysis::analyzer::{Analyzer, SynonymAnalyzer};
//! use vecsyn::embedding::table::SimilarityTable;
//!
//! let mut table = SimilarityTable::new();
//! table.insert("quick", vec![("fast".to_string(), 0.99)]);
//!
//! let analyzer = SynonymAnalyzer::new(Arc::new(table), 0.98).unwrap();
//! let tokens = analyzer.analyze("The quick fox").unwrap();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["quick", "fast", "fox"]);
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::possessive::EnglishPossessiveFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::synonym_expansion::SynonymExpansionFilter;
use crate::analysis::token_stream::BoxTokenStream;
use crate::config::AnalyzerConfig;
use crate::embedding::SharedOracle;
use crate::error::Result;

/// Full English analysis chain with synonym expansion.
#[derive(Debug)]
pub struct SynonymAnalyzer {
    inner: PipelineAnalyzer,
    expansion: SynonymExpansionFilter,
    lowercase: bool,
}

impl SynonymAnalyzer {
    /// Create an analyzer with the default chain and the given threshold.
    pub fn new(oracle: SharedOracle, min_accuracy: f64) -> Result<Self> {
        let config = AnalyzerConfig {
            min_accuracy,
            ..AnalyzerConfig::default()
        };
        Self::from_config(&config, oracle)
    }

    /// Build the chain described by `config`.
    pub fn from_config(config: &AnalyzerConfig, oracle: SharedOracle) -> Result<Self> {
        config.validate()?;

        let expansion = SynonymExpansionFilter::new(oracle, config.min_accuracy)
            .with_position_mode(config.position_mode);

        let mut analyzer = PipelineAnalyzer::new(config.tokenizer.build()?);
        if config.possessive {
            analyzer = analyzer.add_filter(Arc::new(EnglishPossessiveFilter::new()));
        }
        if config.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        let stop = match &config.stop_words {
            None => Some(StopFilter::new()),
            Some(words) if words.is_empty() => None,
            Some(words) => Some(StopFilter::from_words(words)),
        };
        if let Some(stop) = stop {
            analyzer = analyzer.add_filter(Arc::new(stop));
        }
        analyzer = analyzer.add_filter(Arc::new(expansion.clone()));
        if config.stem {
            if !config.stem_exclusions.is_empty() {
                analyzer = analyzer.add_filter(Arc::new(KeywordMarkerFilter::new(
                    &config.stem_exclusions,
                )));
            }
            analyzer = analyzer.add_filter(Arc::new(StemFilter::new()));
        }
        let inner = analyzer.with_name("synonym");

        debug!("Built synonym analyzer: {:?}", inner.stages());

        Ok(SynonymAnalyzer {
            inner,
            expansion,
            lowercase: config.lowercase,
        })
    }

    /// The expansion stage of the chain.
    pub fn expansion(&self) -> &SynonymExpansionFilter {
        &self.expansion
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for SynonymAnalyzer {
    fn token_stream(&self, text: &str) -> Result<BoxTokenStream> {
        self.inner.token_stream(text)
    }

    fn normalize(&self, text: &str) -> String {
        if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }

    fn name(&self) -> &'static str {
        "synonym"
    }
}
