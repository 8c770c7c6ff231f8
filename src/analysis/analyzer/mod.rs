//! Analyzer implementations.

mod analyzer;
mod pipeline;
mod standard;
mod synonym;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
pub use synonym::SynonymAnalyzer;
