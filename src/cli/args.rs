//! Command line argument parsing for the vecsyn CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// vecsyn - Word-embedding synonym expansion for text analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "vecsyn")]
#[command(about = "Analyze text with word-embedding synonym expansion")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VecsynArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VecsynArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text and print the expanded token stream
    Analyze(AnalyzeArgs),

    /// Show the alternatives the oracle returns for one term
    Lookup(LookupArgs),
}

/// Arguments for analyzing text
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze, or "-" to read from stdin
    pub text: String,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, env = "VECSYN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Similarity table file (JSON); without it no alternatives are injected
    #[arg(short, long, env = "VECSYN_TABLE")]
    pub table: Option<PathBuf>,

    /// Minimum similarity, overriding the configuration
    #[arg(short = 'm', long)]
    pub min_accuracy: Option<f64>,
}

/// Arguments for looking up a single term
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Term to look up
    pub term: String,

    /// Similarity table file (JSON)
    #[arg(short, long, env = "VECSYN_TABLE")]
    pub table: PathBuf,

    /// Minimum similarity
    #[arg(short = 'm', long, default_value_t = crate::analysis::token_filter::synonym_expansion::DEFAULT_MIN_ACCURACY)]
    pub min_accuracy: f64,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let args = VecsynArgs::try_parse_from([
            "vecsyn",
            "analyze",
            "quick fox",
            "--table",
            "table.json",
            "-m",
            "0.9",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Analyze(analyze) => {
                assert_eq!(analyze.text, "quick fox");
                assert_eq!(analyze.table, Some(PathBuf::from("table.json")));
                assert_eq!(analyze.min_accuracy, Some(0.9));
            }
            _ => panic!("Expected analyze command"),
        }
    }

    #[test]
    fn test_parse_lookup_defaults() {
        let args =
            VecsynArgs::try_parse_from(["vecsyn", "-q", "--format", "json", "lookup", "car", "-t", "t.json"])
                .unwrap();

        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Lookup(lookup) => {
                assert_eq!(lookup.term, "car");
                assert_eq!(lookup.min_accuracy, 0.98);
            }
            _ => panic!("Expected lookup command"),
        }
    }

    #[test]
    fn test_lookup_requires_table() {
        assert!(VecsynArgs::try_parse_from(["vecsyn", "lookup", "car"]).is_err());
    }
}
