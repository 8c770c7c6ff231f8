//! Command implementations for the vecsyn CLI.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::{debug, info};

use crate::analysis::analyzer::Analyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::embedding::cached::CachedOracle;
use crate::embedding::table::SimilarityTable;
use crate::embedding::{SharedOracle, SimilarityOracle};
use crate::error::{Result, VecsynError};

/// Execute a CLI command.
pub fn execute_command(args: VecsynArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup_term(lookup_args.clone(), &args),
    }
}

/// Run text through the configured analyzer.
fn analyze_text(args: AnalyzeArgs, cli_args: &VecsynArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading analyzer config from: {}", path.display());
            AnalyzerConfig::from_file(path)?
        }
        None => AnalyzerConfig::default(),
    };
    if let Some(min_accuracy) = args.min_accuracy {
        config.min_accuracy = min_accuracy;
    }

    let table = match &args.table {
        Some(path) => load_table(path)?,
        None => {
            debug!("No similarity table given, expansion is disabled");
            SimilarityTable::new()
        }
    };
    let oracle: SharedOracle = Arc::new(CachedOracle::new(Arc::new(table)));
    let analyzer = config.build(oracle)?;

    let text = read_text(&args.text, std::io::stdin())?;

    let start = Instant::now();
    let tokens = analyzer.analyze(&text)?;
    let duration_ms = elapsed_ms(start.elapsed());
    info!("Analyzed {} bytes into {} tokens", text.len(), tokens.len());

    output_analysis(
        &AnalysisResult {
            text,
            analyzer: analyzer.name().to_string(),
            min_accuracy: config.min_accuracy,
            tokens,
            duration_ms,
        },
        cli_args,
    )
}

/// Query the similarity table for a single term.
fn lookup_term(args: LookupArgs, cli_args: &VecsynArgs) -> Result<()> {
    if !args.min_accuracy.is_finite() {
        return Err(VecsynError::invalid_argument(format!(
            "min_accuracy must be finite, got {}",
            args.min_accuracy
        )));
    }

    let table = load_table(&args.table)?;
    let alternatives = table.similar_terms(args.term.trim(), args.min_accuracy)?;

    output_lookup(
        &LookupResult {
            term: args.term,
            min_accuracy: args.min_accuracy,
            alternatives,
        },
        cli_args,
    )
}

fn load_table(path: &Path) -> Result<SimilarityTable> {
    info!("Loading similarity table from: {}", path.display());
    let table = SimilarityTable::from_file(path)?;
    debug!("Similarity table holds {} terms", table.len());
    Ok(table)
}

/// The argument itself, or everything `input` yields for "-".
fn read_text<R: Read>(arg: &str, mut input: R) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`.
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
