//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::token_stream::display_tokens;
use crate::cli::args::{OutputFormat, VecsynArgs};
use crate::error::Result;

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub analyzer: String,
    pub min_accuracy: f64,
    pub tokens: Vec<Token>,
    pub duration_ms: u64,
}

/// Result structure for a single-term lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub term: String,
    pub min_accuracy: f64,
    pub alternatives: Vec<String>,
}

/// Output an analysis result in the specified format.
pub fn output_analysis(result: &AnalysisResult, args: &VecsynArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", display_tokens(&result.tokens));
            if args.verbosity() > 1 {
                println!();
                print!("{}", format_token_table(&result.tokens));
                println!();
                println!(
                    "{} tokens in {} ms ({}, min_accuracy={})",
                    result.tokens.len(),
                    result.duration_ms,
                    result.analyzer,
                    result.min_accuracy
                );
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output a lookup result in the specified format.
pub fn output_lookup(result: &LookupResult, args: &VecsynArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if result.alternatives.is_empty() {
                if args.verbosity() > 0 {
                    println!(
                        "No alternatives for '{}' at min_accuracy={}",
                        result.term, result.min_accuracy
                    );
                }
            } else {
                for alternative in &result.alternatives {
                    println!("{alternative}");
                }
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &VecsynArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render one row per token: term, type, increment and offsets.
pub fn format_token_table(tokens: &[Token]) -> String {
    let width = tokens
        .iter()
        .map(|t| t.text.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!("{:<width$}  {:<7}  {:>3}  offsets\n", "term", "type", "inc");
    for token in tokens {
        out.push_str(&format!(
            "{:<width$}  {:<7}  {:>3}  {}..{}\n",
            token.text,
            token.token_type.as_str(),
            token.position_increment,
            token.start_offset,
            token.end_offset
        ));
    }
    out
}
