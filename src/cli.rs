//! CLI argument parsing for clueforge.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! surface is intentionally minimal: input path, output path, temperature.

use clap::Parser;
use std::path::PathBuf;

/// Clueforge: batch Arabic crossword clue generation.
///
/// Reads rows of (text, keyword, category) from a CSV file, prompts the
/// clue model once per row, and writes the extracted clues back out as CSV.
#[derive(Parser, Debug)]
#[command(name = "clueforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input CSV file (columns: text, keyword, category).
    #[arg(long)]
    pub input_file: PathBuf,

    /// Path to save the output CSV file.
    #[arg(long, default_value = "output.csv")]
    pub output_file: PathBuf,

    /// Temperature for text generation.
    #[arg(long, default_value_t = 0.1)]
    pub temperature: f64,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
