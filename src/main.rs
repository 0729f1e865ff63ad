//! Clueforge: batch generator of Arabic crossword clues from a causal
//! language model.
//!
//! This is the main entry point for the `clueforge` CLI. It parses
//! arguments, runs the batch driver, and maps errors to exit codes.

mod cli;
pub mod completion;
pub mod error;
pub mod exit_codes;
pub mod extract;
pub mod prompt;
pub mod run;
pub mod table;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run::execute(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
