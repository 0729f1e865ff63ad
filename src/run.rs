//! Row-processing driver.
//!
//! Each row moves through prompt construction, completion, and extraction
//! independently: a failure at any stage records the error on that row and
//! never aborts the batch. Rows are processed strictly in input order, one
//! at a time, so the backend holds at most one in-flight generation.

use crate::cli::Cli;
use crate::completion::tgi::{DEFAULT_BACKEND_URL, TgiClient};
use crate::completion::{CompletionService, SamplingParams};
use crate::error::{ClueForgeError, Result};
use crate::extract::{self, ClueExtractor};
use crate::prompt;
use crate::table::{self, InputRow, OutputRecord};

/// Run one full batch from CLI arguments.
///
/// Backend and input-file failures abort the run; per-row failures are
/// recorded in the output table, which is written even if every row failed.
pub fn execute(cli: Cli) -> Result<()> {
    println!("Connecting to generation backend at {}...", DEFAULT_BACKEND_URL);
    let backend = TgiClient::new(DEFAULT_BACKEND_URL)?;
    let info = backend.info()?;
    println!("Backend ready, serving model {}.", info.model_id);

    let rows = table::read_rows(&cli.input_file)?;
    let extractor = ClueExtractor::new()?;
    let params = SamplingParams::with_temperature(cli.temperature);

    let records = process_rows(&backend, &extractor, &rows, &params);

    table::write_records(&cli.output_file, &records)?;
    println!("Output saved to {}", cli.output_file.display());
    Ok(())
}

/// Map every input row to exactly one output record, in input order.
///
/// Progress goes to stdout, per-row failures to stderr; neither stops the
/// loop.
pub fn process_rows(
    service: &dyn CompletionService,
    extractor: &ClueExtractor,
    rows: &[InputRow],
    params: &SamplingParams,
) -> Vec<OutputRecord> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match process_row(service, extractor, row, params) {
            Ok(clue_set) => {
                println!("Processing index {}:", index);
                println!("Input Text: \n{}", row.text);
                println!("Input Keyword: {}", row.keyword);
                println!("Input Category: {}", row.category);
                println!("Generated Clue: \n{}\n", clue_set);
                OutputRecord::success(row, clue_set)
            }
            Err(err) => {
                eprintln!("Error processing index {}: {}", index, err);
                OutputRecord::failure(row, err.to_string())
            }
        })
        .collect()
}

/// Process a single row: prompt, complete, extract.
///
/// A missing assistant turn is an error here so the clue scan never runs
/// on absent input; the caller records it like any other row failure.
fn process_row(
    service: &dyn CompletionService,
    extractor: &ClueExtractor,
    row: &InputRow,
    params: &SamplingParams,
) -> Result<String> {
    let rendered = prompt::build_prompt(row)?;
    let raw = service.complete(&rendered, params)?;
    let turn = extract::assistant_turn(&raw).ok_or(ClueForgeError::MissingAssistantTurn)?;
    Ok(extractor.first_clues(&turn))
}
