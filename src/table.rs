//! Tabular input and output for clue batches.
//!
//! Input is plain UTF-8 CSV with `text`, `keyword`, `category` columns.
//! Output is UTF-8-with-BOM CSV so spreadsheet tools render the Arabic
//! content correctly.

use crate::error::{ClueForgeError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// UTF-8 byte order mark, prepended to the output file.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Output column holding the generated clue set.
const CLUE_COLUMN: &str = "Generated Arabic Crossword Clue";
/// Output column recording per-row failures.
const ERROR_COLUMN: &str = "Error";

/// One clue-generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRow {
    /// Source text the clues are drawn from.
    pub text: String,
    /// Target keyword the clues must point at.
    pub keyword: String,
    /// Category the clues should focus on.
    pub category: String,
}

/// One result record, produced for every input row in order.
///
/// `error` set implies `generated_clue` is absent. A successful extraction
/// with zero clue lines is a non-error record with an empty string.
#[derive(Debug, Clone)]
pub struct OutputRecord {
    pub text: String,
    pub keyword: String,
    pub category: String,
    pub generated_clue: Option<String>,
    pub error: Option<String>,
}

impl OutputRecord {
    /// Record a successfully generated (possibly empty) clue set.
    pub fn success(row: &InputRow, clue_set: String) -> Self {
        Self {
            text: row.text.clone(),
            keyword: row.keyword.clone(),
            category: row.category.clone(),
            generated_clue: Some(clue_set),
            error: None,
        }
    }

    /// Record a failed row, keeping its inputs for the output table.
    pub fn failure(row: &InputRow, message: String) -> Self {
        Self {
            text: row.text.clone(),
            keyword: row.keyword.clone(),
            category: row.category.clone(),
            generated_clue: None,
            error: Some(message),
        }
    }
}

/// Read all input rows from a CSV file.
///
/// Columns are matched by header name; extra columns are ignored. A missing
/// required column or an unreadable file is fatal.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<InputRow>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        ClueForgeError::UserError(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: InputRow = record.map_err(|e| {
            ClueForgeError::UserError(format!(
                "malformed row in input file '{}': {}",
                path.display(),
                e
            ))
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write all output records as UTF-8-with-BOM CSV.
///
/// The error column appears only when at least one row failed; rows without
/// an error then carry an empty cell.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[OutputRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| {
        ClueForgeError::UserError(format!(
            "failed to create output file '{}': {}",
            path.display(),
            e
        ))
    })?;
    file.write_all(UTF8_BOM)
        .map_err(|e| write_error(path, &e.to_string()))?;

    let with_errors = records.iter().any(|r| r.error.is_some());
    let mut writer = csv::Writer::from_writer(file);

    let mut header = vec!["text", "keyword", "category", CLUE_COLUMN];
    if with_errors {
        header.push(ERROR_COLUMN);
    }
    writer
        .write_record(&header)
        .map_err(|e| write_error(path, &e.to_string()))?;

    for record in records {
        let mut fields = vec![
            record.text.as_str(),
            record.keyword.as_str(),
            record.category.as_str(),
            record.generated_clue.as_deref().unwrap_or(""),
        ];
        if with_errors {
            fields.push(record.error.as_deref().unwrap_or(""));
        }
        writer
            .write_record(&fields)
            .map_err(|e| write_error(path, &e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| write_error(path, &e.to_string()))?;
    Ok(())
}

fn write_error(path: &Path, message: &str) -> ClueForgeError {
    ClueForgeError::UserError(format!(
        "failed to write output file '{}': {}",
        path.display(),
        message
    ))
}
