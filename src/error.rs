//! Error types for the clueforge CLI.
//!
//! Uses thiserror for derive macros. Errors that escape to `main` map to a
//! process exit code; errors raised inside the row loop are caught by the
//! driver and recorded on the row instead.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for clueforge operations.
#[derive(Error, Debug)]
pub enum ClueForgeError {
    /// User provided invalid arguments or an unreadable/unwritable file.
    #[error("{0}")]
    UserError(String),

    /// The generation backend failed or returned an unusable response.
    #[error("generation backend error: {0}")]
    Backend(String),

    /// The model output contained no assistant segment to extract from.
    #[error("no assistant segment found in generated text")]
    MissingAssistantTurn,
}

impl ClueForgeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClueForgeError::UserError(_) => exit_codes::USER_ERROR,
            ClueForgeError::Backend(_) => exit_codes::BACKEND_FAILURE,
            ClueForgeError::MissingAssistantTurn => exit_codes::BACKEND_FAILURE,
        }
    }
}

/// Result type alias for clueforge operations.
pub type Result<T> = std::result::Result<T, ClueForgeError>;
