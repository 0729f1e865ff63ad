//! The completion capability boundary.
//!
//! Generation runs behind the narrow `CompletionService` trait so the row
//! driver can be exercised against stubs without a live model backend.

pub mod tgi;

use crate::error::Result;

/// Decoding parameters for one generation request.
///
/// Everything except `temperature` is fixed to the values the clue model
/// was tuned against.
#[derive(Debug, Clone)]
pub struct SamplingParams {
    /// Sampling temperature, supplied by the caller.
    pub temperature: f64,
    /// Top-k filtering cutoff.
    pub top_k: u32,
    /// Nucleus (top-p) filtering cutoff.
    pub top_p: f64,
    /// Penalty applied to already-generated tokens.
    pub repetition_penalty: f64,
    /// Upper bound on generated tokens per request.
    pub max_new_tokens: u32,
    /// Whether to sample at all (greedy decoding when false).
    pub do_sample: bool,
}

impl SamplingParams {
    /// Fixed decoding constants with a caller-supplied temperature.
    pub fn with_temperature(temperature: f64) -> Self {
        Self {
            temperature,
            top_k: 50,
            top_p: 0.95,
            repetition_penalty: 1.1,
            max_new_tokens: 256,
            do_sample: true,
        }
    }
}

/// A blocking text-completion capability.
///
/// Implementations receive the fully framed prompt and return the decoded
/// text of the entire sequence (prompt plus continuation) with control
/// tokens retained. Calls may take seconds and have no timeout; any backend
/// failure surfaces as an opaque error to the caller.
pub trait CompletionService {
    /// Generate a continuation for `prompt` under `params`.
    fn complete(&self, prompt: &str, params: &SamplingParams) -> Result<String>;
}
