//! Blocking client for a text-generation-inference style backend.
//!
//! The inference server owns the model weights and tokenizer; this client
//! only ships the framed prompt plus sampling parameters and reads back the
//! decoded sequence. The endpoint is hardcoded so runs cannot drift to a
//! different backend.

use crate::completion::{CompletionService, SamplingParams};
use crate::error::{ClueForgeError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Conventional local address of the inference server.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Debug, Serialize)]
struct GenerateParameters {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    repetition_penalty: f64,
    max_new_tokens: u32,
    do_sample: bool,
    /// The extractor needs the prompt and control tokens preserved.
    return_full_text: bool,
}

impl GenerateParameters {
    fn from_sampling(params: &SamplingParams) -> Self {
        Self {
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            repetition_penalty: params.repetition_penalty,
            max_new_tokens: params.max_new_tokens,
            do_sample: params.do_sample,
            return_full_text: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: String,
}

/// Served-model metadata from `GET /info`.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendInfo {
    /// Identifier of the model the server is hosting.
    pub model_id: String,
}

/// Blocking HTTP client for the generation backend.
pub struct TgiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl TgiClient {
    /// Build a client against `base_url`.
    ///
    /// Request timeouts are disabled: generation latency is unbounded and a
    /// slow completion must not be turned into a spurious row failure.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| {
                ClueForgeError::Backend(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Query the backend for the model it serves.
    ///
    /// Run once at startup: an unreachable or misbehaving server is fatal
    /// before any row is processed.
    pub fn info(&self) -> Result<BackendInfo> {
        let url = format!("{}/info", self.base_url);
        let response = self.http.get(&url).send().map_err(|e| {
            ClueForgeError::Backend(format!(
                "backend unreachable at {}: {}",
                self.base_url, e
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClueForgeError::Backend(format!(
                "info request failed with status {}",
                status
            )));
        }

        response.json::<BackendInfo>().map_err(|e| {
            ClueForgeError::Backend(format!("malformed info response: {}", e))
        })
    }
}

impl CompletionService for TgiClient {
    fn complete(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        let request = GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters::from_sampling(params),
        };

        let url = format!("{}/generate", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| ClueForgeError::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the server's own error message when it sends one.
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<BackendErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ClueForgeError::Backend(format!(
                "status {}: {}",
                status, message
            )));
        }

        let decoded: GenerateResponse = response.json().map_err(|e| {
            ClueForgeError::Backend(format!("malformed generation response: {}", e))
        })?;
        Ok(decoded.generated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generate_request_serializes_backend_field_names() {
        let params = SamplingParams::with_temperature(0.1);
        let request = GenerateRequest {
            inputs: "some prompt",
            parameters: GenerateParameters::from_sampling(&params),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "inputs": "some prompt",
                "parameters": {
                    "temperature": 0.1,
                    "top_k": 50,
                    "top_p": 0.95,
                    "repetition_penalty": 1.1,
                    "max_new_tokens": 256,
                    "do_sample": true,
                    "return_full_text": true,
                }
            })
        );
    }

    #[test]
    fn generate_response_deserializes_generated_text() {
        let decoded: GenerateResponse =
            serde_json::from_str(r#"{"generated_text": "CLUE1: x"}"#).unwrap();
        assert_eq!(decoded.generated_text, "CLUE1: x");
    }

    #[test]
    fn backend_info_deserializes_model_id() {
        let info: BackendInfo = serde_json::from_str(
            r#"{"model_id": "ar-text-to-cross-8b", "max_total_tokens": 4096}"#,
        )
        .unwrap();
        assert_eq!(info.model_id, "ar-text-to-cross-8b");
    }

    #[test]
    fn error_body_falls_back_to_raw_text() {
        let parsed = serde_json::from_str::<BackendErrorBody>("not json")
            .map(|b| b.error)
            .unwrap_or_else(|_| "not json".to_string());
        assert_eq!(parsed, "not json");
    }
}
