//! Remote call adapter for the hosted generative-language service.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::keypool::KeyPool;

/// Default base URL of the generation service.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Answer substituted when a well-formed response carries no answer text.
pub const FALLBACK_ANSWER: &str = "I couldn't generate a response. Please try again.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Sampling and length parameters attached to a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Sampling temperature.
    pub temperature: f32,
    /// Top-k sampling cutoff.
    pub top_k: u32,
    /// Nucleus sampling cutoff.
    pub top_p: f32,
    /// Maximum tokens in the generated answer.
    pub max_output_tokens: u32,
}

impl GenerationParams {
    /// Parameters used for study answers.
    pub fn answering() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }

    /// Parameters used for full-page translation.
    pub fn translating() -> Self {
        Self {
            temperature: 0.3,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 4096,
        }
    }
}

/// Failures surfaced by a generation call.
#[derive(Debug)]
pub enum GenerateError {
    /// Every pooled credential has reached its ceiling.
    NoCredentialAvailable,
    /// The service answered with a non-success status.
    Upstream(StatusCode),
    /// The request could not be sent or the body could not be read.
    Transport(reqwest::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCredentialAvailable => write!(f, "no usable API credential remains in the pool"),
            Self::Upstream(status) => write!(f, "generation service returned {status}"),
            Self::Transport(err) => write!(f, "generation request failed: {err}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::NoCredentialAvailable | Self::Upstream(_) => None,
        }
    }
}

/// Text generation seam shared by the assistant and the translation engine.
///
/// Implementations take `&mut self` because real generators charge a pooled
/// credential per call.
pub trait TextGenerator {
    /// Generates a single text answer for `prompt`.
    fn generate(&mut self, prompt: &str, params: &GenerationParams)
        -> Result<String, GenerateError>;
}

/// Production generator talking to the hosted service with pooled credentials.
pub struct GeminiClient {
    http: Client,
    base: String,
    model: String,
    pool: KeyPool,
    log_requests: bool,
}

impl GeminiClient {
    /// Builds a client for `model` drawing credentials from `pool`.
    pub fn new(model: impl Into<String>, pool: KeyPool) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build generation HTTP client")?;
        Ok(Self {
            http,
            base: DEFAULT_API_BASE.to_string(),
            model: model.into(),
            pool,
            log_requests: false,
        })
    }

    /// Overrides the service base URL (local test doubles, proxies).
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Enables per-request debug logging.
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Total acquisitions still available across the credential pool.
    pub fn remaining_requests(&self) -> u64 {
        self.pool.remaining()
    }

    fn endpoint(&self, key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base.trim_end_matches('/'),
            self.model,
            key
        )
    }
}

impl TextGenerator for GeminiClient {
    fn generate(
        &mut self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        // The usage counter is charged up front; a failure later in the call
        // does not refund it.
        let key = match self.pool.acquire() {
            Some(key) => key.to_string(),
            None => return Err(GenerateError::NoCredentialAvailable),
        };

        if self.log_requests {
            tracing::debug!(
                model = %self.model,
                prompt_chars = prompt.len(),
                remaining = self.pool.remaining(),
                "sending generation request"
            );
        }

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: *params,
        };

        let response = self
            .http
            .post(self.endpoint(&key))
            .json(&body)
            .send()
            .map_err(GenerateError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Upstream(status));
        }

        let parsed: GenerateResponse = response.json().map_err(GenerateError::Transport)?;
        Ok(parsed
            .into_answer_text()
            .unwrap_or_else(|| FALLBACK_ANSWER.to_string()))
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationParams,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: ResponseContent,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Walks `candidates[0].content.parts[0].text`; any missing hop or an
    /// empty string yields `None` so the caller can substitute the fallback.
    fn into_answer_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_wire_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
            generation_config: GenerationParams::answering(),
        };
        let json = serde_json::to_value(&body).expect("serializable");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn answer_text_follows_the_candidates_path() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"An answer."}]}}]}"#,
        )
        .expect("valid response");
        assert_eq!(parsed.into_answer_text().as_deref(), Some("An answer."));
    }

    #[test]
    fn missing_or_empty_answer_degrades_to_none() {
        for raw in [
            "{}",
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
            r#"{"candidates":[{"finishReason":"SAFETY"}]}"#,
        ] {
            let parsed: GenerateResponse = serde_json::from_str(raw).expect("still valid JSON");
            assert_eq!(parsed.into_answer_text(), None, "{raw}");
        }
    }

    #[test]
    fn endpoint_embeds_model_and_credential() {
        let pool = KeyPool::new(vec!["k1".to_string()], 1);
        let client = GeminiClient::new("gemini-2.5-pro", pool)
            .expect("client")
            .with_base_url("http://localhost:9999/");
        assert_eq!(
            client.endpoint("k1"),
            "http://localhost:9999/v1beta/models/gemini-2.5-pro:generateContent?key=k1"
        );
    }

    #[test]
    fn empty_pool_fails_before_any_request() {
        let pool = KeyPool::new(Vec::new(), 100);
        let mut client = GeminiClient::new("gemini-2.5-flash-preview-05-20", pool)
            .expect("client")
            .with_base_url("http://localhost:1");
        match client.generate("hi", &GenerationParams::answering()) {
            Err(GenerateError::NoCredentialAvailable) => {}
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }
}
