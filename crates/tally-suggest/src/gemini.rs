//! Gemini `generateContent` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tally_config::GeminiConfig;
use tally_core::entities::FailedItem;

use crate::error::SuggestError;
use crate::http::check_response;
use crate::{
    PERFECT_AUDIT_MESSAGE, SERVICE_ERROR_MESSAGE, SuggestionGenerator, UNAVAILABLE_MESSAGE,
    prompt,
};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate; empty when there is none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// HTTP client for the Generative Language API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    brand: String,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &GeminiConfig, brand: &str) -> Result<Self, SuggestError> {
        let http = reqwest::Client::builder()
            .user_agent("tally/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            brand: brand.to_string(),
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint,
            urlencoding::encode(&self.model)
        )
    }

    /// Send one prompt and return the model's text, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError`] if no key is configured, the HTTP request
    /// fails, the service returns a non-success status, or the body cannot be
    /// parsed.
    pub async fn generate(&self, prompt: &str) -> Result<String, SuggestError> {
        if !self.is_configured() {
            return Err(SuggestError::NotConfigured);
        }

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let resp = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let raw = resp.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&raw).map_err(|e| SuggestError::Parse(e.to_string()))?;
        Ok(parsed.text())
    }

    /// Request suggestions for a non-empty failure list.
    ///
    /// # Errors
    ///
    /// Same as [`GeminiClient::generate`].
    pub async fn try_suggest(&self, failed: &[FailedItem]) -> Result<String, SuggestError> {
        let prompt = prompt::build_prompt(&self.brand, failed);
        self.generate(&prompt).await
    }
}

impl SuggestionGenerator for GeminiClient {
    async fn suggest(&self, failed: &[FailedItem]) -> String {
        if failed.is_empty() {
            return PERFECT_AUDIT_MESSAGE.to_string();
        }

        tracing::debug!(failures = failed.len(), model = %self.model, "requesting suggestions");
        match self.try_suggest(failed).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!(model = %self.model, "suggestion service returned no text");
                UNAVAILABLE_MESSAGE.to_string()
            }
            Ok(text) => text,
            Err(error) => {
                tracing::error!(%error, "suggestion request failed");
                SERVICE_ERROR_MESSAGE.to_string()
            }
        }
    }
}
