//! Suggestion service error types.

use thiserror::Error;

/// Errors that can occur when requesting remediation suggestions.
///
/// These never escape [`crate::SuggestionGenerator::suggest`]; they are
/// logged and replaced by a fallback message there.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a service response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key is configured.
    #[error("suggestion service is not configured (missing gemini.api_key)")]
    NotConfigured,
}
