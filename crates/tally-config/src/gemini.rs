//! Gemini suggestion service configuration.

use serde::{Deserialize, Serialize};

/// Default Generative Language API endpoint.
fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

fn default_model() -> String {
    String::from("gemini-3-flash-preview")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`.
    #[serde(default)]
    pub api_key: String,

    /// Model name used for `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if the Gemini config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.model.is_empty() && !self.endpoint.is_empty()
    }
}
