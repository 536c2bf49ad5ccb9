//! General application configuration.

use serde::{Deserialize, Serialize};

/// Name stamped on a session when the identity carries no display name.
fn default_auditor_name() -> String {
    String::from("Authorized Auditor")
}

/// Brand named in suggestion prompts and printed report headers.
fn default_brand() -> String {
    String::from("BING CHUN")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Fallback auditor name.
    #[serde(default = "default_auditor_name")]
    pub fallback_auditor_name: String,

    /// Brand name (e.g., "BING CHUN").
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Default branch for `tally audit` when `--branch` is omitted
    /// (e.g., "nugegoda", "port-city").
    #[serde(default)]
    pub default_branch: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fallback_auditor_name: default_auditor_name(),
            brand: default_brand(),
            default_branch: String::new(),
        }
    }
}
