//! Auditor directory configuration.

use serde::{Deserialize, Serialize};

/// One authorized auditor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserEntry {
    /// Display name printed on reports.
    pub name: String,
    /// Login name, matched case-insensitively.
    pub username: String,
    /// Plain-text password, matched exactly.
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Configured auditors. Empty means the built-in `admin` account.
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

impl DirectoryConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.users.is_empty()
    }
}
