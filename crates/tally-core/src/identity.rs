use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated auditor identity for cross-crate passing.
///
/// Produced by `tally-auth`, consumed by `tally-session` and `tally-cli`.
/// Contains only data fields, no credential material.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditorIdentity {
    /// Display name printed on reports.
    pub name: String,
    /// Directory username the auditor logged in with.
    pub username: String,
}
