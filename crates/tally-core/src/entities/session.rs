use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ResultMap;
use crate::enums::Branch;

/// One audit visit to one branch by one auditor.
///
/// `started_at`, `start_time` and `audit_date` are stamped once when the
/// branch is chosen and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditSession {
    pub branch: Branch,
    pub auditor: String,
    pub started_at: DateTime<FixedOffset>,
    /// Wall-clock start time, `HH:MM`.
    pub start_time: String,
    /// Long-form audit date, e.g. `16 October 2026`.
    pub audit_date: String,
    pub results: ResultMap,
}

impl AuditSession {
    /// Start an empty session stamped with `now`.
    #[must_use]
    pub fn new(branch: Branch, auditor: impl Into<String>, now: DateTime<FixedOffset>) -> Self {
        Self {
            branch,
            auditor: auditor.into(),
            start_time: now.format("%H:%M").to_string(),
            audit_date: now.format("%-d %B %Y").to_string(),
            started_at: now,
            results: ResultMap::new(),
        }
    }
}
