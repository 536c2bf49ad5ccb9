use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AuditStatus;

/// Recorded results keyed by checklist item id.
pub type ResultMap = BTreeMap<u32, AuditResult>;

/// The auditor's answer for one checklist item.
///
/// `comment` and `photo` only carry meaning for failed items. `photo` is an
/// opaque string-encoded image payload and is never interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditResult {
    pub item_id: u32,
    pub status: AuditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl AuditResult {
    #[must_use]
    pub fn pass(item_id: u32) -> Self {
        Self {
            item_id,
            status: AuditStatus::Pass,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn fail(item_id: u32, comment: Option<String>) -> Self {
        Self {
            item_id,
            status: AuditStatus::Fail,
            comment,
            photo: None,
        }
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self.status, AuditStatus::Fail)
    }

    /// Comment text for display; blank comments count as absent.
    #[must_use]
    pub fn comment_text(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .map(str::trim)
            .filter(|comment| !comment.is_empty())
    }
}
