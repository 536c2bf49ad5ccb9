use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AuditResult, ChecklistItem};

/// A failed checklist item paired with the result that failed it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FailedItem {
    pub item: ChecklistItem,
    pub result: AuditResult,
}

impl FailedItem {
    /// Comment for display, with the standard placeholder when blank.
    #[must_use]
    pub fn comment_or_placeholder(&self) -> &str {
        self.result.comment_text().unwrap_or("No comment provided.")
    }
}
