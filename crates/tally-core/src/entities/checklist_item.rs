use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Tier;

/// A single pass/fail line of the store checklist. Immutable once the catalog
/// is built.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub tier: Tier,
}

impl ChecklistItem {
    #[must_use]
    pub fn is_zero_tolerance(&self) -> bool {
        self.tier == Tier::ZeroTolerance
    }
}
