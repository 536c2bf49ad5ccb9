//! The checklist catalog: every item an audit must answer, in declaration order.
//!
//! Items are held in two tiers. Iteration always yields zero-tolerance items
//! first, then operational items, each in the order they were declared. The
//! report and the suggestion prompt both number failures by this order.

mod standard;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::ChecklistItem;
use crate::enums::Tier;
use crate::errors::CoreError;

/// Read-only checklist definition passed into sessions and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    zero_tolerance: Vec<ChecklistItem>,
    operational: Vec<ChecklistItem>,
}

/// On-disk catalog layout (`[[items]]` tables).
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<ChecklistItem>,
}

impl Catalog {
    /// Build a catalog from items in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if an id is zero or appears twice.
    pub fn new(items: Vec<ChecklistItem>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id == 0 {
                return Err(CoreError::Validation(format!(
                    "checklist item '{}' has id 0; ids must be positive",
                    item.title
                )));
            }
            if !seen.insert(item.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate checklist item id {}",
                    item.id
                )));
            }
        }

        Ok(Self::partition(items))
    }

    /// The built-in store checklist (4 zero-tolerance and 74 operational items).
    #[must_use]
    pub fn standard() -> Self {
        Self::partition(standard::items())
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] for malformed TOML and
    /// [`CoreError::Validation`] for duplicate or zero ids.
    pub fn from_toml_str(raw: &str) -> Result<Self, CoreError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.items)
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Catalog::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            items = catalog.len(),
            "loaded checklist catalog"
        );
        Ok(catalog)
    }

    fn partition(items: Vec<ChecklistItem>) -> Self {
        let (zero_tolerance, operational) = items
            .into_iter()
            .partition(|item| item.tier == Tier::ZeroTolerance);
        Self {
            zero_tolerance,
            operational,
        }
    }

    #[must_use]
    pub fn zero_tolerance(&self) -> &[ChecklistItem] {
        &self.zero_tolerance
    }

    #[must_use]
    pub fn operational(&self) -> &[ChecklistItem] {
        &self.operational
    }

    /// Items of one tier, in declaration order.
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &[ChecklistItem] {
        match tier {
            Tier::ZeroTolerance => &self.zero_tolerance,
            Tier::Operational => &self.operational,
        }
    }

    /// All items: zero-tolerance first, then operational.
    pub fn iter(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.zero_tolerance.iter().chain(self.operational.iter())
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&ChecklistItem> {
        self.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zero_tolerance.len() + self.operational.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: u32, tier: Tier, points: u32) -> ChecklistItem {
        ChecklistItem {
            id,
            category: "Test".into(),
            title: format!("Item {id}"),
            description: String::new(),
            points,
            tier,
        }
    }

    #[test]
    fn standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.zero_tolerance().len(), 4);
        assert_eq!(catalog.operational().len(), 74);
        assert_eq!(catalog.len(), 78);
    }

    #[test]
    fn standard_catalog_passes_validation() {
        let catalog = Catalog::standard();
        let rebuilt = Catalog::new(catalog.iter().cloned().collect()).expect("valid catalog");
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn standard_ids_are_sequential() {
        let ids: Vec<u32> = Catalog::standard().iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=78).collect::<Vec<_>>());
    }

    #[test]
    fn iteration_puts_zero_tolerance_first() {
        let catalog = Catalog::new(vec![
            item(10, Tier::Operational, 5),
            item(1, Tier::ZeroTolerance, 300),
            item(11, Tier::Operational, 3),
            item(2, Tier::ZeroTolerance, 300),
        ])
        .unwrap();
        let ids: Vec<u32> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 10, 11]);
    }

    #[test]
    fn rejects_duplicate_ids_across_tiers() {
        let err = Catalog::new(vec![
            item(1, Tier::ZeroTolerance, 300),
            item(1, Tier::Operational, 5),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_zero_id() {
        let err = Catalog::new(vec![item(0, Tier::Operational, 5)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn parses_toml_catalog() {
        let catalog = Catalog::from_toml_str(
            r#"
[[items]]
id = 1
category = "Zero Tolerance"
title = "Expired Materials"
description = "No expired stock."
points = 300
tier = "zero_tolerance"

[[items]]
id = 2
category = "Cashier"
title = "Customer Greeting"
description = "Greet customers."
points = 3
tier = "operational"
"#,
        )
        .expect("catalog should parse");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.zero_tolerance()[0].title, "Expired Materials");
        assert_eq!(catalog.get(2).map(|item| item.points), Some(3));
        assert!(!catalog.contains(3));
    }

    #[test]
    fn toml_with_unknown_tier_is_parse_error() {
        let err = Catalog::from_toml_str(
            r#"
[[items]]
id = 1
category = "X"
title = "X"
description = "X"
points = 1
tier = "critical"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn empty_toml_is_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
