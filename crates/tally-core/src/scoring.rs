//! Scoring and progress derivations.
//!
//! Every function here is pure over `(catalog, results)` and is meant to be
//! recomputed on read after each mutation. Results whose id is not in the
//! catalog are ignored throughout.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::{ChecklistItem, ResultMap};
use crate::enums::AuditStatus;

fn status_of(item: &ChecklistItem, results: &ResultMap) -> AuditStatus {
    results
        .get(&item.id)
        .map_or(AuditStatus::None, |result| result.status)
}

/// True iff any zero-tolerance item has been failed.
#[must_use]
pub fn any_zero_tolerance_failed(catalog: &Catalog, results: &ResultMap) -> bool {
    catalog
        .zero_tolerance()
        .iter()
        .any(|item| status_of(item, results) == AuditStatus::Fail)
}

/// Audit score.
///
/// A single zero-tolerance failure forces the score to 0. Otherwise the
/// points of every passed operational item are summed. Zero-tolerance items
/// never add points.
#[must_use]
pub fn score(catalog: &Catalog, results: &ResultMap) -> u32 {
    if any_zero_tolerance_failed(catalog, results) {
        return 0;
    }

    catalog
        .operational()
        .iter()
        .filter(|item| status_of(item, results) == AuditStatus::Pass)
        .map(|item| item.points)
        .sum()
}

/// Highest reachable score: every operational item passed.
#[must_use]
pub fn max_score(catalog: &Catalog) -> u32 {
    catalog.operational().iter().map(|item| item.points).sum()
}

/// Whether the audit can be finished.
///
/// A zero-tolerance failure completes the audit immediately, regardless of
/// how many items are still unanswered.
#[must_use]
pub fn is_complete(catalog: &Catalog, results: &ResultMap) -> bool {
    any_zero_tolerance_failed(catalog, results)
        || catalog
            .iter()
            .all(|item| status_of(item, results).is_answered())
}

/// Number of catalog items with a pass or fail answer.
#[must_use]
pub fn answered_count(catalog: &Catalog, results: &ResultMap) -> usize {
    catalog
        .iter()
        .filter(|item| status_of(item, results).is_answered())
        .count()
}

/// Percentage of catalog items answered, rounded half up. An empty catalog
/// reports 0, and 100 is only reported once every item is answered.
#[must_use]
pub fn progress_percent(catalog: &Catalog, results: &ResultMap) -> u8 {
    let total = catalog.len();
    if total == 0 {
        return 0;
    }
    let answered = answered_count(catalog, results);
    if answered >= total {
        return 100;
    }
    let percent = (200 * answered + total) / (2 * total);
    u8::try_from(percent.min(99)).unwrap_or(99)
}

/// Snapshot of every derived value for one result map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub score: u32,
    pub max_score: u32,
    pub zero_tolerance_failed: bool,
    pub complete: bool,
    pub progress_percent: u8,
    pub answered: usize,
    pub total: usize,
}

impl ScoreCard {
    #[must_use]
    pub fn compute(catalog: &Catalog, results: &ResultMap) -> Self {
        Self {
            score: score(catalog, results),
            max_score: max_score(catalog),
            zero_tolerance_failed: any_zero_tolerance_failed(catalog, results),
            complete: is_complete(catalog, results),
            progress_percent: progress_percent(catalog, results),
            answered: answered_count(catalog, results),
            total: catalog.len(),
        }
    }
}
