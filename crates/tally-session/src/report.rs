//! Report assembly: the failed-item snapshot and the frozen report view-model.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tally_core::Catalog;
use tally_core::entities::{AuditSession, FailedItem, ResultMap};
use tally_core::enums::Branch;
use tally_core::scoring;

/// Failed items in report order: zero-tolerance first, then operational,
/// each in catalog declaration order.
#[must_use]
pub fn build_failed_list(catalog: &Catalog, results: &ResultMap) -> Vec<FailedItem> {
    catalog
        .iter()
        .filter_map(|item| {
            results
                .get(&item.id)
                .filter(|result| result.is_fail())
                .map(|result| FailedItem {
                    item: item.clone(),
                    result: result.clone(),
                })
        })
        .collect()
}

/// Read-only summary of a finished audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub branch: Branch,
    pub branch_name: String,
    pub auditor: String,
    pub audit_date: String,
    pub start_time: String,
    pub score: u32,
    pub max_score: u32,
    pub zero_tolerance_failed: bool,
    pub failed: Vec<FailedItem>,
    pub suggestions: String,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Freeze a report from a session, its failure snapshot and the
    /// suggestion text returned for that snapshot.
    #[must_use]
    pub fn assemble(
        catalog: &Catalog,
        session: &AuditSession,
        failed: Vec<FailedItem>,
        suggestions: String,
    ) -> Self {
        Self {
            branch: session.branch,
            branch_name: session.branch.label().to_string(),
            auditor: session.auditor.clone(),
            audit_date: session.audit_date.clone(),
            start_time: session.start_time.clone(),
            score: scoring::score(catalog, &session.results),
            max_score: scoring::max_score(catalog),
            zero_tolerance_failed: scoring::any_zero_tolerance_failed(catalog, &session.results),
            failed,
            suggestions,
            generated_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_full_compliance(&self) -> bool {
        self.failed.is_empty()
    }

    /// Printable Markdown document.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut doc = String::new();

        let _ = writeln!(doc, "# Audit Report\n");
        let _ = writeln!(
            doc,
            "**{} Branch • {}**\n",
            self.branch_name.to_uppercase(),
            self.audit_date
        );

        let outcome = if self.zero_tolerance_failed {
            "CRITICAL FAILURE"
        } else {
            "PASSED"
        };
        let _ = writeln!(doc, "| Audit Registry | |");
        let _ = writeln!(doc, "|---|---|");
        let _ = writeln!(doc, "| Auditor | {} |", self.auditor);
        let _ = writeln!(doc, "| Time | {} |", self.start_time);
        let _ = writeln!(doc, "| Score | {} / {} |", self.score, self.max_score);
        let _ = writeln!(doc, "| Violations | {} |", self.failed.len());
        let _ = writeln!(doc, "| Result | {outcome} |\n");

        if self.zero_tolerance_failed {
            let _ = writeln!(
                doc,
                "> **Critical Violation Detected.** A Zero Tolerance requirement has failed. \
                 This store receives a 0 score.\n"
            );
        }

        let _ = writeln!(doc, "## AI Action Plan\n");
        let _ = writeln!(doc, "{}\n", self.suggestions.trim());

        let _ = writeln!(doc, "## Compliance Observations\n");
        if self.failed.is_empty() {
            let _ = writeln!(doc, "**Full Compliance**\n");
            let _ = writeln!(doc, "No violations were observed during this inspection.");
            return doc;
        }

        for (idx, failure) in self.failed.iter().enumerate() {
            let _ = writeln!(
                doc,
                "### {}. {} ({}, #{})\n",
                idx + 1,
                failure.item.title,
                failure.item.category,
                failure.item.id
            );
            let _ = writeln!(doc, "\"{}\"\n", failure.comment_or_placeholder());
            if failure.result.photo.is_some() {
                let _ = writeln!(doc, "_Evidence photo attached._\n");
            }
        }

        doc
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;
    use tally_core::entities::{AuditResult, ChecklistItem};
    use tally_core::enums::Tier;

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

    fn catalog() -> Catalog {
        Catalog::new(vec![
            item(1, Tier::ZeroTolerance, 300),
            item(2, Tier::Operational, 5),
            item(3, Tier::Operational, 10),
        ])
        .unwrap()
    }

    fn session(results: ResultMap) -> AuditSession {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 14, 30, 0)
            .unwrap();
        let mut session = AuditSession::new(Branch::Borella, "Admin User", now);
        session.results = results;
        session
    }

    #[test]
    fn failed_list_follows_catalog_order_not_recording_order() {
        let catalog = catalog();
        let mut results = ResultMap::new();
        results.insert(3, AuditResult::fail(3, None));
        results.insert(2, AuditResult::pass(2));
        results.insert(1, AuditResult::fail(1, Some("expired syrup".into())));

        let failed = build_failed_list(&catalog, &results);
        let ids: Vec<u32> = failed.iter().map(|f| f.item.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(failed, build_failed_list(&catalog, &results));
    }

    #[test]
    fn failed_list_skips_unknown_ids() {
        let mut results = ResultMap::new();
        results.insert(42, AuditResult::fail(42, None));
        assert!(build_failed_list(&catalog(), &results).is_empty());
    }

    #[test]
    fn assemble_computes_score_from_session() {
        let catalog = catalog();
        let mut results = ResultMap::new();
        results.insert(1, AuditResult::pass(1));
        results.insert(2, AuditResult::pass(2));
        results.insert(3, AuditResult::fail(3, None));
        let session = session(results);

        let failed = build_failed_list(&catalog, &session.results);
        let report = Report::assemble(&catalog, &session, failed, "- fix it".into());

        assert_eq!(report.score, 5);
        assert_eq!(report.max_score, 15);
        assert!(!report.zero_tolerance_failed);
        assert_eq!(report.branch_name, "Borella");
        assert_eq!(report.start_time, "14:30");
        assert_eq!(report.failed.len(), 1);
    }

    #[test]
    fn markdown_numbers_failures_and_flags_critical() {
        let catalog = catalog();
        let mut results = ResultMap::new();
        results.insert(1, AuditResult::fail(1, Some("expired syrup".into())));
        let mut with_photo = AuditResult::fail(3, None);
        with_photo.photo = Some("data:image/jpeg;base64,AAAA".into());
        results.insert(3, with_photo);
        let session = session(results);

        let failed = build_failed_list(&catalog, &session.results);
        let report = Report::assemble(&catalog, &session, failed, "1. Discard stock".into());
        let doc = report.to_markdown();

        assert!(doc.contains("**BORELLA Branch • 16 October 2026**"));
        assert!(doc.contains("| Score | 0 / 15 |"));
        assert!(doc.contains("Critical Violation Detected"));
        assert!(doc.contains("### 1. Item 1 (Test, #1)"));
        assert!(doc.contains("\"expired syrup\""));
        assert!(doc.contains("### 2. Item 3 (Test, #3)"));
        assert!(doc.contains("\"No comment provided.\""));
        assert!(doc.contains("_Evidence photo attached._"));
        assert!(!doc.contains("base64"));
    }

    #[test]
    fn markdown_full_compliance() {
        let catalog = catalog();
        let results: ResultMap = (1..=3).map(|id| (id, AuditResult::pass(id))).collect();
        let session = session(results);
        let report = Report::assemble(&catalog, &session, Vec::new(), "Great job".into());

        assert!(report.is_full_compliance());
        let doc = report.to_markdown();
        assert!(doc.contains("**Full Compliance**"));
        assert!(doc.contains("| Result | PASSED |"));
        assert!(!doc.contains("Critical Violation"));
    }

    #[test]
    fn json_view_carries_branch_key_and_failures() {
        let catalog = catalog();
        let mut results = ResultMap::new();
        results.insert(2, AuditResult::fail(2, Some("wobbly".into())));
        let session = session(results);
        let failed = build_failed_list(&catalog, &session.results);
        let report = Report::assemble(&catalog, &session, failed, "tighten".into());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["branch"], "borella");
        assert_eq!(json["failed"][0]["item"]["id"], 2);
        assert_eq!(json["failed"][0]["result"]["comment"], "wobbly");
        assert_eq!(json["zero_tolerance_failed"], false);
    }
}
