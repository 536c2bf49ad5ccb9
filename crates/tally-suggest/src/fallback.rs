//! Generator used when no suggestion client can be built.

use tally_core::entities::FailedItem;

use crate::{PERFECT_AUDIT_MESSAGE, SERVICE_ERROR_MESSAGE, SuggestionGenerator};

/// Answers every request locally: the perfect-audit message for an empty
/// list, the service-error message otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGenerator;

impl SuggestionGenerator for FallbackGenerator {
    async fn suggest(&self, failed: &[FailedItem]) -> String {
        if failed.is_empty() {
            PERFECT_AUDIT_MESSAGE.to_string()
        } else {
            SERVICE_ERROR_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tally_core::entities::{AuditResult, ChecklistItem};
    use tally_core::enums::Tier;

    use super::*;

    #[tokio::test]
    async fn empty_list_is_a_perfect_audit() {
        assert_eq!(FallbackGenerator.suggest(&[]).await, PERFECT_AUDIT_MESSAGE);
    }

    #[tokio::test]
    async fn failures_get_the_service_error_message() {
        let failed = [FailedItem {
            item: ChecklistItem {
                id: 3,
                category: "Kitchen".into(),
                title: "Pest Control".into(),
                description: String::new(),
                points: 300,
                tier: Tier::ZeroTolerance,
            },
            result: AuditResult::fail(3, None),
        }];
        assert_eq!(FallbackGenerator.suggest(&failed).await, SERVICE_ERROR_MESSAGE);
    }
}
