//! Prompt construction for remediation suggestions.

use tally_core::entities::FailedItem;

/// One line per failure, numbered from 1 in the given order:
/// `N. Title: comment`.
#[must_use]
pub fn failure_lines(failed: &[FailedItem]) -> String {
    failed
        .iter()
        .enumerate()
        .map(|(idx, failure)| {
            format!(
                "{}. {}: {}",
                idx + 1,
                failure.item.title,
                failure.comment_or_placeholder()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full prompt sent to the model.
#[must_use]
pub fn build_prompt(brand: &str, failed: &[FailedItem]) -> String {
    format!(
        "You are an expert store operations auditor for {brand}.\n\
         The following items failed during a store audit:\n\
         {failures}\n\n\
         Please provide a structured, professional, and encouraging set of actionable \
         improvement suggestions to help the store team fix these issues and prepare for \
         the next audit.\n\
         Focus on practical steps and {brand} standard compliance.\n\
         Return the response as a clear Markdown list.",
        failures = failure_lines(failed),
    )
}
