//! # tally-suggest
//!
//! Remediation suggestions for failed audit items.
//!
//! The session layer only depends on [`SuggestionGenerator`]: hand it the
//! failed items in report order and await one block of text. Generators never
//! fail outward. An empty failure list yields [`PERFECT_AUDIT_MESSAGE`]
//! without any remote call, and service problems are logged and replaced by a
//! fixed fallback string.
//!
//! [`GeminiClient`] is the production generator, calling the Generative
//! Language API `generateContent` endpoint. [`FallbackGenerator`] stands in
//! when that client cannot be built.

pub mod fallback;
pub mod gemini;
pub mod prompt;

mod error;
mod http;

pub use error::SuggestError;
pub use fallback::FallbackGenerator;
pub use gemini::GeminiClient;

use std::future::Future;

use tally_core::entities::FailedItem;

/// Returned without a remote call when nothing failed.
pub const PERFECT_AUDIT_MESSAGE: &str = "The audit was perfect! Keep maintaining these high \
standards to ensure customer satisfaction and operational excellence.";

/// Returned when the service answers with no text.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to generate suggestions at this time.";

/// Returned when the service cannot be reached or rejects the request.
pub const SERVICE_ERROR_MESSAGE: &str =
    "Error connecting to the AI service. Please review the failed items manually.";

/// Produces free-form remediation text for a list of failed items.
pub trait SuggestionGenerator {
    /// Suggestions for `failed`, in the order given. Never fails; problems
    /// are absorbed into a fallback message.
    fn suggest(&self, failed: &[FailedItem]) -> impl Future<Output = String> + Send;
}
