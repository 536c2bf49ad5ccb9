//! # tally-session
//!
//! The single-auditor audit flow: choose a branch, record results, finish
//! into a frozen report.
//!
//! [`AuditFlow`] owns the only mutable session. Score, completion and
//! progress are recomputed from the catalog on every read; nothing is cached.
//! [`report::build_failed_list`] fixes the order in which failures are
//! numbered, both on the printed report and in the suggestion prompt.

pub mod error;
pub mod flow;
pub mod report;

pub use error::SessionError;
pub use flow::AuditFlow;
pub use report::Report;
