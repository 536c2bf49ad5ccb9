//! Entity structs for the Tally domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod audit_result;
mod checklist_item;
mod failed_item;
mod session;

pub use audit_result::{AuditResult, ResultMap};
pub use checklist_item::ChecklistItem;
pub use failed_item::FailedItem;
pub use session::AuditSession;
