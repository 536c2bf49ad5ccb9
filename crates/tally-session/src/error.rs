use tally_core::enums::SessionPhase;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested operation is not allowed in the current phase.
    #[error("cannot go from {from} to {to}")]
    InvalidTransition {
        from: SessionPhase,
        to: SessionPhase,
    },
}
