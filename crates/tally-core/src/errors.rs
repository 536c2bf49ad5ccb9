//! Cross-cutting error types for Tally.
//!
//! Domain-specific errors (e.g., `SessionError`, `SuggestError`) are defined in
//! their respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Tally crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (catalog shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A catalog file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file could not be parsed.
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}
