//! # tally-auth
//!
//! Static auditor directory for Tally.
//!
//! Credentials are a fixed lookup table taken from configuration. There are
//! no tokens and no session expiry: a successful check simply yields the
//! auditor's identity for stamping onto the audit session.

pub mod directory;
pub mod error;

pub use directory::Directory;
pub use error::AuthError;
