//! # tally-core
//!
//! Core types and the scoring engine for Tally.
//!
//! This crate provides the foundational types shared across all Tally crates:
//! - Checklist item and audit result entities
//! - Tier, status, branch and session phase enums (with the phase state machine)
//! - The checklist catalog, including the built-in store checklist
//! - Pure scoring and progress derivations over a catalog and a result map
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod scoring;

pub use catalog::Catalog;
pub use errors::CoreError;
