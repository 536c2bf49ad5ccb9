//! Tier, status, branch and session phase enums for Tally.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`SessionPhase`] provides `allowed_next_states()` to enforce valid
//! transitions in the session state machine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Which section of the checklist an item belongs to.
///
/// A failed zero-tolerance item overrides the whole audit score to zero.
/// Operational items contribute their points when passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    ZeroTolerance,
    Operational,
}

impl Tier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroTolerance => "zero_tolerance",
            Self::Operational => "operational",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditStatus
// ---------------------------------------------------------------------------

/// Answer recorded for a single checklist item.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    #[default]
    None,
    Pass,
    Fail,
}

impl AuditStatus {
    /// Whether the item has been answered (pass or fail).
    #[must_use]
    pub const fn is_answered(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Store branches that can be audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Nugegoda,
    PortCity,
    Borella,
}

impl Branch {
    pub const ALL: [Self; 3] = [Self::Nugegoda, Self::PortCity, Self::Borella];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nugegoda => "nugegoda",
            Self::PortCity => "port_city",
            Self::Borella => "borella",
        }
    }

    /// Human-readable branch name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nugegoda => "Nugegoda",
            Self::PortCity => "Port City",
            Self::Borella => "Borella",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionPhase
// ---------------------------------------------------------------------------

/// Lifecycle phase of an audit session.
///
/// ```text
/// not_started → branch_selected → in_progress ⇄ completed → reported → not_started
///                              ↘ completed
/// ```
///
/// Any started phase may also return to `not_started` (session abandoned).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    NotStarted,
    BranchSelected,
    InProgress,
    Completed,
    Reported,
}

impl SessionPhase {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::NotStarted => &[Self::BranchSelected],
            Self::BranchSelected | Self::InProgress => {
                &[Self::InProgress, Self::Completed, Self::NotStarted]
            }
            Self::Completed => &[
                Self::InProgress,
                Self::Completed,
                Self::Reported,
                Self::NotStarted,
            ],
            Self::Reported => &[Self::NotStarted],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether results may still be recorded in this phase.
    #[must_use]
    pub const fn accepts_results(self) -> bool {
        matches!(self, Self::BranchSelected | Self::InProgress | Self::Completed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::BranchSelected => "branch_selected",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Reported => "reported",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
