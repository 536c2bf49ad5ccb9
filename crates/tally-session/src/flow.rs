//! The audit session state machine.
//!
//! ```text
//! NotStarted --select_branch--> BranchSelected (Completed when the catalog is empty)
//! BranchSelected --set_result--> InProgress / Completed
//! InProgress <--set_result--> Completed --finish--> Reported --reset--> NotStarted
//! ```
//!
//! The phase after every recorded result is derived from
//! [`scoring::is_complete`]: editing away the only zero-tolerance failure
//! re-opens a completed audit.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tally_core::Catalog;
use tally_core::entities::{AuditResult, AuditSession, FailedItem, ResultMap};
use tally_core::enums::{AuditStatus, Branch, SessionPhase};
use tally_core::identity::AuditorIdentity;
use tally_core::scoring::{self, ScoreCard};
use tally_suggest::SuggestionGenerator;

use crate::error::SessionError;
use crate::report::{Report, build_failed_list};

const DEFAULT_AUDITOR_NAME: &str = "Authorized Auditor";

/// Owner of the single active audit session.
#[derive(Debug, Clone)]
pub struct AuditFlow {
    catalog: Arc<Catalog>,
    fallback_auditor: String,
    phase: SessionPhase,
    session: Option<AuditSession>,
    report: Option<Report>,
}

impl AuditFlow {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            fallback_auditor: DEFAULT_AUDITOR_NAME.to_string(),
            phase: SessionPhase::NotStarted,
            session: None,
            report: None,
        }
    }

    /// Name stamped on the session when the identity has a blank name.
    #[must_use]
    pub fn with_fallback_auditor(mut self, name: impl Into<String>) -> Self {
        self.fallback_auditor = name.into();
        self
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn session(&self) -> Option<&AuditSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn result(&self, item_id: u32) -> Option<&AuditResult> {
        self.session
            .as_ref()
            .and_then(|session| session.results.get(&item_id))
    }

    fn transition(&mut self, next: SessionPhase) -> Result<(), SessionError> {
        if !self.phase.can_transition_to(next) {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        tracing::debug!(from = %self.phase, to = %next, "session phase change");
        self.phase = next;
        Ok(())
    }

    /// Start a session for `branch`, stamping auditor and time once. An
    /// empty catalog moves straight to `Completed`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] unless the flow is
    /// `NotStarted`.
    pub fn select_branch(
        &mut self,
        branch: Branch,
        auditor: &AuditorIdentity,
        now: DateTime<FixedOffset>,
    ) -> Result<&AuditSession, SessionError> {
        self.transition(SessionPhase::BranchSelected)?;

        let name = if auditor.name.trim().is_empty() {
            self.fallback_auditor.clone()
        } else {
            auditor.name.clone()
        };
        tracing::info!(branch = %branch, auditor = %name, "audit session started");

        // A catalog with nothing to answer is complete from the start.
        if scoring::is_complete(&self.catalog, &ResultMap::new()) {
            self.transition(SessionPhase::Completed)?;
        }

        Ok(self.session.insert(AuditSession::new(branch, name, now)))
    }

    /// Record or overwrite one item's result (full replace).
    ///
    /// Results for ids outside the catalog are dropped with a warning and
    /// leave the phase unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] when no session is open or
    /// the session has already been reported.
    pub fn set_result(&mut self, result: AuditResult) -> Result<SessionPhase, SessionError> {
        if !self.phase.accepts_results() {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                to: SessionPhase::InProgress,
            });
        }
        if !self.catalog.contains(result.item_id) {
            tracing::warn!(item_id = result.item_id, "ignoring result for unknown checklist item");
            return Ok(self.phase);
        }
        let Some(session) = self.session.as_mut() else {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                to: SessionPhase::InProgress,
            });
        };

        tracing::debug!(item_id = result.item_id, status = %result.status, "result recorded");
        session.results.insert(result.item_id, result);

        let next = if scoring::is_complete(&self.catalog, &session.results) {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress
        };
        self.transition(next)?;
        Ok(next)
    }

    /// Existing result for `item_id`, or a blank one.
    fn current(&self, item_id: u32) -> AuditResult {
        self.result(item_id).cloned().unwrap_or(AuditResult {
            item_id,
            ..AuditResult::default()
        })
    }

    /// Mark an item passed. Any comment or photo already attached is kept.
    ///
    /// # Errors
    ///
    /// Same as [`AuditFlow::set_result`].
    pub fn mark_pass(&mut self, item_id: u32) -> Result<SessionPhase, SessionError> {
        let mut result = self.current(item_id);
        result.status = AuditStatus::Pass;
        self.set_result(result)
    }

    /// Mark an item failed. A `None` comment keeps any existing comment; an
    /// attached photo is kept.
    ///
    /// # Errors
    ///
    /// Same as [`AuditFlow::set_result`].
    pub fn mark_fail(
        &mut self,
        item_id: u32,
        comment: Option<String>,
    ) -> Result<SessionPhase, SessionError> {
        let mut result = self.current(item_id);
        result.status = AuditStatus::Fail;
        if comment.is_some() {
            result.comment = comment;
        }
        self.set_result(result)
    }

    /// Replace an item's comment without touching its status.
    ///
    /// # Errors
    ///
    /// Same as [`AuditFlow::set_result`].
    pub fn set_comment(
        &mut self,
        item_id: u32,
        comment: impl Into<String>,
    ) -> Result<SessionPhase, SessionError> {
        let mut result = self.current(item_id);
        result.comment = Some(comment.into());
        self.set_result(result)
    }

    /// Attach an opaque photo payload without touching the item's status.
    ///
    /// # Errors
    ///
    /// Same as [`AuditFlow::set_result`].
    pub fn attach_photo(
        &mut self,
        item_id: u32,
        photo: impl Into<String>,
    ) -> Result<SessionPhase, SessionError> {
        let mut result = self.current(item_id);
        result.photo = Some(photo.into());
        self.set_result(result)
    }

    /// Derived values for the open session (all zero before one starts).
    #[must_use]
    pub fn score_card(&self) -> ScoreCard {
        let empty = ResultMap::new();
        let results = self.session.as_ref().map_or(&empty, |s| &s.results);
        ScoreCard::compute(&self.catalog, results)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score_card().score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_some() && self.score_card().complete
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.score_card().progress_percent
    }

    #[must_use]
    pub fn any_zero_tolerance_failed(&self) -> bool {
        self.score_card().zero_tolerance_failed
    }

    /// Current failures in report order.
    #[must_use]
    pub fn failed_items(&self) -> Vec<FailedItem> {
        self.session
            .as_ref()
            .map(|session| build_failed_list(&self.catalog, &session.results))
            .unwrap_or_default()
    }

    /// Finish the audit: snapshot failures, await suggestions, freeze the
    /// report.
    ///
    /// The snapshot is taken before the suggestion request starts, and the
    /// `&mut self` borrow keeps the session untouched until it resolves.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] unless the session is
    /// `Completed`.
    pub async fn finish<G>(&mut self, generator: &G) -> Result<&Report, SessionError>
    where
        G: SuggestionGenerator + Sync,
    {
        let (Some(session), true) = (
            self.session.as_ref(),
            self.phase.can_transition_to(SessionPhase::Reported),
        ) else {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                to: SessionPhase::Reported,
            });
        };

        let failed = build_failed_list(&self.catalog, &session.results);
        tracing::info!(failures = failed.len(), "finishing audit");
        let suggestions = generator.suggest(&failed).await;

        let report = Report::assemble(&self.catalog, session, failed, suggestions);
        self.transition(SessionPhase::Reported)?;
        Ok(self.report.insert(report))
    }

    /// Discard the session (and report, if any) and return to `NotStarted`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] if no session was started.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.transition(SessionPhase::NotStarted)?;
        if self.report.is_none() {
            tracing::info!("audit session abandoned");
        }
        self.session = None;
        self.report = None;
        Ok(())
    }
}
