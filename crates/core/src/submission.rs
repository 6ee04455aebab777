//! Form submission state machine shared by every create/update page.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Succeeded
//!   |                   \
//!   | invalid input      --err--> Failed
//!   +------------------------------> Failed
//! ```
//!
//! `Succeeded` and `Failed` are editable: the user may submit again, which
//! re-enters `Submitting`. Messages from the previous outcome stay visible
//! until the next submission starts.

use serde::Serialize;

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient outcome state rendered next to a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormStatus {
    pub phase: SubmissionPhase,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl FormStatus {
    /// Fail before any store call (local validation).
    pub fn reject(&mut self, error: impl Into<String>) {
        self.phase = SubmissionPhase::Failed;
        self.error = Some(error.into());
        self.message = None;
    }

    /// Enter `Submitting`, clearing the previous outcome.
    pub fn begin(&mut self) {
        self.phase = SubmissionPhase::Submitting;
        self.error = None;
        self.message = None;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.phase = SubmissionPhase::Succeeded;
        self.error = None;
        self.message = Some(message.into());
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.phase = SubmissionPhase::Failed;
        self.error = Some(error.into());
    }

    /// Show a page-level error (e.g. a failed initial load) without
    /// changing the phase.
    pub fn report_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// The submit control is disabled while a submission is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }
}
