//! Shared state for the live assessment widget.
//!
//! DESIGN
//! ======
//! The submission lifecycle and the history list live here as plain data with
//! pure transitions, so the rules (one request in flight, last good result
//! wins, stale history replies dropped) are testable without a browser.

#[cfg(test)]
#[path = "assess_test.rs"]
mod assess_test;

use crate::net::api::ApiError;
use crate::net::types::{AssessmentResult, HistoryEntry};

/// Submission lifecycle for the demo form.
///
/// There is no error phase: a failed call lands back in `Idle` with the
/// previous result still displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// No assess call in flight; the form accepts a submission.
    #[default]
    Idle,
    /// An assess call is in flight; the submit control is disabled.
    Submitting,
}

/// State shared between the demo form and the history panel.
#[derive(Clone, Debug, Default)]
pub struct AssessState {
    /// Where the widget is in the submit lifecycle.
    pub phase: SubmitPhase,
    /// Most recent successful assessment, shown until replaced.
    pub result: Option<AssessmentResult>,
    /// Current history list, most recent first, replaced wholesale on load.
    pub history: Vec<HistoryEntry>,
    /// Generation counter for history fetches; replies from older fetches
    /// are stale and must not overwrite newer data.
    history_epoch: u64,
}

impl AssessState {
    /// Whether an assess call is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Enter `Submitting`. Callers check [`Self::is_submitting`] first; a
    /// second begin while in flight is a no-op.
    pub fn begin_submit(&mut self) {
        self.phase = SubmitPhase::Submitting;
    }

    /// Leave `Submitting` unconditionally.
    ///
    /// A successful outcome replaces the displayed result verbatim; a failed
    /// one leaves the previous result in place.
    pub fn finish_submit(&mut self, outcome: Result<AssessmentResult, ApiError>) {
        self.phase = SubmitPhase::Idle;
        if let Ok(result) = outcome {
            self.result = Some(result);
        }
    }

    /// Register a new history fetch and return its generation token.
    ///
    /// Any reply carrying an older token is stale from this point on.
    pub fn begin_history_fetch(&mut self) -> u64 {
        self.history_epoch += 1;
        self.history_epoch
    }

    /// Apply a history reply for the fetch identified by `epoch`.
    ///
    /// The list is replaced only when the reply is current and successful;
    /// stale replies and failures leave it untouched. Returns whether the
    /// list was replaced.
    pub fn apply_history(
        &mut self,
        epoch: u64,
        outcome: Result<Vec<HistoryEntry>, ApiError>,
    ) -> bool {
        if epoch != self.history_epoch {
            return false;
        }
        match outcome {
            Ok(entries) => {
                self.history = entries;
                true
            }
            Err(_) => false,
        }
    }
}
