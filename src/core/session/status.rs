//! Upload session status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of one upload workflow run
///
/// Transitions are owned by
/// [`UploadSession`](crate::core::session::UploadSession); no other component
/// writes the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Fresh session, collecting file and identifier input
    Idle,

    /// Intake validation in progress
    Validating,

    /// Extraction call in flight
    Processing,

    /// Record present, awaiting user verification
    Verifying,

    /// Draft open for correction
    Editing,

    /// Submission in flight
    Submitting,

    /// Record committed; the session resets to `Idle` immediately after
    Submitted,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Validating => "validating",
            SessionStatus::Processing => "processing",
            SessionStatus::Verifying => "verifying",
            SessionStatus::Editing => "editing",
            SessionStatus::Submitting => "submitting",
            SessionStatus::Submitted => "submitted",
        };
        write!(f, "{name}")
    }
}
