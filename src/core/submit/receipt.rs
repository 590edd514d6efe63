//! Submission receipt

use crate::domain::ids::VleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Proof of a committed report submission
///
/// Returned to the caller after the record store accepted the write; the
/// corresponding [`SubmissionEvent`](crate::adapters::notify::SubmissionEvent)
/// goes to the notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Unique identifier of this submission
    pub receipt_id: Uuid,

    /// VLE the submitted report belongs to
    pub vle_id: VleId,

    /// When the record was committed
    pub submitted_at: DateTime<Utc>,
}
