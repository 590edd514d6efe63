//! Record store trait definition
//!
//! Persistence is an external collaborator: Krishi hands a submitted report
//! to a `RecordStore` and only cares whether the write succeeded. No storage
//! schema is designed here.

use crate::domain::ids::VleId;
use crate::domain::record::DigitizedRecord;
use crate::domain::SubmissionError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A verified report record accepted for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedReport {
    /// Receipt identifier assigned at submission
    pub receipt_id: Uuid,

    /// VLE the report belongs to
    pub vle_id: VleId,

    /// Name of the uploaded report file
    pub file_name: String,

    /// The verified, possibly corrected record
    pub record: DigitizedRecord,

    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
}

/// Trait for record store backends
///
/// # Errors
///
/// Implementations map their backend failures onto
/// [`SubmissionError::PersistenceFailure`]; no third-party error types leak
/// to callers.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a submitted report
    async fn persist(&self, report: &SubmittedReport) -> Result<(), SubmissionError>;

    /// Short name of the backend, used in logs
    fn backend_name(&self) -> &str;
}
