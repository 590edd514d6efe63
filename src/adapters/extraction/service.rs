//! Extraction service trait definition
//!
//! This module defines the `ExtractionService` trait that abstracts the
//! external digitization backend. The backend receives a report file and the
//! VLE identifier it belongs to and returns raw field values; schema
//! enforcement happens in the core processor, not here.

use crate::domain::errors::ExtractionError;
use crate::domain::ids::VleId;
use crate::domain::report::ReportFile;
use async_trait::async_trait;
use std::collections::HashMap;

/// Raw field values returned by an extraction backend, keyed by field label
///
/// Not yet validated against the report schema; may be partial and may carry
/// keys outside the schema.
pub type ExtractedFields = HashMap<String, String>;

/// Trait for extraction service backends
///
/// Implementations represent calls to an external, non-deterministic and
/// potentially slow digitization service. The call suspends rather than
/// blocking; timeout enforcement is owned by the caller.
///
/// # Example
///
/// ```no_run
/// use krishi::adapters::extraction::{ExtractionService, FixtureExtractionService};
/// use krishi::domain::{ReportFile, VleId};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = FixtureExtractionService::new(Duration::from_millis(50));
/// let file = ReportFile::new("report.pdf", "/tmp/report.pdf")?;
/// let vle_id = VleId::new("VLE123")?;
///
/// let fields = service.extract(&file, &vle_id).await?;
/// println!("Extracted {} fields", fields.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ExtractionService: Send + Sync {
    /// Digitize a report file into raw field values
    ///
    /// # Arguments
    ///
    /// * `file` - The report file to digitize
    /// * `vle_id` - The VLE the report belongs to
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::ServiceUnavailable`] if the backend cannot
    /// be reached or rejects the request, [`ExtractionError::Timeout`] if the
    /// backend reports its own deadline exceeded.
    async fn extract(
        &self,
        file: &ReportFile,
        vle_id: &VleId,
    ) -> Result<ExtractedFields, ExtractionError>;

    /// Short name of the backend, used in logs
    fn backend_name(&self) -> &str;
}
