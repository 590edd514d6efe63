//! Digitization processor
//!
//! Turns a validated intake into a schema-total [`DigitizedRecord`] by
//! calling the configured extraction backend. The processor owns the
//! timeout policy at the service boundary and the schema-totality check;
//! the backend itself only returns raw field values.

use crate::adapters::extraction::{create_extraction_service, ExtractionService};
use crate::config::ExtractionConfig;
use crate::domain::errors::ExtractionError;
use crate::domain::ids::VleId;
use crate::domain::record::DigitizedRecord;
use crate::domain::report::ReportFile;
use crate::domain::result::Result;
use crate::domain::schema::FieldSchema;
use std::sync::Arc;
use std::time::Duration;

/// Processor invoking the external extraction service
pub struct DigitizationProcessor {
    service: Arc<dyn ExtractionService>,
    schema: Arc<FieldSchema>,
    timeout: Duration,
}

impl DigitizationProcessor {
    /// Creates a processor over an explicit service, schema and timeout
    pub fn new(
        service: Arc<dyn ExtractionService>,
        schema: Arc<FieldSchema>,
        timeout: Duration,
    ) -> Self {
        Self {
            service,
            schema,
            timeout,
        }
    }

    /// Creates a processor with the backend selected by configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the backend name is not supported.
    pub fn from_config(config: &ExtractionConfig, schema: Arc<FieldSchema>) -> Result<Self> {
        let service = create_extraction_service(config)?;
        Ok(Self::new(
            service,
            schema,
            Duration::from_secs(config.timeout_seconds),
        ))
    }

    /// Digitizes a report file into a schema-total record
    ///
    /// Suspends while the extraction call is in flight; the caller's other
    /// work is not blocked. The call is bounded by the configured timeout.
    ///
    /// # Arguments
    ///
    /// * `file` - The report file to digitize
    /// * `vle_id` - The VLE the report belongs to
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Timeout`] when the backend exceeds the
    /// timeout, [`ExtractionError::ServiceUnavailable`] on service failure,
    /// or [`ExtractionError::IncompleteExtraction`] when the response does
    /// not cover every required schema field.
    pub async fn extract(
        &self,
        file: &ReportFile,
        vle_id: &VleId,
    ) -> std::result::Result<DigitizedRecord, ExtractionError> {
        let backend = self.service.backend_name();
        tracing::debug!(
            backend = backend,
            file = %file.name(),
            timeout_secs = self.timeout.as_secs(),
            "Invoking extraction service"
        );

        let fields = tokio::time::timeout(self.timeout, self.service.extract(file, vle_id))
            .await
            .map_err(|_| {
                ExtractionError::Timeout(format!("{}s elapsed", self.timeout.as_secs()))
            })??;

        let record = DigitizedRecord::from_extracted(&self.schema, fields)?;

        tracing::info!(
            backend = backend,
            fields = record.len(),
            "Extraction produced a complete record"
        );

        Ok(record)
    }

    /// The schema records are validated against
    pub fn schema(&self) -> &Arc<FieldSchema> {
        &self.schema
    }
}
