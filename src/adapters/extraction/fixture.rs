//! Fixture extraction service backend
//!
//! A deterministic stand-in for the real digitization service, used for
//! demos and offline development. It waits a configurable delay to mimic a
//! slow service, then returns a fixed set of machine-usage values with the
//! VLE identifier echoed from the request. It can also be configured to fail
//! with a chosen error to exercise failure paths.

use super::service::{ExtractedFields, ExtractionService};
use crate::domain::errors::ExtractionError;
use crate::domain::ids::VleId;
use crate::domain::report::ReportFile;
use async_trait::async_trait;
use std::time::Duration;

/// Demo values returned by the fixture backend
const DEMO_MACHINE_TYPE: &str = "Thresher";
const DEMO_HOURS_USED: &str = "5";
const DEMO_EARNINGS_INR: &str = "1250";

/// Extraction backend returning fixed demo values after a simulated delay
pub struct FixtureExtractionService {
    delay: Duration,
    failure: Option<ExtractionError>,
}

impl FixtureExtractionService {
    /// Create a fixture backend that succeeds after `delay`
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Create a fixture backend that fails with `error` after `delay`
    ///
    /// Useful for exercising extraction failure paths without a real
    /// service.
    pub fn failing(delay: Duration, error: ExtractionError) -> Self {
        Self {
            delay,
            failure: Some(error),
        }
    }
}

#[async_trait]
impl ExtractionService for FixtureExtractionService {
    async fn extract(
        &self,
        file: &ReportFile,
        vle_id: &VleId,
    ) -> Result<ExtractedFields, ExtractionError> {
        tracing::debug!(
            file = %file.name(),
            vle_id = %vle_id,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating digitization"
        );

        tokio::time::sleep(self.delay).await;

        if let Some(ref error) = self.failure {
            return Err(error.clone());
        }

        let mut fields = ExtractedFields::new();
        fields.insert("VLE ID".to_string(), vle_id.as_str().to_string());
        fields.insert("Machine Type".to_string(), DEMO_MACHINE_TYPE.to_string());
        fields.insert("Hours Used".to_string(), DEMO_HOURS_USED.to_string());
        fields.insert("Earnings (INR)".to_string(), DEMO_EARNINGS_INR.to_string());
        Ok(fields)
    }

    fn backend_name(&self) -> &str {
        "fixture"
    }
}
