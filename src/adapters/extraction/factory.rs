//! Extraction backend factory
//!
//! Creates the extraction service implementation selected by configuration.

use super::fixture::FixtureExtractionService;
use super::http::HttpExtractionService;
use super::service::ExtractionService;
use crate::config::ExtractionConfig;
use crate::domain::{KrishiError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Create an extraction service from configuration
///
/// # Arguments
///
/// * `config` - Extraction configuration naming the backend
///
/// # Errors
///
/// Returns a configuration error if the backend name is not supported.
///
/// # Example
///
/// ```
/// use krishi::adapters::extraction::create_extraction_service;
/// use krishi::config::ExtractionConfig;
///
/// let config = ExtractionConfig::default();
/// let service = create_extraction_service(&config).unwrap();
/// assert_eq!(service.backend_name(), "fixture");
/// ```
pub fn create_extraction_service(
    config: &ExtractionConfig,
) -> Result<Arc<dyn ExtractionService>> {
    let service: Arc<dyn ExtractionService> = match config.backend.as_str() {
        "fixture" => Arc::new(FixtureExtractionService::new(Duration::from_millis(
            config.fixture_delay_ms,
        ))),
        "http" => Arc::new(HttpExtractionService::new(config)),
        other => {
            return Err(KrishiError::Configuration(format!(
                "Unsupported extraction backend: {other}. Supported backends: fixture, http"
            )))
        }
    };

    tracing::debug!(backend = service.backend_name(), "Created extraction service");

    Ok(service)
}
