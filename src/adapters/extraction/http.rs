//! HTTP extraction service backend
//!
//! This module implements `ExtractionService` against a remote digitization
//! API. The report file is uploaded as a base64 payload in a JSON request;
//! the service answers with the extracted field values. Errors never expose
//! the underlying HTTP client types.

use super::service::{ExtractedFields, ExtractionService};
use crate::config::ExtractionConfig;
use crate::domain::errors::ExtractionError;
use crate::domain::ids::VleId;
use crate::domain::report::ReportFile;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request payload sent to the extraction API
#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    vle_id: &'a str,
    file_name: &'a str,
    content: String,
}

/// Response payload returned by the extraction API
#[derive(Debug, Deserialize)]
struct ExtractResponse {
    fields: ExtractedFields,
}

/// Extraction backend talking to a remote digitization service
///
/// # Example
///
/// ```no_run
/// use krishi::adapters::extraction::HttpExtractionService;
/// use krishi::config::ExtractionConfig;
///
/// let mut config = ExtractionConfig::default();
/// config.base_url = "https://digitizer.example.com".to_string();
/// let service = HttpExtractionService::new(&config);
/// ```
pub struct HttpExtractionService {
    base_url: String,
    api_key: Option<String>,
    client: Client,
    max_retries: u32,
    initial_delay_ms: u64,
    backoff_multiplier: f64,
    max_delay_ms: u64,
}

impl HttpExtractionService {
    /// Create a new HTTP extraction backend from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Extraction configuration carrying base URL, credentials,
    ///   timeout and retry settings
    pub fn new(config: &ExtractionConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
            max_retries: config.retry.max_retries,
            initial_delay_ms: config.retry.initial_delay_ms,
            backoff_multiplier: config.retry.backoff_multiplier,
            max_delay_ms: config.retry.max_delay_ms,
        }
    }

    /// Retry a request with exponential backoff
    ///
    /// Only `ServiceUnavailable` outcomes are retried; a timeout or an
    /// incomplete payload will not improve on a retry of the same call.
    async fn retry_request<F, T, Fut>(&self, operation: F) -> Result<T, ExtractionError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, ExtractionError>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    attempt += 1;
                    let retryable = matches!(e, ExtractionError::ServiceUnavailable(_));
                    if !retryable || attempt >= self.max_retries {
                        return Err(e);
                    }

                    let delay_ms = (self.initial_delay_ms as f64
                        * self.backoff_multiplier.powi(attempt as i32 - 1))
                        as u64;
                    let delay_ms = delay_ms.min(self.max_delay_ms);

                    tracing::warn!(
                        attempt = attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Retrying extraction request after error"
                    );

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }

    /// Perform one extraction request against the API
    async fn request_extraction(
        &self,
        payload: &ExtractRequest<'_>,
    ) -> Result<ExtractedFields, ExtractionError> {
        let url = format!("{}/v1/extract", self.base_url);

        let mut request = self.client.post(&url).json(payload);
        if let Some(ref api_key) = self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ExtractionError::Timeout(format!("no response from {url}"))
            } else {
                ExtractionError::ServiceUnavailable(format!(
                    "Failed to reach extraction service: {e}"
                ))
            }
        })?;

        match response.status() {
            StatusCode::OK => {
                let body: ExtractResponse = response.json().await.map_err(|e| {
                    ExtractionError::ServiceUnavailable(format!(
                        "Invalid response from extraction service: {e}"
                    ))
                })?;
                Ok(body.fields)
            }
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Err(
                ExtractionError::Timeout(format!("gateway timeout from {url}")),
            ),
            status => Err(ExtractionError::ServiceUnavailable(format!(
                "Extraction service returned {status}"
            ))),
        }
    }
}

#[async_trait]
impl ExtractionService for HttpExtractionService {
    async fn extract(
        &self,
        file: &ReportFile,
        vle_id: &VleId,
    ) -> Result<ExtractedFields, ExtractionError> {
        let bytes = tokio::fs::read(file.path()).await.map_err(|e| {
            ExtractionError::ServiceUnavailable(format!(
                "Failed to read report file {}: {e}",
                file.name()
            ))
        })?;

        let payload = ExtractRequest {
            vle_id: vle_id.as_str(),
            file_name: file.name(),
            content: general_purpose::STANDARD.encode(&bytes),
        };

        tracing::debug!(
            file = %file.name(),
            vle_id = %vle_id,
            bytes = bytes.len(),
            "Sending report to extraction service"
        );

        self.retry_request(|| self.request_extraction(&payload))
            .await
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}
