//! Integration tests for the HTTP extraction backend
//!
//! These tests run the backend against a mock digitization service and
//! verify the error mapping at the service boundary.

use krishi::adapters::extraction::{ExtractionService, HttpExtractionService};
use krishi::config::ExtractionConfig;
use krishi::core::digitize::DigitizationProcessor;
use krishi::domain::errors::ExtractionError;
use krishi::domain::report::ReportFile;
use krishi::domain::schema::FieldSchema;
use krishi::domain::VleId;
use std::sync::Arc;
use std::time::Duration;

fn http_config(base_url: &str) -> ExtractionConfig {
    let mut config = ExtractionConfig::default();
    config.backend = "http".to_string();
    config.base_url = base_url.to_string();
    config.retry.max_retries = 1;
    config.retry.initial_delay_ms = 1;
    config
}

fn report_on_disk(dir: &tempfile::TempDir) -> ReportFile {
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, b"%PDF-1.4 demo report").unwrap();
    ReportFile::new("report.pdf", &path).unwrap()
}

#[tokio::test]
async fn test_successful_extraction_parses_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/extract")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"fields": {
                "VLE ID": "VLE123",
                "Machine Type": "Thresher",
                "Hours Used": "5",
                "Earnings (INR)": "1250"
            }}"#,
        )
        .create_async()
        .await;

    let service = HttpExtractionService::new(&http_config(&server.url()));
    let dir = tempfile::tempdir().unwrap();
    let file = report_on_disk(&dir);
    let vle_id = VleId::new("VLE123").unwrap();

    let fields = service.extract(&file, &vle_id).await.unwrap();
    assert_eq!(fields.get("Machine Type").map(String::as_str), Some("Thresher"));
    assert_eq!(fields.len(), 4);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_maps_to_service_unavailable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/extract")
        .with_status(503)
        .with_body("digitizer overloaded")
        .create_async()
        .await;

    let service = HttpExtractionService::new(&http_config(&server.url()));
    let dir = tempfile::tempdir().unwrap();
    let file = report_on_disk(&dir);
    let vle_id = VleId::new("VLE123").unwrap();

    let err = service.extract(&file, &vle_id).await.unwrap_err();
    match err {
        ExtractionError::ServiceUnavailable(msg) => assert!(msg.contains("503")),
        other => panic!("Expected ServiceUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_response_maps_to_service_unavailable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/extract")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let service = HttpExtractionService::new(&http_config(&server.url()));
    let dir = tempfile::tempdir().unwrap();
    let file = report_on_disk(&dir);
    let vle_id = VleId::new("VLE123").unwrap();

    let err = service.extract(&file, &vle_id).await.unwrap_err();
    assert!(matches!(err, ExtractionError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_gateway_timeout_maps_to_timeout() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/extract")
        .with_status(504)
        .create_async()
        .await;

    let service = HttpExtractionService::new(&http_config(&server.url()));
    let dir = tempfile::tempdir().unwrap();
    let file = report_on_disk(&dir);
    let vle_id = VleId::new("VLE123").unwrap();

    let err = service.extract(&file, &vle_id).await.unwrap_err();
    assert!(matches!(err, ExtractionError::Timeout(_)));
}

#[tokio::test]
async fn test_server_errors_are_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/extract")
        .with_status(500)
        .expect(3)
        .create_async()
        .await;

    let mut config = http_config(&server.url());
    config.retry.max_retries = 3;
    let service = HttpExtractionService::new(&config);

    let dir = tempfile::tempdir().unwrap();
    let file = report_on_disk(&dir);
    let vle_id = VleId::new("VLE123").unwrap();

    let err = service.extract(&file, &vle_id).await.unwrap_err();
    assert!(matches!(err, ExtractionError::ServiceUnavailable(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_partial_payload_fails_incomplete_through_processor() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/extract")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"fields": {"VLE ID": "VLE123", "Machine Type": "Thresher"}}"#)
        .create_async()
        .await;

    let service = Arc::new(HttpExtractionService::new(&http_config(&server.url())));
    let processor = DigitizationProcessor::new(
        service,
        Arc::new(FieldSchema::vle_report()),
        Duration::from_secs(5),
    );

    let dir = tempfile::tempdir().unwrap();
    let file = report_on_disk(&dir);
    let vle_id = VleId::new("VLE123").unwrap();

    let err = processor.extract(&file, &vle_id).await.unwrap_err();
    match err {
        ExtractionError::IncompleteExtraction { missing } => {
            assert_eq!(missing, vec!["Hours Used", "Earnings (INR)"]);
        }
        other => panic!("Expected IncompleteExtraction, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_key_sent_as_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/extract")
        .match_header("authorization", "Bearer secret-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"fields": {"VLE ID": "VLE123"}}"#)
        .create_async()
        .await;

    let mut config = http_config(&server.url());
    config.api_key = Some("secret-key".to_string());
    let service = HttpExtractionService::new(&config);

    let dir = tempfile::tempdir().unwrap();
    let file = report_on_disk(&dir);
    let vle_id = VleId::new("VLE123").unwrap();

    service.extract(&file, &vle_id).await.unwrap();
    mock.assert_async().await;
}
