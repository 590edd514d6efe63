//! Domain error types
//!
//! This module defines the error hierarchy for Krishi. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Krishi error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum KrishiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Intake validation errors (pre-extraction gate)
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    /// Extraction service errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Draft editing errors
    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    /// Submission errors
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Invalid session transitions (e.g. a second extraction request
    /// while one is already in flight)
    #[error("Session error: {0}")]
    Session(String),

    /// Validation errors (e.g. an unsupported report file type)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Intake validation errors
///
/// Failures of the pre-extraction gate. These are recovered locally: they
/// block the transition out of `Idle` and surface as a user-facing
/// validation message without altering session status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// No report file has been selected
    #[error("No report file selected")]
    MissingFile,

    /// The VLE identifier is empty after trimming
    #[error("VLE identifier is missing")]
    MissingIdentifier,
}

/// Extraction service errors
///
/// Failures of the external digitization service. These surface to the
/// notification channel and return the session to a stable, re-attemptable
/// status. They don't expose third-party HTTP client types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The extraction service could not be reached or returned an error
    #[error("Extraction service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The extraction call exceeded the configured timeout
    #[error("Extraction timed out: {0}")]
    Timeout(String),

    /// The service response did not cover every required schema field
    #[error("Incomplete extraction, missing fields: {}", .missing.join(", "))]
    IncompleteExtraction {
        /// Required schema keys absent from the service response
        missing: Vec<String>,
    },
}

/// Draft editing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The field key is not part of the report schema
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Submission errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The session is not in a submittable state (mid-edit, no record,
    /// or a required field left empty)
    #[error("Record not ready for submission: {0}")]
    NotReady(String),

    /// The record store rejected or failed the write
    #[error("Failed to persist record: {0}")]
    PersistenceFailure(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for KrishiError {
    fn from(err: std::io::Error) -> Self {
        KrishiError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for KrishiError {
    fn from(err: serde_json::Error) -> Self {
        KrishiError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for KrishiError {
    fn from(err: toml::de::Error) -> Self {
        KrishiError::Configuration(format!("TOML parse error: {err}"))
    }
}
