//! JSON-lines record store backend
//!
//! Appends each submitted report as one JSON object per line to a local
//! file. This is the default store for the CLI; a deployment would swap in
//! a backend talking to the real collection system.

use super::traits::{RecordStore, SubmittedReport};
use crate::domain::SubmissionError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Record store appending reports to a JSON-lines file
pub struct JsonlRecordStore {
    path: PathBuf,
}

impl JsonlRecordStore {
    /// Create a store writing to `path`
    ///
    /// The file is created on first write; parent directories must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for JsonlRecordStore {
    async fn persist(&self, report: &SubmittedReport) -> Result<(), SubmissionError> {
        let mut line = serde_json::to_string(report)
            .map_err(|e| SubmissionError::PersistenceFailure(format!("serialization: {e}")))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                SubmissionError::PersistenceFailure(format!(
                    "Failed to open {}: {e}",
                    self.path.display()
                ))
            })?;

        file.write_all(line.as_bytes()).await.map_err(|e| {
            SubmissionError::PersistenceFailure(format!(
                "Failed to write {}: {e}",
                self.path.display()
            ))
        })?;

        file.flush().await.map_err(|e| {
            SubmissionError::PersistenceFailure(format!(
                "Failed to flush {}: {e}",
                self.path.display()
            ))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            receipt_id = %report.receipt_id,
            "Appended submitted report"
        );

        Ok(())
    }

    fn backend_name(&self) -> &str {
        "jsonl"
    }
}
