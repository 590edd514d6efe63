//! In-memory record store backend
//!
//! Keeps submitted reports in process memory. Used in tests and for dry
//! runs where nothing should be written to disk.

use super::traits::{RecordStore, SubmittedReport};
use crate::domain::SubmissionError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Record store keeping submitted reports in memory
#[derive(Default)]
pub struct MemoryRecordStore {
    reports: Mutex<Vec<SubmittedReport>>,
}

impl MemoryRecordStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports persisted so far
    pub fn len(&self) -> usize {
        self.reports.lock().expect("store lock poisoned").len()
    }

    /// Returns true if nothing has been persisted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all persisted reports
    pub fn reports(&self) -> Vec<SubmittedReport> {
        self.reports.lock().expect("store lock poisoned").clone()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn persist(&self, report: &SubmittedReport) -> Result<(), SubmissionError> {
        self.reports
            .lock()
            .expect("store lock poisoned")
            .push(report.clone());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::DigitizedRecord;
    use crate::domain::schema::FieldSchema;
    use crate::domain::VleId;
    use chrono::Utc;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn sample_report() -> SubmittedReport {
        let schema = FieldSchema::vle_report();
        let mut extracted = HashMap::new();
        extracted.insert("VLE ID".to_string(), "VLE123".to_string());
        extracted.insert("Machine Type".to_string(), "Thresher".to_string());
        extracted.insert("Hours Used".to_string(), "5".to_string());
        extracted.insert("Earnings (INR)".to_string(), "1250".to_string());

        SubmittedReport {
            receipt_id: Uuid::new_v4(),
            vle_id: VleId::new("VLE123").unwrap(),
            file_name: "report.pdf".to_string(),
            record: DigitizedRecord::from_extracted(&schema, extracted).unwrap(),
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_persist_and_read_back() {
        let store = MemoryRecordStore::new();
        assert!(store.is_empty());

        let report = sample_report();
        store.persist(&report).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.reports()[0], report);
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(MemoryRecordStore::new().backend_name(), "memory");
    }
}
