//! Record store factory
//!
//! Creates the record store implementation selected by configuration.

use super::jsonl::JsonlRecordStore;
use super::memory::MemoryRecordStore;
use super::traits::RecordStore;
use crate::config::StoreConfig;
use crate::domain::{KrishiError, Result};
use std::sync::Arc;

/// Create a record store from configuration
///
/// # Arguments
///
/// * `config` - Store configuration naming the backend
///
/// # Errors
///
/// Returns a configuration error if the backend name is not supported.
pub fn create_record_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match config.backend.as_str() {
        "memory" => Arc::new(MemoryRecordStore::new()),
        "jsonl" => Arc::new(JsonlRecordStore::new(&config.path)),
        other => {
            return Err(KrishiError::Configuration(format!(
                "Unsupported store backend: {other}. Supported backends: memory, jsonl"
            )))
        }
    };

    tracing::debug!(backend = store.backend_name(), "Created record store");

    Ok(store)
}
