//! Record store adapters
//!
//! Persistence boundary for submitted reports: the `RecordStore` trait, the
//! memory and JSON-lines backends, and the factory selecting a backend from
//! configuration.

pub mod factory;
pub mod jsonl;
pub mod memory;
pub mod traits;

pub use factory::create_record_store;
pub use jsonl::JsonlRecordStore;
pub use memory::MemoryRecordStore;
pub use traits::{RecordStore, SubmittedReport};
