//! Extraction service adapters
//!
//! This module contains the boundary to the external digitization service:
//! the `ExtractionService` trait, the HTTP and fixture backends, and the
//! factory selecting a backend from configuration.

pub mod factory;
pub mod fixture;
pub mod http;
pub mod service;

pub use factory::create_extraction_service;
pub use fixture::FixtureExtractionService;
pub use http::HttpExtractionService;
pub use service::{ExtractedFields, ExtractionService};
