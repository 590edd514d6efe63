//! Configuration management for Krishi.
//!
//! This module provides TOML-based configuration loading, parsing and
//! validation.
//!
//! # Overview
//!
//! Krishi uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `KRISHI_*` environment variable overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use krishi::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("krishi.toml")?;
//!
//! println!("Extraction backend: {}", config.extraction.backend);
//! println!("Store backend: {}", config.store.backend);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "krishi"
//! log_level = "info"
//!
//! [extraction]
//! backend = "http"
//! base_url = "https://digitizer.example.com"
//! api_key = "${KRISHI_EXTRACTION_API_KEY}"
//! timeout_seconds = 30
//!
//! [extraction.retry]
//! max_retries = 3
//! initial_delay_ms = 500
//!
//! [store]
//! backend = "jsonl"
//! path = "reports.jsonl"
//!
//! [workflow]
//! require_auth = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExtractionConfig, KrishiConfig, LoggingConfig, RetryConfig, StoreConfig,
    WorkflowConfig,
};
