//! Configuration schema types
//!
//! This module defines the configuration structure for Krishi.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KrishiConfig {
    /// Application settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Extraction service settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Record store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Workflow settings
    #[serde(default)]
    pub workflow: WorkflowConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl KrishiConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a human-readable description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        match self.extraction.backend.as_str() {
            "fixture" => {}
            "http" => {
                if self.extraction.base_url.trim().is_empty() {
                    return Err(
                        "extraction.base_url is required for the http extraction backend"
                            .to_string(),
                    );
                }
            }
            other => {
                return Err(format!(
                    "Unsupported extraction backend: {other}. Supported backends: fixture, http"
                ));
            }
        }

        if self.extraction.timeout_seconds == 0 {
            return Err("extraction.timeout_seconds must be greater than zero".to_string());
        }

        if self.extraction.retry.backoff_multiplier < 1.0 {
            return Err("extraction.retry.backoff_multiplier must be at least 1.0".to_string());
        }

        match self.store.backend.as_str() {
            "memory" => {}
            "jsonl" => {
                if self.store.path.trim().is_empty() {
                    return Err("store.path is required for the jsonl store backend".to_string());
                }
            }
            other => {
                return Err(format!(
                    "Unsupported store backend: {other}. Supported backends: memory, jsonl"
                ));
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.application.log_level.as_str()) {
            return Err(format!(
                "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
                self.application.log_level
            ));
        }

        Ok(())
    }
}

impl Default for KrishiConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            extraction: ExtractionConfig::default(),
            store: StoreConfig::default(),
            workflow: WorkflowConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Extraction service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Extraction backend to use: "fixture" or "http"
    #[serde(default = "default_extraction_backend")]
    pub backend: String,

    /// Base URL of the HTTP extraction service
    #[serde(default)]
    pub base_url: String,

    /// Optional API key sent as a bearer token to the HTTP service
    #[serde(default)]
    pub api_key: Option<String>,

    /// Upper bound on a single extraction call, in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Simulated processing delay of the fixture backend, in milliseconds
    #[serde(default = "default_fixture_delay_ms")]
    pub fixture_delay_ms: u64,

    /// Retry behavior for the HTTP backend
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            backend: default_extraction_backend(),
            base_url: String::new(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
            fixture_delay_ms: default_fixture_delay_ms(),
            retry: RetryConfig::default(),
        }
    }
}

/// Retry settings for the HTTP extraction backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Multiplier applied to the delay after each attempt
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Upper bound on the delay between attempts, in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

/// Record store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store backend to use: "memory" or "jsonl"
    #[serde(default = "default_store_backend")]
    pub backend: String,

    /// Path of the JSON-lines file for the jsonl backend
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            path: default_store_path(),
        }
    }
}

/// Workflow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Whether an authenticated session is required to open the workflow.
    /// Authentication itself is supplied by the surrounding application;
    /// Krishi only honors the flag.
    #[serde(default)]
    pub require_auth: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            require_auth: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to write JSON logs to a local rolling file
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "krishi".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_extraction_backend() -> String {
    "fixture".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_fixture_delay_ms() -> u64 {
    2000
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    500
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_max_delay_ms() -> u64 {
    5000
}

fn default_store_backend() -> String {
    "jsonl".to_string()
}

fn default_store_path() -> String {
    "reports.jsonl".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
