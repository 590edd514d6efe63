//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Krishi configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Extraction Backend: {}", config.extraction.backend);
        if config.extraction.backend == "http" {
            println!("  Extraction Service: {}", config.extraction.base_url);
            println!("  Timeout: {}s", config.extraction.timeout_seconds);
            println!("  Max Retries: {}", config.extraction.retry.max_retries);
        }
        println!("  Store Backend: {}", config.store.backend);
        if config.store.backend == "jsonl" {
            println!("  Store Path: {}", config.store.path);
        }
        println!("  Require Auth: {}", config.workflow.require_auth);
        println!();

        Ok(0)
    }
}
