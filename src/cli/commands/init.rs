//! Init command implementation
//!
//! This module implements the `init` command which writes a starter
//! configuration file.

use clap::Args;
use std::path::PathBuf;

/// Starter configuration written by `krishi init`
const CONFIG_TEMPLATE: &str = r#"# Krishi configuration

[application]
name = "krishi"
log_level = "info"

[extraction]
# Extraction backend: "fixture" returns demo values, "http" calls a
# digitization service.
backend = "fixture"
# base_url = "https://digitizer.example.com"
# api_key = "${KRISHI_EXTRACTION_API_KEY}"
timeout_seconds = 30
fixture_delay_ms = 2000

[extraction.retry]
max_retries = 3
initial_delay_ms = 500
backoff_multiplier = 2.0
max_delay_ms = 5000

[store]
# Store backend: "jsonl" appends to a local file, "memory" keeps nothing.
backend = "jsonl"
path = "reports.jsonl"

[workflow]
# Require an authentication token (KRISHI_AUTH_TOKEN) to run the workflow.
require_auth = false

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path of the configuration file to create
    #[arg(short, long, default_value = "krishi.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        if self.output.exists() && !self.force {
            eprintln!(
                "❌ {} already exists, use --force to overwrite",
                self.output.display()
            );
            return Ok(2);
        }

        tokio::fs::write(&self.output, CONFIG_TEMPLATE).await?;

        println!("✅ Wrote starter configuration to {}", self.output.display());
        println!("   Edit it and run: krishi digitize --file report.pdf --vle-id VLE123");

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_and_validates() {
        let config: crate::config::KrishiConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.extraction.backend, "fixture");
    }

    #[tokio::test]
    async fn test_init_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("krishi.toml");

        let args = InitArgs {
            output: path.clone(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("krishi.toml");
        std::fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.clone(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }
}
