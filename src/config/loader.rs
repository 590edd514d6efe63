//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::KrishiConfig;
use crate::domain::errors::KrishiError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into KrishiConfig
/// 4. Applies environment variable overrides (`KRISHI_*` prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use krishi::config::loader::load_config;
///
/// let config = load_config("krishi.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<KrishiConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(KrishiError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        KrishiError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: KrishiConfig = toml::from_str(&contents)
        .map_err(|e| KrishiError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        KrishiError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(KrishiError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the KRISHI_* prefix
///
/// Environment variables follow the pattern: `KRISHI_<SECTION>_<KEY>`.
/// For example: `KRISHI_EXTRACTION_BASE_URL`, `KRISHI_STORE_BACKEND`.
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut KrishiConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("KRISHI_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Extraction overrides
    if let Ok(val) = std::env::var("KRISHI_EXTRACTION_BACKEND") {
        config.extraction.backend = val;
    }
    if let Ok(val) = std::env::var("KRISHI_EXTRACTION_BASE_URL") {
        config.extraction.base_url = val;
    }
    if let Ok(val) = std::env::var("KRISHI_EXTRACTION_API_KEY") {
        config.extraction.api_key = Some(val);
    }
    if let Ok(val) = std::env::var("KRISHI_EXTRACTION_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.extraction.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("KRISHI_EXTRACTION_FIXTURE_DELAY_MS") {
        if let Ok(delay) = val.parse() {
            config.extraction.fixture_delay_ms = delay;
        }
    }
    if let Ok(val) = std::env::var("KRISHI_EXTRACTION_MAX_RETRIES") {
        if let Ok(retries) = val.parse() {
            config.extraction.retry.max_retries = retries;
        }
    }

    // Store overrides
    if let Ok(val) = std::env::var("KRISHI_STORE_BACKEND") {
        config.store.backend = val;
    }
    if let Ok(val) = std::env::var("KRISHI_STORE_PATH") {
        config.store.path = val;
    }

    // Workflow overrides
    if let Ok(val) = std::env::var("KRISHI_WORKFLOW_REQUIRE_AUTH") {
        config.workflow.require_auth = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("KRISHI_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("KRISHI_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("KRISHI_TEST_VAR", "test_value");
        let input = "api_key = \"${KRISHI_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_key = \"test_value\"\n");
        std::env::remove_var("KRISHI_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("KRISHI_MISSING_VAR");
        let input = "api_key = \"${KRISHI_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("KRISHI_COMMENTED_VAR");
        let input = "# api_key = \"${KRISHI_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "# api_key = \"${KRISHI_COMMENTED_VAR}\"\n");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
name = "krishi"
log_level = "debug"

[extraction]
backend = "http"
base_url = "http://digitizer.example.com"

[store]
backend = "memory"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.extraction.base_url, "http://digitizer.example.com");
        assert_eq!(config.store.backend, "memory");
    }

    #[test]
    fn test_load_config_invalid_backend() {
        let toml_content = r#"
[extraction]
backend = "telepathy"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}
