//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Krishi using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Krishi - VLE report digitization tool
#[derive(Parser, Debug)]
#[command(name = "krishi")]
#[command(version, about, long_about = None)]
#[command(author = "Krishi Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "krishi.toml", env = "KRISHI_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KRISHI_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Digitize a report file, verify the extracted values and submit
    Digitize(commands::digitize::DigitizeArgs),

    /// List the report field schema
    Fields(commands::fields::FieldsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
