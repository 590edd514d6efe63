// Krishi - VLE Report Digitization Tool
// Copyright (c) 2026 Krishi Contributors
// Licensed under the MIT License

//! # Krishi - VLE Report Digitization
//!
//! Krishi digitizes paper reports submitted by field volunteers for
//! Village-Level Entrepreneurs (VLEs): a report file and a VLE identifier go
//! in, a machine-extracted record comes back for verification and
//! correction, and the confirmed record is committed to a record store.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Intake** validation of a candidate file and identifier
//! - **Digitizing** reports through an external extraction service
//! - **Verifying** extracted values with a reversible edit mode
//! - **Submitting** confirmed records and resetting the session cleanly
//!
//! ## Architecture
//!
//! Krishi follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (intake, digitization, session, submission)
//! - [`adapters`] - External integrations (extraction service, record store,
//!   notifications)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use krishi::adapters::notify::LogNotifier;
//! use krishi::config::KrishiConfig;
//! use krishi::core::UploadWorkflow;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = KrishiConfig::default();
//!     let mut workflow =
//!         UploadWorkflow::from_config(&config, Arc::new(LogNotifier::new()), true)?;
//!
//!     workflow.select_file("report.pdf", "/data/report.pdf")?;
//!     workflow.set_vle_id("VLE123")?;
//!
//!     let record = workflow.digitize().await?;
//!     println!("Machine type: {:?}", record.get("Machine Type"));
//!
//!     let receipt = workflow.submit().await?;
//!     println!("Submitted for {}", receipt.vle_id);
//!     Ok(())
//! }
//! ```
//!
//! ## The Verification Session
//!
//! All user-visible mutation runs through the
//! [`UploadSession`](core::session::UploadSession) state machine. Corrections
//! happen on a draft copy that is committed or discarded wholesale:
//!
//! ```rust,no_run
//! # use krishi::core::session::UploadSession;
//! # fn example(mut session: UploadSession) -> Result<(), Box<dyn std::error::Error>> {
//! session.begin_edit();
//! session.set_draft_field("Hours Used", "6")?;
//! session.save_edit(); // record := draft
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Krishi uses the [`domain::KrishiError`] type for all errors. Intake and
//! edit errors are recoverable validation failures; extraction and
//! submission errors leave the session in a stable, re-attemptable state.
//!
//! ## Logging
//!
//! Krishi uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting digitization");
//! warn!(vle_id = "VLE123", "Retrying extraction");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
