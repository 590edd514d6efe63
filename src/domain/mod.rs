//! Domain models and types for Krishi.
//!
//! This module contains the core domain models, types and business rules for
//! the report digitization workflow.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`VleId`])
//! - **Domain models** ([`ReportFile`], [`FieldSchema`], [`DigitizedRecord`])
//! - **Error types** ([`KrishiError`] and the per-stage sub-errors)
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Krishi uses the newtype pattern for identifiers and validating
//! constructors for file handles, so invalid values cannot enter the
//! workflow:
//!
//! ```rust
//! use krishi::domain::{ReportFile, VleId};
//!
//! # fn example() -> Result<(), String> {
//! let vle_id = VleId::new("VLE123")?;
//! let file = ReportFile::new("report.pdf", "/tmp/report.pdf")?;
//!
//! // Rejected at selection time, not deferred to extraction
//! assert!(ReportFile::new("notes.docx", "/tmp/notes.docx").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Schema Totality
//!
//! [`DigitizedRecord`] always contains exactly the keys of the
//! [`FieldSchema`] it was built against, never more and never fewer, whether
//! it came from the extraction service or from a manual edit.

pub mod errors;
pub mod ids;
pub mod record;
pub mod report;
pub mod result;
pub mod schema;

// Re-export commonly used types for convenience
pub use errors::{EditError, ExtractionError, IntakeError, KrishiError, SubmissionError};
pub use ids::VleId;
pub use record::{DigitizedRecord, FieldValue};
pub use report::ReportFile;
pub use result::Result;
pub use schema::{FieldDef, FieldSchema};
