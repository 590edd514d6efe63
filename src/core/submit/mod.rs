//! Submission
//!
//! The terminal stage of the workflow: committing a verified record and
//! resetting the session.

pub mod coordinator;
pub mod receipt;

pub use coordinator::SubmissionCoordinator;
pub use receipt::SubmissionReceipt;
