//! Business logic
//!
//! The workflow core: intake validation, digitization, the verification
//! session state machine, submission, and the facade tying them together.

pub mod digitize;
pub mod intake;
pub mod session;
pub mod submit;
pub mod workflow;

pub use workflow::UploadWorkflow;
