//! Digitization
//!
//! The processing stage between intake and verification: invokes the
//! external extraction service and produces a schema-total record or a
//! failure.

pub mod processor;

pub use processor::DigitizationProcessor;
