//! Intake validation
//!
//! The pre-extraction gate: confirms a report file and a VLE identifier are
//! present before the digitization service is invoked. Pure decision
//! function, no side effects; the session must not leave `Idle` on failure.

use crate::domain::errors::IntakeError;
use crate::domain::ids::VleId;
use crate::domain::report::ReportFile;

/// Inputs that passed intake validation
///
/// Carries the selected file and the trimmed identifier, ready for the
/// digitization processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedIntake {
    /// The selected report file
    pub file: ReportFile,

    /// The trimmed, non-empty VLE identifier
    pub vle_id: VleId,
}

/// Validates a candidate file and identifier before extraction
///
/// # Arguments
///
/// * `file` - The currently selected report file, if any
/// * `vle_id` - The raw identifier input; trimmed before use
///
/// # Errors
///
/// Returns [`IntakeError::MissingFile`] if no file is selected, or
/// [`IntakeError::MissingIdentifier`] if the identifier is empty after
/// trimming.
///
/// # Examples
///
/// ```
/// use krishi::core::intake;
/// use krishi::domain::{IntakeError, ReportFile};
///
/// let file = ReportFile::new("report.pdf", "/tmp/report.pdf").unwrap();
///
/// let intake = intake::validate(Some(&file), " VLE123 ").unwrap();
/// assert_eq!(intake.vle_id.as_str(), "VLE123");
///
/// assert_eq!(intake::validate(None, "VLE123"), Err(IntakeError::MissingFile));
/// ```
pub fn validate(file: Option<&ReportFile>, vle_id: &str) -> Result<ValidatedIntake, IntakeError> {
    let file = file.ok_or(IntakeError::MissingFile)?.clone();
    let vle_id = VleId::new(vle_id).map_err(|_| IntakeError::MissingIdentifier)?;

    Ok(ValidatedIntake { file, vle_id })
}
