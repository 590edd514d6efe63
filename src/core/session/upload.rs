//! Upload session state machine
//!
//! [`UploadSession`] is the root entity of one workflow run. It owns the
//! selected file, the identifier input, the digitized record and the edit
//! draft, and it is the only place session status changes. Two invariants
//! hold at all times:
//!
//! - `record` and `draft` always carry exactly the schema's key set; a
//!   single-field edit never drops the other fields.
//! - `record` is only ever replaced wholesale (by the processor or by a
//!   committed draft), never patched in place, so a verification pass never
//!   observes a half-updated record.

use super::status::SessionStatus;
use crate::core::intake::{self, ValidatedIntake};
use crate::domain::errors::{EditError, KrishiError, SubmissionError};
use crate::domain::record::DigitizedRecord;
use crate::domain::report::ReportFile;
use crate::domain::result::Result;
use crate::domain::schema::FieldSchema;
use std::sync::Arc;

/// State of one upload-digitize-verify-submit run
///
/// A session is exclusively owned by the workflow interaction that created
/// it; there is no cross-session sharing. The `epoch` counter guards against
/// late extraction results: it is bumped on every teardown, and a result
/// carrying a stale epoch is discarded instead of applied.
#[derive(Debug, Clone)]
pub struct UploadSession {
    schema: Arc<FieldSchema>,
    selected_file: Option<ReportFile>,
    vle_id: String,
    status: SessionStatus,
    record: Option<DigitizedRecord>,
    draft: Option<DigitizedRecord>,
    epoch: u64,
}

impl UploadSession {
    /// Creates a fresh idle session over `schema`
    pub fn new(schema: Arc<FieldSchema>) -> Self {
        Self {
            schema,
            selected_file: None,
            vle_id: String::new(),
            status: SessionStatus::Idle,
            record: None,
            draft: None,
            epoch: 0,
        }
    }

    /// The schema this session digitizes against
    pub fn schema(&self) -> &Arc<FieldSchema> {
        &self.schema
    }

    /// Current session status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The currently selected report file, if any
    pub fn selected_file(&self) -> Option<&ReportFile> {
        self.selected_file.as_ref()
    }

    /// The raw VLE identifier input (untrimmed)
    pub fn vle_id_input(&self) -> &str {
        &self.vle_id
    }

    /// The digitized record, present from `Verifying` onwards
    pub fn record(&self) -> Option<&DigitizedRecord> {
        self.record.as_ref()
    }

    /// The edit draft, present only while `Editing`
    pub fn draft(&self) -> Option<&DigitizedRecord> {
        self.draft.as_ref()
    }

    /// Teardown generation counter
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Selects a report file, replacing any previous selection wholesale
    ///
    /// The file type is checked here, at selection time; an unsupported
    /// extension never reaches the extraction service.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unsupported file types, or a session
    /// error when called outside `Idle`.
    pub fn select_file(
        &mut self,
        name: impl Into<String>,
        path: impl Into<std::path::PathBuf>,
    ) -> Result<()> {
        if self.status != SessionStatus::Idle {
            return Err(KrishiError::Session(format!(
                "Cannot select a file while the session is {}",
                self.status
            )));
        }

        let file = ReportFile::new(name, path).map_err(KrishiError::Validation)?;
        tracing::debug!(file = %file.name(), "Report file selected");
        self.selected_file = Some(file);
        Ok(())
    }

    /// Stores the VLE identifier input; trimming happens at intake
    ///
    /// # Errors
    ///
    /// Returns a session error when called outside `Idle`.
    pub fn set_vle_id(&mut self, input: impl Into<String>) -> Result<()> {
        if self.status != SessionStatus::Idle {
            return Err(KrishiError::Session(format!(
                "Cannot change the VLE identifier while the session is {}",
                self.status
            )));
        }

        self.vle_id = input.into();
        Ok(())
    }

    /// Runs intake validation and moves the session into `Processing`
    ///
    /// On success, returns the validated inputs together with the current
    /// epoch; the caller hands both back through
    /// [`complete_extraction`](Self::complete_extraction) or
    /// [`fail_extraction`](Self::fail_extraction). On intake failure the
    /// session stays in `Idle` with file and identifier untouched.
    ///
    /// # Errors
    ///
    /// Returns a session error if an extraction is already in flight or the
    /// session has moved past intake, and an intake error if file or
    /// identifier are missing.
    pub fn begin_digitization(&mut self) -> Result<(ValidatedIntake, u64)> {
        match self.status {
            SessionStatus::Idle => {}
            SessionStatus::Processing => {
                return Err(KrishiError::Session(
                    "An extraction is already in flight for this session".to_string(),
                ));
            }
            other => {
                return Err(KrishiError::Session(format!(
                    "Cannot start digitization while the session is {other}"
                )));
            }
        }

        self.status = SessionStatus::Validating;

        match intake::validate(self.selected_file.as_ref(), &self.vle_id) {
            Ok(validated) => {
                tracing::info!(
                    file = %validated.file.name(),
                    vle_id = %validated.vle_id,
                    "Intake validated, starting digitization"
                );
                self.status = SessionStatus::Processing;
                Ok((validated, self.epoch))
            }
            Err(e) => {
                self.status = SessionStatus::Idle;
                Err(e.into())
            }
        }
    }

    /// Applies a successful extraction result
    ///
    /// Returns `true` if the record was applied and the session moved to
    /// `Verifying`. A result carrying a stale epoch (the session was torn
    /// down while the call was in flight) is discarded and `false` is
    /// returned; the session is left untouched.
    pub fn complete_extraction(&mut self, record: DigitizedRecord, epoch: u64) -> bool {
        if epoch != self.epoch || self.status != SessionStatus::Processing {
            tracing::debug!(
                stale_epoch = epoch,
                current_epoch = self.epoch,
                status = %self.status,
                "Discarding late extraction result"
            );
            return false;
        }

        debug_assert!(record.matches_schema(&self.schema));

        self.record = Some(record);
        self.status = SessionStatus::Verifying;
        tracing::info!("Digitization complete, record ready for verification");
        true
    }

    /// Applies an extraction failure
    ///
    /// The session falls back to `Idle` keeping the selected file and the
    /// identifier input, so the user can retry without re-entering them.
    /// Returns `false` for a stale epoch, like
    /// [`complete_extraction`](Self::complete_extraction).
    pub fn fail_extraction(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.status != SessionStatus::Processing {
            tracing::debug!(
                stale_epoch = epoch,
                current_epoch = self.epoch,
                "Discarding late extraction failure"
            );
            return false;
        }

        self.status = SessionStatus::Idle;
        true
    }

    /// Opens edit mode: `Verifying` → `Editing`
    ///
    /// The draft starts as a full copy of the record and is mutated
    /// independently until saved or cancelled.
    ///
    /// # Panics
    ///
    /// Panics if the session is not `Verifying` or has no record. Both are
    /// programming errors in the caller, not user-facing conditions.
    pub fn begin_edit(&mut self) {
        assert_eq!(
            self.status,
            SessionStatus::Verifying,
            "begin_edit requires a session in verification"
        );
        let record = self
            .record
            .as_ref()
            .expect("begin_edit requires a digitized record");

        self.draft = Some(record.clone());
        self.status = SessionStatus::Editing;
        tracing::debug!("Edit mode opened");
    }

    /// Updates one draft field, leaving all other fields and the record
    /// untouched
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownField`] if `key` is not part of the
    /// report schema.
    ///
    /// # Panics
    ///
    /// Panics if the session is not `Editing`.
    pub fn set_draft_field(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> std::result::Result<(), EditError> {
        assert_eq!(
            self.status,
            SessionStatus::Editing,
            "set_draft_field requires an open draft"
        );
        let draft = self.draft.as_mut().expect("editing session carries a draft");

        draft.set(key, value)
    }

    /// Commits the draft: `Editing` → `Verifying`, `record := draft`
    ///
    /// # Panics
    ///
    /// Panics if the session is not `Editing`.
    pub fn save_edit(&mut self) {
        assert_eq!(
            self.status,
            SessionStatus::Editing,
            "save_edit requires an open draft"
        );
        let draft = self.draft.take().expect("editing session carries a draft");

        self.record = Some(draft);
        self.status = SessionStatus::Verifying;
        tracing::debug!("Draft saved into record");
    }

    /// Discards the draft: `Editing` → `Verifying`, record untouched
    ///
    /// # Panics
    ///
    /// Panics if the session is not `Editing`.
    pub fn cancel_edit(&mut self) {
        assert_eq!(
            self.status,
            SessionStatus::Editing,
            "cancel_edit requires an open draft"
        );

        self.draft = None;
        self.status = SessionStatus::Verifying;
        tracing::debug!("Draft discarded");
    }

    /// Checks the submission precondition and moves to `Submitting`
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::NotReady`] while `Editing` (an open draft
    /// must be saved or cancelled first; a draft is never submitted
    /// directly), when no record is present, or when a required field is
    /// empty. State is left unchanged on failure.
    pub fn begin_submission(&mut self) -> std::result::Result<(), SubmissionError> {
        match self.status {
            SessionStatus::Editing => {
                return Err(SubmissionError::NotReady(
                    "editing in progress, save or cancel the draft first".to_string(),
                ));
            }
            SessionStatus::Verifying => {}
            other => {
                return Err(SubmissionError::NotReady(format!(
                    "session is {other}, nothing to submit"
                )));
            }
        }

        let record = self.record.as_ref().ok_or_else(|| {
            SubmissionError::NotReady("no digitized record present".to_string())
        })?;

        let unpopulated = record.unpopulated_required(&self.schema);
        if !unpopulated.is_empty() {
            return Err(SubmissionError::NotReady(format!(
                "required fields are empty: {}",
                unpopulated.join(", ")
            )));
        }

        self.status = SessionStatus::Submitting;
        Ok(())
    }

    /// Records a failed submission attempt: `Submitting` → `Verifying`
    ///
    /// The record stays intact so the submission can be retried.
    pub fn submission_failed(&mut self) {
        if self.status == SessionStatus::Submitting {
            self.status = SessionStatus::Verifying;
        }
    }

    /// Marks the record committed: `Submitting` → `Submitted`
    ///
    /// # Panics
    ///
    /// Panics if the session is not `Submitting`.
    pub fn mark_submitted(&mut self) {
        assert_eq!(
            self.status,
            SessionStatus::Submitting,
            "mark_submitted requires an in-flight submission"
        );
        self.status = SessionStatus::Submitted;
    }

    /// Tears the session down to the freshly-initialized `Idle` state
    ///
    /// Clears file, identifier, record and draft, and bumps the epoch so
    /// any extraction result still in flight is discarded on arrival. Called
    /// after a successful submission and when the user abandons the flow;
    /// two sequential submissions never share state.
    pub fn reset(&mut self) {
        self.selected_file = None;
        self.vle_id.clear();
        self.record = None;
        self.draft = None;
        self.status = SessionStatus::Idle;
        self.epoch += 1;
        tracing::debug!(epoch = self.epoch, "Session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::IntakeError;
    use std::collections::HashMap;

    fn session() -> UploadSession {
        UploadSession::new(Arc::new(FieldSchema::vle_report()))
    }

    fn demo_record(schema: &FieldSchema) -> DigitizedRecord {
        let mut extracted = HashMap::new();
        extracted.insert("VLE ID".to_string(), "VLE123".to_string());
        extracted.insert("Machine Type".to_string(), "Thresher".to_string());
        extracted.insert("Hours Used".to_string(), "5".to_string());
        extracted.insert("Earnings (INR)".to_string(), "1250".to_string());
        DigitizedRecord::from_extracted(schema, extracted).unwrap()
    }

    fn verifying_session() -> UploadSession {
        let mut s = session();
        s.select_file("report.pdf", "/tmp/report.pdf").unwrap();
        s.set_vle_id("VLE123").unwrap();
        let (_, epoch) = s.begin_digitization().unwrap();
        let record = demo_record(&FieldSchema::vle_report());
        assert!(s.complete_extraction(record, epoch));
        s
    }

    #[test]
    fn test_fresh_session_is_idle_and_empty() {
        let s = session();
        assert_eq!(s.status(), SessionStatus::Idle);
        assert!(s.selected_file().is_none());
        assert_eq!(s.vle_id_input(), "");
        assert!(s.record().is_none());
        assert!(s.draft().is_none());
    }

    #[test]
    fn test_select_file_rejects_unsupported_type() {
        let mut s = session();
        let err = s.select_file("notes.docx", "/tmp/notes.docx").unwrap_err();
        assert!(matches!(err, KrishiError::Validation(_)));
        assert!(s.selected_file().is_none());
    }

    #[test]
    fn test_select_file_replaces_wholesale() {
        let mut s = session();
        s.select_file("first.pdf", "/tmp/first.pdf").unwrap();
        s.select_file("second.png", "/tmp/second.png").unwrap();
        assert_eq!(s.selected_file().unwrap().name(), "second.png");
    }

    #[test]
    fn test_begin_digitization_without_file_stays_idle() {
        let mut s = session();
        s.set_vle_id("VLE1").unwrap();

        let err = s.begin_digitization().unwrap_err();
        assert!(matches!(
            err,
            KrishiError::Intake(IntakeError::MissingFile)
        ));
        assert_eq!(s.status(), SessionStatus::Idle);
        assert_eq!(s.vle_id_input(), "VLE1");
    }

    #[test]
    fn test_begin_digitization_without_identifier_stays_idle() {
        let mut s = session();
        s.select_file("report.pdf", "/tmp/report.pdf").unwrap();
        s.set_vle_id("   ").unwrap();

        let err = s.begin_digitization().unwrap_err();
        assert!(matches!(
            err,
            KrishiError::Intake(IntakeError::MissingIdentifier)
        ));
        assert_eq!(s.status(), SessionStatus::Idle);
        assert!(s.selected_file().is_some());
    }

    #[test]
    fn test_successful_extraction_moves_to_verifying() {
        let s = verifying_session();
        assert_eq!(s.status(), SessionStatus::Verifying);
        let record = s.record().unwrap();
        assert_eq!(record.get("VLE ID"), Some("VLE123"));
        assert_eq!(record.get("Machine Type"), Some("Thresher"));
        assert_eq!(record.get("Hours Used"), Some("5"));
        assert_eq!(record.get("Earnings (INR)"), Some("1250"));
    }

    #[test]
    fn test_second_digitization_while_processing_rejected() {
        let mut s = session();
        s.select_file("report.pdf", "/tmp/report.pdf").unwrap();
        s.set_vle_id("VLE123").unwrap();
        s.begin_digitization().unwrap();
        assert_eq!(s.status(), SessionStatus::Processing);

        let err = s.begin_digitization().unwrap_err();
        assert!(matches!(err, KrishiError::Session(_)));
        assert_eq!(s.status(), SessionStatus::Processing);
    }

    #[test]
    fn test_extraction_failure_falls_back_to_idle_keeping_input() {
        let mut s = session();
        s.select_file("report.pdf", "/tmp/report.pdf").unwrap();
        s.set_vle_id("VLE123").unwrap();
        let (_, epoch) = s.begin_digitization().unwrap();

        assert!(s.fail_extraction(epoch));
        assert_eq!(s.status(), SessionStatus::Idle);
        assert_eq!(s.selected_file().unwrap().name(), "report.pdf");
        assert_eq!(s.vle_id_input(), "VLE123");
        assert!(s.record().is_none());
    }

    #[test]
    fn test_late_result_after_reset_is_discarded() {
        let mut s = session();
        s.select_file("report.pdf", "/tmp/report.pdf").unwrap();
        s.set_vle_id("VLE123").unwrap();
        let (_, epoch) = s.begin_digitization().unwrap();

        // The user navigates away mid-extraction
        s.reset();

        let record = demo_record(&FieldSchema::vle_report());
        assert!(!s.complete_extraction(record, epoch));
        assert_eq!(s.status(), SessionStatus::Idle);
        assert!(s.record().is_none());
    }

    #[test]
    fn test_begin_edit_copies_record_into_draft() {
        let mut s = verifying_session();
        s.begin_edit();

        assert_eq!(s.status(), SessionStatus::Editing);
        assert_eq!(s.draft(), s.record());
    }

    #[test]
    #[should_panic(expected = "begin_edit requires a session in verification")]
    fn test_begin_edit_without_record_panics() {
        let mut s = session();
        s.begin_edit();
    }

    #[test]
    fn test_set_draft_field_touches_only_that_key() {
        let mut s = verifying_session();
        s.begin_edit();
        s.set_draft_field("Hours Used", "6").unwrap();

        let draft = s.draft().unwrap();
        assert_eq!(draft.get("Hours Used"), Some("6"));
        assert_eq!(draft.get("Machine Type"), Some("Thresher"));
        // Record untouched until save
        assert_eq!(s.record().unwrap().get("Hours Used"), Some("5"));
    }

    #[test]
    fn test_set_draft_field_unknown_key_fails() {
        let mut s = verifying_session();
        s.begin_edit();

        let err = s.set_draft_field("Rainfall", "12mm").unwrap_err();
        assert_eq!(err, EditError::UnknownField("Rainfall".to_string()));
        assert_eq!(s.draft(), s.record());
    }

    #[test]
    fn test_save_edit_commits_draft_wholesale() {
        let mut s = verifying_session();
        let before = s.record().unwrap().clone();

        s.begin_edit();
        s.set_draft_field("Hours Used", "6").unwrap();
        s.save_edit();

        assert_eq!(s.status(), SessionStatus::Verifying);
        assert!(s.draft().is_none());

        let after = s.record().unwrap();
        assert_eq!(after.get("Hours Used"), Some("6"));
        for (key, value) in before.iter() {
            if key != "Hours Used" {
                assert_eq!(after.get(key), Some(value));
            }
        }
    }

    #[test]
    fn test_cancel_edit_is_noop_on_record() {
        let mut s = verifying_session();
        let before = s.record().unwrap().clone();

        s.begin_edit();
        s.set_draft_field("Earnings (INR)", "9999").unwrap();
        s.cancel_edit();

        assert_eq!(s.status(), SessionStatus::Verifying);
        assert!(s.draft().is_none());
        assert_eq!(s.record().unwrap(), &before);
    }

    #[test]
    fn test_begin_submission_while_editing_not_ready() {
        let mut s = verifying_session();
        s.begin_edit();

        let err = s.begin_submission().unwrap_err();
        assert!(matches!(err, SubmissionError::NotReady(_)));
        assert_eq!(s.status(), SessionStatus::Editing);
        assert!(s.draft().is_some());
        assert!(s.record().is_some());
    }

    #[test]
    fn test_begin_submission_with_empty_required_field_not_ready() {
        let mut s = verifying_session();
        s.begin_edit();
        s.set_draft_field("Earnings (INR)", "").unwrap();
        s.save_edit();

        let err = s.begin_submission().unwrap_err();
        match err {
            SubmissionError::NotReady(msg) => assert!(msg.contains("Earnings (INR)")),
            other => panic!("Expected NotReady, got {other:?}"),
        }
        assert_eq!(s.status(), SessionStatus::Verifying);
    }

    #[test]
    fn test_begin_submission_success() {
        let mut s = verifying_session();
        s.begin_submission().unwrap();
        assert_eq!(s.status(), SessionStatus::Submitting);
    }

    #[test]
    fn test_submission_failed_returns_to_verifying() {
        let mut s = verifying_session();
        let before = s.record().unwrap().clone();
        s.begin_submission().unwrap();
        s.submission_failed();

        assert_eq!(s.status(), SessionStatus::Verifying);
        assert_eq!(s.record().unwrap(), &before);
    }

    #[test]
    fn test_reset_restores_initial_state_and_bumps_epoch() {
        let mut s = verifying_session();
        let epoch_before = s.epoch();
        s.reset();

        assert_eq!(s.status(), SessionStatus::Idle);
        assert!(s.selected_file().is_none());
        assert_eq!(s.vle_id_input(), "");
        assert!(s.record().is_none());
        assert!(s.draft().is_none());
        assert_eq!(s.epoch(), epoch_before + 1);
    }
}
