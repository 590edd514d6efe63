//! Upload workflow facade
//!
//! [`UploadWorkflow`] wires the session, the digitization processor and the
//! submission coordinator together behind one entry point. It owns the
//! authentication gate: the surrounding application decides whether the
//! caller is authenticated, the workflow only honors the flag.

use crate::adapters::notify::SubmissionNotifier;
use crate::adapters::store::create_record_store;
use crate::config::KrishiConfig;
use crate::core::digitize::DigitizationProcessor;
use crate::core::session::{SessionStatus, UploadSession};
use crate::core::submit::{SubmissionCoordinator, SubmissionReceipt};
use crate::domain::errors::{EditError, KrishiError};
use crate::domain::record::DigitizedRecord;
use crate::domain::result::Result;
use crate::domain::schema::FieldSchema;
use std::sync::Arc;

/// One interactive run of the intake-digitize-verify-submit workflow
pub struct UploadWorkflow {
    session: UploadSession,
    processor: DigitizationProcessor,
    coordinator: SubmissionCoordinator,
}

impl UploadWorkflow {
    /// Opens a workflow over explicit collaborators
    ///
    /// # Arguments
    ///
    /// * `schema` - The report field schema
    /// * `processor` - The digitization processor
    /// * `coordinator` - The submission coordinator
    /// * `authenticated` - Externally supplied authentication flag
    ///
    /// # Errors
    ///
    /// Returns an authentication error if `authenticated` is false; the
    /// workflow is only reachable for authenticated sessions.
    pub fn open(
        schema: Arc<FieldSchema>,
        processor: DigitizationProcessor,
        coordinator: SubmissionCoordinator,
        authenticated: bool,
    ) -> Result<Self> {
        if !authenticated {
            return Err(KrishiError::Authentication(
                "An authenticated session is required to upload reports".to_string(),
            ));
        }

        Ok(Self {
            session: UploadSession::new(schema),
            processor,
            coordinator,
        })
    }

    /// Opens a workflow with collaborators built from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unsupported backends and an
    /// authentication error if `authenticated` is false.
    pub fn from_config(
        config: &KrishiConfig,
        notifier: Arc<dyn SubmissionNotifier>,
        authenticated: bool,
    ) -> Result<Self> {
        let schema = Arc::new(FieldSchema::vle_report());
        let processor = DigitizationProcessor::from_config(&config.extraction, schema.clone())?;
        let store = create_record_store(&config.store)?;
        let coordinator = SubmissionCoordinator::new(store, notifier);

        Self::open(schema, processor, coordinator, authenticated)
    }

    /// The underlying session state
    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    /// Selects a report file; see [`UploadSession::select_file`]
    pub fn select_file(
        &mut self,
        name: impl Into<String>,
        path: impl Into<std::path::PathBuf>,
    ) -> Result<()> {
        self.session.select_file(name, path)
    }

    /// Sets the VLE identifier input; see [`UploadSession::set_vle_id`]
    pub fn set_vle_id(&mut self, input: impl Into<String>) -> Result<()> {
        self.session.set_vle_id(input)
    }

    /// Validates intake and digitizes the selected report
    ///
    /// Suspends while the extraction call is in flight. On success the
    /// session is `Verifying` and the produced record is returned. On
    /// extraction failure the session falls back to `Idle` keeping file and
    /// identifier, so the call can simply be repeated.
    ///
    /// # Errors
    ///
    /// Returns intake errors (session unchanged), a session error if an
    /// extraction is already in flight, or the extraction error reported by
    /// the service boundary.
    pub async fn digitize(&mut self) -> Result<&DigitizedRecord> {
        let (intake, epoch) = self.session.begin_digitization()?;

        match self.processor.extract(&intake.file, &intake.vle_id).await {
            Ok(record) => {
                if !self.session.complete_extraction(record, epoch) {
                    return Err(KrishiError::Session(
                        "Session was torn down while extraction was in flight".to_string(),
                    ));
                }
                Ok(self
                    .session
                    .record()
                    .expect("record present after successful extraction"))
            }
            Err(e) => {
                self.session.fail_extraction(epoch);
                Err(e.into())
            }
        }
    }

    /// Opens edit mode; see [`UploadSession::begin_edit`]
    pub fn begin_edit(&mut self) {
        self.session.begin_edit();
    }

    /// Updates one draft field; see [`UploadSession::set_draft_field`]
    pub fn set_draft_field(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> std::result::Result<(), EditError> {
        self.session.set_draft_field(key, value)
    }

    /// Commits the draft; see [`UploadSession::save_edit`]
    pub fn save_edit(&mut self) {
        self.session.save_edit();
    }

    /// Discards the draft; see [`UploadSession::cancel_edit`]
    pub fn cancel_edit(&mut self) {
        self.session.cancel_edit();
    }

    /// Submits the verified record and resets the session
    ///
    /// # Errors
    ///
    /// See [`SubmissionCoordinator::submit`].
    pub async fn submit(&mut self) -> Result<SubmissionReceipt> {
        self.coordinator.submit(&mut self.session).await
    }

    /// Abandons the current run, tearing the session down to `Idle`
    ///
    /// Any extraction result still in flight is discarded on arrival.
    pub fn abandon(&mut self) {
        if self.session.status() != SessionStatus::Idle {
            tracing::info!(status = %self.session.status(), "Abandoning upload session");
        }
        self.session.reset();
    }
}
