//! Submission coordinator
//!
//! Commits a verified record through the record store, emits the terminal
//! notification and resets the session so the workflow is immediately
//! reusable. Two sequential successful submissions never share state.

use super::receipt::SubmissionReceipt;
use crate::adapters::notify::{SubmissionEvent, SubmissionNotifier};
use crate::adapters::store::{RecordStore, SubmittedReport};
use crate::core::session::UploadSession;
use crate::domain::errors::SubmissionError;
use crate::domain::ids::VleId;
use crate::domain::result::Result;
use crate::domain::schema::VLE_ID_FIELD;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Coordinator committing verified records
pub struct SubmissionCoordinator {
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn SubmissionNotifier>,
}

impl SubmissionCoordinator {
    /// Creates a coordinator over a record store and a notification sink
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn SubmissionNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Submits the session's verified record
    ///
    /// Precondition: the session is `Verifying` with a record whose required
    /// fields are populated. An open draft must be saved or cancelled first;
    /// a draft is never submitted directly.
    ///
    /// On acceptance the coordinator emits
    /// [`SubmissionEvent::Accepted`] and resets the session to its initial
    /// `Idle` state. On a store failure it emits
    /// [`SubmissionEvent::Failed`] and returns the session to `Verifying`
    /// with the record intact, so the submission can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::NotReady`] when the precondition fails
    /// (session state unchanged) and
    /// [`SubmissionError::PersistenceFailure`] when the store rejects the
    /// write.
    pub async fn submit(&self, session: &mut UploadSession) -> Result<SubmissionReceipt> {
        session.begin_submission()?;

        let record = session
            .record()
            .expect("submitting session carries a record")
            .clone();

        // The record's own identifier field is authoritative (it may have
        // been corrected during editing); the raw session input is the
        // fallback for schemas without that field.
        let vle_id = match record
            .get(VLE_ID_FIELD)
            .and_then(|v| VleId::new(v).ok())
        {
            Some(id) => id,
            None => match VleId::new(session.vle_id_input()) {
                Ok(id) => id,
                Err(_) => {
                    session.submission_failed();
                    return Err(SubmissionError::NotReady(
                        "record carries no VLE identifier".to_string(),
                    )
                    .into());
                }
            },
        };

        let report = SubmittedReport {
            receipt_id: Uuid::new_v4(),
            vle_id: vle_id.clone(),
            file_name: session
                .selected_file()
                .map(|f| f.name().to_string())
                .unwrap_or_default(),
            record,
            submitted_at: Utc::now(),
        };

        match self.store.persist(&report).await {
            Ok(()) => {
                session.mark_submitted();

                let receipt = SubmissionReceipt {
                    receipt_id: report.receipt_id,
                    vle_id: vle_id.clone(),
                    submitted_at: report.submitted_at,
                };

                self.notifier
                    .notify(&SubmissionEvent::Accepted { vle_id });

                tracing::info!(
                    receipt_id = %receipt.receipt_id,
                    vle_id = %receipt.vle_id,
                    store = self.store.backend_name(),
                    "Record submitted, resetting session"
                );

                session.reset();
                Ok(receipt)
            }
            Err(e) => {
                session.submission_failed();
                self.notifier.notify(&SubmissionEvent::Failed {
                    reason: e.to_string(),
                });

                tracing::error!(
                    error = %e,
                    store = self.store.backend_name(),
                    "Failed to persist submitted record"
                );

                Err(e.into())
            }
        }
    }
}
