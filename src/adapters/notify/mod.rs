//! Submission notification channel
//!
//! The surrounding application displays success or failure feedback after a
//! submission attempt; Krishi only emits the event. This module defines the
//! outbound channel and a logging implementation for headless use.

use crate::domain::ids::VleId;
use serde::{Deserialize, Serialize};

/// Terminal notification emitted after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionEvent {
    /// The record was persisted; carries the VLE the report was for
    Accepted {
        /// VLE the submitted report belongs to
        vle_id: VleId,
    },

    /// The record could not be persisted
    Failed {
        /// Human-readable failure description
        reason: String,
    },
}

/// Trait for submission notification sinks
///
/// Implementations render the event however the host application sees fit
/// (toast, console line, message bus). Notification is fire-and-forget;
/// a sink must not fail the submission.
pub trait SubmissionNotifier: Send + Sync {
    /// Deliver one submission event
    fn notify(&self, event: &SubmissionEvent);
}

/// Notifier writing submission events to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a logging notifier
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionNotifier for LogNotifier {
    fn notify(&self, event: &SubmissionEvent) {
        match event {
            SubmissionEvent::Accepted { vle_id } => {
                tracing::info!(vle_id = %vle_id, "Report submitted successfully");
            }
            SubmissionEvent::Failed { reason } => {
                tracing::warn!(reason = %reason, "Report submission failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Notifier collecting events for assertions
    #[derive(Default)]
    pub struct CollectingNotifier {
        events: Mutex<Vec<SubmissionEvent>>,
    }

    impl SubmissionNotifier for CollectingNotifier {
        fn notify(&self, event: &SubmissionEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_log_notifier_accepts_both_events() {
        let notifier = LogNotifier::new();
        notifier.notify(&SubmissionEvent::Accepted {
            vle_id: VleId::new("VLE123").unwrap(),
        });
        notifier.notify(&SubmissionEvent::Failed {
            reason: "store offline".to_string(),
        });
    }

    #[test]
    fn test_collecting_notifier_records_events() {
        let notifier = CollectingNotifier::default();
        notifier.notify(&SubmissionEvent::Failed {
            reason: "store offline".to_string(),
        });

        let events = notifier.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SubmissionEvent::Failed { .. }));
    }

    #[test]
    fn test_event_serialization() {
        let event = SubmissionEvent::Accepted {
            vle_id: VleId::new("VLE123").unwrap(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: SubmissionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
