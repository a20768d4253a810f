//! # Submitter Interface
//!
//! The seam between a validated payload and whatever persists it. The form
//! controller only calls [`Submitter::submit`]; transport, storage and
//! server-side checks belong to the implementation.
//!
//! Failures are opaque to the controller and reported verbatim.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use docvault_core::SubmissionId;

use crate::payload::SubmissionPayload;

/// Failure reported by a submitter.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The receiving side refused the document. Shown as-is.
    #[error("{0}")]
    Rejected(String),

    /// The payload could not be delivered.
    #[error("transport error: {0}")]
    Transport(String),

    /// Local IO failed while persisting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// Identifier assigned to the submission.
    pub submission_id: SubmissionId,
    /// Document type that was submitted.
    pub doc_type: String,
    /// Number of payload fields.
    pub field_count: usize,
    /// When the submitter accepted it.
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Receipt for `payload` under a fresh id, stamped now.
    pub fn for_payload(payload: &SubmissionPayload) -> Self {
        Self {
            submission_id: SubmissionId::new(),
            doc_type: payload.doc_type.clone(),
            field_count: payload.fields.len(),
            submitted_at: Utc::now(),
        }
    }
}

/// Persists validated payloads.
///
/// Implementations must be `Send + Sync` so one submitter can serve several
/// controllers.
pub trait Submitter: Send + Sync {
    /// Hand over one payload.
    fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmitError>;
}

/// Keeps every accepted payload in memory.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    accepted: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingSubmitter {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads accepted so far, oldest first.
    pub fn accepted(&self) -> Vec<SubmissionPayload> {
        self.accepted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmitError> {
        self.accepted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload.clone());
        Ok(SubmissionReceipt::for_payload(payload))
    }
}
