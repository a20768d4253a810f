//! # Submission Sinks
//!
//! [`Submitter`] implementations used by `docvault submit`: print the
//! payload as JSON, or write it into a directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

use docvault_form::{SubmissionPayload, SubmissionReceipt, SubmitError, Submitter};

/// Stored form of a submission: the receipt plus the payload.
#[derive(Debug, Serialize)]
struct SubmissionRecord<'a> {
    receipt: &'a SubmissionReceipt,
    payload: &'a SubmissionPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment_path: Option<String>,
}

/// Prints each payload to stdout as pretty JSON.
#[derive(Debug, Default)]
pub struct StdoutSubmitter;

impl Submitter for StdoutSubmitter {
    fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmitError> {
        let receipt = SubmissionReceipt::for_payload(payload);
        let record = SubmissionRecord {
            receipt: &receipt,
            payload,
            attachment_path: None,
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
        Ok(receipt)
    }
}

/// Writes `<uuid>.json` per submission into a directory, and the attachment
/// bytes next to it as `<uuid>-<file name>`.
#[derive(Debug)]
pub struct DirectorySubmitter {
    dir: PathBuf,
}

impl DirectorySubmitter {
    /// Sink writing into `dir`, created on first use.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the JSON record for a receipt.
    pub fn record_path(&self, receipt: &SubmissionReceipt) -> PathBuf {
        self.dir
            .join(format!("{}.json", receipt.submission_id.as_uuid()))
    }
}

impl Submitter for DirectorySubmitter {
    fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmitError> {
        std::fs::create_dir_all(&self.dir)?;
        let receipt = SubmissionReceipt::for_payload(payload);
        let uuid = receipt.submission_id.as_uuid();

        let attachment_path = match &payload.file {
            Some(file) => {
                // Only the final component of the original name is kept.
                let base = Path::new(&file.name)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "attachment".to_string());
                let path = self.dir.join(format!("{uuid}-{base}"));
                std::fs::write(&path, file.content())?;
                Some(path.display().to_string())
            }
            None => None,
        };

        let record = SubmissionRecord {
            receipt: &receipt,
            payload,
            attachment_path,
        };
        let path = self.record_path(&receipt);
        std::fs::write(&path, serde_json::to_vec_pretty(&record)?)?;
        tracing::debug!(path = %path.display(), "submission written");
        Ok(receipt)
    }
}
