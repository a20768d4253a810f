//! # File Attachments
//!
//! An [`Attachment`] is the optional file submitted alongside a document's
//! field values. Its bytes are carried through untouched; validation only
//! looks at [`Attachment::size`].

use std::path::Path;

use serde::Serialize;

use crate::error::DocvaultError;

/// Number of bytes in one mebibyte.
pub const BYTES_PER_MIB: u64 = 1024 * 1024;

/// A file attached to a submission.
///
/// Serializes as metadata only (`name`, `mime_type`, `size`). The content
/// is handed to the submitter separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Original file name.
    pub name: String,
    /// MIME type reported by the source, if any.
    pub mime_type: Option<String>,
    size: u64,
    #[serde(skip)]
    content: Vec<u8>,
}

impl Attachment {
    /// Build an attachment from in-memory bytes.
    pub fn new(name: impl Into<String>, mime_type: Option<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type,
            size: content.len() as u64,
            content,
        }
    }

    /// Read an attachment from disk. The file name becomes the attachment name.
    pub fn from_path(path: &Path, mime_type: Option<String>) -> Result<Self, DocvaultError> {
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, mime_type, content))
    }

    /// Size in bytes, always the length of [`Self::content`].
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The raw file bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// MIME type, or `"unknown"` when the source did not report one.
    pub fn mime_or_unknown(&self) -> &str {
        self.mime_type.as_deref().unwrap_or("unknown")
    }

    /// Human-readable size, see [`format_bytes`].
    pub fn human_size(&self) -> String {
        format_bytes(self.size)
    }
}

/// Format a byte count with base-1024 units.
///
/// Bytes are printed without decimals (`512 B`); KB, MB and GB with one
/// decimal place (`1.5 KB`). Anything past GB stays in GB.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
