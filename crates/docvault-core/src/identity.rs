//! # Identity Newtypes
//!
//! Newtype wrappers for the identifiers that cross crate boundaries.
//! A `DocTypeKey` cannot be confused with a field name or a submission id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DocvaultError;

/// Document type key of the user-defined ("custom document") schema.
pub const CUSTOM_DOC_TYPE: &str = "CUSTOM";

/// Key of a document type, e.g. `AADHAAR`, `PAN`, or the `CUSTOM` sentinel.
///
/// Format: an ASCII uppercase letter followed by uppercase letters, digits,
/// or underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocTypeKey(String);

impl DocTypeKey {
    /// Parse and validate a document type key.
    pub fn new(key: impl Into<String>) -> Result<Self, DocvaultError> {
        let key = key.into();
        let mut chars = key.chars();
        let well_formed = chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if well_formed {
            Ok(Self(key))
        } else {
            Err(DocvaultError::InvalidIdentifier {
                kind: "document type key",
                value: key,
            })
        }
    }

    /// The `CUSTOM` sentinel key.
    pub fn custom() -> Self {
        Self(CUSTOM_DOC_TYPE.to_string())
    }

    /// Whether this is the `CUSTOM` sentinel.
    pub fn is_custom(&self) -> bool {
        self.0 == CUSTOM_DOC_TYPE
    }

    /// Access the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocTypeKey {
    type Error = DocvaultError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocTypeKey> for String {
    fn from(key: DocTypeKey) -> Self {
        key.0
    }
}

impl std::str::FromStr for DocTypeKey {
    type Err = DocvaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for DocTypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier assigned to an accepted submission by the submitting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    /// Generate a new random submission identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "submission:{}", self.0)
    }
}
