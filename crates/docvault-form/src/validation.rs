//! # Submission Validation
//!
//! First-failure-wins checks run before a payload is assembled. Exactly one
//! [`ValidationFailure`] is produced per rejected submission, and the same
//! session always yields the same outcome.
//!
//! ## Check Order
//!
//! Built-in documents: fields in schema order (required, then preset), then
//! the attachment size.
//!
//! Custom documents: document name, field count, per field in user order
//! (label, required, preset), key collisions, then the attachment size.

use std::collections::BTreeMap;

use regex::Regex;
use thiserror::Error;

use docvault_preset::PresetRegistry;
use docvault_schema::DocumentSchema;

use crate::config::{FormConfig, KeyCollisionPolicy};
use crate::normalize::normalize_key;
use crate::payload::DOCUMENT_NAME_KEY;
use crate::session::{CustomDocument, FormSession};

const CUSTOM_NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z\s().\-]{2,80}$";
const CUSTOM_LABEL_PATTERN: &str = r"^[A-Za-z][A-Za-z\s().\-]{1,60}$";

/// Label used for the document name in collision reports.
pub const DOCUMENT_NAME_LABEL: &str = "Document name";

/// The single reason a submission was rejected.
///
/// `Display` is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Nothing has been selected yet.
    #[error("Select a document type")]
    NoDocumentType,

    /// The selected key is not in the catalog.
    #[error("Unknown document type {0}")]
    UnknownDocumentType(String),

    /// A required field is empty.
    #[error("{label} is required")]
    Required {
        /// Field label.
        label: String,
    },

    /// A built-in field failed its preset.
    #[error("{message}")]
    Format {
        /// The preset's message.
        message: String,
    },

    /// The custom document name is empty.
    #[error("Document name is required")]
    DocumentNameRequired,

    /// The custom document name has the wrong shape.
    #[error("Document name must start with a letter and use only letters, spaces, ( ) . - (3 to 81 characters)")]
    InvalidDocumentName,

    /// A custom document without fields.
    #[error("At least one field is required")]
    NoCustomFields,

    /// A custom field has no label.
    #[error("Field {position} needs a label")]
    CustomLabelRequired {
        /// 1-based position in the field list.
        position: usize,
    },

    /// A custom field label has the wrong shape.
    #[error("Invalid field label \"{label}\": use letters, spaces, ( ) . - (2 to 61 characters)")]
    InvalidCustomLabel {
        /// Label as typed.
        label: String,
    },

    /// A custom field failed its preset.
    #[error("{label}: {message}")]
    CustomFormat {
        /// Field label.
        label: String,
        /// The preset's message.
        message: String,
    },

    /// A custom field would overwrite the document name.
    #[error("Field \"{label}\" maps to the reserved key \"document_name\"")]
    ReservedKey {
        /// Field label.
        label: String,
    },

    /// Two custom fields map to one key under [`KeyCollisionPolicy::Reject`].
    #[error("Fields \"{first}\" and \"{second}\" both map to key \"{key}\"")]
    KeyCollision {
        /// Shared payload key.
        key: String,
        /// Label of the earlier field.
        first: String,
        /// Label of the later field.
        second: String,
    },

    /// The attachment exceeds the configured cap.
    #[error("File size must be under {limit_mib}MB")]
    FileTooLarge {
        /// Cap in MiB.
        limit_mib: u64,
        /// Actual size in bytes.
        size: u64,
    },
}

/// Two custom fields whose labels normalize to the same payload key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    /// The shared key.
    pub key: String,
    /// Label of the field that claimed the key first.
    pub first: String,
    /// Label of the later field.
    pub second: String,
}

impl KeyCollision {
    /// Whether the later field collides with the reserved `document_name`.
    pub fn is_reserved(&self) -> bool {
        self.key == DOCUMENT_NAME_KEY
    }
}

/// Report every pair of custom fields sharing a normalized key.
///
/// Each later field is paired with the first field that claimed its key.
/// `document_name` is pre-claimed by the document name.
pub fn detect_key_collisions(custom: &CustomDocument) -> Vec<KeyCollision> {
    let mut claimed: BTreeMap<String, &str> = BTreeMap::new();
    claimed.insert(DOCUMENT_NAME_KEY.to_string(), DOCUMENT_NAME_LABEL);

    let mut collisions = Vec::new();
    for field in &custom.fields {
        let key = normalize_key(&field.label);
        match claimed.get(key.as_str()) {
            Some(first) => collisions.push(KeyCollision {
                key,
                first: (*first).to_string(),
                second: field.label.clone(),
            }),
            None => {
                claimed.insert(key, field.label.as_str());
            }
        }
    }
    collisions
}

/// Compiled shape checks for custom documents.
#[derive(Debug, Clone)]
pub struct CustomPatterns {
    name: Regex,
    label: Regex,
}

impl CustomPatterns {
    /// Compile the name and label patterns.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(CUSTOM_NAME_PATTERN)?,
            label: Regex::new(CUSTOM_LABEL_PATTERN)?,
        })
    }

    /// Whether a trimmed custom document name is acceptable.
    pub fn is_valid_name(&self, name: &str) -> bool {
        self.name.is_match(name.trim())
    }

    /// Whether a trimmed custom field label is acceptable.
    pub fn is_valid_label(&self, label: &str) -> bool {
        self.label.is_match(label.trim())
    }
}

/// Validate a built-in document session against its schema.
pub fn validate_builtin(
    registry: &PresetRegistry,
    schema: &DocumentSchema,
    session: &FormSession,
    config: &FormConfig,
) -> Result<(), ValidationFailure> {
    for field in &schema.fields {
        let value = session.value(&field.name).trim();
        if value.is_empty() {
            if field.required {
                return Err(ValidationFailure::Required {
                    label: field.label.clone(),
                });
            }
            continue;
        }
        registry
            .get(field.preset)
            .check(value)
            .map_err(|message| ValidationFailure::Format {
                message: message.to_string(),
            })?;
    }
    check_attachment(session, config)
}

/// Validate a custom document session.
pub fn validate_custom(
    registry: &PresetRegistry,
    patterns: &CustomPatterns,
    session: &FormSession,
    config: &FormConfig,
) -> Result<(), ValidationFailure> {
    let custom = session.custom();

    if custom.name.trim().is_empty() {
        return Err(ValidationFailure::DocumentNameRequired);
    }
    if !patterns.is_valid_name(&custom.name) {
        return Err(ValidationFailure::InvalidDocumentName);
    }
    if custom.fields.is_empty() {
        return Err(ValidationFailure::NoCustomFields);
    }

    for (index, field) in custom.fields.iter().enumerate() {
        let label = field.label.trim();
        if label.is_empty() {
            return Err(ValidationFailure::CustomLabelRequired {
                position: index + 1,
            });
        }
        if !patterns.is_valid_label(label) {
            return Err(ValidationFailure::InvalidCustomLabel {
                label: field.label.clone(),
            });
        }

        let value = session.custom_value(field.id).trim();
        if value.is_empty() {
            if field.required {
                return Err(ValidationFailure::Required {
                    label: label.to_string(),
                });
            }
            continue;
        }
        registry
            .get(field.preset)
            .check(value)
            .map_err(|message| ValidationFailure::CustomFormat {
                label: label.to_string(),
                message: message.to_string(),
            })?;
    }

    check_collisions(custom, config.key_collisions)?;
    check_attachment(session, config)
}

fn check_collisions(
    custom: &CustomDocument,
    policy: KeyCollisionPolicy,
) -> Result<(), ValidationFailure> {
    for collision in detect_key_collisions(custom) {
        if collision.is_reserved() {
            return Err(ValidationFailure::ReservedKey {
                label: collision.second,
            });
        }
        // Under LastWriteWins collisions are reported by the caller through
        // `FormEngine::key_collisions`, not on every validation pass.
        if policy == KeyCollisionPolicy::Reject {
            return Err(ValidationFailure::KeyCollision {
                key: collision.key,
                first: collision.first,
                second: collision.second,
            });
        }
    }
    Ok(())
}

/// Reject attachments strictly larger than the configured cap.
pub fn check_attachment(session: &FormSession, config: &FormConfig) -> Result<(), ValidationFailure> {
    match session.attachment() {
        Some(file) if file.size() > config.max_file_bytes() => Err(ValidationFailure::FileTooLarge {
            limit_mib: config.max_file_mib,
            size: file.size(),
        }),
        _ => Ok(()),
    }
}
