//! # Form Session
//!
//! The complete mutable state of one form, held as an immutable value.
//! Every edit goes through [`FormSession::apply`], which returns the next
//! session and leaves the current one untouched.
//!
//! ## States
//!
//! ```text
//! Idle ──SelectDocType──▶ Editing ──submit──▶ (validate) ──ok──▶ Editing (entries cleared)
//!                           ▲  │                   │
//!                           │  └──SelectDocType────┤ (values + attachment cleared)
//!                           └──────────────────────┘ rejected: one message, state unchanged
//! ```
//!
//! Idle is `doc_type() == None`. Validation is synchronous and lives in
//! [`crate::engine::FormEngine`]; the session only holds data.
//!
//! ## Custom documents
//!
//! In `CUSTOM` mode the user authors the field list. Field definitions
//! ([`CustomFieldSpec`]) and the document name survive type switches and
//! successful submissions; only entered values and the attachment are
//! cleared. At least one custom field always exists once `CUSTOM` has been
//! selected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use docvault_core::{Attachment, DocTypeKey};
use docvault_preset::PresetKey;

/// Session-scoped identifier of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomFieldId(pub u32);

impl std::fmt::Display for CustomFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cf-{}", self.0)
    }
}

/// A user-authored field of a custom document. Data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldSpec {
    /// Stable identifier; also the key its value is stored under.
    pub id: CustomFieldId,
    /// Label exactly as typed.
    pub label: String,
    /// Preset applied to non-empty values.
    pub preset: PresetKey,
    /// Whether an empty value is rejected.
    pub required: bool,
}

impl CustomFieldSpec {
    fn blank(id: CustomFieldId) -> Self {
        Self {
            id,
            label: String::new(),
            preset: PresetKey::AnyTextShort,
            required: true,
        }
    }
}

/// The user-defined shape of a custom document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDocument {
    /// Document name as typed.
    pub name: String,
    /// Fields in user-defined order.
    pub fields: Vec<CustomFieldSpec>,
    next_id: u32,
}

impl CustomDocument {
    fn push_blank(&mut self) -> CustomFieldId {
        self.next_id += 1;
        let id = CustomFieldId(self.next_id);
        self.fields.push(CustomFieldSpec::blank(id));
        id
    }

    fn field_mut(&mut self, id: CustomFieldId) -> Result<&mut CustomFieldSpec, SessionError> {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(SessionError::UnknownCustomField(id))
    }

    /// Look up a field by id.
    pub fn field(&self, id: CustomFieldId) -> Option<&CustomFieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// One edit to a session.
#[derive(Debug, Clone)]
pub enum FormAction {
    /// Switch document type. Clears values and attachment.
    SelectDocType(DocTypeKey),
    /// Set a field value (built-in field name, or custom field id as string).
    SetValue {
        /// Field name or custom field id.
        field: String,
        /// Raw value as typed.
        value: String,
    },
    /// Attach a file, replacing any previous one.
    Attach(Attachment),
    /// Remove the attachment.
    Detach,
    /// Clear entered values and the attachment, keeping the custom shape.
    ClearEntries,
    /// Set the custom document name.
    SetCustomName(String),
    /// Append a blank custom field.
    AddCustomField,
    /// Remove a custom field and its value.
    RemoveCustomField(CustomFieldId),
    /// Change a custom field's label.
    SetCustomLabel(CustomFieldId, String),
    /// Change a custom field's preset.
    SetCustomPreset(CustomFieldId, PresetKey),
    /// Toggle a custom field's required flag.
    SetCustomRequired(CustomFieldId, bool),
}

/// Rejected session edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An edit needs a selected document type.
    #[error("Select a document type first")]
    NoDocumentType,

    /// The document type is not in the catalog.
    #[error("Unknown document type {0}")]
    UnknownDocType(String),

    /// The field is not part of the selected document.
    #[error("{doc} has no field {field:?}")]
    UnknownField {
        /// Selected document type.
        doc: String,
        /// The field that was addressed.
        field: String,
    },

    /// A custom-field edit outside `CUSTOM` mode.
    #[error("Custom fields can only be edited for custom documents")]
    NotCustom,

    /// No custom field has this id.
    #[error("No custom field {0}")]
    UnknownCustomField(CustomFieldId),

    /// Removing the last custom field.
    #[error("A custom document needs at least one field")]
    LastCustomField,
}

/// Immutable snapshot of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    doc_type: Option<DocTypeKey>,
    values: BTreeMap<String, String>,
    attachment: Option<Attachment>,
    custom: CustomDocument,
}

impl FormSession {
    /// A fresh, idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected document type, `None` while idle.
    pub fn doc_type(&self) -> Option<&DocTypeKey> {
        self.doc_type.as_ref()
    }

    /// Whether `CUSTOM` is selected.
    pub fn is_custom(&self) -> bool {
        self.doc_type.as_ref().is_some_and(DocTypeKey::is_custom)
    }

    /// Raw value of a field, `""` when never set.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Raw value of a custom field.
    pub fn custom_value(&self, id: CustomFieldId) -> &str {
        self.value(&id.to_string())
    }

    /// All raw values by field key.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// The attached file, if any.
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// The custom document shape.
    pub fn custom(&self) -> &CustomDocument {
        &self.custom
    }

    /// Apply one edit, returning the next session.
    ///
    /// Catalog membership of document types and built-in field names is
    /// checked by [`crate::controller::FormController`], which knows the
    /// catalog; everything the session owns is checked here.
    pub fn apply(&self, action: FormAction) -> Result<FormSession, SessionError> {
        let mut next = self.clone();
        match action {
            FormAction::SelectDocType(key) => {
                next.values.clear();
                next.attachment = None;
                if key.is_custom() && next.custom.fields.is_empty() {
                    next.custom.push_blank();
                }
                tracing::debug!(doc_type = %key, "document type selected");
                next.doc_type = Some(key);
            }
            FormAction::SetValue { field, value } => {
                self.require_doc_type()?;
                next.values.insert(field, value);
            }
            FormAction::Attach(attachment) => {
                self.require_doc_type()?;
                next.attachment = Some(attachment);
            }
            FormAction::Detach => {
                self.require_doc_type()?;
                next.attachment = None;
            }
            FormAction::ClearEntries => return Ok(self.cleared_entries()),
            FormAction::SetCustomName(name) => {
                self.require_custom()?;
                next.custom.name = name;
            }
            FormAction::AddCustomField => {
                self.require_custom()?;
                let id = next.custom.push_blank();
                tracing::debug!(field = %id, "custom field added");
            }
            FormAction::RemoveCustomField(id) => {
                self.require_custom()?;
                if next.custom.field(id).is_none() {
                    return Err(SessionError::UnknownCustomField(id));
                }
                if next.custom.fields.len() == 1 {
                    return Err(SessionError::LastCustomField);
                }
                next.custom.fields.retain(|f| f.id != id);
                next.values.remove(&id.to_string());
            }
            FormAction::SetCustomLabel(id, label) => {
                self.require_custom()?;
                next.custom.field_mut(id)?.label = label;
            }
            FormAction::SetCustomPreset(id, preset) => {
                self.require_custom()?;
                next.custom.field_mut(id)?.preset = preset;
            }
            FormAction::SetCustomRequired(id, required) => {
                self.require_custom()?;
                next.custom.field_mut(id)?.required = required;
            }
        }
        Ok(next)
    }

    /// The session without entered values or attachment. Document type and
    /// custom shape are kept.
    pub fn cleared_entries(&self) -> FormSession {
        FormSession {
            values: BTreeMap::new(),
            attachment: None,
            ..self.clone()
        }
    }

    fn require_doc_type(&self) -> Result<&DocTypeKey, SessionError> {
        self.doc_type.as_ref().ok_or(SessionError::NoDocumentType)
    }

    fn require_custom(&self) -> Result<(), SessionError> {
        if self.require_doc_type()?.is_custom() {
            Ok(())
        } else {
            Err(SessionError::NotCustom)
        }
    }
}
