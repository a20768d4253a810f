//! # Form Controller
//!
//! Owns one [`FormSession`] and drives it through edits and submission.
//! Edits are checked against the engine's catalog before they reach the
//! session, so a controller's session only ever names known document types
//! and fields.
//!
//! ## Submission
//!
//! `submit` validates, assembles the payload and hands it to a
//! [`Submitter`]. Rejections and collaborator failures leave the session
//! exactly as it was. On success the entered values and attachment are
//! cleared; the document type and any custom shape are kept so the same
//! kind of document can be submitted again.

use thiserror::Error;

use docvault_core::{Attachment, DocTypeKey};
use docvault_preset::PresetKey;

use crate::engine::FormEngine;
use crate::payload::SubmissionPayload;
use crate::session::{CustomFieldId, FormAction, FormSession, SessionError};
use crate::submit::{SubmissionReceipt, SubmitError, Submitter};
use crate::validation::{KeyCollision, ValidationFailure};

/// Why a submission did not go through.
#[derive(Error, Debug)]
pub enum SubmitFailure {
    /// Validation rejected the form.
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),

    /// The submitter failed.
    #[error(transparent)]
    Collaborator(#[from] SubmitError),
}

/// A form session bound to an engine.
#[derive(Debug)]
pub struct FormController<'e> {
    engine: &'e FormEngine,
    session: FormSession,
}

impl<'e> FormController<'e> {
    /// Idle controller.
    pub fn new(engine: &'e FormEngine) -> Self {
        Self {
            engine,
            session: FormSession::new(),
        }
    }

    /// The engine this controller validates against.
    pub fn engine(&self) -> &'e FormEngine {
        self.engine
    }

    /// Current session snapshot.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Apply an edit after checking it against the catalog.
    pub fn apply(&mut self, action: FormAction) -> Result<(), SessionError> {
        self.check(&action)?;
        self.session = self.session.apply(action)?;
        Ok(())
    }

    fn check(&self, action: &FormAction) -> Result<(), SessionError> {
        match action {
            FormAction::SelectDocType(key) => {
                if self.engine.catalog().get(key.as_str()).is_none() {
                    return Err(SessionError::UnknownDocType(key.to_string()));
                }
            }
            FormAction::SetValue { field, .. } => {
                let schema = self
                    .engine
                    .selected_schema(&self.session)
                    .map_err(|_| SessionError::NoDocumentType)?;
                let known = if schema.is_custom() {
                    self.session
                        .custom()
                        .fields
                        .iter()
                        .any(|f| f.id.to_string() == *field)
                } else {
                    schema.field(field).is_some()
                };
                if !known {
                    return Err(SessionError::UnknownField {
                        doc: schema.key.to_string(),
                        field: field.clone(),
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Select a document type by key. Clears values and attachment.
    pub fn select_doc_type(&mut self, key: &str) -> Result<(), SessionError> {
        let key = DocTypeKey::new(key).map_err(|_| SessionError::UnknownDocType(key.to_string()))?;
        self.apply(FormAction::SelectDocType(key))
    }

    /// Set a built-in field's value.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> Result<(), SessionError> {
        self.apply(FormAction::SetValue {
            field: field.to_string(),
            value: value.into(),
        })
    }

    /// Set a custom field's value.
    pub fn set_custom_value(
        &mut self,
        id: CustomFieldId,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.set_value(&id.to_string(), value)
    }

    /// Attach a file.
    pub fn attach(&mut self, attachment: Attachment) -> Result<(), SessionError> {
        self.apply(FormAction::Attach(attachment))
    }

    /// Remove the attachment.
    pub fn detach(&mut self) -> Result<(), SessionError> {
        self.apply(FormAction::Detach)
    }

    /// Set the custom document name.
    pub fn set_custom_name(&mut self, name: impl Into<String>) -> Result<(), SessionError> {
        self.apply(FormAction::SetCustomName(name.into()))
    }

    /// Append a blank custom field and return its id.
    pub fn add_custom_field(&mut self) -> Result<CustomFieldId, SessionError> {
        self.apply(FormAction::AddCustomField)?;
        self.session
            .custom()
            .fields
            .last()
            .map(|f| f.id)
            .ok_or(SessionError::NotCustom)
    }

    /// Remove a custom field. The last one cannot be removed.
    pub fn remove_custom_field(&mut self, id: CustomFieldId) -> Result<(), SessionError> {
        self.apply(FormAction::RemoveCustomField(id))
    }

    /// Relabel a custom field.
    pub fn set_custom_label(
        &mut self,
        id: CustomFieldId,
        label: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.apply(FormAction::SetCustomLabel(id, label.into()))
    }

    /// Change a custom field's preset.
    pub fn set_custom_preset(&mut self, id: CustomFieldId, preset: PresetKey) -> Result<(), SessionError> {
        self.apply(FormAction::SetCustomPreset(id, preset))
    }

    /// Mark a custom field required or optional.
    pub fn set_custom_required(&mut self, id: CustomFieldId, required: bool) -> Result<(), SessionError> {
        self.apply(FormAction::SetCustomRequired(id, required))
    }

    /// Validate without submitting.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        self.engine.validate(&self.session)
    }

    /// Validate and assemble without submitting.
    pub fn build_payload(&self) -> Result<SubmissionPayload, ValidationFailure> {
        self.engine.build_payload(&self.session)
    }

    /// Live preview.
    pub fn preview(&self) -> String {
        self.engine.preview(&self.session)
    }

    /// Custom fields that share a payload key.
    pub fn key_collisions(&self) -> Vec<KeyCollision> {
        self.engine.key_collisions(&self.session)
    }

    /// Validate, assemble and submit.
    pub fn submit(&mut self, submitter: &dyn Submitter) -> Result<SubmissionReceipt, SubmitFailure> {
        let payload = match self.build_payload() {
            Ok(payload) => payload,
            Err(failure) => {
                tracing::debug!(reason = %failure, "submission rejected by validation");
                return Err(failure.into());
            }
        };

        let receipt = submitter.submit(&payload).map_err(|err| {
            tracing::warn!(doc_type = %payload.doc_type, error = %err, "submitter failed");
            SubmitFailure::Collaborator(err)
        })?;

        tracing::info!(
            doc_type = %receipt.doc_type,
            fields = receipt.field_count,
            submission_id = %receipt.submission_id,
            "document submitted"
        );
        self.session = self.session.cleared_entries();
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::submit::RecordingSubmitter;

    fn engine() -> FormEngine {
        FormEngine::builtin(FormConfig::default()).unwrap()
    }

    #[test]
    fn test_unknown_doc_type_rejected() {
        let engine = engine();
        let mut form = FormController::new(&engine);
        assert_eq!(
            form.select_doc_type("LIBRARY_CARD"),
            Err(SessionError::UnknownDocType("LIBRARY_CARD".into()))
        );
        assert_eq!(
            form.select_doc_type("aadhaar"),
            Err(SessionError::UnknownDocType("aadhaar".into()))
        );
        assert!(form.session().doc_type().is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let engine = engine();
        let mut form = FormController::new(&engine);
        form.select_doc_type("PAN").unwrap();
        assert!(matches!(
            form.set_value("aadhaar_number", "123456789012"),
            Err(SessionError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_set_value_before_selection() {
        let engine = engine();
        let mut form = FormController::new(&engine);
        assert_eq!(form.set_value("name", "x"), Err(SessionError::NoDocumentType));
    }

    #[test]
    fn test_add_custom_field_returns_new_id() {
        let engine = engine();
        let mut form = FormController::new(&engine);
        form.select_doc_type("CUSTOM").unwrap();
        let first = form.session().custom().fields[0].id;
        let second = form.add_custom_field().unwrap();
        assert_ne!(first, second);
        form.set_custom_value(second, "x").unwrap();
        assert_eq!(form.session().custom_value(second), "x");
    }

    #[test]
    fn test_detach() {
        let engine = engine();
        let mut form = FormController::new(&engine);
        form.select_doc_type("PAN").unwrap();
        form.attach(Attachment::new("a", None, vec![1])).unwrap();
        form.detach().unwrap();
        assert!(form.session().attachment().is_none());
    }

    #[test]
    fn test_detach_without_doc_type_rejected() {
        let engine = engine();
        let mut form = FormController::new(&engine);
        assert_eq!(form.detach(), Err(SessionError::NoDocumentType));
    }

    #[test]
    fn test_successful_submit_clears_entries() {
        let engine = engine();
        let submitter = RecordingSubmitter::new();
        let mut form = FormController::new(&engine);
        form.select_doc_type("UAN").unwrap();
        form.set_value("uan", "100200300400").unwrap();
        form.set_value("name", "Ajay Kedar").unwrap();

        let receipt = form.submit(&submitter).unwrap();
        assert_eq!(receipt.doc_type, "UAN");
        assert_eq!(receipt.field_count, 2);
        assert_eq!(form.session().doc_type().map(|k| k.as_str()), Some("UAN"));
        assert!(form.session().values().is_empty());
    }

    #[test]
    fn test_rejected_submit_keeps_session() {
        let engine = engine();
        let submitter = RecordingSubmitter::new();
        let mut form = FormController::new(&engine);
        form.select_doc_type("UAN").unwrap();
        form.set_value("uan", "123").unwrap();
        let before = form.session().clone();

        let err = form.submit(&submitter).unwrap_err();
        assert!(matches!(err, SubmitFailure::Invalid(_)));
        assert_eq!(form.session(), &before);
        assert!(submitter.accepted().is_empty());
    }
}
