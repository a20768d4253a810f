//! # Submission Payload
//!
//! The normalized output handed to a [`crate::submit::Submitter`]. Only
//! non-empty trimmed values are carried; the attachment passes through
//! untouched.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use docvault_core::Attachment;
use docvault_schema::DocumentSchema;

use crate::normalize::normalize_key;
use crate::session::FormSession;

/// Payload key that always carries a custom document's name.
pub const DOCUMENT_NAME_KEY: &str = "document_name";

/// Insertion-ordered field map.
///
/// Re-inserting a key replaces its value in place, so the first position
/// of a key is kept while the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadFields(Vec<(String, String)>);

impl PayloadFields {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the displaced value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PayloadFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A validated document ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Schema key, or `CUSTOM`.
    pub doc_type: String,
    /// Non-empty trimmed values by payload key.
    pub fields: PayloadFields,
    /// Attached file, metadata only when serialized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Attachment>,
}

/// Assemble the payload of a built-in document.
pub fn assemble_builtin(schema: &DocumentSchema, session: &FormSession) -> SubmissionPayload {
    let mut fields = PayloadFields::new();
    for field in &schema.fields {
        let value = session.value(&field.name).trim();
        if !value.is_empty() {
            fields.insert(field.name.as_str(), value);
        }
    }
    SubmissionPayload {
        doc_type: schema.key.to_string(),
        fields,
        file: session.attachment().cloned(),
    }
}

/// Assemble the payload of a custom document.
///
/// `document_name` comes first; custom fields follow in user order under
/// their normalized keys.
pub fn assemble_custom(session: &FormSession) -> SubmissionPayload {
    let custom = session.custom();
    let mut fields = PayloadFields::new();

    let name = custom.name.trim();
    if !name.is_empty() {
        fields.insert(DOCUMENT_NAME_KEY, name);
    }
    for field in &custom.fields {
        let value = session.custom_value(field.id).trim();
        if !value.is_empty() {
            fields.insert(normalize_key(&field.label), value);
        }
    }
    SubmissionPayload {
        doc_type: docvault_core::CUSTOM_DOC_TYPE.to_string(),
        fields,
        file: session.attachment().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position_and_overwrites() {
        let mut f = PayloadFields::new();
        assert_eq!(f.insert("a", "1"), None);
        f.insert("b", "2");
        assert_eq!(f.insert("a", "3"), Some("1".to_string()));
        let entries: Vec<_> = f.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let mut fields = PayloadFields::new();
        fields.insert("name", "Ajay Kedar");
        let payload = SubmissionPayload {
            doc_type: "AADHAAR".into(),
            fields,
            file: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"docType": "AADHAAR", "fields": {"name": "Ajay Kedar"}})
        );
    }

    #[test]
    fn test_file_metadata_serialized() {
        let payload = SubmissionPayload {
            doc_type: "PAN".into(),
            fields: PayloadFields::new(),
            file: Some(Attachment::new("pan.pdf", Some("application/pdf".into()), vec![1, 2, 3])),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["file"]["name"], "pan.pdf");
        assert_eq!(json["file"]["size"], 3);
    }
}
