//! # Live Preview
//!
//! Plain-text rendering of what would be submitted. Derived from the
//! session on every call. Never consulted by validation or assembly.

use docvault_schema::DocumentSchema;

use crate::session::FormSession;

/// Shown while no document type is selected.
pub const NO_SELECTION: &str = "No document type selected";

/// Appended when no field line was rendered.
pub const EMPTY_PLACEHOLDER: &str = "(no details entered yet)";

const CUSTOM_FALLBACK_LABEL: &str = "Custom Document";

/// Render the preview of a built-in document.
pub fn render_builtin(schema: &DocumentSchema, session: &FormSession) -> String {
    let lines = schema.fields.iter().filter_map(|field| {
        let value = session.value(&field.name).trim();
        (!value.is_empty()).then(|| format!("{}: {}", field.label, value))
    });
    render(&schema.label, schema.key.as_str(), lines, session)
}

/// Render the preview of a custom document.
pub fn render_custom(session: &FormSession) -> String {
    let custom = session.custom();
    let name = match custom.name.trim() {
        "" => CUSTOM_FALLBACK_LABEL,
        name => name,
    };
    let lines = custom.fields.iter().filter_map(|field| {
        let value = session.custom_value(field.id).trim();
        (!value.is_empty()).then(|| format!("{}: {}", field.label.trim(), value))
    });
    render(name, docvault_core::CUSTOM_DOC_TYPE, lines, session)
}

fn render(
    label: &str,
    key: &str,
    field_lines: impl Iterator<Item = String>,
    session: &FormSession,
) -> String {
    let mut lines = vec![format!("Document: {label} ({key})")];
    let header_len = lines.len();
    lines.extend(field_lines);
    let has_fields = lines.len() > header_len;

    if let Some(file) = session.attachment() {
        lines.push(format!(
            "Attachment: {} ({}, {})",
            file.name,
            file.mime_or_unknown(),
            file.human_size()
        ));
    }
    if !has_fields {
        lines.push(EMPTY_PLACEHOLDER.to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FormAction;
    use docvault_core::{Attachment, DocTypeKey};
    use docvault_preset::PresetRegistry;
    use docvault_schema::SchemaCatalog;

    fn catalog() -> SchemaCatalog {
        SchemaCatalog::builtin(&PresetRegistry::new().unwrap()).unwrap()
    }

    #[test]
    fn test_builtin_preview() {
        let catalog = catalog();
        let schema = catalog.get("AADHAAR").unwrap();
        let session = FormSession::new()
            .apply(FormAction::SelectDocType(schema.key.clone()))
            .unwrap()
            .apply(FormAction::SetValue {
                field: "name".into(),
                value: "  Ajay Kedar ".into(),
            })
            .unwrap()
            .apply(FormAction::Attach(Attachment::new(
                "aadhaar.pdf",
                Some("application/pdf".into()),
                vec![0; 1536],
            )))
            .unwrap();
        assert_eq!(
            render_builtin(schema, &session),
            "Document: Aadhaar Card (AADHAAR)\n\
             Full Name: Ajay Kedar\n\
             Attachment: aadhaar.pdf (application/pdf, 1.5 KB)"
        );
    }

    #[test]
    fn test_placeholder_when_no_fields() {
        let catalog = catalog();
        let schema = catalog.get("PAN").unwrap();
        let session = FormSession::new()
            .apply(FormAction::SelectDocType(schema.key.clone()))
            .unwrap()
            .apply(FormAction::Attach(Attachment::new("scan", None, vec![1; 10])))
            .unwrap();
        assert_eq!(
            render_builtin(schema, &session),
            "Document: PAN Card (PAN)\nAttachment: scan (unknown, 10 B)\n(no details entered yet)"
        );
    }

    #[test]
    fn test_custom_preview_fallback_label() {
        let session = FormSession::new()
            .apply(FormAction::SelectDocType(DocTypeKey::custom()))
            .unwrap();
        assert_eq!(
            render_custom(&session),
            "Document: Custom Document (CUSTOM)\n(no details entered yet)"
        );
    }

    #[test]
    fn test_custom_preview_lines() {
        let session = FormSession::new()
            .apply(FormAction::SelectDocType(DocTypeKey::custom()))
            .unwrap()
            .apply(FormAction::SetCustomName(" Gas Connection ".into()))
            .unwrap();
        let id = session.custom().fields[0].id;
        let session = session
            .apply(FormAction::SetCustomLabel(id, "Consumer No".into()))
            .unwrap()
            .apply(FormAction::SetValue {
                field: id.to_string(),
                value: "GC12345".into(),
            })
            .unwrap();
        assert_eq!(
            render_custom(&session),
            "Document: Gas Connection (CUSTOM)\nConsumer No: GC12345"
        );
    }
}
