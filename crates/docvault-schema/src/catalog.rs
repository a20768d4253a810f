//! # Schema Catalog
//!
//! The resolved, read-only set of document types.
//!
//! ## Integrity Invariant
//!
//! A catalog that exists is consistent: every field's preset resolves,
//! document keys are unique, field names are unique within their schema
//! and usable as payload keys, and `CUSTOM` carries no static fields.
//! All of this is checked once in [`SchemaCatalog::from_definitions`].

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use docvault_core::DocTypeKey;
use docvault_preset::PresetRegistry;

use crate::builtin;
use crate::schema::{DocumentGroup, DocumentSchema, FieldDescriptor, SchemaDef};

/// Errors raised while building a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A field references a preset the registry does not know.
    #[error("document {doc}: field {field:?} references unknown preset {preset:?}")]
    UnknownPreset {
        /// Document type key.
        doc: String,
        /// Field name.
        field: String,
        /// The unresolved preset name.
        preset: String,
    },

    /// Two document types share a key.
    #[error("duplicate document type key {0}")]
    DuplicateDocument(String),

    /// Two fields of one document share a name.
    #[error("document {doc}: duplicate field name {field:?}")]
    DuplicateField {
        /// Document type key.
        doc: String,
        /// The repeated field name.
        field: String,
    },

    /// A field name is not a usable payload key.
    #[error("document {doc}: invalid field name {field:?} (expected lowercase letters, digits, underscores)")]
    InvalidFieldName {
        /// Document type key.
        doc: String,
        /// The rejected field name.
        field: String,
    },

    /// The `CUSTOM` document was given static fields.
    #[error("the CUSTOM document type cannot declare static fields")]
    CustomHasFields,

    /// A document key is malformed.
    #[error(transparent)]
    InvalidKey(#[from] docvault_core::DocvaultError),

    /// A group name is not recognized.
    #[error("unknown document group {0:?}")]
    UnknownGroup(String),

    /// A YAML catalog could not be parsed.
    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Deserialize)]
struct CatalogFile {
    documents: Vec<SchemaDef>,
}

fn is_payload_key(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Ordered, read-only collection of document schemas.
#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    schemas: Vec<DocumentSchema>,
}

impl SchemaCatalog {
    /// Build the compiled-in catalog.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in table itself is inconsistent, which the
    /// test suite rules out.
    pub fn builtin(registry: &PresetRegistry) -> Result<Self, CatalogError> {
        Self::from_definitions(builtin::definitions(), registry)
    }

    /// Parse definitions from YAML of the form `documents: [...]`.
    pub fn parse_definitions(yaml: &str) -> Result<Vec<SchemaDef>, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Ok(file.documents)
    }

    /// Build a catalog from a YAML document (see [`Self::parse_definitions`]).
    pub fn from_yaml_str(yaml: &str, registry: &PresetRegistry) -> Result<Self, CatalogError> {
        Self::from_definitions(Self::parse_definitions(yaml)?, registry)
    }

    /// Resolve and check a list of definitions.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, in definition order.
    pub fn from_definitions(
        defs: Vec<SchemaDef>,
        registry: &PresetRegistry,
    ) -> Result<Self, CatalogError> {
        let mut seen_docs = HashSet::new();
        let mut schemas = Vec::with_capacity(defs.len());

        for def in defs {
            let key = DocTypeKey::new(def.key)?;
            if !seen_docs.insert(key.clone()) {
                return Err(CatalogError::DuplicateDocument(key.to_string()));
            }
            if key.is_custom() && !def.fields.is_empty() {
                return Err(CatalogError::CustomHasFields);
            }

            let mut seen_fields = HashSet::new();
            let mut fields = Vec::with_capacity(def.fields.len());
            for field in def.fields {
                if !is_payload_key(&field.name) {
                    return Err(CatalogError::InvalidFieldName {
                        doc: key.to_string(),
                        field: field.name,
                    });
                }
                if !seen_fields.insert(field.name.clone()) {
                    return Err(CatalogError::DuplicateField {
                        doc: key.to_string(),
                        field: field.name,
                    });
                }
                let preset =
                    registry
                        .resolve(&field.preset)
                        .map_err(|_| CatalogError::UnknownPreset {
                            doc: key.to_string(),
                            field: field.name.clone(),
                            preset: field.preset.clone(),
                        })?;
                fields.push(FieldDescriptor {
                    name: field.name,
                    label: field.label,
                    required: field.required,
                    preset,
                    kind: field.kind,
                });
            }

            schemas.push(DocumentSchema {
                key,
                label: def.label,
                group: def.group,
                fields,
            });
        }

        tracing::debug!(documents = schemas.len(), "schema catalog built");
        Ok(Self { schemas })
    }

    /// All schemas in catalog order.
    pub fn list(&self) -> &[DocumentSchema] {
        &self.schemas
    }

    /// Look up a schema by document type key.
    pub fn get(&self, key: &str) -> Option<&DocumentSchema> {
        self.schemas.iter().find(|s| s.key.as_str() == key)
    }

    /// Schemas belonging to one picker group, in catalog order.
    pub fn in_group(&self, group: DocumentGroup) -> impl Iterator<Item = &DocumentSchema> {
        self.schemas.iter().filter(move |s| s.group == group)
    }

    /// Distinct groups present, in order of first appearance.
    pub fn groups(&self) -> Vec<DocumentGroup> {
        let mut groups = Vec::new();
        for schema in &self.schemas {
            if !groups.contains(&schema.group) {
                groups.push(schema.group);
            }
        }
        groups
    }

    /// Number of schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the catalog has no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
