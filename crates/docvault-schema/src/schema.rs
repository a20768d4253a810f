//! # Schema Types
//!
//! Resolved types ([`DocumentSchema`], [`FieldDescriptor`]) and the raw
//! definitions they are built from ([`SchemaDef`], [`FieldDef`]).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use docvault_core::DocTypeKey;
use docvault_preset::PresetKey;

use crate::catalog::CatalogError;

/// Picker category of a document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentGroup {
    /// Government identity documents.
    Identity,
    /// Banking and insurance.
    Financial,
    /// Vehicle papers.
    Vehicle,
    /// Business registrations.
    Business,
    /// Employment records.
    Employment,
    /// Civil registrations (birth, marriage, ...).
    Civil,
    /// Education certificates.
    Education,
    /// Utility bills.
    Utility,
    /// Everything else, including custom documents.
    Other,
}

impl DocumentGroup {
    /// Returns all groups in picker order.
    pub fn all() -> &'static [DocumentGroup] {
        &[
            Self::Identity,
            Self::Financial,
            Self::Vehicle,
            Self::Business,
            Self::Employment,
            Self::Civil,
            Self::Education,
            Self::Utility,
            Self::Other,
        ]
    }

    /// Returns the snake_case identifier. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Financial => "financial",
            Self::Vehicle => "vehicle",
            Self::Business => "business",
            Self::Employment => "employment",
            Self::Civil => "civil",
            Self::Education => "education",
            Self::Utility => "utility",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for DocumentGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentGroup {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownGroup(s.to_string()))
    }
}

/// How a field is rendered. Has no effect on validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line input.
    #[default]
    Text,
    /// Multi-line input.
    Textarea,
}

/// One input slot of a document schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Payload key for the value. Unique within the schema.
    pub name: String,
    /// Display name, also used in error messages.
    pub label: String,
    /// Whether an empty value is rejected.
    pub required: bool,
    /// Validation preset applied to non-empty values.
    pub preset: PresetKey,
    /// Rendering hint.
    pub kind: FieldKind,
}

/// One selectable document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSchema {
    /// Document type key.
    pub key: DocTypeKey,
    /// Display name.
    pub label: String,
    /// Picker category.
    pub group: DocumentGroup,
    /// Fields in display and validation order. Empty for `CUSTOM`.
    pub fields: Vec<FieldDescriptor>,
}

impl DocumentSchema {
    /// Whether this is the user-defined `CUSTOM` document.
    pub fn is_custom(&self) -> bool {
        self.key.is_custom()
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Unresolved field definition, preset named by wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Payload key.
    pub name: String,
    /// Display name.
    pub label: String,
    /// Whether the field is required.
    #[serde(default)]
    pub required: bool,
    /// Preset wire name, e.g. `AADHAAR_12`.
    pub preset: String,
    /// Rendering hint.
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldDef {
    /// Convenience constructor for static tables.
    pub fn new(name: &str, label: &str, required: bool, preset: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required,
            preset: preset.to_string(),
            kind,
        }
    }
}

/// Unresolved document type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDef {
    /// Document type key, e.g. `AADHAAR`.
    pub key: String,
    /// Display name.
    pub label: String,
    /// Picker category.
    pub group: DocumentGroup,
    /// Field definitions in order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_roundtrip() {
        for g in DocumentGroup::all() {
            assert_eq!(g.as_str().parse::<DocumentGroup>().unwrap(), *g);
            assert_eq!(
                serde_json::to_string(g).unwrap(),
                format!("\"{}\"", g.as_str())
            );
        }
        assert!("Identity".parse::<DocumentGroup>().is_err());
    }

    #[test]
    fn test_field_def_defaults() {
        let def: FieldDef =
            serde_yaml::from_str("name: policy_number\nlabel: Policy Number\npreset: POLICY_ALNUM_6_30\n")
                .unwrap();
        assert!(!def.required);
        assert_eq!(def.kind, FieldKind::Text);
    }
}
