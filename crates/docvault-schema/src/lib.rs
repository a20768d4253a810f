//! # docvault-schema — Document Schema Catalog
//!
//! Enumerates every selectable document type and its ordered field list.
//! Each field is bound to exactly one validation preset.
//!
//! ## Construction is the integrity check
//!
//! Schemas are written as plain definitions ([`SchemaDef`], [`FieldDef`])
//! that name presets by wire name. [`SchemaCatalog::from_definitions`]
//! resolves every name through the [`docvault_preset::PresetRegistry`] and
//! refuses to build if anything is off: an unknown preset, a duplicate
//! document key, a duplicate field name, or a `CUSTOM` entry with static
//! fields. A built catalog therefore never fails a lookup at form time.
//!
//! ## Sources
//!
//! - [`builtin`] — the compiled-in document types.
//! - [`SchemaCatalog::from_yaml_str`] — additional types loaded from YAML.
//!
//! ## Crate Policy
//!
//! - Depends on `docvault-core` and `docvault-preset` internally.
//! - Built-in document keys and their field bindings are a stable contract.
//! - Group tags are cosmetic and only drive picker filtering.

pub mod builtin;
pub mod catalog;
pub mod schema;

pub use builtin::BUILTIN_KEYS;
pub use catalog::{CatalogError, SchemaCatalog};
pub use schema::{DocumentGroup, DocumentSchema, FieldDef, FieldDescriptor, FieldKind, SchemaDef};
