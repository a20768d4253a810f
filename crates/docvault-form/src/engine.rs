//! # Form Engine
//!
//! Read-only bundle of everything a form needs besides its session: the
//! preset registry, the schema catalog, the configuration, and the compiled
//! custom-document patterns. Built once; every construction failure
//! surfaces here rather than while a user is typing.
//!
//! The engine is `Send + Sync` and can back any number of
//! [`crate::controller::FormController`]s.

use thiserror::Error;

use docvault_preset::{PresetError, PresetRegistry};
use docvault_schema::{CatalogError, DocumentSchema, SchemaCatalog};

use crate::config::{ConfigError, FormConfig};
use crate::payload::{assemble_builtin, assemble_custom, SubmissionPayload};
use crate::preview::{render_builtin, render_custom, NO_SELECTION};
use crate::session::FormSession;
use crate::validation::{
    detect_key_collisions, validate_builtin, validate_custom, CustomPatterns, KeyCollision,
    ValidationFailure,
};

/// Errors building a [`FormEngine`].
#[derive(Error, Debug)]
pub enum EngineError {
    /// The preset registry failed to build.
    #[error("preset registry: {0}")]
    Preset(#[from] PresetError),

    /// The schema catalog failed to build.
    #[error("schema catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The configuration is out of range.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// A custom-document pattern failed to compile.
    #[error("pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Registry, catalog and configuration of a form.
#[derive(Debug)]
pub struct FormEngine {
    registry: PresetRegistry,
    catalog: SchemaCatalog,
    config: FormConfig,
    patterns: CustomPatterns,
}

impl FormEngine {
    /// Assemble an engine from its parts.
    pub fn new(
        registry: PresetRegistry,
        catalog: SchemaCatalog,
        config: FormConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let patterns = CustomPatterns::new()?;
        tracing::debug!(
            presets = registry.len(),
            schemas = catalog.len(),
            max_file_mib = config.max_file_mib,
            "form engine ready"
        );
        Ok(Self {
            registry,
            catalog,
            config,
            patterns,
        })
    }

    /// Engine over the built-in registry and catalog.
    pub fn builtin(config: FormConfig) -> Result<Self, EngineError> {
        let registry = PresetRegistry::new()?;
        let catalog = SchemaCatalog::builtin(&registry)?;
        Self::new(registry, catalog, config)
    }

    /// The preset registry.
    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// The schema catalog.
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// The configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Schema of the session's selected document type.
    pub fn selected_schema(&self, session: &FormSession) -> Result<&DocumentSchema, ValidationFailure> {
        let key = session.doc_type().ok_or(ValidationFailure::NoDocumentType)?;
        self.catalog
            .get(key.as_str())
            .ok_or_else(|| ValidationFailure::UnknownDocumentType(key.to_string()))
    }

    /// Run first-failure-wins validation. Never mutates the session.
    pub fn validate(&self, session: &FormSession) -> Result<(), ValidationFailure> {
        let schema = self.selected_schema(session)?;
        if schema.is_custom() {
            validate_custom(&self.registry, &self.patterns, session, &self.config)
        } else {
            validate_builtin(&self.registry, schema, session, &self.config)
        }
    }

    /// Validate, then assemble the payload.
    pub fn build_payload(&self, session: &FormSession) -> Result<SubmissionPayload, ValidationFailure> {
        self.validate(session)?;
        let schema = self.selected_schema(session)?;
        Ok(if schema.is_custom() {
            assemble_custom(session)
        } else {
            assemble_builtin(schema, session)
        })
    }

    /// Live preview of the session.
    pub fn preview(&self, session: &FormSession) -> String {
        match self.selected_schema(session) {
            Ok(schema) if schema.is_custom() => render_custom(session),
            Ok(schema) => render_builtin(schema, session),
            Err(_) => NO_SELECTION.to_string(),
        }
    }

    /// Custom fields sharing a payload key. Empty outside `CUSTOM` mode.
    pub fn key_collisions(&self, session: &FormSession) -> Vec<KeyCollision> {
        if session.is_custom() {
            detect_key_collisions(session.custom())
        } else {
            Vec::new()
        }
    }
}
