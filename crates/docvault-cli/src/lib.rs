//! # docvault-cli — Command-Line Interface
//!
//! Provides the `docvault` binary on top of the form engine.
//!
//! ## Subcommands
//!
//! - `docvault presets` — list validation presets.
//! - `docvault check <PRESET> <VALUE>` — run one preset against a value.
//! - `docvault schemas` — list document types, or one type's fields.
//! - `docvault submit` — fill, validate, preview and submit a document.
//!
//! ```bash
//! docvault submit --doc-type AADHAAR \
//!     --field name="Ajay Kedar" --field aadhaar_number=123456789012
//! docvault submit --doc-type CUSTOM --name "Gas Connection" \
//!     --custom "Consumer No:POLICY_ALNUM_6_30=GC12345" --out ./submissions
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` usage or IO error, `2` the input was rejected by
//! validation.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to the domain crates; no validation logic here.

pub mod check;
pub mod presets;
pub mod schemas;
pub mod sink;
pub mod submit;

use std::path::Path;

use anyhow::{Context, Result};

use docvault_form::{FormConfig, FormEngine};
use docvault_preset::PresetRegistry;
use docvault_schema::{builtin, SchemaCatalog};

/// Everything went through.
pub const EXIT_OK: u8 = 0;

/// Usage, configuration or IO error.
pub const EXIT_ERROR: u8 = 1;

/// The input was rejected by validation.
pub const EXIT_INVALID: u8 = 2;

/// Build the form engine from optional config and catalog files.
///
/// Document types from a catalog file are added after the built-in ones;
/// a key that clashes with a built-in type is rejected. Without a config
/// file the defaults apply.
pub fn load_engine(config: Option<&Path>, catalog: Option<&Path>) -> Result<FormEngine> {
    let config = match config {
        Some(path) => FormConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => FormConfig::default(),
    };

    let registry = PresetRegistry::new().context("failed to build preset registry")?;
    let catalog = match catalog {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            let extra = SchemaCatalog::parse_definitions(&yaml)
                .with_context(|| format!("invalid catalog {}", path.display()))?;
            let mut defs = builtin::definitions();
            defs.extend(extra);
            SchemaCatalog::from_definitions(defs, &registry)
                .with_context(|| format!("invalid catalog {}", path.display()))?
        }
        None => SchemaCatalog::builtin(&registry).context("failed to build built-in catalog")?,
    };

    tracing::debug!(schemas = catalog.len(), "catalog loaded");
    FormEngine::new(registry, catalog, config).context("failed to build form engine")
}
