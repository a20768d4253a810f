//! # Error Types — Structured Error Hierarchy
//!
//! Top-level error type shared by the docvault crates. Crate-local error
//! enums (`PresetError`, `CatalogError`, `SessionError`, ...) live next to
//! the code that raises them; this type covers the primitives defined here.
//!
//! ## Design
//!
//! - Identifier errors carry the rejected input verbatim.
//! - Nothing here is a user-facing validation message. Those are produced
//!   by the form controller as plain strings.

use thiserror::Error;

/// Top-level error type for docvault.
#[derive(Error, Debug)]
pub enum DocvaultError {
    /// An identifier did not satisfy its format.
    #[error("invalid {kind}: {value:?}")]
    InvalidIdentifier {
        /// Which identifier was being parsed (e.g. "document type key").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
