//! # docvault-core — Foundational Types
//!
//! Leaf crate of the docvault workspace. Defines the primitives every other
//! crate shares: document type keys, submission identifiers, file
//! attachments, and the error hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `DocTypeKey` and `SubmissionId`
//!    are validated newtypes. A document type key is never a bare `String`
//!    once it has crossed the input boundary.
//!
//! 2. **Attachments are opaque.** An [`Attachment`] carries its bytes through
//!    validation and payload assembly unmodified. Only its metadata
//!    (name, MIME type, size) is ever inspected or serialized.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `docvault-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod attachment;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use attachment::{format_bytes, Attachment, BYTES_PER_MIB};
pub use error::DocvaultError;
pub use identity::{DocTypeKey, SubmissionId, CUSTOM_DOC_TYPE};
