//! # docvault-form — Form and Submission Controller
//!
//! Turns user input into a validated [`SubmissionPayload`].
//!
//! - **Session** (`session.rs`): immutable [`FormSession`] values driven by
//!   [`FormAction`]s. Switching document type resets entered values and the
//!   attachment; custom document shapes survive.
//! - **Validation** (`validation.rs`): first-failure-wins checks producing
//!   exactly one [`ValidationFailure`].
//! - **Payload** (`payload.rs`): trimmed, non-empty values keyed by field
//!   name, or by [`normalize_key`] of the label for custom documents.
//! - **Preview** (`preview.rs`): plain-text rendering, never authoritative.
//! - **Engine** (`engine.rs`): registry, catalog and config built once.
//! - **Controller** (`controller.rs`): one session bound to an engine, with
//!   submission through the [`Submitter`] seam (`submit.rs`).
//!
//! ## Key Collision Invariant
//!
//! Custom field keys are re-derived from labels at submission time. Two
//! labels that normalize to the same key are always reported by
//! [`detect_key_collisions`]; [`KeyCollisionPolicy`] decides whether they
//! are rejected or the later value wins. `document_name` is reserved and a
//! field mapping onto it is always rejected.
//!
//! ## Crate Policy
//!
//! - Synchronous. No shared mutable state besides the controller's session.
//! - No `.unwrap()` outside tests.

pub mod config;
pub mod controller;
pub mod engine;
pub mod normalize;
pub mod payload;
pub mod preview;
pub mod session;
pub mod submit;
pub mod validation;

pub use config::{ConfigError, FormConfig, KeyCollisionPolicy, DEFAULT_MAX_FILE_MIB};
pub use controller::{FormController, SubmitFailure};
pub use engine::{EngineError, FormEngine};
pub use normalize::normalize_key;
pub use payload::{PayloadFields, SubmissionPayload, DOCUMENT_NAME_KEY};
pub use session::{CustomDocument, CustomFieldId, CustomFieldSpec, FormAction, FormSession, SessionError};
pub use submit::{RecordingSubmitter, SubmissionReceipt, SubmitError, Submitter};
pub use validation::{detect_key_collisions, KeyCollision, ValidationFailure};
