//! # docvault-preset — Validator Registry
//!
//! A fixed catalog of named validation rules ("presets"). Each preset pairs
//! a pure matching rule with its error message and presentation hints
//! (label, help text, placeholder, input mode).
//!
//! ## Dispatch
//!
//! Preset identifiers form the closed enum [`PresetKey`]. The registry is
//! built once from that enum; lookups by key are total, and lookups by wire
//! name ([`PresetRegistry::get_by_name`]) are the only place a string can
//! fail to resolve.
//!
//! ## Crate Policy
//!
//! - Depends only on `docvault-core` internally.
//! - Preset rules never panic. Malformed input yields the preset's message.
//! - Bounds and character classes are part of the public contract of every
//!   document schema. Changing one changes what every schema accepts.

pub mod key;
pub mod preset;
pub mod registry;

pub use key::{PresetKey, PRESET_COUNT};
pub use preset::{InputMode, Normalize, ValidationPreset};
pub use registry::{PresetError, PresetRegistry};
