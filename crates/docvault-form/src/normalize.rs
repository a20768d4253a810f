//! # Payload Key Normalization
//!
//! Custom fields are keyed in the payload by a slug of their label. The
//! slug is recomputed on every assembly, never cached per field, so two
//! labels with the same slug collide (see [`crate::validation::detect_key_collisions`]).

/// Maximum length of a normalized key, in characters.
pub const MAX_KEY_LEN: usize = 60;

/// Key used when a label normalizes to nothing.
pub const FALLBACK_KEY: &str = "field";

/// Turn a field label into a payload key.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `_`, trims leading and trailing `_`, truncates to
/// [`MAX_KEY_LEN`], and falls back to [`FALLBACK_KEY`] if nothing is left.
/// Truncation happens after trimming, so a cut landing right after a
/// separator keeps the trailing `_`.
pub fn normalize_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut pending_sep = false;
    for c in label.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !key.is_empty() {
                key.push('_');
            }
            pending_sep = false;
            key.push(c);
        } else {
            pending_sep = true;
        }
    }
    if key.is_empty() {
        return FALLBACK_KEY.to_string();
    }
    key.chars().take(MAX_KEY_LEN).collect()
}
