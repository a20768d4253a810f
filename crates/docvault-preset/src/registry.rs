//! # Preset Registry
//!
//! Builds every [`ValidationPreset`] once, compiling its pattern, and serves
//! lookups for the rest of the process lifetime.
//!
//! ## Preset table
//!
//! | Key | Rule |
//! |-----|------|
//! | PERSON_NAME | `^[A-Za-z][A-Za-z\s.'-]{1,70}$` |
//! | ADDRESS_TEXT | at least 10 characters |
//! | DOB_YYYY_MM_DD | `^[0-9]{4}-[0-9]{2}-[0-9]{2}$` |
//! | MOBILE_10 | exactly 10 digits |
//! | EMAIL | `^[^\s@]+@[^\s@]+\.[^\s@]+$` |
//! | PINCODE_6 | exactly 6 digits |
//! | AADHAAR_12 | exactly 12 digits |
//! | PAN_10 | uppercased `^[A-Z]{5}[0-9]{4}[A-Z]$` |
//! | PASSPORT | uppercased `^[A-Z][0-9]{7}$` |
//! | VOTER_EPIC | uppercased `^[A-Z]{3}[0-9]{7}$` |
//! | IFSC | uppercased `^[A-Z]{4}0[A-Z0-9]{6}$` |
//! | BANK_ACC_9_18 | 9 to 18 digits |
//! | GSTIN_15 | uppercased `^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$` |
//! | UAN_12 | exactly 12 digits |
//! | DL_ALNUM_13_20 | compacted `^[A-Z0-9]{13,20}$` |
//! | RC_ALNUM_8_14 | compacted `^[A-Z0-9]{8,14}$` |
//! | POLICY_ALNUM_6_30 | compacted `^[A-Z0-9]{6,30}$` |
//! | ANY_TEXT_SHORT | at least 2 characters |

use regex::Regex;
use thiserror::Error;

use crate::key::PresetKey;
use crate::preset::{InputMode, Normalize, Rule, ValidationPreset};

/// Errors raised while building or querying the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// No preset has this wire name.
    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),

    /// A preset pattern failed to compile.
    #[error("preset {key} has an invalid pattern: {reason}")]
    InvalidPattern {
        /// The preset whose pattern is broken.
        key: PresetKey,
        /// Compiler message.
        reason: String,
    },
}

enum RuleDef {
    Pattern(&'static str, Normalize),
    DigitCount(usize, usize),
    MinChars(usize),
}

struct PresetDef {
    label: &'static str,
    help: &'static str,
    placeholder: &'static str,
    input_mode: InputMode,
    message: &'static str,
    rule: RuleDef,
}

fn definition(key: PresetKey) -> PresetDef {
    use InputMode::{Email, Numeric, Tel, Text};
    use RuleDef::{DigitCount, MinChars, Pattern};

    let (label, help, placeholder, input_mode, message, rule) = match key {
        PresetKey::PersonName => (
            "Person name",
            "Letters, spaces, dots, apostrophes and hyphens",
            "Ajay Kedar",
            Text,
            "Enter a valid name (letters, spaces, . ' - only)",
            Pattern(r"^[A-Za-z][A-Za-z\s.'-]{1,70}$", Normalize::Trim),
        ),
        PresetKey::AddressText => (
            "Address",
            "House, street, city and state",
            "12 MG Road, Pune, Maharashtra",
            Text,
            "Address must be at least 10 characters",
            MinChars(10),
        ),
        PresetKey::DobYyyyMmDd => (
            "Date (YYYY-MM-DD)",
            "Year, month and day separated by hyphens",
            "1990-01-31",
            Text,
            "Use the format YYYY-MM-DD",
            Pattern(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$", Normalize::Trim),
        ),
        PresetKey::Mobile10 => (
            "Mobile number",
            "10-digit mobile number",
            "9876543210",
            Tel,
            "Mobile number must be 10 digits",
            DigitCount(10, 10),
        ),
        PresetKey::Email => (
            "Email",
            "An address like name@example.com",
            "name@example.com",
            Email,
            "Enter a valid email address",
            Pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", Normalize::Trim),
        ),
        PresetKey::Pincode6 => (
            "PIN code",
            "6-digit postal code",
            "411001",
            Numeric,
            "PIN code must be 6 digits",
            DigitCount(6, 6),
        ),
        PresetKey::Aadhaar12 => (
            "Aadhaar number",
            "12-digit Aadhaar number, spaces allowed",
            "1234 5678 9012",
            Numeric,
            "Aadhaar number must be 12 digits",
            DigitCount(12, 12),
        ),
        PresetKey::Pan10 => (
            "PAN",
            "5 letters, 4 digits, 1 letter",
            "ABCDE1234F",
            Text,
            "PAN must be 5 letters, 4 digits, 1 letter (e.g. ABCDE1234F)",
            Pattern(r"^[A-Z]{5}[0-9]{4}[A-Z]$", Normalize::Upper),
        ),
        PresetKey::Passport => (
            "Passport number",
            "1 letter followed by 7 digits",
            "K1234567",
            Text,
            "Passport number must be 1 letter followed by 7 digits",
            Pattern(r"^[A-Z][0-9]{7}$", Normalize::Upper),
        ),
        PresetKey::VoterEpic => (
            "Voter EPIC number",
            "3 letters followed by 7 digits",
            "ABC1234567",
            Text,
            "EPIC number must be 3 letters followed by 7 digits",
            Pattern(r"^[A-Z]{3}[0-9]{7}$", Normalize::Upper),
        ),
        PresetKey::Ifsc => (
            "IFSC",
            "4 letters, a zero, then 6 letters or digits",
            "HDFC0001234",
            Text,
            "IFSC must be 4 letters, 0, then 6 letters/digits (e.g. HDFC0001234)",
            Pattern(r"^[A-Z]{4}0[A-Z0-9]{6}$", Normalize::Upper),
        ),
        PresetKey::BankAcc9To18 => (
            "Bank account number",
            "9 to 18 digits",
            "123456789012",
            Numeric,
            "Account number must be 9 to 18 digits",
            DigitCount(9, 18),
        ),
        PresetKey::Gstin15 => (
            "GSTIN",
            "15-character GST identification number",
            "27ABCDE1234F1Z5",
            Text,
            "Enter a valid 15-character GSTIN",
            Pattern(
                r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$",
                Normalize::Upper,
            ),
        ),
        PresetKey::Uan12 => (
            "UAN",
            "12-digit Universal Account Number",
            "100123456789",
            Numeric,
            "UAN must be 12 digits",
            DigitCount(12, 12),
        ),
        PresetKey::DlAlnum13To20 => (
            "Driving licence number",
            "13 to 20 letters or digits, spaces ignored",
            "MH12 20110012345",
            Text,
            "Licence number must be 13 to 20 letters/digits",
            Pattern(r"^[A-Z0-9]{13,20}$", Normalize::UpperCompact),
        ),
        PresetKey::RcAlnum8To14 => (
            "Registration number",
            "8 to 14 letters or digits, spaces ignored",
            "MH12 AB 1234",
            Text,
            "RC number must be 8 to 14 letters/digits",
            Pattern(r"^[A-Z0-9]{8,14}$", Normalize::UpperCompact),
        ),
        PresetKey::PolicyAlnum6To30 => (
            "Reference number",
            "6 to 30 letters or digits, spaces ignored",
            "POL123456",
            Text,
            "Must be 6 to 30 letters/digits",
            Pattern(r"^[A-Z0-9]{6,30}$", Normalize::UpperCompact),
        ),
        PresetKey::AnyTextShort => (
            "Short text",
            "At least 2 characters",
            "",
            Text,
            "Must be at least 2 characters",
            MinChars(2),
        ),
    };

    PresetDef {
        label,
        help,
        placeholder,
        input_mode,
        message,
        rule,
    }
}

/// The built set of presets, indexed by [`PresetKey`].
///
/// `PresetRegistry` is `Send + Sync` and read-only after construction;
/// share it by reference.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: Vec<ValidationPreset>,
}

impl PresetRegistry {
    /// Build every preset, compiling its pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::InvalidPattern`] if a pattern does not compile.
    pub fn new() -> Result<Self, PresetError> {
        let mut presets = Vec::with_capacity(PresetKey::all().len());
        for &key in PresetKey::all() {
            let def = definition(key);
            let rule = match def.rule {
                RuleDef::Pattern(pattern, normalize) => Rule::Pattern {
                    regex: Regex::new(pattern).map_err(|e| PresetError::InvalidPattern {
                        key,
                        reason: e.to_string(),
                    })?,
                    normalize,
                },
                RuleDef::DigitCount(min, max) => Rule::DigitCount { min, max },
                RuleDef::MinChars(min) => Rule::MinChars(min),
            };
            presets.push(ValidationPreset::new(
                key,
                def.label,
                def.help,
                def.placeholder,
                def.input_mode,
                def.message,
                rule,
            ));
        }
        tracing::debug!(count = presets.len(), "preset registry built");
        Ok(Self { presets })
    }

    /// Look up a preset by key. Always succeeds.
    pub fn get(&self, key: PresetKey) -> &ValidationPreset {
        &self.presets[key.index()]
    }

    /// Look up a preset by its wire name (e.g. `"AADHAAR_12"`).
    pub fn get_by_name(&self, name: &str) -> Option<&ValidationPreset> {
        name.parse::<PresetKey>().ok().map(|key| self.get(key))
    }

    /// Resolve a wire name, failing with [`PresetError::UnknownPreset`].
    pub fn resolve(&self, name: &str) -> Result<PresetKey, PresetError> {
        name.parse()
    }

    /// Presets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationPreset> {
        self.presets.iter()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Always false for a built registry.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PresetRegistry {
        PresetRegistry::new().unwrap()
    }

    fn ok(key: PresetKey, value: &str) {
        assert_eq!(
            registry().get(key).check(value),
            Ok(()),
            "{key} should accept {value:?}"
        );
    }

    fn bad(key: PresetKey, value: &str) {
        assert!(
            registry().get(key).check(value).is_err(),
            "{key} should reject {value:?}"
        );
    }

    #[test]
    fn test_registry_builds_every_preset() {
        let r = registry();
        assert_eq!(r.len(), PresetKey::all().len());
        for key in PresetKey::all() {
            assert_eq!(r.get(*key).key(), *key);
        }
    }

    #[test]
    fn test_get_by_name() {
        let r = registry();
        assert_eq!(r.get_by_name("IFSC").map(|p| p.key()), Some(PresetKey::Ifsc));
        assert!(r.get_by_name("ifsc").is_none());
        assert_eq!(
            r.resolve("MISSING"),
            Err(PresetError::UnknownPreset("MISSING".to_string()))
        );
    }

    #[test]
    fn test_every_preset_has_message_and_label() {
        for p in registry().iter() {
            assert!(!p.message().is_empty(), "{} has no message", p.key());
            assert!(!p.label().is_empty(), "{} has no label", p.key());
        }
    }

    #[test]
    fn test_person_name() {
        ok(PresetKey::PersonName, "Ajay Kedar");
        ok(PresetKey::PersonName, "D'Souza-Lee Jr.");
        ok(PresetKey::PersonName, "Al");
        ok(PresetKey::PersonName, &format!("A{}", "b".repeat(70)));
        bad(PresetKey::PersonName, &format!("A{}", "b".repeat(71)));
        bad(PresetKey::PersonName, "A");
        bad(PresetKey::PersonName, ".Ajay");
        bad(PresetKey::PersonName, "Ajay 2");
    }

    #[test]
    fn test_address_text() {
        ok(PresetKey::AddressText, "12 MG Road");
        bad(PresetKey::AddressText, "12 MG Rd");
        bad(PresetKey::AddressText, "   short    ");
    }

    #[test]
    fn test_dob() {
        ok(PresetKey::DobYyyyMmDd, "1990-01-31");
        bad(PresetKey::DobYyyyMmDd, "31-01-1990");
        bad(PresetKey::DobYyyyMmDd, "1990/01/31");
        bad(PresetKey::DobYyyyMmDd, "1990-1-31");
    }

    #[test]
    fn test_mobile() {
        ok(PresetKey::Mobile10, "9876543210");
        ok(PresetKey::Mobile10, "98765 43210");
        bad(PresetKey::Mobile10, "987654321");
        bad(PresetKey::Mobile10, "919876543210");
    }

    #[test]
    fn test_email() {
        ok(PresetKey::Email, "name@example.com");
        ok(PresetKey::Email, "a.b+c@mail.co.in");
        bad(PresetKey::Email, "name@example");
        bad(PresetKey::Email, "na me@example.com");
        bad(PresetKey::Email, "name@@example.com");
    }

    #[test]
    fn test_pincode() {
        ok(PresetKey::Pincode6, "411001");
        bad(PresetKey::Pincode6, "41100");
    }

    #[test]
    fn test_aadhaar() {
        ok(PresetKey::Aadhaar12, "123456789012");
        ok(PresetKey::Aadhaar12, "1234 5678 9012");
        bad(PresetKey::Aadhaar12, "12345");
    }

    #[test]
    fn test_pan() {
        ok(PresetKey::Pan10, "ABCDE1234F");
        ok(PresetKey::Pan10, "abcde1234f");
        bad(PresetKey::Pan10, "ABCDE123F");
        bad(PresetKey::Pan10, "ABCD12345F");
    }

    #[test]
    fn test_passport() {
        ok(PresetKey::Passport, "K1234567");
        bad(PresetKey::Passport, "K123456");
        bad(PresetKey::Passport, "KK123456");
    }

    #[test]
    fn test_voter_epic() {
        ok(PresetKey::VoterEpic, "ABC1234567");
        bad(PresetKey::VoterEpic, "AB12345678");
    }

    #[test]
    fn test_ifsc() {
        ok(PresetKey::Ifsc, "HDFC0001234");
        ok(PresetKey::Ifsc, "sbin0abc123");
        bad(PresetKey::Ifsc, "HDFC1001234");
        bad(PresetKey::Ifsc, "HDFC000123");
    }

    #[test]
    fn test_bank_account_boundaries() {
        ok(PresetKey::BankAcc9To18, &"1".repeat(9));
        ok(PresetKey::BankAcc9To18, &"1".repeat(18));
        bad(PresetKey::BankAcc9To18, &"1".repeat(8));
        bad(PresetKey::BankAcc9To18, &"1".repeat(19));
    }

    #[test]
    fn test_gstin() {
        ok(PresetKey::Gstin15, "27ABCDE1234F1Z5");
        ok(PresetKey::Gstin15, "27abcde1234f1z5");
        bad(PresetKey::Gstin15, "27ABCDE1234F0Z5");
        bad(PresetKey::Gstin15, "27ABCDE1234F1X5");
    }

    #[test]
    fn test_uan() {
        ok(PresetKey::Uan12, "100123456789");
        bad(PresetKey::Uan12, "10012345678");
    }

    #[test]
    fn test_driving_licence() {
        ok(PresetKey::DlAlnum13To20, "MH12 20110012345");
        ok(PresetKey::DlAlnum13To20, "mh1220110012345");
        bad(PresetKey::DlAlnum13To20, "MH12 2011");
        bad(PresetKey::DlAlnum13To20, "MH12-20110012345");
    }

    #[test]
    fn test_vehicle_rc() {
        ok(PresetKey::RcAlnum8To14, "MH12 AB 1234");
        bad(PresetKey::RcAlnum8To14, "MH12AB");
        bad(PresetKey::RcAlnum8To14, "MH12AB12345678X");
    }

    #[test]
    fn test_policy() {
        ok(PresetKey::PolicyAlnum6To30, "GC12345");
        ok(PresetKey::PolicyAlnum6To30, "pol 123 456");
        bad(PresetKey::PolicyAlnum6To30, "GC123");
        bad(PresetKey::PolicyAlnum6To30, "GC-12345");
    }

    #[test]
    fn test_any_text_short() {
        ok(PresetKey::AnyTextShort, "ok");
        bad(PresetKey::AnyTextShort, "x");
        bad(PresetKey::AnyTextShort, " x ");
    }

    #[test]
    fn test_failure_returns_preset_message() {
        let r = registry();
        let preset = r.get(PresetKey::Pan10);
        assert_eq!(preset.check("nope"), Err(preset.message()));
    }
}
