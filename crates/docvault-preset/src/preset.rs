//! # Validation Presets
//!
//! A [`ValidationPreset`] is one reusable rule plus the hints a form needs
//! to render an input for it. Presets are built by the registry and never
//! mutated afterwards.
//!
//! ## Rule kinds
//!
//! | Kind | Check |
//! |------|-------|
//! | `Pattern` | normalized value must fully match a compiled regex |
//! | `DigitCount` | count of ASCII digits (everything else stripped) within bounds |
//! | `MinChars` | trimmed character count at least `n` |

use regex::Regex;
use serde::Serialize;

use crate::key::PresetKey;

/// Keyboard hint for the input bound to a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Plain text keyboard.
    Text,
    /// Digits keypad.
    Numeric,
    /// Email keyboard.
    Email,
    /// Telephone keypad.
    Tel,
}

impl InputMode {
    /// The HTML `inputmode` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Numeric => "numeric",
            Self::Email => "email",
            Self::Tel => "tel",
        }
    }
}

/// How a value is normalized before a pattern is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// Trimmed only.
    Trim,
    /// Trimmed and uppercased.
    Upper,
    /// Uppercased with all whitespace removed.
    UpperCompact,
}

impl Normalize {
    fn apply(self, value: &str) -> String {
        match self {
            Self::Trim => value.trim().to_string(),
            Self::Upper => value.trim().to_uppercase(),
            Self::UpperCompact => value
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_uppercase(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Rule {
    Pattern { regex: Regex, normalize: Normalize },
    DigitCount { min: usize, max: usize },
    MinChars(usize),
}

/// One named validation rule with its presentation hints.
#[derive(Debug, Clone)]
pub struct ValidationPreset {
    key: PresetKey,
    label: &'static str,
    help: &'static str,
    placeholder: &'static str,
    input_mode: InputMode,
    message: &'static str,
    rule: Rule,
}

impl ValidationPreset {
    pub(crate) fn new(
        key: PresetKey,
        label: &'static str,
        help: &'static str,
        placeholder: &'static str,
        input_mode: InputMode,
        message: &'static str,
        rule: Rule,
    ) -> Self {
        Self {
            key,
            label,
            help,
            placeholder,
            input_mode,
            message,
            rule,
        }
    }

    /// Check a value against this preset.
    ///
    /// Returns `Err` with the preset's human-readable message on failure.
    /// Callers pass trimmed, non-empty values; required-ness is not this
    /// function's concern.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let ok = match &self.rule {
            Rule::Pattern { regex, normalize } => regex.is_match(&normalize.apply(value)),
            Rule::DigitCount { min, max } => {
                let digits = value.chars().filter(char::is_ascii_digit).count();
                (*min..=*max).contains(&digits)
            }
            Rule::MinChars(min) => value.trim().chars().count() >= *min,
        };
        if ok {
            Ok(())
        } else {
            Err(self.message)
        }
    }

    /// Identifier of this preset.
    pub fn key(&self) -> PresetKey {
        self.key
    }

    /// Human-readable rule name.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Help text shown under the input.
    pub fn help(&self) -> &'static str {
        self.help
    }

    /// Example value shown in an empty input.
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Keyboard hint.
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// The error message produced on failure.
    pub fn message(&self) -> &'static str {
        self.message
    }
}
