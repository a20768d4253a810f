//! # Preset Keys
//!
//! The single definition of every validation preset identifier. Every
//! `match` on [`PresetKey`] is exhaustive, so adding a preset forces the
//! registry table to define it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::registry::PresetError;

/// Identifier of a validation preset.
///
/// Serialized with its wire name (`AADHAAR_12`, `PAN_10`, ...). Declaration
/// order is catalog order and must match [`PresetKey::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PresetKey {
    /// Person name.
    #[serde(rename = "PERSON_NAME")]
    PersonName,
    /// Free-form postal address.
    #[serde(rename = "ADDRESS_TEXT")]
    AddressText,
    /// Date in `YYYY-MM-DD` form.
    #[serde(rename = "DOB_YYYY_MM_DD")]
    DobYyyyMmDd,
    /// 10-digit mobile number.
    #[serde(rename = "MOBILE_10")]
    Mobile10,
    /// Email address.
    #[serde(rename = "EMAIL")]
    Email,
    /// 6-digit postal PIN code.
    #[serde(rename = "PINCODE_6")]
    Pincode6,
    /// 12-digit Aadhaar number.
    #[serde(rename = "AADHAAR_12")]
    Aadhaar12,
    /// 10-character PAN.
    #[serde(rename = "PAN_10")]
    Pan10,
    /// Passport number.
    #[serde(rename = "PASSPORT")]
    Passport,
    /// Voter EPIC number.
    #[serde(rename = "VOTER_EPIC")]
    VoterEpic,
    /// Bank branch IFSC.
    #[serde(rename = "IFSC")]
    Ifsc,
    /// Bank account number, 9 to 18 digits.
    #[serde(rename = "BANK_ACC_9_18")]
    BankAcc9To18,
    /// 15-character GSTIN.
    #[serde(rename = "GSTIN_15")]
    Gstin15,
    /// 12-digit Universal Account Number.
    #[serde(rename = "UAN_12")]
    Uan12,
    /// Driving licence number.
    #[serde(rename = "DL_ALNUM_13_20")]
    DlAlnum13To20,
    /// Vehicle registration number.
    #[serde(rename = "RC_ALNUM_8_14")]
    RcAlnum8To14,
    /// Policy or reference number.
    #[serde(rename = "POLICY_ALNUM_6_30")]
    PolicyAlnum6To30,
    /// Any short text.
    #[serde(rename = "ANY_TEXT_SHORT")]
    AnyTextShort,
}

/// Total number of presets.
pub const PRESET_COUNT: usize = 18;

impl PresetKey {
    /// Returns all presets in catalog order.
    pub fn all() -> &'static [PresetKey] {
        &[
            Self::PersonName,
            Self::AddressText,
            Self::DobYyyyMmDd,
            Self::Mobile10,
            Self::Email,
            Self::Pincode6,
            Self::Aadhaar12,
            Self::Pan10,
            Self::Passport,
            Self::VoterEpic,
            Self::Ifsc,
            Self::BankAcc9To18,
            Self::Gstin15,
            Self::Uan12,
            Self::DlAlnum13To20,
            Self::RcAlnum8To14,
            Self::PolicyAlnum6To30,
            Self::AnyTextShort,
        ]
    }

    /// Position of this key in [`PresetKey::all`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the wire name. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PersonName => "PERSON_NAME",
            Self::AddressText => "ADDRESS_TEXT",
            Self::DobYyyyMmDd => "DOB_YYYY_MM_DD",
            Self::Mobile10 => "MOBILE_10",
            Self::Email => "EMAIL",
            Self::Pincode6 => "PINCODE_6",
            Self::Aadhaar12 => "AADHAAR_12",
            Self::Pan10 => "PAN_10",
            Self::Passport => "PASSPORT",
            Self::VoterEpic => "VOTER_EPIC",
            Self::Ifsc => "IFSC",
            Self::BankAcc9To18 => "BANK_ACC_9_18",
            Self::Gstin15 => "GSTIN_15",
            Self::Uan12 => "UAN_12",
            Self::DlAlnum13To20 => "DL_ALNUM_13_20",
            Self::RcAlnum8To14 => "RC_ALNUM_8_14",
            Self::PolicyAlnum6To30 => "POLICY_ALNUM_6_30",
            Self::AnyTextShort => "ANY_TEXT_SHORT",
        }
    }
}

impl std::fmt::Display for PresetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetKey {
    type Err = PresetError;

    /// Parse a preset key from its wire name. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| PresetError::UnknownPreset(s.to_string()))
    }
}
