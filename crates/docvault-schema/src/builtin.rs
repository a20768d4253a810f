//! # Built-in Document Types
//!
//! The compiled-in catalog. Order here is picker order. `CUSTOM` is last and
//! has no static fields; its fields are authored by the user at runtime.

use crate::schema::{DocumentGroup, FieldDef, FieldKind, SchemaDef};

/// Keys of the built-in document types, in catalog order.
pub const BUILTIN_KEYS: [&str; 15] = [
    "AADHAAR",
    "PAN",
    "PASSPORT",
    "VOTER_ID",
    "DRIVING_LICENSE",
    "VEHICLE_RC",
    "GSTIN",
    "UAN",
    "BANK",
    "BIRTH_CERT",
    "EDU_MARKSHEET",
    "INSURANCE",
    "COMPANY_ID",
    "UTILITY_BILL",
    "CUSTOM",
];

fn req(name: &str, label: &str, preset: &str) -> FieldDef {
    FieldDef::new(name, label, true, preset, FieldKind::Text)
}

fn opt(name: &str, label: &str, preset: &str) -> FieldDef {
    FieldDef::new(name, label, false, preset, FieldKind::Text)
}

fn opt_area(name: &str, label: &str, preset: &str) -> FieldDef {
    FieldDef::new(name, label, false, preset, FieldKind::Textarea)
}

fn doc(key: &str, label: &str, group: DocumentGroup, fields: Vec<FieldDef>) -> SchemaDef {
    SchemaDef {
        key: key.to_string(),
        label: label.to_string(),
        group,
        fields,
    }
}

/// Definitions of every built-in document type.
pub fn definitions() -> Vec<SchemaDef> {
    use DocumentGroup::*;

    vec![
        doc(
            "AADHAAR",
            "Aadhaar Card",
            Identity,
            vec![
                req("name", "Full Name", "PERSON_NAME"),
                req("aadhaar_number", "Aadhaar Number", "AADHAAR_12"),
                opt("dob", "Date of Birth", "DOB_YYYY_MM_DD"),
                opt_area("address", "Address", "ADDRESS_TEXT"),
            ],
        ),
        doc(
            "PAN",
            "PAN Card",
            Identity,
            vec![
                req("pan_number", "PAN Number", "PAN_10"),
                req("name", "Full Name", "PERSON_NAME"),
                opt("father_name", "Father's Name", "PERSON_NAME"),
                opt("dob", "Date of Birth", "DOB_YYYY_MM_DD"),
            ],
        ),
        doc(
            "PASSPORT",
            "Passport",
            Identity,
            vec![
                req("passport_number", "Passport Number", "PASSPORT"),
                req("name", "Full Name", "PERSON_NAME"),
                opt("dob", "Date of Birth", "DOB_YYYY_MM_DD"),
                opt("expiry_date", "Expiry Date", "DOB_YYYY_MM_DD"),
                opt("place_of_issue", "Place of Issue", "ANY_TEXT_SHORT"),
            ],
        ),
        doc(
            "VOTER_ID",
            "Voter ID",
            Identity,
            vec![
                req("epic_number", "EPIC Number", "VOTER_EPIC"),
                req("name", "Full Name", "PERSON_NAME"),
                opt_area("address", "Address", "ADDRESS_TEXT"),
            ],
        ),
        doc(
            "DRIVING_LICENSE",
            "Driving Licence",
            Identity,
            vec![
                req("dl_number", "Licence Number", "DL_ALNUM_13_20"),
                req("name", "Full Name", "PERSON_NAME"),
                opt("dob", "Date of Birth", "DOB_YYYY_MM_DD"),
                opt("valid_till", "Valid Till", "DOB_YYYY_MM_DD"),
            ],
        ),
        doc(
            "VEHICLE_RC",
            "Vehicle Registration Certificate",
            Vehicle,
            vec![
                req("rc_number", "Registration Number", "RC_ALNUM_8_14"),
                req("owner_name", "Owner Name", "PERSON_NAME"),
                opt("vehicle_model", "Vehicle Model", "ANY_TEXT_SHORT"),
            ],
        ),
        doc(
            "GSTIN",
            "GST Registration",
            Business,
            vec![
                req("gstin", "GSTIN", "GSTIN_15"),
                req("business_name", "Business Name", "ANY_TEXT_SHORT"),
                opt_area("address", "Business Address", "ADDRESS_TEXT"),
            ],
        ),
        doc(
            "UAN",
            "UAN (Provident Fund)",
            Employment,
            vec![
                req("uan", "UAN", "UAN_12"),
                req("name", "Full Name", "PERSON_NAME"),
                opt("mobile", "Registered Mobile", "MOBILE_10"),
            ],
        ),
        doc(
            "BANK",
            "Bank Account",
            Financial,
            vec![
                req("account_holder", "Account Holder", "PERSON_NAME"),
                req("account_number", "Account Number", "BANK_ACC_9_18"),
                req("ifsc", "IFSC", "IFSC"),
                opt("bank_name", "Bank Name", "ANY_TEXT_SHORT"),
            ],
        ),
        doc(
            "BIRTH_CERT",
            "Birth Certificate",
            Civil,
            vec![
                req("name", "Full Name", "PERSON_NAME"),
                req("dob", "Date of Birth", "DOB_YYYY_MM_DD"),
                opt("place_of_birth", "Place of Birth", "ANY_TEXT_SHORT"),
                opt("registration_number", "Registration Number", "POLICY_ALNUM_6_30"),
            ],
        ),
        doc(
            "EDU_MARKSHEET",
            "Education Marksheet",
            Education,
            vec![
                req("student_name", "Student Name", "PERSON_NAME"),
                req("board", "Board / University", "ANY_TEXT_SHORT"),
                opt("roll_number", "Roll Number", "POLICY_ALNUM_6_30"),
                opt("year_of_passing", "Year of Passing", "ANY_TEXT_SHORT"),
            ],
        ),
        doc(
            "INSURANCE",
            "Insurance Policy",
            Financial,
            vec![
                req("policy_number", "Policy Number", "POLICY_ALNUM_6_30"),
                req("insurer", "Insurer", "ANY_TEXT_SHORT"),
                opt("insured_name", "Insured Name", "PERSON_NAME"),
                opt("expiry_date", "Expiry Date", "DOB_YYYY_MM_DD"),
            ],
        ),
        doc(
            "COMPANY_ID",
            "Company ID Card",
            Employment,
            vec![
                req("employee_name", "Employee Name", "PERSON_NAME"),
                req("company_name", "Company Name", "ANY_TEXT_SHORT"),
                opt("employee_id", "Employee ID", "POLICY_ALNUM_6_30"),
                opt("work_email", "Work Email", "EMAIL"),
            ],
        ),
        doc(
            "UTILITY_BILL",
            "Utility Bill",
            Utility,
            vec![
                req("consumer_number", "Consumer Number", "POLICY_ALNUM_6_30"),
                req("provider", "Provider", "ANY_TEXT_SHORT"),
                opt_area("billing_address", "Billing Address", "ADDRESS_TEXT"),
                opt("mobile", "Registered Mobile", "MOBILE_10"),
                opt("pincode", "PIN Code", "PINCODE_6"),
            ],
        ),
        doc("CUSTOM", "Custom Document", Other, Vec::new()),
    ]
}
