//! # Submit Subcommand
//!
//! Fills a form from command-line arguments, prints the preview to stderr,
//! validates, and submits to stdout or a directory.
//!
//! ## Custom fields
//!
//! `--custom "<Label>:<PRESET>[:optional]=<value>"` adds one field to a
//! `CUSTOM` document. Fields are required unless `:optional` is given.
//!
//! ```bash
//! docvault submit --doc-type CUSTOM --name "Gas Connection" \
//!     --custom "Consumer No:POLICY_ALNUM_6_30=GC12345" \
//!     --custom "Mobile:MOBILE_10:optional="
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;

use docvault_core::Attachment;
use docvault_form::{FormController, FormEngine, SubmitFailure, Submitter};

use crate::sink::{DirectorySubmitter, StdoutSubmitter};
use crate::{EXIT_INVALID, EXIT_OK};

/// A `name=value` pair for a built-in field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldArg {
    /// Field name.
    pub name: String,
    /// Raw value.
    pub value: String,
}

impl FromStr for FieldArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing field name in '{s}'"));
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// One `--custom` field definition with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFieldArg {
    /// Field label as given.
    pub label: String,
    /// Preset wire name, resolved against the registry later.
    pub preset: String,
    /// Whether the field is required.
    pub required: bool,
    /// Raw value.
    pub value: String,
}

impl FromStr for CustomFieldArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (spec, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected Label:PRESET[:optional]=value, got '{s}'"))?;
        let mut parts = spec.split(':');
        let label = parts.next().unwrap_or_default();
        let preset = parts
            .next()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| format!("missing preset in '{s}'"))?;
        let required = match parts.next().map(str::trim) {
            None => true,
            Some("optional") => false,
            Some("required") => true,
            Some(other) => return Err(format!("unknown flag '{other}' in '{s}'")),
        };
        if parts.next().is_some() {
            return Err(format!("too many ':' in '{s}'"));
        }
        Ok(Self {
            label: label.to_string(),
            preset: preset.to_string(),
            required,
            value: value.to_string(),
        })
    }
}

/// Arguments for `docvault submit`.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Document type key, e.g. AADHAAR or CUSTOM.
    #[arg(long)]
    pub doc_type: String,

    /// Built-in field value as name=value. Repeatable.
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<FieldArg>,

    /// Custom document name (CUSTOM only).
    #[arg(long)]
    pub name: Option<String>,

    /// Custom field as "Label:PRESET[:optional]=value" (CUSTOM only). Repeatable.
    #[arg(long = "custom", value_name = "SPEC")]
    pub custom: Vec<CustomFieldArg>,

    /// File to attach.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// MIME type of the attached file.
    #[arg(long, requires = "file")]
    pub mime: Option<String>,

    /// Write submissions into this directory instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Validate and print the payload without submitting.
    #[arg(long)]
    pub dry_run: bool,
}

/// Fill a controller from the arguments. Usage errors are returned as `Err`.
pub fn fill_form<'e>(args: &SubmitArgs, engine: &'e FormEngine) -> Result<FormController<'e>> {
    let mut form = FormController::new(engine);
    form.select_doc_type(&args.doc_type)?;

    if form.session().is_custom() {
        if !args.fields.is_empty() {
            bail!("--field is not used for CUSTOM documents, use --custom");
        }
        if let Some(name) = &args.name {
            form.set_custom_name(name.as_str())?;
        }
        for (index, custom) in args.custom.iter().enumerate() {
            let preset = engine
                .registry()
                .resolve(&custom.preset)
                .with_context(|| format!("custom field '{}'", custom.label))?;
            let id = match index {
                // Entering CUSTOM seeds the first field.
                0 => form
                    .session()
                    .custom()
                    .fields
                    .first()
                    .map(|f| f.id)
                    .ok_or_else(|| anyhow!("custom document has no fields"))?,
                _ => form.add_custom_field()?,
            };
            form.set_custom_label(id, custom.label.as_str())?;
            form.set_custom_preset(id, preset)?;
            form.set_custom_required(id, custom.required)?;
            form.set_custom_value(id, custom.value.as_str())?;
        }
    } else {
        if args.name.is_some() || !args.custom.is_empty() {
            bail!("--name and --custom only apply to CUSTOM documents");
        }
        for field in &args.fields {
            form.set_value(&field.name, field.value.as_str())?;
        }
    }

    if let Some(path) = &args.file {
        let attachment = Attachment::from_path(path, args.mime.clone())
            .with_context(|| format!("failed to read attachment {}", path.display()))?;
        form.attach(attachment)?;
    }
    Ok(form)
}

/// One warning line per pair of custom fields sharing a payload key.
fn collision_warnings(form: &FormController<'_>) -> Vec<String> {
    form.key_collisions()
        .into_iter()
        .map(|c| {
            format!(
                "warning: fields \"{}\" and \"{}\" both map to key \"{}\"",
                c.first, c.second, c.key
            )
        })
        .collect()
}

/// Execute the submit subcommand.
pub fn run_submit(args: &SubmitArgs, engine: &FormEngine) -> Result<u8> {
    let mut form = fill_form(args, engine)?;

    eprintln!("{}", form.preview());
    for warning in collision_warnings(&form) {
        eprintln!("{warning}");
    }

    if args.dry_run {
        return match form.build_payload() {
            Ok(payload) => {
                println!("{}", serde_json::to_string_pretty(&payload)?);
                Ok(EXIT_OK)
            }
            Err(failure) => {
                eprintln!("{failure}");
                Ok(EXIT_INVALID)
            }
        };
    }

    let submitter: Box<dyn Submitter> = match &args.out {
        Some(dir) => Box::new(DirectorySubmitter::new(dir)),
        None => Box::new(StdoutSubmitter),
    };

    match form.submit(submitter.as_ref()) {
        Ok(receipt) => {
            if let Some(dir) = &args.out {
                eprintln!(
                    "submitted {} to {}",
                    receipt.submission_id,
                    dir.join(format!("{}.json", receipt.submission_id.as_uuid()))
                        .display()
                );
            }
            Ok(EXIT_OK)
        }
        Err(SubmitFailure::Invalid(failure)) => {
            eprintln!("{failure}");
            Ok(EXIT_INVALID)
        }
        Err(SubmitFailure::Collaborator(err)) => Err(err).context("submission failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docvault_form::FormConfig;

    fn engine() -> FormEngine {
        FormEngine::builtin(FormConfig::default()).unwrap()
    }

    fn args(doc_type: &str) -> SubmitArgs {
        SubmitArgs {
            doc_type: doc_type.into(),
            fields: Vec::new(),
            name: None,
            custom: Vec::new(),
            file: None,
            mime: None,
            out: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_field_arg_parse() {
        let arg: FieldArg = "name=Ajay Kedar".parse().unwrap();
        assert_eq!(arg.name, "name");
        assert_eq!(arg.value, "Ajay Kedar");
        let with_eq: FieldArg = "note=a=b".parse().unwrap();
        assert_eq!(with_eq.value, "a=b");
        assert!("novalue".parse::<FieldArg>().is_err());
        assert!("=x".parse::<FieldArg>().is_err());
    }

    #[test]
    fn test_custom_arg_parse() {
        let arg: CustomFieldArg = "Consumer No:POLICY_ALNUM_6_30=GC12345".parse().unwrap();
        assert_eq!(
            arg,
            CustomFieldArg {
                label: "Consumer No".into(),
                preset: "POLICY_ALNUM_6_30".into(),
                required: true,
                value: "GC12345".into(),
            }
        );
        let optional: CustomFieldArg = "Mobile:MOBILE_10:optional=".parse().unwrap();
        assert!(!optional.required);
        assert_eq!(optional.value, "");
    }

    #[test]
    fn test_custom_arg_parse_errors() {
        assert!("Label=x".parse::<CustomFieldArg>().is_err());
        assert!("Label:PAN_10:maybe=x".parse::<CustomFieldArg>().is_err());
        assert!("Label:PAN_10:optional:extra=x".parse::<CustomFieldArg>().is_err());
        assert!("Label:PAN_10".parse::<CustomFieldArg>().is_err());
    }

    #[test]
    fn test_fill_builtin() {
        let engine = engine();
        let mut a = args("AADHAAR");
        a.fields = vec![
            "name=Ajay Kedar".parse().unwrap(),
            "aadhaar_number=123456789012".parse().unwrap(),
        ];
        let form = fill_form(&a, &engine).unwrap();
        let payload = form.build_payload().unwrap();
        assert_eq!(payload.fields.get("aadhaar_number"), Some("123456789012"));
    }

    #[test]
    fn test_fill_custom() {
        let engine = engine();
        let mut a = args("CUSTOM");
        a.name = Some("Gas Connection".into());
        a.custom = vec![
            "Consumer No:POLICY_ALNUM_6_30=GC12345".parse().unwrap(),
            "Mobile:MOBILE_10:optional=".parse().unwrap(),
        ];
        let form = fill_form(&a, &engine).unwrap();
        assert_eq!(form.session().custom().fields.len(), 2);
        let payload = form.build_payload().unwrap();
        let fields: Vec<_> = payload.fields.iter().collect();
        assert_eq!(
            fields,
            vec![("document_name", "Gas Connection"), ("consumer_no", "GC12345")]
        );
    }

    #[test]
    fn test_collision_reported_once() {
        let engine = engine();
        let mut a = args("CUSTOM");
        a.name = Some("Contacts".into());
        a.custom = vec![
            "Phone:MOBILE_10=9876543210".parse().unwrap(),
            "phone:MOBILE_10=9123456780".parse().unwrap(),
        ];
        let form = fill_form(&a, &engine).unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(
            collision_warnings(&form),
            vec!["warning: fields \"Phone\" and \"phone\" both map to key \"phone\"".to_string()]
        );
        assert!(collision_warnings(&fill_form(&args("PAN"), &engine).unwrap()).is_empty());
    }

    #[test]
    fn test_fill_rejects_misplaced_flags() {
        let engine = engine();
        let mut a = args("PAN");
        a.name = Some("x".into());
        assert!(fill_form(&a, &engine).is_err());

        let mut b = args("CUSTOM");
        b.fields = vec!["name=x".parse().unwrap()];
        assert!(fill_form(&b, &engine).is_err());
    }

    #[test]
    fn test_fill_unknown_inputs() {
        let engine = engine();
        assert!(fill_form(&args("LIBRARY_CARD"), &engine).is_err());

        let mut a = args("PAN");
        a.fields = vec!["aadhaar_number=1".parse().unwrap()];
        assert!(fill_form(&a, &engine).is_err());

        let mut c = args("CUSTOM");
        c.custom = vec!["Label:NOPE=x".parse().unwrap()];
        assert!(fill_form(&c, &engine).is_err());
    }

    #[test]
    fn test_run_submit_invalid_exit_code() {
        let engine = engine();
        let mut a = args("PAN");
        a.dry_run = true;
        assert_eq!(run_submit(&a, &engine).unwrap(), EXIT_INVALID);
    }

    #[test]
    fn test_run_submit_to_directory() {
        let engine = engine();
        let dir = tempfile::tempdir().unwrap();
        let attachment = dir.path().join("scan.txt");
        std::fs::write(&attachment, b"scan").unwrap();

        let mut a = args("UAN");
        a.fields = vec![
            "uan=100200300400".parse().unwrap(),
            "name=Ajay Kedar".parse().unwrap(),
        ];
        a.file = Some(attachment);
        a.out = Some(dir.path().join("out"));
        assert_eq!(run_submit(&a, &engine).unwrap(), EXIT_OK);

        let written: Vec<_> = std::fs::read_dir(dir.path().join("out"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(written.len(), 2);
        assert!(written.iter().any(|n| n.ends_with(".json")));
        assert!(written.iter().any(|n| n.ends_with("-scan.txt")));
    }
}
