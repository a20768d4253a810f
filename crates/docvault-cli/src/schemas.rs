//! # Schemas Subcommand
//!
//! Lists document types, optionally filtered by group, or shows the fields
//! of one document type.

use anyhow::{bail, Context, Result};
use clap::Args;

use docvault_form::FormEngine;
use docvault_schema::{DocumentGroup, DocumentSchema, FieldKind};

use crate::EXIT_OK;

/// Arguments for `docvault schemas`.
#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Only list document types in this group (e.g. identity, financial).
    #[arg(long, conflicts_with = "show")]
    pub group: Option<String>,

    /// Show the fields of one document type.
    #[arg(long, value_name = "KEY")]
    pub show: Option<String>,
}

/// Execute the schemas subcommand.
pub fn run_schemas(args: &SchemasArgs, engine: &FormEngine) -> Result<u8> {
    if let Some(key) = &args.show {
        let schema = engine
            .catalog()
            .get(key)
            .with_context(|| format!("unknown document type '{key}'"))?;
        print!("{}", describe_schema(schema));
        return Ok(EXIT_OK);
    }

    let group = args
        .group
        .as_deref()
        .map(str::parse::<DocumentGroup>)
        .transpose()?;

    let schemas: Vec<&DocumentSchema> = match group {
        Some(group) => engine.catalog().in_group(group).collect(),
        None => engine.catalog().list().iter().collect(),
    };
    if schemas.is_empty() {
        bail!("no document types in this catalog match");
    }

    for schema in &schemas {
        println!(
            "  {:<16} {:<34} {}",
            schema.key.as_str(),
            schema.label,
            schema.group
        );
    }
    println!();
    println!("Total: {} document types", schemas.len());
    Ok(EXIT_OK)
}

/// Multi-line description of one schema's fields.
pub fn describe_schema(schema: &DocumentSchema) -> String {
    let mut out = format!("{} ({}) [{}]\n", schema.label, schema.key, schema.group);
    if schema.is_custom() {
        out.push_str("  fields are defined at submission time with --custom\n");
        return out;
    }
    for field in &schema.fields {
        let flag = if field.required { "required" } else { "optional" };
        let kind = match field.kind {
            FieldKind::Text => "",
            FieldKind::Textarea => " (multi-line)",
        };
        out.push_str(&format!(
            "  {:<22} {:<24} {:<9} {}{}\n",
            field.name,
            field.label,
            flag,
            field.preset.as_str(),
            kind
        ));
    }
    out
}
