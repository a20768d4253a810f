//! # docvault CLI entry point
//!
//! Parses command-line arguments, builds the form engine, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docvault_cli::check::{run_check, CheckArgs};
use docvault_cli::presets::{run_presets, PresetsArgs};
use docvault_cli::schemas::{run_schemas, SchemasArgs};
use docvault_cli::submit::{run_submit, SubmitArgs};
use docvault_cli::{load_engine, EXIT_ERROR};

/// docvault — document schemas, validation and submission.
///
/// Lists validation presets and document types, checks single values, and
/// validates and submits documents.
#[derive(Parser, Debug)]
#[command(name = "docvault", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a form configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a document catalog file (YAML). Adds document types to the built-in ones.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List validation presets.
    Presets(PresetsArgs),

    /// Check one value against a preset.
    Check(CheckArgs),

    /// List document types or show one type's fields.
    Schemas(SchemasArgs),

    /// Validate and submit a document.
    Submit(SubmitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("docvault CLI starting");

    let result = load_engine(cli.config.as_deref(), cli.catalog.as_deref()).and_then(|engine| {
        match &cli.command {
            Commands::Presets(args) => run_presets(args, &engine),
            Commands::Check(args) => run_check(args, &engine),
            Commands::Schemas(args) => run_schemas(args, &engine),
            Commands::Submit(args) => run_submit(args, &engine),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_presets() {
        let cli = Cli::try_parse_from(["docvault", "presets"]).unwrap();
        assert!(matches!(cli.command, Commands::Presets(_)));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_check() {
        let cli = Cli::try_parse_from(["docvault", "check", "PAN_10", "ABCDE1234F"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.preset, "PAN_10");
                assert_eq!(args.value, "ABCDE1234F");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_check_requires_value() {
        assert!(Cli::try_parse_from(["docvault", "check", "PAN_10"]).is_err());
    }

    #[test]
    fn cli_parse_schemas_filters() {
        let cli = Cli::try_parse_from(["docvault", "schemas", "--group", "identity"]).unwrap();
        match cli.command {
            Commands::Schemas(args) => {
                assert_eq!(args.group.as_deref(), Some("identity"));
                assert!(args.show.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from([
            "docvault", "schemas", "--group", "identity", "--show", "PAN"
        ])
        .is_err());
    }

    #[test]
    fn cli_parse_submit_builtin() {
        let cli = Cli::try_parse_from([
            "docvault",
            "submit",
            "--doc-type",
            "AADHAAR",
            "--field",
            "name=Ajay Kedar",
            "--field",
            "aadhaar_number=123456789012",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.doc_type, "AADHAAR");
                assert_eq!(args.fields.len(), 2);
                assert_eq!(args.fields[0].name, "name");
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_submit_custom() {
        let cli = Cli::try_parse_from([
            "docvault",
            "submit",
            "--doc-type",
            "CUSTOM",
            "--name",
            "Gas Connection",
            "--custom",
            "Consumer No:POLICY_ALNUM_6_30=GC12345",
            "--out",
            "/tmp/out",
        ])
        .unwrap();
        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.name.as_deref(), Some("Gas Connection"));
                assert_eq!(args.custom[0].label, "Consumer No");
                assert_eq!(args.out, Some(PathBuf::from("/tmp/out")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_submit_rejects_malformed_field() {
        assert!(Cli::try_parse_from([
            "docvault", "submit", "--doc-type", "PAN", "--field", "pan_number"
        ])
        .is_err());
    }

    #[test]
    fn cli_parse_mime_requires_file() {
        assert!(Cli::try_parse_from([
            "docvault", "submit", "--doc-type", "PAN", "--mime", "image/png"
        ])
        .is_err());
    }

    #[test]
    fn cli_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "docvault", "presets", "-vv", "--config", "form.yaml", "--catalog", "docs.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("form.yaml")));
        assert_eq!(cli.catalog, Some(PathBuf::from("docs.yaml")));
    }
}
