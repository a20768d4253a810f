//! # Check Subcommand
//!
//! Runs a single preset against a value, the way a form field would: the
//! value is trimmed first and an empty value is rejected.

use anyhow::{Context, Result};
use clap::Args;

use docvault_form::FormEngine;

use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for `docvault check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Preset key, e.g. `PAN_10`.
    pub preset: String,

    /// Value to check.
    pub value: String,
}

/// Outcome of a single check.
pub fn check_value(engine: &FormEngine, preset: &str, value: &str) -> Result<Result<(), String>> {
    let key = engine
        .registry()
        .resolve(preset)
        .with_context(|| format!("unknown preset '{preset}'"))?;
    let value = value.trim();
    if value.is_empty() {
        return Ok(Err("Value is required".to_string()));
    }
    Ok(engine
        .registry()
        .get(key)
        .check(value)
        .map_err(str::to_string))
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, engine: &FormEngine) -> Result<u8> {
    match check_value(engine, &args.preset, &args.value)? {
        Ok(()) => {
            println!("valid");
            Ok(EXIT_OK)
        }
        Err(message) => {
            println!("invalid: {message}");
            Ok(EXIT_INVALID)
        }
    }
}
