//! # Presets Subcommand
//!
//! Lists every validation preset with its hints.

use anyhow::Result;
use clap::Args;

use docvault_form::FormEngine;

use crate::EXIT_OK;

/// Arguments for `docvault presets`.
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the presets subcommand.
pub fn run_presets(args: &PresetsArgs, engine: &FormEngine) -> Result<u8> {
    let registry = engine.registry();
    if args.json {
        let rows: Vec<_> = registry
            .iter()
            .map(|p| {
                serde_json::json!({
                    "key": p.key().as_str(),
                    "label": p.label(),
                    "help": p.help(),
                    "placeholder": p.placeholder(),
                    "input_mode": p.input_mode().as_str(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(EXIT_OK);
    }

    for preset in registry.iter() {
        println!(
            "  {:<18} {:<28} {}",
            preset.key().as_str(),
            preset.label(),
            preset.help()
        );
    }
    println!();
    println!("Total: {} presets", registry.len());
    Ok(EXIT_OK)
}
