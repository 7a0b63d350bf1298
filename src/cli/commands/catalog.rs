use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::helper::load_settings;
use crate::cli::{
    args::CatalogCommand,
    exit_status::ExitStatus,
    report::{SUCCESS_MARK, print_failure},
};
use crate::core::{PartialOptions, parse_locale_file};

pub fn catalog(cmd: CatalogCommand) -> Result<ExitStatus> {
    let settings = load_settings(&cmd.common)?;
    let content = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;

    let options = PartialOptions::with_hash_length(settings.options.hash_length);
    let catalog = match parse_locale_file(&content, Some(&options)) {
        Ok(catalog) => catalog,
        Err(err) => {
            print_failure(&cmd.file, &err);
            return Ok(ExitStatus::from_error(&err));
        }
    };

    let json = serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
    match &cmd.output {
        Some(output) => {
            fs::write(output, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            eprintln!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Compressed {} {} into {}",
                    catalog.len(),
                    if catalog.len() == 1 { "key" } else { "keys" },
                    output.display()
                )
                .green()
            );
        }
        None => println!("{json}"),
    }

    Ok(ExitStatus::Success)
}
