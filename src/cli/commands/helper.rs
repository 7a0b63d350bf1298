use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

use crate::cli::args::CommonArgs;
use crate::config::load_config;
use crate::core::Options;

/// Options and walk settings for one command run.
pub struct Settings {
    pub options: Options,
    pub ignores: Vec<Pattern>,
    pub verbose: bool,
}

/// Load the config file (if any) and apply command-line overrides.
pub fn load_settings(common: &CommonArgs) -> Result<Settings> {
    let cwd: PathBuf = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    let options = loaded.config.options(common.hash_length)?;
    tracing::debug!(
        hash_length = options.hash_length,
        from_file = loaded.from_file,
        "resolved options"
    );

    Ok(Settings {
        options,
        ignores: loaded.config.ignore_patterns(),
        verbose: common.verbose,
    })
}
