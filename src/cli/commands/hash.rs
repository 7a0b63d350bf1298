use anyhow::Result;

use super::helper::load_settings;
use crate::cli::{args::HashCommand, exit_status::ExitStatus};
use crate::core::compress;

pub fn hash(cmd: HashCommand) -> Result<ExitStatus> {
    let settings = load_settings(&cmd.common)?;
    println!("{}", compress(&cmd.key, settings.options.hash_length));
    Ok(ExitStatus::Success)
}
