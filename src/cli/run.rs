use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{catalog::catalog, hash::hash, init::init, keys::keys, transform::transform},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Hash(cmd)) => hash(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Transform(cmd)) => transform(cmd),
        Some(Command::Catalog(cmd)) => catalog(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
