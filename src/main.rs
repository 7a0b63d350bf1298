use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use i18next_compress::cli::{Arguments, ExitStatus, run_cli};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{}: {:#}", "error".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}

/// Log to stderr; `RUST_LOG` wins, `--verbose` raises the default to debug.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("i18next_compress=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
