use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::helper::load_settings;
use crate::cli::{
    args::{KeysCommand, ParserKind},
    exit_status::ExitStatus,
    report::{print_failure, print_keys_to, print_summary},
    scan::scan_files,
};
use crate::core::adapters::swc::SwcSource;
use crate::core::parsers::jsx::parse_jsx_source;
use crate::core::transform::{swc::transform_module, tree_sitter::transform_source};
use crate::core::{Options, Replacement, TransformContext};

/// Outcome of listing one file.
struct FileKeys {
    path: PathBuf,
    source: String,
    replacements: crate::Result<Vec<Replacement>>,
}

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let settings = load_settings(&cmd.common)?;
    let files = scan_files(
        &cmd.paths,
        cmd.parser.extensions(),
        &settings.ignores,
        settings.verbose,
    )?;

    let results = files
        .par_iter()
        .map(|path| -> Result<FileKeys> {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let replacements = file_replacements(&source, path, cmd.parser, settings.options);
            Ok(FileKeys {
                path: path.clone(),
                source,
                replacements,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stdout = io::stdout().lock();
    let mut site_count = 0;
    let mut errors = Vec::new();
    for file in &results {
        match &file.replacements {
            Ok(replacements) => {
                site_count += replacements.len();
                print_keys_to(&file.path, &file.source, replacements, &mut stdout);
            }
            Err(err) => {
                print_failure(&file.path, err);
                errors.push(err);
            }
        }
    }
    stdout.flush()?;

    print_summary("Found", results.len(), site_count, errors.len());
    Ok(ExitStatus::from_errors(errors))
}

/// Run a transform for its replacement log; the rewritten output is dropped.
fn file_replacements(
    source: &str,
    path: &std::path::Path,
    parser: ParserKind,
    options: Options,
) -> crate::Result<Vec<Replacement>> {
    let mut ctx = TransformContext::with_options(options);
    match parser {
        ParserKind::Swc => {
            let mut parsed = parse_jsx_source(source.to_string(), &path.to_string_lossy())?;
            let source = SwcSource::new(&parsed.source, parsed.start_pos);
            transform_module(&mut parsed.module, source, &mut ctx)?;
        }
        ParserKind::TreeSitter => {
            transform_source(source, &mut ctx)?;
        }
    }
    Ok(ctx.into_replacements())
}
