use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::helper::load_settings;
use crate::cli::{
    args::{ParserKind, TransformCommand},
    exit_status::ExitStatus,
    report::{print_failure, print_summary},
    scan::scan_files,
};
use crate::core::TransformContext;
use crate::core::transform::{swc::transform_code, tree_sitter::transform_source};

/// Outcome of transforming one file.
struct TransformedFile {
    path: PathBuf,
    original: String,
    output: crate::Result<(String, usize)>,
}

pub fn transform(cmd: TransformCommand) -> Result<ExitStatus> {
    let settings = load_settings(&cmd.common)?;
    let files = scan_files(
        &cmd.paths,
        ParserKind::Swc.extensions(),
        &settings.ignores,
        settings.verbose,
    )?;

    let results = files
        .par_iter()
        .map(|path| -> Result<TransformedFile> {
            let original = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let mut ctx = TransformContext::with_options(settings.options);
            let output = rewrite(&original, path, &mut ctx)
                .map(|output| (output, ctx.replacements().len()));
            Ok(TransformedFile {
                path: path.clone(),
                original,
                output,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stdout = io::stdout().lock();
    let mut site_count = 0;
    let mut errors = Vec::new();
    for file in &results {
        let (output, count) = match &file.output {
            Ok(output) => output,
            Err(err) => {
                print_failure(&file.path, err);
                errors.push(err);
                continue;
            }
        };
        site_count += count;

        if cmd.write {
            if *output != file.original {
                fs::write(&file.path, output)
                    .with_context(|| format!("Failed to write {}", file.path.display()))?;
                tracing::info!(path = %file.path.display(), sites = count, "rewrote file");
            }
        } else {
            if results.len() > 1 {
                writeln!(stdout, "// {}", file.path.display())?;
            }
            write!(stdout, "{output}")?;
        }
    }
    stdout.flush()?;

    print_summary("Compressed", results.len(), site_count, errors.len());
    Ok(ExitStatus::from_errors(errors))
}

/// JavaScript keeps its formatting through tree-sitter; TypeScript goes
/// through swc and is reprinted.
fn rewrite(source: &str, path: &Path, ctx: &mut TransformContext) -> crate::Result<String> {
    let tree_sitter_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ParserKind::TreeSitter.extensions().contains(&ext));
    if tree_sitter_extension {
        transform_source(source, ctx)
    } else {
        transform_code(source, &path.to_string_lossy(), ctx)
    }
}
