//! Collects source files from command-line paths.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Expand `paths` into a sorted list of files with one of `extensions`.
///
/// Files named explicitly are always kept when their extension matches.
/// Directories are walked recursively; entries matching an `ignores` pattern
/// are skipped.
pub fn scan_files(
    paths: &[PathBuf],
    extensions: &[&str],
    ignores: &[Pattern],
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if has_extension(path, extensions) {
                files.push(path.clone());
            } else if verbose {
                eprintln!(
                    "{} Skipping unsupported file: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
            continue;
        }
        if !path.is_dir() {
            bail!("Path does not exist: {}", path.display());
        }

        for entry in WalkDir::new(path) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let entry_path = entry.path();
            let path_str = entry_path.to_string_lossy();

            if ignores.iter().any(|p| p.matches(&path_str)) {
                continue;
            }
            if entry.file_type().is_file() && has_extension(entry_path, extensions) {
                files.push(entry_path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "collected source files");
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
