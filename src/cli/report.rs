//! Report formatting and printing utilities.
//!
//! Command output goes to stdout; errors and summaries go to stderr so the
//! output of `transform` and `catalog` can be piped.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::Replacement;
use crate::error::{Error, Excerpt};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a failed file to stderr.
pub fn print_failure(path: &Path, err: &Error) {
    print_failure_to(path, err, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(path: &Path, err: &Error, writer: &mut W) {
    match err {
        Error::UnsupportedNodeKind {
            kind,
            excerpt: Some(excerpt),
        } => {
            let _ = writeln!(
                writer,
                "{}: Unsupported AST type: We do not know how to handle \"{}\"",
                "error".bold().red(),
                kind
            );
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path.display());
            print_excerpt(excerpt, writer);
        }
        _ => {
            let _ = writeln!(writer, "{}: {}", "error".bold().red(), err);
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path.display());
        }
    }
}

/// Excerpt lines with the offending code highlighted.
fn print_excerpt<W: Write>(excerpt: &Excerpt, writer: &mut W) {
    let text = format!(
        "{}{}{}",
        excerpt.before,
        excerpt.code.red().bold(),
        excerpt.after
    );
    let _ = writeln!(writer, "   {}", "|".blue());
    for line in text.lines() {
        let _ = writeln!(writer, "   {} {}", "|".blue(), line);
    }
    let _ = writeln!(writer, "   {}", "|".blue());
}

/// Print the sites of one file, one per line.
pub fn print_keys_to<W: Write>(
    path: &Path,
    source: &str,
    replacements: &[Replacement],
    writer: &mut W,
) {
    for replacement in replacements {
        let _ = writeln!(
            writer,
            "{}:{}\t{}\t{}\t{:?}",
            path.display(),
            replacement.line(source),
            replacement.fingerprint,
            replacement.kind,
            replacement.key
        );
    }
}

/// Print the closing summary line to stderr.
pub fn print_summary(action: &str, file_count: usize, site_count: usize, failed_count: usize) {
    print_summary_to(
        action,
        file_count,
        site_count,
        failed_count,
        &mut io::stderr().lock(),
    );
}

pub fn print_summary_to<W: Write>(
    action: &str,
    file_count: usize,
    site_count: usize,
    failed_count: usize,
    writer: &mut W,
) {
    let files = format!(
        "{} {}",
        file_count,
        if file_count == 1 { "file" } else { "files" }
    );
    let sites = format!(
        "{} {}",
        site_count,
        if site_count == 1 { "key" } else { "keys" }
    );

    if failed_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{action} {sites} in {files}").green()
        );
    } else {
        let _ = writeln!(
            writer,
            "\n{} {action} {sites} in {files}, {} failed",
            FAILURE_MARK.red(),
            format!(
                "{} {}",
                failed_count,
                if failed_count == 1 { "file" } else { "files" }
            )
            .red()
        );
    }
}
