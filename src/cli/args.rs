//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `hash`: Print the fingerprint of a single key
//! - `keys`: List every translation site with its key and fingerprint
//! - `transform`: Rewrite sources so keys become fingerprints
//! - `catalog`: Recompress a locale file
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Hash(cmd)) => Some(&cmd.common),
            Some(Command::Keys(cmd)) => Some(&cmd.common),
            Some(Command::Transform(cmd)) => Some(&cmd.common),
            Some(Command::Catalog(cmd)) => Some(&cmd.common),
            Some(Command::Init) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Number of hex characters kept from each hash (overrides config file)
    #[arg(long, env = "I18NEXT_COMPRESS_HASH_LENGTH")]
    pub hash_length: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ParserKind {
    /// swc: JavaScript and TypeScript, with or without JSX
    #[default]
    Swc,
    /// tree-sitter: JavaScript with JSX
    TreeSitter,
}

impl ParserKind {
    /// File extensions the parser accepts.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ParserKind::Swc => &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"],
            ParserKind::TreeSitter => &["js", "jsx", "mjs", "cjs"],
        }
    }
}

#[derive(Debug, Args)]
pub struct HashCommand {
    /// Translation key to hash
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Parser front-end
    #[arg(long, value_enum, default_value_t)]
    pub parser: ParserKind,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TransformCommand {
    /// Files or directories to transform
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Rewrite files in place (default prints to stdout)
    #[arg(long)]
    pub write: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CatalogCommand {
    /// Locale JSON file to recompress
    pub file: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the fingerprint of a translation key
    Hash(HashCommand),
    /// List translation keys and their fingerprints
    Keys(KeysCommand),
    /// Replace translation keys in JavaScript sources with fingerprints
    Transform(TransformCommand),
    /// Recompress a locale file so it is keyed by fingerprints
    Catalog(CatalogCommand),
    /// Initialize a new .i18next-compress.json configuration file
    Init,
}
