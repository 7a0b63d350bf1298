//! i18next-compress - fingerprint i18next translation keys
//!
//! Replaces the keys of `t()` calls and `<Trans>` components with short,
//! deterministic hashes and recompresses locale catalogs to match, so the
//! shipped bundle carries fingerprints instead of full source strings.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Key derivation, compression and source transforms
//! - `error`: Library error type

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use error::{Error, Result};
