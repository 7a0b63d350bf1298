//! Options shared by key compression, transforms and catalog recompression.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_HASH_LENGTH: usize = 6;
pub const MIN_HASH_LENGTH: usize = 4;
pub const MAX_HASH_LENGTH: usize = 64;

/// User-supplied options; every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<usize>,
}

/// Fully resolved options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Number of hex characters kept from the key digest.
    pub hash_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hash_length: DEFAULT_HASH_LENGTH,
        }
    }
}

impl PartialOptions {
    pub fn with_hash_length(hash_length: usize) -> Self {
        Self {
            hash_length: Some(hash_length),
        }
    }
}

/// Validate user options and fill in defaults.
///
/// Called once per translation unit; results are not cached because call
/// sites may pass different overrides.
pub fn resolve_options(partial: Option<&PartialOptions>) -> Result<Options> {
    let hash_length = partial.and_then(|partial| partial.hash_length);

    match hash_length {
        Some(hash_length) if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&hash_length) => {
            Err(Error::Misconfiguration { hash_length })
        }
        Some(hash_length) => Ok(Options { hash_length }),
        None => Ok(Options::default()),
    }
}
