//! Key compression: SHA-256 fingerprint of a normalized key.

use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

/// Matches `{{ name }}` interpolations, capturing the trimmed name.
static INTERPOLATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^}]*?)\s*\}\}").unwrap());

/// Rewrite `{{ name }}` to `{{name}}` so both spellings share a fingerprint.
pub fn normalize_key(key: &str) -> String {
    INTERPOLATION_REGEX
        .replace_all(key, "{{${1}}}")
        .into_owned()
}

/// Compress a key into its first `hash_length` lowercase hex digits of the
/// SHA-256 digest.
///
/// `hash_length` is expected to be validated already (4..=64, see
/// [`crate::core::options`]); longer values are clamped to the digest size.
///
/// ```
/// use i18next_compress::core::compress;
///
/// assert_eq!(compress("Email address", 6), "f2488f");
/// ```
pub fn compress(key: &str, hash_length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_key(key).as_bytes());
    let mut digest = format!("{:x}", hasher.finalize());
    digest.truncate(hash_length);
    digest
}
