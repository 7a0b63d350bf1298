//! Catalog recompression: rewrites a flat locale file so it is keyed by
//! fingerprints instead of full keys.

use std::collections::HashMap;

use serde_json::Value;

use crate::core::compress::compress;
use crate::core::options::{Options, PartialOptions, resolve_options};
use crate::error::{Error, Result};

/// Flat, insertion-ordered mapping of key to translated value.
pub type Catalog = serde_json::Map<String, Value>;

/// Replace every key of `catalog` with its fingerprint.
///
/// Entries are visited in insertion order. The first fingerprint shared by
/// two keys aborts the whole run; a partially compressed catalog is never
/// returned.
pub fn recompress_catalog(catalog: &Catalog, options: &Options) -> Result<Catalog> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(catalog.len());
    let mut compressed = Catalog::new();

    for (key, value) in catalog {
        let Value::String(_) = value else {
            return Err(Error::InvalidCatalog(format!(
                "value of \"{key}\" must be a string"
            )));
        };

        let fingerprint = compress(key, options.hash_length);
        if let Some(first) = seen.get(&fingerprint) {
            return Err(Error::CompressionCollision {
                first: (*first).to_string(),
                second: key.clone(),
                fingerprint,
            });
        }

        tracing::trace!(key = %key, fingerprint = %fingerprint, "compressed catalog key");
        seen.insert(fingerprint.clone(), key);
        compressed.insert(fingerprint, value.clone());
    }

    Ok(compressed)
}

/// Parse the text of a locale file and recompress it.
///
/// Options are resolved before anything is parsed, so a misconfiguration is
/// reported even for malformed input.
pub fn parse_locale_file(content: &str, options: Option<&PartialOptions>) -> Result<Catalog> {
    let options = resolve_options(options)?;
    let value: Value = serde_json::from_str(content)
        .map_err(|e| Error::InvalidCatalog(format!("not valid JSON: {e}")))?;
    let Value::Object(catalog) = value else {
        return Err(Error::InvalidCatalog(
            "top level must be a JSON object".to_string(),
        ));
    };
    recompress_catalog(&catalog, &options)
}
