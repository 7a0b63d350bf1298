//! Core engine: canonical model, key derivation, compression and transforms.
//!
//! ## Module Structure
//!
//! - `node`: canonical node and site types shared by both front-ends
//! - `key`: key derivation over canonical nodes
//! - `compress`: key normalization and fingerprinting
//! - `catalog`: locale file recompression
//! - `options`: option defaults and validation
//! - `parsers`: swc and tree-sitter parser setup
//! - `adapters`: parser trees to canonical nodes
//! - `transform`: rewriting sources with fingerprints

pub mod adapters;
pub mod catalog;
pub mod compress;
pub mod key;
pub mod node;
pub mod options;
pub mod parsers;
pub mod transform;

pub use catalog::{Catalog, parse_locale_file, recompress_catalog};
pub use compress::{compress, normalize_key};
pub use key::derive_key;
pub use node::{Node, Site, SiteKind, Span};
pub use options::{Options, PartialOptions, resolve_options};
pub use transform::{Replacement, TransformContext};
