//! Source transforms: replace translation keys by their fingerprints.
//!
//! - `swc`: mutates an owned `swc_ecma_ast::Module` in place
//! - `tree_sitter`: rewrites source text through byte-range edits
//!
//! Both share [`TransformContext`], which is created per file and never
//! shared between files.

use std::collections::HashSet;

use crate::core::compress::compress;
use crate::core::node::SiteKind;
use crate::core::options::{Options, PartialOptions, resolve_options};
use crate::error::Result;

pub mod swc;
pub mod tree_sitter;

/// Opaque identity of a syntax node for the lifetime of one transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Identity of an AST node by address. Only meaningful while the node is
    /// not moved, which holds for the duration of a single visit.
    pub fn of<T>(node: &T) -> Self {
        Self(std::ptr::from_ref(node) as usize)
    }

    pub fn of_syntax(node: ::tree_sitter::Node<'_>) -> Self {
        Self(node.id())
    }
}

/// One applied rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub kind: SiteKind,
    pub key: String,
    pub fingerprint: String,
    /// Byte offset of the site in the original source.
    pub offset: usize,
}

impl Replacement {
    /// 1-based line of the site in `source`.
    pub fn line(&self, source: &str) -> usize {
        let end = self.offset.min(source.len());
        source.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
    }
}

/// Per-file transform state.
#[derive(Debug)]
pub struct TransformContext {
    options: Options,
    processed: HashSet<NodeId>,
    replacements: Vec<Replacement>,
}

impl TransformContext {
    /// Resolve `options` and start an empty context.
    pub fn new(options: Option<&PartialOptions>) -> Result<Self> {
        Ok(Self::with_options(resolve_options(options)?))
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            processed: HashSet::new(),
            replacements: Vec::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mark `id` as processed. Returns `false` if it already was.
    pub fn mark_processed(&mut self, id: NodeId) -> bool {
        self.processed.insert(id)
    }

    pub fn is_processed(&self, id: NodeId) -> bool {
        self.processed.contains(&id)
    }

    pub fn fingerprint(&self, key: &str) -> String {
        compress(key, self.options.hash_length)
    }

    /// Derive the fingerprint of `key` and log the replacement.
    pub(crate) fn record(&mut self, kind: SiteKind, key: String, offset: usize) -> String {
        let fingerprint = self.fingerprint(&key);
        tracing::debug!(%kind, key = %key, fingerprint = %fingerprint, offset, "replacing key");
        self.replacements.push(Replacement {
            kind,
            key,
            fingerprint: fingerprint.clone(),
            offset,
        });
        fingerprint
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn into_replacements(self) -> Vec<Replacement> {
        self.replacements
    }
}
