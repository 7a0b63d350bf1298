//! Error types shared by the key derivation, compression and catalog layers.

use std::fmt;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node with no translation semantics reached the key deriver.
    #[error(
        "Unsupported AST type: We do not know how to handle \"{kind}\"{}",
        excerpt_suffix(.excerpt)
    )]
    UnsupportedNodeKind {
        kind: String,
        excerpt: Option<Excerpt>,
    },

    #[error("Misconfiguration: The \"hashLength\" option has to be between 4 and 64.")]
    Misconfiguration { hash_length: usize },

    #[error(
        "Compression collision: \"{first}\" and \"{second}\" compress to the same hash \"{fingerprint}\". \
         Try increasing the \"hashLength\" option or splitting your locale file into multiple namespaces."
    )]
    CompressionCollision {
        first: String,
        second: String,
        fingerprint: String,
    },

    #[error("Failed to parse source with {parser}: {message}")]
    Parse {
        parser: &'static str,
        message: String,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to print transformed source: {0}")]
    Emit(#[from] std::io::Error),
}

fn excerpt_suffix(excerpt: &Option<Excerpt>) -> String {
    match excerpt {
        Some(excerpt) => format!(" in this part of your code:\n{excerpt}"),
        None => ".".to_string(),
    }
}

/// Source text surrounding an unsupported node.
///
/// `code` is the node's own text; `before` and `after` hold up to
/// [`EXCERPT_PADDING`] characters on each side, clipped at the source bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub before: String,
    pub code: String,
    pub after: String,
}

/// Characters of context kept on each side of an excerpt.
pub const EXCERPT_PADDING: usize = 30;

impl Excerpt {
    /// Cut an excerpt for the byte range `start..end` of `source`.
    ///
    /// Returns `None` when the range does not fall on character boundaries
    /// inside `source`.
    pub fn from_source(source: &str, start: usize, end: usize) -> Option<Self> {
        let code = source.get(start..end)?;
        let head = &source[..start];
        let tail = &source[end..];

        let before_start = head
            .char_indices()
            .rev()
            .nth(EXCERPT_PADDING - 1)
            .map_or(0, |(idx, _)| idx);
        let after_end = tail
            .char_indices()
            .nth(EXCERPT_PADDING)
            .map_or(tail.len(), |(idx, _)| idx);

        Some(Self {
            before: head[before_start..].to_string(),
            code: code.to_string(),
            after: tail[..after_end].to_string(),
        })
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.before, self.code, self.after)
    }
}
