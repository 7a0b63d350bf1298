//! Key derivation: linearizes canonical nodes into a translation key.
//!
//! The key of `<Trans>Or <Link>start your trial</Link></Trans>` is
//! `Or <1>start your trial</1>`: markup elements become numbered tags whose
//! number is the element's position among its (non-blank) siblings.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::node::{Node, Site, Span};
use crate::error::{Error, Excerpt, Result};

static LEADING_INDENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\n *").unwrap());
static TRAILING_INDENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n *$").unwrap());
static INNER_INDENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n *").unwrap());

/// Derive the key for a sequence of sibling nodes.
///
/// `markup` enables the markup-only variants (`Element`, `RawObjectSlice`);
/// outside markup they are rejected like any other unsupported node.
/// `source` is the full original source text, used for error excerpts.
pub fn derive_key(nodes: &[Node], source: &str, markup: bool) -> Result<String> {
    let nodes: Vec<&Node> = nodes.iter().filter(|node| !node.is_blank_text()).collect();

    let mut key = String::new();
    for (position, node) in nodes.into_iter().enumerate() {
        match node {
            Node::Literal(text) => key.push_str(text),
            Node::Template(parts) => key.push_str(&derive_key(parts, source, markup)?),
            Node::Text(raw) => key.push_str(&collapse_whitespace(raw)),
            Node::Element { children, .. } if markup => {
                let children_key = derive_key(children, source, markup)?;
                key.push_str(&format!("<{position}>{children_key}</{position}>"));
            }
            Node::Element { span, .. } => {
                return Err(unsupported("JSXElement", Some(*span), source));
            }
            Node::ExpressionContainer(inner) => {
                key.push_str(&derive_key(std::slice::from_ref(inner.as_ref()), source, markup)?)
            }
            Node::EmptyExpression => {}
            Node::RawObjectSlice { source: text, .. } if markup => {
                key.push('{');
                key.push_str(text);
                key.push('}');
            }
            Node::RawObjectSlice { span, .. } => {
                return Err(unsupported("ObjectExpression", Some(*span), source));
            }
            Node::Unsupported { kind, span } => {
                return Err(unsupported(kind, *span, source));
            }
        }
    }

    Ok(key)
}

impl Site {
    /// Derive the key a translation site is looked up by.
    ///
    /// For `<Trans>`, a non-empty `i18nKey` attribute wins over the children.
    /// The children key is derived regardless, so unsupported children are
    /// reported even when an explicit key is present.
    pub fn derive_key(&self, source: &str) -> Result<String> {
        match self {
            Site::Call { argument } => derive_key(std::slice::from_ref(argument), source, false),
            Site::Trans {
                spread,
                i18n_key,
                children,
            } => {
                if let Some(span) = spread {
                    return Err(unsupported("JSXSpreadAttribute", Some(*span), source));
                }

                let attribute_key = match i18n_key {
                    Some(value) => Some(derive_key(std::slice::from_ref(value), source, false)?),
                    None => None,
                };
                let children_key = derive_key(children, source, true)?;

                Ok(attribute_key
                    .filter(|key| !key.is_empty())
                    .unwrap_or(children_key))
            }
        }
    }
}

/// Strip one leading and one trailing newline-plus-indentation run, then fold
/// every remaining one into a single space.
fn collapse_whitespace(raw: &str) -> String {
    let text = LEADING_INDENT_REGEX.replace(raw, "");
    let text = TRAILING_INDENT_REGEX.replace(&text, "");
    INNER_INDENT_REGEX.replace_all(&text, " ").into_owned()
}

fn unsupported(kind: &str, span: Option<Span>, source: &str) -> Error {
    Error::UnsupportedNodeKind {
        kind: kind.to_string(),
        excerpt: span.and_then(|span| Excerpt::from_source(source, span.start, span.end)),
    }
}
