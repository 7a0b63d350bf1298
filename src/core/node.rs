//! Canonical model of translatable fragments.
//!
//! Both front-ends (SWC and tree-sitter) translate their parser-native trees
//! into these types, so a single key deriver serves them both. A canonical
//! tree is built immediately before key derivation and dropped afterwards.

/// Byte range into the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A translatable fragment, independent of the parser that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Fixed string: a string literal value or a raw template segment.
    Literal(String),
    /// Template literal parts in source order (segments and interpolations).
    Template(Vec<Node>),
    /// Free text between markup children, before whitespace collapsing.
    Text(String),
    /// `{...}` inside markup; contributes whatever its inner node does.
    ExpressionContainer(Box<Node>),
    /// `{}` or `{/* comment */}` inside markup.
    EmptyExpression,
    /// Nested markup element. Its tag name is irrelevant to the key, only its
    /// position among siblings and its children.
    Element { children: Vec<Node>, span: Span },
    /// Object literal used as an interpolation placeholder (`{{ name }}`),
    /// kept as the exact source text.
    RawObjectSlice { source: String, span: Span },
    /// Anything without translation semantics.
    Unsupported { kind: String, span: Option<Span> },
}

impl Node {
    pub fn unsupported(kind: impl Into<String>, span: Span) -> Self {
        Node::Unsupported {
            kind: kind.into(),
            span: Some(span),
        }
    }

    /// Whitespace-only text is dropped before derivation.
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Node::Text(text) if text.trim().is_empty())
    }
}

/// A located translation marker in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Site {
    /// `t(argument, ...)`
    Call { argument: Node },
    /// `<Trans i18nKey=... >children</Trans>`
    Trans {
        /// Span of the first `{...spread}` attribute, if any.
        spread: Option<Span>,
        /// Value of the `i18nKey` attribute when it has one.
        i18n_key: Option<Node>,
        children: Vec<Node>,
    },
}

/// Kind of translation marker, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    Call,
    Trans,
}

impl Site {
    pub fn kind(&self) -> SiteKind {
        match self {
            Site::Call { .. } => SiteKind::Call,
            Site::Trans { .. } => SiteKind::Trans,
        }
    }
}

impl std::fmt::Display for SiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteKind::Call => write!(f, "t()"),
            SiteKind::Trans => write!(f, "<Trans>"),
        }
    }
}
