//! tree-sitter front-end: converts `tree-sitter-javascript` syntax nodes into
//! canonical nodes.
//!
//! tree-sitter keeps no literal values, so everything is read from the
//! source bytes. String literals are cooked here (escape sequences decoded);
//! template segments and JSX text are the raw bytes between child nodes,
//! which is exactly what swc reports as `raw`.

use tree_sitter::Node as SyntaxNode;

use super::{I18N_KEY_ATTRIBUTE, TRANSLATION_COMPONENT, TRANSLATION_FUNCTION};
use crate::core::key::derive_key;
use crate::core::node::{Node, Site, Span};
use crate::core::parsers::javascript::parse_javascript_source;
use crate::error::Result;

/// A child of a JSX element: either a run of raw text (byte range) or a
/// syntax node (element or expression container).
#[derive(Debug, Clone, Copy)]
pub(crate) enum JsxChild<'tree> {
    Text(Span),
    Node(SyntaxNode<'tree>),
}

/// Derive the key of a single expression, as used for `t()` arguments and
/// `i18nKey` attribute values.
pub fn derive_key_from_expr(node: SyntaxNode<'_>, source: &str) -> Result<String> {
    derive_key(&[adapt_expr(node, source)], source, false)
}

/// Derive the key of an element's children, as used for `<Trans>` content.
pub fn derive_key_from_children(element: SyntaxNode<'_>, source: &str) -> Result<String> {
    derive_key(&adapt_children(element, source), source, true)
}

pub fn adapt_expr(node: SyntaxNode<'_>, source: &str) -> Node {
    match node.kind() {
        "string" => adapt_js_string(node, source),
        "template_string" => Node::Template(adapt_template(node, source)),
        "parenthesized_expression" => match named_children(node).first() {
            Some(inner) => adapt_expr(*inner, source),
            None => Node::unsupported("ParenthesizedExpression", span_of(node)),
        },
        "object" => Node::RawObjectSlice {
            source: slice(source, span_of(node)).to_string(),
            span: span_of(node),
        },
        "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => adapt_element(node, source),
        kind => Node::unsupported(kind_name(kind), span_of(node)),
    }
}

/// Canonical children of a `jsx_element` (empty for self-closing elements).
pub fn adapt_children(element: SyntaxNode<'_>, source: &str) -> Vec<Node> {
    jsx_children(element)
        .into_iter()
        .map(|child| match child {
            JsxChild::Text(span) => Node::Text(slice(source, span).to_string()),
            JsxChild::Node(node) => adapt_child(node, source),
        })
        .collect()
}

fn adapt_child(node: SyntaxNode<'_>, source: &str) -> Node {
    match node.kind() {
        "jsx_expression" => match named_children(node).first() {
            None => Node::EmptyExpression,
            Some(inner) if inner.kind() == "spread_element" => {
                Node::unsupported("JSXSpreadChild", span_of(node))
            }
            Some(inner) => Node::ExpressionContainer(Box::new(adapt_expr(*inner, source))),
        },
        _ => adapt_element(node, source),
    }
}

fn adapt_element(node: SyntaxNode<'_>, source: &str) -> Node {
    if is_fragment(node) {
        return Node::unsupported("JSXFragment", span_of(node));
    }
    Node::Element {
        children: adapt_children(node, source),
        span: span_of(node),
    }
}

fn adapt_attr_value(node: SyntaxNode<'_>, source: &str) -> Node {
    match node.kind() {
        // JSX attribute strings have no escape sequences.
        "string" => Node::Literal(slice(source, inner_span(node)).to_string()),
        "jsx_expression" => adapt_child(node, source),
        _ => adapt_element(node, source),
    }
}

fn adapt_js_string(node: SyntaxNode<'_>, source: &str) -> Node {
    match cook_string(slice(source, inner_span(node))) {
        Some(value) => Node::Literal(value),
        None => Node::unsupported("StringLiteral", span_of(node)),
    }
}

/// Interpolations first, then the literal segments. A template with `n`
/// substitutions always yields `n + 1` segments, empty ones included.
fn adapt_template(node: SyntaxNode<'_>, source: &str) -> Vec<Node> {
    let content = inner_span(node);
    let mut expressions = Vec::new();
    let mut segments = Vec::new();
    let mut position = content.start;

    for substitution in named_children(node)
        .into_iter()
        .filter(|child| child.kind() == "template_substitution")
    {
        let segment = Span::new(position, substitution.start_byte());
        segments.push(Node::Literal(slice(source, segment).to_string()));
        expressions.push(match named_children(substitution).first() {
            Some(expr) => adapt_expr(*expr, source),
            None => Node::unsupported("TemplateLiteral", span_of(substitution)),
        });
        position = substitution.end_byte();
    }

    let segment = Span::new(position, content.end);
    segments.push(Node::Literal(slice(source, segment).to_string()));
    expressions.extend(segments);
    expressions
}

/// Canonical site for `t(...)`, or `None` if `node` is not a translation call
/// with at least one argument.
pub fn call_site(node: SyntaxNode<'_>, source: &str) -> Option<Site> {
    if node.kind() != "call_expression" {
        return None;
    }
    let function = node.child_by_field_name("function")?;
    if function.kind() != "identifier" || slice(source, span_of(function)) != TRANSLATION_FUNCTION
    {
        return None;
    }
    let arguments = node.child_by_field_name("arguments")?;
    if arguments.kind() != "arguments" {
        // Tagged template: t`...`
        return None;
    }

    let first = *named_children(arguments).first()?;
    let argument = match first.kind() {
        "spread_element" => Node::unsupported("SpreadElement", span_of(first)),
        _ => adapt_expr(first, source),
    };
    Some(Site::Call { argument })
}

/// Canonical site for `<Trans>`, or `None` for any other node.
pub fn trans_site(node: SyntaxNode<'_>, source: &str) -> Option<Site> {
    let opening = opening_element(node)?;
    let parts = named_children(opening);
    let (name, attributes) = parts.split_first()?;
    if name.kind() != "identifier" || slice(source, span_of(*name)) != TRANSLATION_COMPONENT {
        return None;
    }

    let spread = attributes
        .iter()
        .filter(|attribute| attribute.kind() == "jsx_expression")
        .find_map(|attribute| named_children(*attribute).first().map(|inner| span_of(*inner)));
    let i18n_key = i18n_key_attributes(opening, source)
        .into_iter()
        .find_map(|attribute| named_children(attribute).get(1).copied())
        .map(|value| adapt_attr_value(value, source));

    Some(Site::Trans {
        spread,
        i18n_key,
        children: adapt_children(node, source),
    })
}

/// `i18nKey` attributes of an opening tag, in source order.
pub(crate) fn i18n_key_attributes<'tree>(
    opening: SyntaxNode<'tree>,
    source: &str,
) -> Vec<SyntaxNode<'tree>> {
    named_children(opening)
        .into_iter()
        .filter(|attribute| {
            attribute.kind() == "jsx_attribute"
                && named_children(*attribute)
                    .first()
                    .is_some_and(|name| slice(source, span_of(*name)) == I18N_KEY_ATTRIBUTE)
        })
        .collect()
}

/// Opening tag of an element; a self-closing element is its own opening tag.
pub(crate) fn opening_element(node: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    match node.kind() {
        "jsx_self_closing_element" => Some(node),
        "jsx_element" => named_children(node)
            .into_iter()
            .find(|child| child.kind() == "jsx_opening_element"),
        _ => None,
    }
}

fn closing_element(node: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    named_children(node)
        .into_iter()
        .rev()
        .find(|child| child.kind() == "jsx_closing_element")
}

fn is_fragment(node: SyntaxNode<'_>) -> bool {
    match node.kind() {
        "jsx_fragment" => true,
        "jsx_element" => opening_element(node).is_some_and(|open| named_children(open).is_empty()),
        _ => false,
    }
}

/// Split the content of a `jsx_element` into text runs and child nodes.
///
/// tree-sitter tokenizes JSX text into trimmed pieces (and separate HTML
/// entity nodes), so text is recovered as the bytes between the non-text
/// children instead.
pub(crate) fn jsx_children(element: SyntaxNode<'_>) -> Vec<JsxChild<'_>> {
    if element.kind() != "jsx_element" {
        return Vec::new();
    }
    let (Some(open), Some(close)) = (opening_element(element), closing_element(element)) else {
        return Vec::new();
    };

    let mut children = Vec::new();
    let mut position = open.end_byte();
    for child in named_children(element) {
        if !matches!(
            child.kind(),
            "jsx_element" | "jsx_self_closing_element" | "jsx_expression" | "jsx_fragment"
        ) {
            continue;
        }
        if child.start_byte() > position {
            children.push(JsxChild::Text(Span::new(position, child.start_byte())));
        }
        children.push(JsxChild::Node(child));
        position = child.end_byte();
    }
    if close.start_byte() > position {
        children.push(JsxChild::Text(Span::new(position, close.start_byte())));
    }
    children
}

/// Named children without comments.
pub(crate) fn named_children(node: SyntaxNode<'_>) -> Vec<SyntaxNode<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

pub(crate) fn span_of(node: SyntaxNode<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// Content of a quoted node without its delimiters.
fn inner_span(node: SyntaxNode<'_>) -> Span {
    let span = span_of(node);
    if span.end - span.start < 2 {
        return Span::new(span.start, span.start);
    }
    Span::new(span.start + 1, span.end - 1)
}

pub(crate) fn slice(source: &str, span: Span) -> &str {
    source.get(span.start..span.end).unwrap_or_default()
}

/// Decode the escape sequences of a JS string body.
///
/// Returns `None` for strings that are not valid Unicode (lone surrogates).
fn cook_string(raw: &str) -> Option<String> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut units, c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            break;
        };
        match escaped {
            'n' => units.push(0x0A),
            'r' => units.push(0x0D),
            't' => units.push(0x09),
            'b' => units.push(0x08),
            'f' => units.push(0x0C),
            'v' => units.push(0x0B),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                units.push(u16::from_str_radix(&hex, 16).ok()?);
            }
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|c| *c != '}').collect();
                let code_point = u32::from_str_radix(&hex, 16).ok()?;
                push_char(&mut units, char::from_u32(code_point)?);
            }
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                units.push(u16::from_str_radix(&hex, 16).ok()?);
            }
            '0'..='7' => {
                let mut value = escaped.to_digit(8)?;
                while value < 32
                    && let Some(digit) = chars.peek().and_then(|c| c.to_digit(8))
                {
                    value = value * 8 + digit;
                    chars.next();
                }
                units.push(value as u16);
            }
            // Line continuation.
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => push_char(&mut units, other),
        }
    }

    String::from_utf16(&units).ok()
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buffer = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buffer));
}

/// Babel/ESTree name of a tree-sitter node kind, shared with the swc
/// front-end so both report unsupported nodes identically.
fn kind_name(kind: &str) -> String {
    let name = match kind {
        "identifier" | "undefined" => "Identifier",
        "member_expression" | "subscript_expression" => "MemberExpression",
        "call_expression" => "CallExpression",
        "ternary_expression" => "ConditionalExpression",
        "binary_expression" => "BinaryExpression",
        "array" => "ArrayExpression",
        "number" => "NumericLiteral",
        "true" | "false" => "BooleanLiteral",
        "null" => "NullLiteral",
        "regex" => "RegExpLiteral",
        "arrow_function" => "ArrowFunctionExpression",
        "function_expression" | "function" => "FunctionExpression",
        "class" => "ClassExpression",
        "new_expression" => "NewExpression",
        "await_expression" => "AwaitExpression",
        "yield_expression" => "YieldExpression",
        "unary_expression" => "UnaryExpression",
        "update_expression" => "UpdateExpression",
        "assignment_expression" | "augmented_assignment_expression" => "AssignmentExpression",
        "sequence_expression" => "SequenceExpression",
        "this" => "ThisExpression",
        "spread_element" => "SpreadElement",
        other => return other.to_string(),
    };
    name.to_string()
}

/// Walks the syntax tree in pre-order and collects translation sites.
fn visit_sites(node: SyntaxNode<'_>, source: &str, sites: &mut Vec<Site>) {
    if let Some(site) = call_site(node, source).or_else(|| trans_site(node, source)) {
        sites.push(site);
    }
    let mut cursor = node.walk();
    let children: Vec<SyntaxNode<'_>> = node.named_children(&mut cursor).collect();
    for child in children {
        visit_sites(child, source, sites);
    }
}

/// Parse `code` with tree-sitter and return all translation sites.
pub fn collect_sites(code: &str) -> Result<Vec<Site>> {
    let tree = parse_javascript_source(code)?;
    let mut sites = Vec::new();
    visit_sites(tree.root_node(), code, &mut sites);
    Ok(sites)
}
