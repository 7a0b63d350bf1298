//! Text-level transform driven by tree-sitter.
//!
//! The concrete syntax tree is immutable, so rewrites are collected as
//! byte-range edits against the original source and applied back to front.
//! Formatting outside the edited ranges is preserved exactly.

use tree_sitter::Node as SyntaxNode;

use super::{NodeId, TransformContext};
use crate::core::adapters::tree_sitter::{
    JsxChild, call_site, i18n_key_attributes, jsx_children, named_children, opening_element,
    slice, span_of, trans_site,
};
use crate::core::adapters::{I18N_KEY_ATTRIBUTE, TRANSLATION_COMPONENT};
use crate::core::node::{SiteKind, Span};
use crate::core::parsers::javascript::parse_javascript_source;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edit {
    span: Span,
    replacement: String,
}

impl Edit {
    fn new(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }
}

/// Rewrite every translation site of `source` and return the new text.
///
/// Fails with the first underivable site; nothing is rewritten in that case.
pub fn transform_source(source: &str, ctx: &mut TransformContext) -> Result<String> {
    let tree = parse_javascript_source(source)?;
    let mut edits = Vec::new();
    visit(tree.root_node(), source, ctx, &mut edits)?;
    Ok(apply_edits(source, edits))
}

fn visit(
    node: SyntaxNode<'_>,
    source: &str,
    ctx: &mut TransformContext,
    edits: &mut Vec<Edit>,
) -> Result<()> {
    transform_call(node, source, ctx, edits)?;
    transform_trans(node, source, ctx, edits)?;

    let mut cursor = node.walk();
    let children: Vec<SyntaxNode<'_>> = node.named_children(&mut cursor).collect();
    for child in children {
        visit(child, source, ctx, edits)?;
    }
    Ok(())
}

fn transform_call(
    node: SyntaxNode<'_>,
    source: &str,
    ctx: &mut TransformContext,
    edits: &mut Vec<Edit>,
) -> Result<()> {
    let Some(site) = call_site(node, source) else {
        return Ok(());
    };
    let id = NodeId::of_syntax(node);
    if ctx.is_processed(id) {
        return Ok(());
    }
    tracing::trace!(offset = node.start_byte(), "processing t() call");

    let key = site.derive_key(source)?;
    ctx.mark_processed(id);
    let fingerprint = ctx.record(SiteKind::Call, key, node.start_byte());

    let argument = node
        .child_by_field_name("arguments")
        .and_then(|arguments| named_children(arguments).first().copied());
    if let Some(argument) = argument {
        edits.push(Edit::new(span_of(argument), format!("\"{fingerprint}\"")));
    }
    Ok(())
}

fn transform_trans(
    node: SyntaxNode<'_>,
    source: &str,
    ctx: &mut TransformContext,
    edits: &mut Vec<Edit>,
) -> Result<()> {
    let Some(site) = trans_site(node, source) else {
        return Ok(());
    };
    let Some(opening) = opening_element(node) else {
        return Ok(());
    };
    let id = NodeId::of_syntax(node);
    if ctx.is_processed(id) {
        return Ok(());
    }
    tracing::trace!(offset = node.start_byte(), "processing <Trans>");

    let key = site.derive_key(source)?;
    ctx.mark_processed(id);
    let fingerprint = ctx.record(SiteKind::Trans, key, node.start_byte());
    let attribute = format!(" {I18N_KEY_ATTRIBUTE}=\"{fingerprint}\"");

    for existing in i18n_key_attributes(opening, source) {
        // Take the whitespace before the attribute along with it.
        let start = existing
            .prev_sibling()
            .map_or(existing.start_byte(), |previous| previous.end_byte());
        edits.push(Edit::new(Span::new(start, existing.end_byte()), ""));
    }

    // New attribute goes right after the tag name or the last attribute.
    let insert_at = named_children(opening)
        .last()
        .map_or(opening.start_byte() + 1, |last| last.end_byte());

    let children = jsx_children(node);
    let text_only = children
        .iter()
        .all(|child| matches!(child, JsxChild::Text(_)));

    if node.kind() == "jsx_element" && text_only {
        edits.push(Edit::new(
            Span::new(insert_at, node.end_byte()),
            format!("{attribute} />"),
        ));
        return Ok(());
    }

    edits.push(Edit::new(Span::new(insert_at, insert_at), attribute));
    for nested in nested_trans(node, source) {
        ctx.mark_processed(NodeId::of_syntax(nested));
    }
    replace_text(&children, source, edits);
    Ok(())
}

/// Rewrite every non-blank text run to `~`, descending into elements.
fn replace_text(children: &[JsxChild<'_>], source: &str, edits: &mut Vec<Edit>) {
    for child in children {
        match child {
            JsxChild::Text(span) if !slice(source, *span).trim().is_empty() => {
                edits.push(Edit::new(*span, "~"));
            }
            JsxChild::Node(node) if node.kind() == "jsx_element" => {
                replace_text(&jsx_children(*node), source, edits);
            }
            _ => {}
        }
    }
}

/// `<Trans>` elements below `node`.
fn nested_trans<'tree>(node: SyntaxNode<'tree>, source: &str) -> Vec<SyntaxNode<'tree>> {
    let mut found = Vec::new();
    let mut cursor = node.walk();
    let children: Vec<SyntaxNode<'tree>> = node.named_children(&mut cursor).collect();
    for child in children {
        let is_trans = opening_element(child)
            .and_then(|opening| named_children(opening).first().copied())
            .is_some_and(|name| {
                name.kind() == "identifier" && slice(source, span_of(name)) == TRANSLATION_COMPONENT
            });
        if is_trans {
            found.push(child);
        }
        found.extend(nested_trans(child, source));
    }
    found
}

/// Apply non-overlapping edits, last first so earlier offsets stay valid.
/// At equal starts the wider edit goes first, keeping insertions in front
/// of the text that replaced the range after them.
fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by(|a, b| {
        b.span
            .start
            .cmp(&a.span.start)
            .then(b.span.end.cmp(&a.span.end))
    });

    let mut output = source.to_string();
    for edit in edits {
        output.replace_range(edit.span.start..edit.span.end, &edit.replacement);
    }
    output
}
