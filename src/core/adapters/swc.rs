//! SWC front-end: converts `swc_ecma_ast` nodes into canonical nodes.

use swc_common::{BytePos, Spanned};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement,
    JSXElementChild, JSXElementName, JSXExpr, Lit, Module, Str, Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::{I18N_KEY_ATTRIBUTE, TRANSLATION_COMPONENT, TRANSLATION_FUNCTION};
use crate::core::key::derive_key;
use crate::core::node::{Node, Site, Span};
use crate::core::parsers::jsx::parse_jsx_source;
use crate::error::Result;

/// Source text of one parsed file together with its position in the
/// `SourceMap`, used to turn swc spans into byte offsets.
#[derive(Debug, Clone, Copy)]
pub struct SwcSource<'a> {
    text: &'a str,
    start_pos: BytePos,
}

impl<'a> SwcSource<'a> {
    pub fn new(text: &'a str, start_pos: BytePos) -> Self {
        Self { text, start_pos }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn offset(&self, pos: BytePos) -> usize {
        pos.0.saturating_sub(self.start_pos.0) as usize
    }

    pub fn span(&self, span: swc_common::Span) -> Span {
        Span::new(self.offset(span.lo), self.offset(span.hi))
    }

    fn slice(&self, span: swc_common::Span) -> Option<&'a str> {
        let span = self.span(span);
        self.text.get(span.start..span.end)
    }
}

/// Derive the key of a single expression, as used for `t()` arguments and
/// `i18nKey` attribute values.
pub fn derive_key_from_expr(expr: &Expr, source: &SwcSource<'_>) -> Result<String> {
    derive_key(&[adapt_expr(expr, source)], source.text(), false)
}

/// Derive the key of markup children, as used for `<Trans>` content.
pub fn derive_key_from_children(
    children: &[JSXElementChild],
    source: &SwcSource<'_>,
) -> Result<String> {
    derive_key(&adapt_children(children, source), source.text(), true)
}

pub fn adapt_expr(expr: &Expr, source: &SwcSource<'_>) -> Node {
    match expr {
        Expr::Lit(Lit::Str(s)) => adapt_str(s, source),
        Expr::Tpl(tpl) => Node::Template(adapt_template(tpl, source)),
        Expr::Paren(paren) => adapt_expr(&paren.expr, source),
        Expr::Object(object) => match source.slice(object.span) {
            Some(text) => Node::RawObjectSlice {
                source: text.to_string(),
                span: source.span(object.span),
            },
            None => Node::unsupported("ObjectExpression", source.span(object.span)),
        },
        Expr::JSXElement(element) => adapt_element(element, source),
        other => Node::unsupported(expr_kind(other), source.span(other.span())),
    }
}

pub fn adapt_children(children: &[JSXElementChild], source: &SwcSource<'_>) -> Vec<Node> {
    children
        .iter()
        .map(|child| adapt_child(child, source))
        .collect()
}

fn adapt_child(child: &JSXElementChild, source: &SwcSource<'_>) -> Node {
    match child {
        JSXElementChild::JSXText(text) => Node::Text(text.raw.to_string()),
        JSXElementChild::JSXExprContainer(container) => adapt_container_expr(&container.expr, source),
        JSXElementChild::JSXSpreadChild(spread) => {
            Node::unsupported("JSXSpreadChild", source.span(spread.span))
        }
        JSXElementChild::JSXElement(element) => adapt_element(element, source),
        JSXElementChild::JSXFragment(fragment) => {
            Node::unsupported("JSXFragment", source.span(fragment.span))
        }
    }
}

fn adapt_container_expr(expr: &JSXExpr, source: &SwcSource<'_>) -> Node {
    match expr {
        JSXExpr::JSXEmptyExpr(_) => Node::EmptyExpression,
        JSXExpr::Expr(expr) => Node::ExpressionContainer(Box::new(adapt_expr(expr, source))),
    }
}

fn adapt_element(element: &JSXElement, source: &SwcSource<'_>) -> Node {
    Node::Element {
        children: adapt_children(&element.children, source),
        span: source.span(element.span),
    }
}

fn adapt_str(s: &Str, source: &SwcSource<'_>) -> Node {
    match s.value.as_str() {
        Some(value) => Node::Literal(value.to_string()),
        // Lone surrogates have no UTF-8 form.
        None => Node::unsupported("StringLiteral", source.span(s.span)),
    }
}

/// Interpolations first, then the literal segments, each group in source
/// order. Keys in existing catalogs were derived in this order.
fn adapt_template(tpl: &Tpl, source: &SwcSource<'_>) -> Vec<Node> {
    tpl.exprs
        .iter()
        .map(|expr| adapt_expr(expr, source))
        .chain(tpl.quasis.iter().map(|quasi| Node::Literal(quasi.raw.to_string())))
        .collect()
}

fn adapt_attr_value(value: &JSXAttrValue, source: &SwcSource<'_>) -> Node {
    match value {
        // Raw text between the quotes, entities untouched.
        JSXAttrValue::Str(s) => match s
            .raw
            .as_deref()
            .and_then(|raw| raw.get(1..raw.len().saturating_sub(1)))
        {
            Some(inner) => Node::Literal(inner.to_string()),
            None => adapt_str(s, source),
        },
        JSXAttrValue::JSXExprContainer(container) => adapt_container_expr(&container.expr, source),
        JSXAttrValue::JSXElement(element) => adapt_element(element, source),
        other => Node::unsupported("JSXFragment", source.span(other.span())),
    }
}

/// Canonical site for `t(...)`, or `None` if the call is not a translation
/// call with at least one argument.
pub fn call_site(call: &CallExpr, source: &SwcSource<'_>) -> Option<Site> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Ident(ident) = &**callee else {
        return None;
    };
    if ident.sym != TRANSLATION_FUNCTION {
        return None;
    }

    let first = call.args.first()?;
    let argument = match first.spread {
        Some(dot3) => Node::unsupported(
            "SpreadElement",
            Span::new(source.offset(dot3.lo), source.offset(first.expr.span().hi)),
        ),
        None => adapt_expr(&first.expr, source),
    };
    Some(Site::Call { argument })
}

/// Canonical site for `<Trans>`, or `None` for any other element.
pub fn trans_site(element: &JSXElement, source: &SwcSource<'_>) -> Option<Site> {
    let JSXElementName::Ident(name) = &element.opening.name else {
        return None;
    };
    if name.sym != TRANSLATION_COMPONENT {
        return None;
    }

    let mut spread = None;
    let mut i18n_key = None;
    for attr in &element.opening.attrs {
        match attr {
            JSXAttrOrSpread::SpreadElement(spread_element) => {
                spread = spread.or(Some(source.span(spread_element.span())));
            }
            JSXAttrOrSpread::JSXAttr(attr) => {
                if i18n_key.is_none()
                    && let JSXAttrName::Ident(attr_name) = &attr.name
                    && attr_name.sym == I18N_KEY_ATTRIBUTE
                    && let Some(value) = &attr.value
                {
                    i18n_key = Some(adapt_attr_value(value, source));
                }
            }
        }
    }

    Some(Site::Trans {
        spread,
        i18n_key,
        children: adapt_children(&element.children, source),
    })
}

/// Babel/ESTree name of an expression kind, shared with the tree-sitter
/// front-end so both report unsupported nodes identically.
fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Ident(_) => "Identifier",
        Expr::Member(_) | Expr::SuperProp(_) => "MemberExpression",
        Expr::Call(_) => "CallExpression",
        Expr::OptChain(_) => "OptionalExpression",
        Expr::Cond(_) => "ConditionalExpression",
        Expr::Bin(_) => "BinaryExpression",
        Expr::Array(_) => "ArrayExpression",
        Expr::Object(_) => "ObjectExpression",
        Expr::Lit(Lit::Num(_)) => "NumericLiteral",
        Expr::Lit(Lit::Bool(_)) => "BooleanLiteral",
        Expr::Lit(Lit::Null(_)) => "NullLiteral",
        Expr::Lit(Lit::Regex(_)) => "RegExpLiteral",
        Expr::Lit(Lit::BigInt(_)) => "BigIntLiteral",
        Expr::Lit(_) => "Literal",
        Expr::Arrow(_) => "ArrowFunctionExpression",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Class(_) => "ClassExpression",
        Expr::New(_) => "NewExpression",
        Expr::Await(_) => "AwaitExpression",
        Expr::Yield(_) => "YieldExpression",
        Expr::Unary(_) => "UnaryExpression",
        Expr::Update(_) => "UpdateExpression",
        Expr::Assign(_) => "AssignmentExpression",
        Expr::Seq(_) => "SequenceExpression",
        Expr::This(_) => "ThisExpression",
        Expr::TaggedTpl(_) => "TaggedTemplateExpression",
        Expr::JSXFragment(_) => "JSXFragment",
        Expr::JSXElement(_) => "JSXElement",
        Expr::TsAs(_) => "TSAsExpression",
        Expr::TsSatisfies(_) => "TSSatisfiesExpression",
        Expr::TsNonNull(_) => "TSNonNullExpression",
        _ => "Expression",
    }
}

/// Collects every translation site of a module in traversal order.
struct SiteCollector<'a> {
    source: SwcSource<'a>,
    sites: Vec<Site>,
}

impl Visit for SiteCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(site) = call_site(node, &self.source) {
            self.sites.push(site);
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if let Some(site) = trans_site(node, &self.source) {
            self.sites.push(site);
        }
        node.visit_children_with(self);
    }
}

/// All translation sites of an already parsed module.
pub fn module_sites(module: &Module, source: SwcSource<'_>) -> Vec<Site> {
    let mut collector = SiteCollector {
        source,
        sites: Vec::new(),
    };
    module.visit_with(&mut collector);
    collector.sites
}

/// Parse `code` with swc and return all translation sites.
pub fn collect_sites(code: &str) -> Result<Vec<Site>> {
    let parsed = parse_jsx_source(code.to_string(), "input.tsx")?;
    Ok(module_sites(
        &parsed.module,
        SwcSource::new(&parsed.source, parsed.start_pos),
    ))
}
