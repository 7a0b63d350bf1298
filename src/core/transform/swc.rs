//! In-place transform of an swc `Module`, and source-to-source transform
//! through `swc_ecma_codegen` for TypeScript and TSX files.

use swc_common::DUMMY_SP;
use swc_ecma_ast::{
    CallExpr, Expr, IdentName, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement,
    JSXElementChild, Lit, Module, Str,
};
use swc_ecma_codegen::{Emitter, text_writer::JsWriter};
use swc_ecma_visit::{Visit, VisitMut, VisitMutWith, VisitWith};

use super::{NodeId, Replacement, TransformContext};
use crate::core::adapters::swc::{SwcSource, call_site, trans_site};
use crate::core::adapters::{I18N_KEY_ATTRIBUTE, TRANSLATION_COMPONENT};
use crate::core::node::SiteKind;
use crate::core::options::PartialOptions;
use crate::core::parsers::jsx::parse_jsx_source;
use crate::error::{Error, Result};

/// Replace every translation key in `module` by its fingerprint.
///
/// Stops mutating at the first site whose key cannot be derived and returns
/// that error; sites visited before it stay rewritten.
pub fn transform_module(
    module: &mut Module,
    source: SwcSource<'_>,
    ctx: &mut TransformContext,
) -> Result<()> {
    let mut transformer = Transformer {
        source,
        ctx,
        error: None,
    };
    module.visit_mut_with(&mut transformer);
    match transformer.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Parse `source` and transform it with a fresh context.
pub fn transform_source_ast(
    source: &str,
    file_name: &str,
    options: Option<&PartialOptions>,
) -> Result<(Module, Vec<Replacement>)> {
    let mut ctx = TransformContext::new(options)?;
    let mut parsed = parse_jsx_source(source.to_string(), file_name)?;
    transform_module(
        &mut parsed.module,
        SwcSource::new(&parsed.source, parsed.start_pos),
        &mut ctx,
    )?;
    Ok((parsed.module, ctx.into_replacements()))
}

/// Parse `source`, rewrite it and print the resulting module.
///
/// Unlike the tree-sitter transform, the output is regenerated from the AST:
/// comments are dropped and formatting follows the code generator.
pub fn transform_code(
    source: &str,
    file_name: &str,
    ctx: &mut TransformContext,
) -> Result<String> {
    let mut parsed = parse_jsx_source(source.to_string(), file_name)?;
    transform_module(
        &mut parsed.module,
        SwcSource::new(&parsed.source, parsed.start_pos),
        ctx,
    )?;

    let mut buffer = Vec::new();
    {
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default(),
            cm: parsed.source_map.clone(),
            comments: None,
            wr: JsWriter::new(parsed.source_map.clone(), "\n", &mut buffer, None),
        };
        emitter.emit_module(&parsed.module)?;
    }
    String::from_utf8(buffer)
        .map_err(|err| Error::Emit(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

struct Transformer<'a, 'ctx> {
    source: SwcSource<'a>,
    ctx: &'ctx mut TransformContext,
    error: Option<Error>,
}

impl Transformer<'_, '_> {
    fn transform_call(&mut self, call: &mut CallExpr) -> Result<()> {
        let Some(site) = call_site(call, &self.source) else {
            return Ok(());
        };
        let id = NodeId::of(&*call);
        if self.ctx.is_processed(id) {
            return Ok(());
        }
        tracing::trace!(offset = self.source.offset(call.span.lo), "processing t() call");

        let key = site.derive_key(self.source.text())?;
        self.ctx.mark_processed(id);
        let fingerprint = self
            .ctx
            .record(SiteKind::Call, key, self.source.offset(call.span.lo));
        if let Some(first) = call.args.first_mut() {
            first.expr = Box::new(Expr::Lit(Lit::Str(string_literal(fingerprint))));
        }
        Ok(())
    }

    fn transform_trans(&mut self, element: &mut JSXElement) -> Result<()> {
        let Some(site) = trans_site(element, &self.source) else {
            return Ok(());
        };
        let id = NodeId::of(&*element);
        if self.ctx.is_processed(id) {
            return Ok(());
        }
        tracing::trace!(offset = self.source.offset(element.span.lo), "processing <Trans>");

        let key = site.derive_key(self.source.text())?;
        self.ctx.mark_processed(id);
        let fingerprint =
            self.ctx
                .record(SiteKind::Trans, key, self.source.offset(element.span.lo));

        element.opening.attrs.retain(|attr| !is_i18n_key_attr(attr));
        element
            .opening
            .attrs
            .push(JSXAttrOrSpread::JSXAttr(JSXAttr {
                span: DUMMY_SP,
                name: JSXAttrName::Ident(IdentName::new(I18N_KEY_ATTRIBUTE.into(), DUMMY_SP)),
                value: Some(JSXAttrValue::Str(string_literal(fingerprint))),
            }));

        let text_only = element
            .children
            .iter()
            .all(|child| matches!(child, JSXElementChild::JSXText(_)));
        if text_only {
            element.children.clear();
            element.closing = None;
            element.opening.self_closing = true;
        } else {
            let mut nested = NestedTransCollector::default();
            for child in &element.children {
                child.visit_with(&mut nested);
            }
            for id in nested.ids {
                self.ctx.mark_processed(id);
            }
            replace_text(&mut element.children);
        }
        Ok(())
    }
}

impl VisitMut for Transformer<'_, '_> {
    fn visit_mut_call_expr(&mut self, node: &mut CallExpr) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.transform_call(node) {
            self.error = Some(err);
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_element(&mut self, node: &mut JSXElement) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.transform_trans(node) {
            self.error = Some(err);
            return;
        }
        node.visit_mut_children_with(self);
    }
}

fn string_literal(value: String) -> Str {
    Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }
}

fn is_i18n_key_attr(attr: &JSXAttrOrSpread) -> bool {
    matches!(
        attr,
        JSXAttrOrSpread::JSXAttr(JSXAttr { name: JSXAttrName::Ident(name), .. })
            if name.sym == I18N_KEY_ATTRIBUTE
    )
}

/// Rewrite every non-blank text child to `~`, descending into elements.
fn replace_text(children: &mut [JSXElementChild]) {
    for child in children {
        match child {
            JSXElementChild::JSXText(text) if !text.value.trim().is_empty() => {
                text.value = "~".into();
                text.raw = "~".into();
            }
            JSXElementChild::JSXElement(element) => replace_text(&mut element.children),
            _ => {}
        }
    }
}

/// Identities of `<Trans>` elements nested in already processed markup.
#[derive(Default)]
struct NestedTransCollector {
    ids: Vec<NodeId>,
}

impl Visit for NestedTransCollector {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if let swc_ecma_ast::JSXElementName::Ident(name) = &node.opening.name
            && name.sym == TRANSLATION_COMPONENT
        {
            self.ids.push(NodeId::of(node));
        }
        node.visit_children_with(self);
    }
}
