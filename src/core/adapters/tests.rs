use pretty_assertions::assert_eq;

use super::{swc, tree_sitter};
use crate::core::node::Site;
use crate::error::Error;

/// Both front-ends must produce the same canonical sites.
fn assert_parity(code: &str) -> Vec<Site> {
    let from_swc = swc::collect_sites(code).unwrap();
    let from_tree_sitter = tree_sitter::collect_sites(code).unwrap();
    assert_eq!(from_swc, from_tree_sitter, "canonical sites differ for {code:?}");
    from_swc
}

fn parity_keys(code: &str) -> Vec<String> {
    assert_parity(code)
        .iter()
        .map(|site| site.derive_key(code).unwrap())
        .collect()
}

fn parity_error_kind(code: &str) -> String {
    let sites = assert_parity(code);
    let err = sites
        .iter()
        .find_map(|site| site.derive_key(code).err())
        .unwrap();
    match err {
        Error::UnsupportedNodeKind { kind, .. } => kind,
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_call_arguments() {
    assert_eq!(
        parity_keys(
            r#"
            t('Email address');
            t("double \"quoted\"");
            t('it\'s');
            t(`Happy birthday, {{name}}!`, { name });
            t(('parenthesized'));
            "#
        ),
        vec![
            "Email address",
            "double \"quoted\"",
            "it's",
            "Happy birthday, {{name}}!",
            "parenthesized",
        ]
    );
}

#[test]
fn test_nested_templates() {
    assert_eq!(parity_keys("t(`a ${`b ${'c'}`} d`)"), vec!["cb a  d"]);
}

#[test]
fn test_template_interpolations_precede_segments() {
    assert_eq!(parity_keys("t(`a ${'b'} c`)"), vec!["ba  c"]);
    assert_eq!(
        parity_keys("const a = <Trans>{`Hi ${{name}}!`}</Trans>;"),
        vec!["{{name}}Hi !"]
    );
}

#[test]
fn test_trans_with_markup() {
    let code = r#"
        const a = (
          <Trans>
            Or <NextLink href='/register'>start your 30-day free trial</NextLink>
          </Trans>
        );
    "#;
    assert_eq!(parity_keys(code), vec!["Or <1>start your 30-day free trial</1>"]);
}

#[test]
fn test_trans_with_interpolation() {
    let code = r#"
        const a = (
          <Trans>
            Hello <strong>{{ name }}</strong>, you have {{ count }} new messages.
          </Trans>
        );
    "#;
    assert_eq!(
        parity_keys(code),
        vec!["Hello <1>{{ name }}</1>, you have {{ count }} new messages."]
    );
}

#[test]
fn test_trans_multiline_text_and_comments() {
    let code = r#"
        const a = (
          <Trans>
            Sign in to
            your account
            {/* with a hidden comment */}
          </Trans>
        );
    "#;
    assert_eq!(parity_keys(code), vec!["Sign in to your account"]);
}

#[test]
fn test_trans_string_containers() {
    let code = r#"const a = <Trans>Hello{' '}<b>world</b>{"!"}</Trans>;"#;
    assert_eq!(parity_keys(code), vec!["Hello <2>world</2>!"]);
}

#[test]
fn test_trans_explicit_key() {
    let code = r#"
        const a = <Trans i18nKey="explicit">Ignored text</Trans>;
        const b = <Trans i18nKey={'from expression'}>Ignored</Trans>;
        const c = <Trans i18nKey="">Falls back</Trans>;
    "#;
    assert_eq!(
        parity_keys(code),
        vec!["explicit", "from expression", "Falls back"]
    );
}

#[test]
fn test_self_closing_and_nested_trans() {
    let code = r#"
        const a = <Trans i18nKey="closed" />;
        const b = <Trans>Outer <Trans>inner</Trans></Trans>;
    "#;
    assert_eq!(
        parity_keys(code),
        vec!["closed", "Outer <1>inner</1>", "inner"]
    );
}

#[test]
fn test_unsupported_kinds_match() {
    assert_eq!(parity_error_kind("t(variable)"), "Identifier");
    assert_eq!(parity_error_kind("t(foo.bar)"), "MemberExpression");
    assert_eq!(parity_error_kind("t(foo['bar'])"), "MemberExpression");
    assert_eq!(parity_error_kind("t(...args)"), "SpreadElement");
    assert_eq!(parity_error_kind("t(42)"), "NumericLiteral");
    assert_eq!(parity_error_kind("t(a ? 'b' : 'c')"), "ConditionalExpression");
    assert_eq!(parity_error_kind("t('a' + 'b')"), "BinaryExpression");
    assert_eq!(parity_error_kind("t({ a: 1 })"), "ObjectExpression");
    assert_eq!(parity_error_kind("t(`a ${name}`)"), "Identifier");
    assert_eq!(parity_error_kind("const a = <Trans>{...items}</Trans>;"), "JSXSpreadChild");
    assert_eq!(parity_error_kind("const a = <Trans><>frag</></Trans>;"), "JSXFragment");
    assert_eq!(parity_error_kind("const a = <Trans {...props}>Hi</Trans>;"), "JSXSpreadAttribute");
    assert_eq!(parity_error_kind("const a = <Trans>Hi {name}</Trans>;"), "Identifier");
}

#[test]
fn test_excerpts_match() {
    let code = "const label = t(user.name);";
    let excerpts: Vec<String> = [
        swc::collect_sites(code).unwrap(),
        tree_sitter::collect_sites(code).unwrap(),
    ]
    .iter()
    .map(|sites| sites[0].derive_key(code).unwrap_err().to_string())
    .collect();
    assert_eq!(excerpts[0], excerpts[1]);
    assert!(excerpts[0].contains("user.name"));
}
