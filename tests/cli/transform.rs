use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const SOURCE: &str = r#"const a = t('Email address');
const b = <Trans>
  Email address
</Trans>;
const c = <Trans i18nKey="old">Sign up <b>here</b></Trans>;
"#;

const EXPECTED: &str = r#"const a = t("f2488f");
const b = <Trans i18nKey="f2488f" />;
const c = <Trans i18nKey="cba06b">~<b>~</b></Trans>;
"#;

#[test]
fn test_transform_to_stdout() -> Result<()> {
    let test = CliTest::with_file("app.jsx", SOURCE)?;
    let mut cmd = test.command();
    cmd.args(["transform", "app.jsx"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    const a = t("f2488f");
    const b = <Trans i18nKey="f2488f" />;
    const c = <Trans i18nKey="cba06b">~<b>~</b></Trans>;

    ----- stderr -----
    ✓ Compressed 3 keys in 1 file
    "#);
    assert_eq!(test.read_file("app.jsx")?, SOURCE);
    Ok(())
}

#[test]
fn test_transform_write_in_place() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", SOURCE)?;
    test.write_file("src/node_modules/lib.js", "t('Email address');\n")?;
    let mut cmd = test.command();
    cmd.args(["transform", "src", "--write"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Compressed 3 keys in 1 file
    ");
    assert_eq!(test.read_file("src/app.jsx")?, EXPECTED);
    assert_eq!(
        test.read_file("src/node_modules/lib.js")?,
        "t('Email address');\n"
    );
    Ok(())
}

#[test]
fn test_transform_typescript_is_reprinted() -> Result<()> {
    let test = CliTest::with_file(
        "src/SignUp.tsx",
        r#"export function SignUp({ t }: { t: (key: string) => string }) {
  const label: string = t('Email address');
  return <Trans>Sign up <b>here</b></Trans>;
}
"#,
    )?;
    test.write_file("src/plain.js", "t('Email address');\n")?;

    let output = test.run(&["transform", "src", "--write"])?;
    assert_eq!(output.status.code(), Some(0));

    let rewritten = test.read_file("src/SignUp.tsx")?;
    assert!(rewritten.contains(r#"const label: string = t("f2488f");"#), "{rewritten}");
    assert!(
        rewritten.contains(r#"<Trans i18nKey="6e4c86">~<b>~</b></Trans>"#),
        "{rewritten}"
    );
    assert_eq!(test.read_file("src/plain.js")?, "t(\"f2488f\");\n");
    Ok(())
}

#[test]
fn test_transform_failure_keeps_file() -> Result<()> {
    let source = "t('Email address');\nt(`Hello ${name}`);\n";
    let test = CliTest::with_file("app.js", source)?;
    let mut cmd = test.command();
    cmd.args(["transform", "app.js", "--write"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Unsupported AST type: We do not know how to handle "Identifier"
      --> app.js
       |
       | ('Email address');
       | t(`Hello ${name}`);
       |

    ✘ Compressed 0 keys in 1 file, 1 file failed
    "#);
    assert_eq!(test.read_file("app.js")?, source);
    Ok(())
}
