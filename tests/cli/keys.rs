use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const APP: &str = r#"import { Trans } from 'react-i18next';

export function App({ t }) {
  return (
    <form>
      <label>{t('Email address')}</label>
      <Trans>
        Sign up <a href="/register">here</a>
      </Trans>
    </form>
  );
}
"#;

#[test]
fn test_keys_with_both_parsers() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", APP)?;

    for parser in ["swc", "tree-sitter"] {
        let output = test.run(&["keys", "src", "--parser", parser])?;
        assert_eq!(output.status.code(), Some(0), "parser {parser}");
        assert_eq!(
            stdout(&output),
            "src/App.jsx:6\tf2488f\tt()\t\"Email address\"\n\
             src/App.jsx:7\t6e4c86\t<Trans>\t\"Sign up <1>here</1>\"\n"
        );
        assert_eq!(stderr(&output), "✓ Found 2 keys in 1 file\n");
    }
    Ok(())
}

#[test]
fn test_keys_reports_unsupported_node() -> Result<()> {
    let test = CliTest::with_file("app.js", "const label = t(user.name);\n")?;
    let mut cmd = test.command();
    cmd.args(["keys", "app.js"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Unsupported AST type: We do not know how to handle "MemberExpression"
      --> app.js
       |
       | const label = t(user.name);
       |

    ✘ Found 0 keys in 1 file, 1 file failed
    "#);
    Ok(())
}

#[test]
fn test_keys_typescript_needs_swc() -> Result<()> {
    let test = CliTest::with_file("app.tsx", "const label: string = t('Email address');\n")?;

    let swc = test.run(&["keys", "app.tsx"])?;
    assert_eq!(stdout(&swc), "app.tsx:1\tf2488f\tt()\t\"Email address\"\n");

    let tree_sitter = test.run(&["keys", "app.tsx", "--parser", "tree-sitter"])?;
    assert_eq!(tree_sitter.status.code(), Some(0));
    assert_eq!(stdout(&tree_sitter), "");
    Ok(())
}

#[test]
fn test_keys_parse_error() -> Result<()> {
    let test = CliTest::with_file("broken.js", "const = ;\n")?;
    let output = test.run(&["keys", "broken.js", "--parser", "tree-sitter"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("error: Failed to parse source with tree-sitter"));
    Ok(())
}
