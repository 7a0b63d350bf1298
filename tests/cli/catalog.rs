use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stdout};

const LOCALE: &str = r#"{
  "Email address": "E-Mail Adresse",
  "Sign up <1>here</1>": "Hier <1>registrieren</1>"
}"#;

#[test]
fn test_catalog_to_stdout() -> Result<()> {
    let test = CliTest::with_file("locales/de.json", LOCALE)?;
    let output = test.run(&["catalog", "locales/de.json"])?;

    assert_eq!(output.status.code(), Some(0));
    let catalog: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        catalog,
        json!({
            "f2488f": "E-Mail Adresse",
            "6e4c86": "Hier <1>registrieren</1>",
        })
    );
    Ok(())
}

#[test]
fn test_catalog_to_output_file() -> Result<()> {
    let test = CliTest::with_file("de.json", LOCALE)?;
    let mut cmd = test.command();
    cmd.args(["catalog", "de.json", "--output", "de.min.json"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Compressed 2 keys into de.min.json
    ");
    let catalog: Value = serde_json::from_str(&test.read_file("de.min.json")?)?;
    assert_eq!(catalog["f2488f"], json!("E-Mail Adresse"));
    Ok(())
}

#[test]
fn test_catalog_collision_fails() -> Result<()> {
    let test = CliTest::with_file(
        "de.json",
        r#"{ "Hello {{name}}": "Hallo {{name}}", "Hello {{ name }}": "Hallo {{ name }}" }"#,
    )?;
    let mut cmd = test.command();
    cmd.args(["catalog", "de.json"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Compression collision: "Hello {{name}}" and "Hello {{ name }}" compress to the same hash "652b7c". Try increasing the "hashLength" option or splitting your locale file into multiple namespaces.
      --> de.json
    "#);
    Ok(())
}

#[test]
fn test_catalog_missing_file() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.args(["catalog", "missing.json"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Failed to read missing.json: No such file or directory (os error 2)
    ");
    Ok(())
}
