use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("init");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .i18next-compress.json

    ----- stderr -----
    ");

    let content = test.read_file(".i18next-compress.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed.get("ignores").is_some_and(Value::is_array));
    assert!(content.contains("  "), "Config should use 2-space indentation");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18next-compress.json", "{}")?;
    let mut cmd = test.command();
    cmd.arg("init");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .i18next-compress.json already exists
    ");
    assert_eq!(test.read_file(".i18next-compress.json")?, "{}");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
    assert!(!test.root().join(".i18next-compress.json").exists());
    Ok(())
}
