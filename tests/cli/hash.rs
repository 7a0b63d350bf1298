use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_hash_default_length() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["hash", "Email address"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "f2488f\n");
    Ok(())
}

#[test]
fn test_hash_normalizes_interpolations() -> Result<()> {
    let test = CliTest::new()?;
    let spaced = test.run(&["hash", "Hello {{ name }}"])?;
    let tight = test.run(&["hash", "Hello {{name}}"])?;

    assert_eq!(stdout(&spaced), stdout(&tight));
    Ok(())
}

#[test]
fn test_hash_length_from_config_and_flag() -> Result<()> {
    let test = CliTest::with_file(".i18next-compress.json", r#"{ "hashLength": 10 }"#)?;

    let from_config = test.run(&["hash", "Email address"])?;
    assert_eq!(stdout(&from_config).trim().len(), 10);

    let from_flag = test.run(&["hash", "Email address", "--hash-length", "4"])?;
    assert_eq!(stdout(&from_flag), "f248\n");

    let from_env = test
        .command()
        .args(["hash", "Email address"])
        .env("I18NEXT_COMPRESS_HASH_LENGTH", "8")
        .output()?;
    assert_eq!(stdout(&from_env).trim().len(), 8);
    Ok(())
}

#[test]
fn test_hash_length_out_of_range() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.args(["hash", "Email address", "--hash-length", "2"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Misconfiguration: The "hashLength" option has to be between 4 and 64.
    "#);
    Ok(())
}
