use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stdout};

#[test]
fn test_languages() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("languages").output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    pt-BR  Português (Brasil)
    en-US  English (US)
    ");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
