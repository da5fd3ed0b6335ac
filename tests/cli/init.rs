use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["defaultLanguage"], "pt-BR");
    assert_eq!(parsed["fallbackLanguage"], "pt-BR");
    assert_eq!(parsed["defaultNS"], "common");
    assert_eq!(parsed["mergeStrategy"], "replace-group");
    assert!(
        parsed.get("messagesRoot").is_some(),
        "Config should have 'messagesRoot' field"
    );

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .i18nrc.json"));
    assert!(test.root().join(".i18nrc.json").exists());

    let content = test.read_file(".i18nrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18nrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".i18nrc.json already exists"));
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("locales/pt-BR/auth.json", r#"{"login": "Entrar"}"#)?;

    let output = test.translate_command("auth:login").output()?;
    assert!(
        output.status.success(),
        "translate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Entrar\n");

    Ok(())
}
