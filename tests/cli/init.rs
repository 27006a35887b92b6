use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "sourceRoot",
        "excludedDirs",
        "extensions",
        "ignores",
        "output",
        "dialect",
        "staticDir",
        "detectTimeoutSecs",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["output"], "ArabicContent.json");
    assert_eq!(parsed["dialect"], "full");

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
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Created .textscoutrc.json"));

    assert!(test.root().join(".textscoutrc.json").exists());
    let content = test.read_file(".textscoutrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".textscoutrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains(".textscoutrc.json already exists"));
    assert_eq!(test.read_file(".textscoutrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "src/app.jsx",
        r#"export function App() { return <div>مرحبا بكم</div>; }"#,
    )?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        stderr_of(&output)
    );
    assert!(test.root().join("ArabicContent.json").exists());

    Ok(())
}
