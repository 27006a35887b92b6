use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_detect_prints_english_literals() -> Result<()> {
    let test = CliTest::with_file(
        "form.js",
        r#"import React from "react";

export function Form() {
    const title = "Hello, World! (test)";
    const mixed = "Hello مرحبا";
    return <button title="Click here">إرسال</button>;
}
"#,
    )?;

    let output = test.detect_command().arg("form.js").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "Found English text in form.js: react\n\
         Found English text in form.js: Hello, World! (test)\n\
         Found English text in form.js: Click here\n"
    );

    Ok(())
}

#[test]
fn test_detect_minimal_dialect_rejects_typescript() -> Result<()> {
    let test = CliTest::with_file("typed.ts", "const label: string = \"Save\";\n")?;

    let output = test.detect_command().arg("typed.ts").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("--> typed.ts:1:"));
    assert!(stdout_of(&output).is_empty());

    let output = test
        .detect_command()
        .args(["typed.ts", "--dialect", "full"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Found English text in typed.ts: Save\n");

    Ok(())
}

#[test]
fn test_detect_missing_argument() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.detect_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());

    Ok(())
}

#[test]
fn test_detect_unreadable_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.detect_command().arg("missing.js").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to read file: missing.js"));

    Ok(())
}
