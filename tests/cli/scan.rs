use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr_of, stdout_of};

fn malformed_source() -> String {
    let mut code = String::new();
    for i in 0..9 {
        code.push_str(&format!("const v{} = {};\n", i, i));
    }
    code.push_str("   )\n");
    code
}

#[test]
fn test_scan_writes_results() -> Result<()> {
    let test = CliTest::with_file(
        "src/components/Header.jsx",
        r#"
export function Header() {
    return (
        <header>
            <h1>الصفحة الرئيسية</h1>
            <nav>{"القائمة الرئيسية"}</nav>
            <span>12345</span>
        </header>
    );
}
"#,
    )?;
    test.write_file(
        "src/pages/About.tsx",
        r#"
interface Props { name?: string }
export const About = ({ name }: Props) => <p>من نحن {name}</p>;
"#,
    )?;
    test.write_file(
        "node_modules/lib/index.js",
        "export const X = () => <b>نص خارجي</b>;",
    )?;

    let output = test.scan_command().arg("src").output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout.contains("Scanning directory: src"));
    assert!(stdout.contains("Scanned 2 files - found 3 Arabic texts"));
    assert!(stdout.contains("Results saved to ArabicContent.json"));
    assert!(!stdout.contains("Finished in"));

    let results: Value = serde_json::from_str(&test.read_file("ArabicContent.json")?)?;
    assert_eq!(
        results,
        json!([
            { "filePath": "src/components/Header.jsx", "content": "الصفحة الرئيسية" },
            { "filePath": "src/components/Header.jsx", "content": "القائمة الرئيسية" },
            { "filePath": "src/pages/About.tsx", "content": "من نحن" }
        ])
    );

    Ok(())
}

#[test]
fn test_scan_continues_past_malformed_file() -> Result<()> {
    let test = CliTest::with_file("app/a.jsx", "export const A = () => <p>مرحبا بكم</p>;\n")?;
    test.write_file("app/b.jsx", &malformed_source())?;
    test.write_file("app/c.jsx", "export const C = () => <p>{\"وداعا\"}</p>;\n")?;

    let output = test
        .scan_command()
        .args(["app", "--output", "out/arabic.json"])
        .output()?;
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("--> app/b.jsx:10:4"), "stderr: {}", stderr);
    assert!(stderr.contains("10 |    )"));
    assert!(stderr.contains("warning: 1 file could not be parsed"));

    let results: Value = serde_json::from_str(&test.read_file("out/arabic.json")?)?;
    let contents: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["مرحبا بكم", "وداعا"]);

    Ok(())
}

#[test]
fn test_scan_verbose_lists_positions() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.jsx",
        "function App() {\n    return <div>مرحبا</div>;\n}\n",
    )?;

    let output = test.scan_command().args(["src", "-v"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("src/App.jsx:2:17  مرحبا"));

    Ok(())
}

#[test]
fn test_scan_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".textscoutrc.json",
        r#"{
  "sourceRoot": "web",
  "excludedDirs": ["legacy"],
  "output": "reports/arabic.json",
  "dialect": "minimal"
}"#,
    )?;
    test.write_file("web/Home.jsx", "export const H = () => <h1>أهلا</h1>;\n")?;
    test.write_file("web/legacy/Old.jsx", "export const O = () => <h1>قديم جدا</h1>;\n")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let results: Value = serde_json::from_str(&test.read_file("reports/arabic.json")?)?;
    assert_eq!(
        results,
        json!([{ "filePath": "web/Home.jsx", "content": "أهلا" }])
    );

    Ok(())
}

#[test]
fn test_scan_empty_directory_writes_empty_array() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("empty/README.md", "# nothing here")?;

    let output = test.scan_command().arg("empty").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("ArabicContent.json")?, "[]");

    Ok(())
}

#[test]
fn test_scan_missing_directory_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("does-not-exist").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Directory not found: does-not-exist"));
    assert!(!test.root().join("ArabicContent.json").exists());

    Ok(())
}
