use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_print_transformed_code() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "// keep-console\nconsole.log(\"kept\");\nconsole.debug(\"dropped\");\nstart();\n",
    )?;

    let result = run(test.command().args(["print", "src/app.ts"]))?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("console.log(\"kept\")"));
    assert!(!result.stdout.contains("dropped"));
    assert!(result.stdout.contains("start()"));

    // print never writes the file
    assert!(test.read_file("src/app.ts")?.contains("dropped"));

    Ok(())
}

#[test]
fn test_print_with_custom_marker() -> Result<()> {
    let test = CliTest::with_file(
        "a.js",
        "// preserve-log\nconsole.log(1);\n// keep-console\nconsole.log(2);\n",
    )?;

    let result = run(test
        .command()
        .args(["print", "a.js", "--keep-comment", "preserve-log"]))?;
    assert!(result.stdout.contains("console.log(1)"));
    assert!(!result.stdout.contains("console.log(2)"));

    Ok(())
}

#[test]
fn test_print_parse_error() -> Result<()> {
    let test = CliTest::with_file("broken.js", "const = ;")?;

    let result = run(test.command().args(["print", "broken.js"]))?;
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("Failed to parse broken.js"));
    assert!(result.stdout.is_empty());

    Ok(())
}

#[test]
fn test_print_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().args(["print", "missing.js"]))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.starts_with("Error: Failed to read missing.js"));

    Ok(())
}
