use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const APP: &str = "// keep-console\nconsole.log(\"kept\");\nconsole.warn(\"dropped\");\nstart();\n";

#[test]
fn test_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::with_file("src/app.js", APP)?;
    test.write_file("src/clean.js", "start();\n")?;

    let result = run(&mut test.strip_command())?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("app.js: 1 console call"));
    assert!(!result.stdout.contains("clean.js"));
    assert!(result.stdout.contains("Would remove 1 console call from 1 file (2 files checked"));
    assert_eq!(test.read_file("src/app.js")?, APP);

    Ok(())
}

#[test]
fn test_apply_rewrites_files() -> Result<()> {
    let test = CliTest::with_file("src/app.js", APP)?;
    test.write_file("src/clean.js", "start();   // untouched formatting\n")?;

    let result = run(test.strip_command().arg("--apply"))?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Removed 1 console call from 1 file"));

    let rewritten = test.read_file("src/app.js")?;
    assert!(rewritten.contains("console.log(\"kept\")"));
    assert!(!rewritten.contains("dropped"));
    assert_eq!(
        test.read_file("src/clean.js")?,
        "start();   // untouched formatting\n"
    );
    assert!(!test.root().join("src/app.js.map").exists());

    Ok(())
}

#[test]
fn test_apply_with_source_maps() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "console.log(1);\nrun();\n")?;

    let result = run(test.strip_command().args(["--apply", "--source-map"]))?;
    assert_eq!(result.code, Some(0));

    let map: serde_json::Value = serde_json::from_str(&test.read_file("src/app.ts.map")?)?;
    assert_eq!(map["version"], 3);
    assert!(
        test.read_file("src/app.ts")?
            .contains("//# sourceMappingURL=app.ts.map")
    );

    Ok(())
}

#[test]
fn test_default_ignores_skip_dependencies() -> Result<()> {
    let test = CliTest::with_file("node_modules/pkg/index.js", "console.log(1);\n")?;
    test.write_file("dist/bundle.js", "console.log(2);\n")?;

    let result = run(test.strip_command().arg("--apply"))?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Checked 0 files"));
    assert_eq!(test.read_file("node_modules/pkg/index.js")?, "console.log(1);\n");

    Ok(())
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let test = CliTest::with_file(
        ".keepconsolerc.json",
        r#"{ "includes": ["debug"], "keepComments": ["preserve"] }"#,
    )?;
    test.write_file(
        "src/app.js",
        "console.log(1);\nconsole.debug(2);\n// preserve\nconsole.debug(3);\n",
    )?;

    let result = run(test.strip_command().arg("--apply"))?;
    assert_eq!(result.code, Some(0));

    let code = test.read_file("src/app.js")?;
    assert!(code.contains("console.log(1)"));
    assert!(!code.contains("console.debug(2)"));
    assert!(code.contains("console.debug(3)"));

    Ok(())
}

#[test]
fn test_cli_flags_override_config() -> Result<()> {
    let test = CliTest::with_file(".keepconsolerc.json", r#"{ "includes": ["debug"] }"#)?;
    test.write_file("src/app.js", "console.log(1);\nconsole.debug(2);\n")?;

    run(test.strip_command().args(["--apply", "--includes", "log"]))?;

    let code = test.read_file("src/app.js")?;
    assert!(!code.contains("console.log"));
    assert!(code.contains("console.debug(2)"));

    Ok(())
}

#[test]
fn test_external_filters() -> Result<()> {
    let test = CliTest::with_file("src/components/Button.tsx", "console.log(1);\n")?;
    test.write_file("src/utils/format.ts", "console.log(2);\n")?;

    run(test
        .strip_command()
        .args(["--apply", "--external", "re:components/.*\\.tsx$"]))?;

    assert!(!test.read_file("src/components/Button.tsx")?.contains("console"));
    assert_eq!(test.read_file("src/utils/format.ts")?, "console.log(2);\n");

    Ok(())
}

#[test]
fn test_parse_failures_exit_with_failure() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "const = ;")?;
    test.write_file("src/app.js", APP)?;

    let result = run(test.strip_command().arg("--apply"))?;
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("Failed to parse"));
    assert!(result.stderr.contains("broken.js"));
    assert!(result.stderr.contains("1 file could not be processed"));
    // Other files are still processed.
    assert!(!test.read_file("src/app.js")?.contains("dropped"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".keepconsolerc.json", r#"{ "ignores": ["[bad"] }"#)?;

    let result = run(&mut test.strip_command())?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Error:"));
    assert!(result.stderr.contains("ignores"));

    Ok(())
}

#[test]
fn test_missing_source_root() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.strip_command().args(["--source-root", "nope"]))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Source root is not a directory"));

    Ok(())
}
