use keep_console::KeepConsoleOptions;
use pretty_assertions::assert_eq;

use crate::{strip, strip_with};

#[test]
fn test_nested_blocks() {
    let code = r#"
      function test() {
        if (condition) {
          // keep-console
          console.log("Keep this");
          console.warn("Remove this");
        }
      }
    "#;
    let output = strip(code, "test.js");
    assert!(output.code.contains("console.log"));
    assert!(!output.code.contains("console.warn"));
}

#[test]
fn test_ternary_branches() {
    let code = r#"const result = condition ? console.log("Remove this") : /* keep-console */ console.warn("Keep this");"#;
    let output = strip(code, "test.js");

    assert!(!output.code.contains("console.log"));
    assert!(output.code.contains("console.warn"));
    assert!(output.code.contains("condition ? undefined :"));
    assert_eq!(output.summary.replaced_expressions, 1);
}

#[test]
fn test_value_positions_get_placeholder() {
    let code = "const a = console.log(1);\nrun(console.info(2));\nconst f = () => console.debug(3);";
    let output = strip(code, "test.js");

    assert!(!output.code.contains("console"));
    assert!(output.code.contains("const a = undefined"));
    assert!(output.code.contains("run(undefined)"));
    assert_eq!(output.code.matches("undefined").count(), 3);
    assert_eq!(output.summary.replaced_expressions, 3);
    assert_eq!(output.summary.removed_statements, 0);
}

#[test]
fn test_braceless_bodies_stay_valid() {
    let code = "if (debug) console.log(state);\nfor (const x of xs) console.log(x);\nrun();";
    let output = strip(code, "test.js");

    assert!(!output.code.contains("console"));
    assert!(output.code.contains("run()"));
    assert_eq!(output.summary.removed_statements, 2);
}

#[test]
fn test_nested_calls_inside_kept_call() {
    let code = "// keep-console\nconsole.log(\"total\", sum(console.count(\"inner\")));";
    let output = strip(code, "test.js");

    assert!(output.code.contains("console.log(\"total\""));
    assert!(!output.code.contains("console.count"));
    assert!(output.code.contains("sum(undefined)"));
}

#[test]
fn test_allow_list_limits_members() {
    let options = KeepConsoleOptions {
        includes: vec!["log".to_string(), "debug".to_string()],
        ..Default::default()
    };
    let code = "console.log(1);\nconsole.debug(2);\nconsole.warn(3);\nconsole.error(4);";
    let output = strip_with(options, code, "test.js");

    assert!(!output.code.contains("console.log"));
    assert!(!output.code.contains("console.debug"));
    assert!(output.code.contains("console.warn(3)"));
    assert!(output.code.contains("console.error(4)"));
}

#[test]
fn test_other_objects_are_untouched() {
    let code = "logger.log(1);\nwindow.console.log(2);\nconst log = console.log;\nlog(3);";
    let output = strip(code, "test.js");

    assert!(output.code.contains("logger.log(1)"));
    assert!(output.code.contains("window.console.log(2)"));
    assert!(output.code.contains("const log = console.log"));
    assert!(output.summary.is_unchanged());
}

#[test]
fn test_class_and_object_methods() {
    let code = r#"
const obj = {
  method() {
    console.debug("This debug should be removed");
    console.trace(/** keep-console */ "This trace should be kept");
  }
};
class Service {
  start() {
    /* keep-console */
    console.info("started");
    console.warn("noise");
  }
}
"#;
    let output = strip(code, "example.js");

    assert!(!output.code.contains("This debug should be removed"));
    assert!(output.code.contains("This trace should be kept"));
    assert!(output.code.contains("console.info(\"started\")"));
    assert!(!output.code.contains("noise"));
}

#[test]
fn test_declaration_comments_do_not_reach_the_initializer() {
    let output = strip("// keep-console\nconst x = console.log(1);", "test.js");
    assert!(output.code.contains("const x = undefined"));

    let output = strip("const y = console.log(2); // keep-console", "test.js");
    assert!(output.code.contains("const y = undefined"));

    let output = strip("const z = /* keep-console */ console.log(3);", "test.js");
    assert!(output.code.contains("console.log(3)"));
    assert_eq!(output.summary.retained_calls, 1);
}

#[test]
fn test_statement_comments_do_not_reach_nested_arguments() {
    let output = strip("foo(bar, console.log(3)); // keep-console", "test.js");
    assert!(output.code.contains("foo(bar, undefined)"));
    assert_eq!(output.summary.replaced_expressions, 1);
}

#[test]
fn test_property_and_return_owners() {
    let code = r#"
const handlers = { done: console.log("done") }; // keep-console
function finish() {
  return console.info("finished"); // keep-console
}
"#;
    let output = strip(code, "test.js");

    assert!(output.code.contains("done: undefined"));
    assert!(output.code.contains("console.info(\"finished\")"));
    assert_eq!(output.summary.retained_calls, 1);
    assert_eq!(output.summary.replaced_expressions, 1);
}

#[test]
fn test_retained_marker_comment_survives() {
    let output = strip("// keep-console\nconsole.log(1);", "test.js");
    assert!(output.code.contains("// keep-console"));
}

#[test]
fn test_map_points_at_source() {
    let output = strip("const x = 1;\nconsole.log(x);\n", "src/app/main.ts");
    let map: serde_json::Value = serde_json::from_str(output.map.as_deref().unwrap()).unwrap();

    let sources = map["sources"].as_array().unwrap();
    assert!(
        sources
            .iter()
            .any(|s| s.as_str().unwrap().ends_with("src/app/main.ts"))
    );
}
