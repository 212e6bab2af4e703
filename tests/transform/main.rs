use keep_console::{KeepConsole, KeepConsoleOptions, TransformOutput};

mod contexts;

/// Transform with default options and return the output.
pub fn strip(code: &str, path: &str) -> TransformOutput {
    strip_with(KeepConsoleOptions::default(), code, path)
}

pub fn strip_with(options: KeepConsoleOptions, code: &str, path: &str) -> TransformOutput {
    KeepConsole::new(options)
        .transform(code, path)
        .unwrap_or_else(|err| panic!("transform of {} failed: {}", path, err))
}

pub fn options_with_markers(markers: &[&str]) -> KeepConsoleOptions {
    KeepConsoleOptions {
        keep_comments: markers.iter().map(|m| m.to_string()).collect(),
        ..Default::default()
    }
}
