use std::io;

use thiserror::Error;

/// Failure of a single `transform` invocation.
///
/// There is no partial output: callers either get the whole transformed file or one of these.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The source did not parse under the syntax selected for its file kind.
    #[error("Failed to parse {path}:{line}:{column}: {message}")]
    Parse {
        path: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// Code generation failed while writing the rewritten module.
    #[error("Failed to emit transformed code: {0}")]
    Emit(#[from] io::Error),

    /// The generated source map could not be serialized.
    #[error("Failed to serialize source map: {0}")]
    SourceMap(String),
}
