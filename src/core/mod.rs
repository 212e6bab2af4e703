//! The transform engine: parse, decide, rewrite and emit.
//!
//! Nothing in here touches the filesystem. Each [`KeepConsole::transform`] call owns its
//! source map and comment store, so one `KeepConsole` can serve many threads.

pub mod comments;
pub mod emitter;
pub mod error;
pub mod file_kind;
pub mod keep;
pub mod matcher;
pub mod options;
pub mod parsers;
pub mod rewriter;
pub mod transform;

pub use error::TransformError;
pub use file_kind::FileKind;
pub use options::{DEFAULT_KEEP_COMMENT, KNOWN_CONSOLE_METHODS, KeepConsoleOptions, PathFilter};
pub use rewriter::RewriteSummary;
pub use transform::{KeepConsole, TransformOutput, generate_transform};
