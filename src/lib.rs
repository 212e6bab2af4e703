//! keep-console - strip `console.*` calls from JS/TS sources unless a comment keeps them
//!
//! Every matched call is removed unless a comment containing a keep marker (by default
//! `keep-console`) sits before it, after it on the same line, or inside its argument list.
//! Calls used as statements disappear; calls used as values become `undefined`.
//!
//! ## Module Structure
//!
//! - `core`: The transform engine (library API)
//! - `config`: `.keepconsolerc.json` loading for the CLI
//! - `cli`: Command-line interface layer

pub mod cli;
pub mod config;
pub mod core;

pub use crate::core::{
    DEFAULT_KEEP_COMMENT, FileKind, KeepConsole, KeepConsoleOptions, PathFilter, RewriteSummary,
    TransformError, TransformOutput, generate_transform,
};
