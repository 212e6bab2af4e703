//! The transform entry point: path gating, then parse, rewrite and emit.
//!
//! ```
//! use keep_console::{KeepConsole, KeepConsoleOptions};
//!
//! let transform = KeepConsole::new(KeepConsoleOptions::default());
//! let output = transform
//!     .transform("console.log('gone');\n// keep-console\nconsole.warn('stays');", "src/app.js")
//!     .unwrap();
//!
//! assert!(!output.code.contains("gone"));
//! assert!(output.code.contains("console.warn"));
//! assert!(output.map.is_some());
//! ```

use std::sync::Arc;

use swc_common::{GLOBALS, Globals, SourceMap};
use swc_ecma_visit::VisitMutWith;

use crate::core::{
    comments::CommentIndex,
    emitter::emit_module,
    error::TransformError,
    file_kind::FileKind,
    matcher::ConsoleMatcher,
    options::{KeepConsoleOptions, ResolvedOptions},
    parsers::source::parse_source,
    rewriter::{ConsoleStripper, RewriteSummary},
};

/// Result of one `transform` call.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub code: String,
    /// Source map JSON. `None` when the file was passed through untouched.
    pub map: Option<String>,
    pub summary: RewriteSummary,
}

impl TransformOutput {
    fn passthrough(code: &str) -> Self {
        Self {
            code: code.to_string(),
            map: None,
            summary: RewriteSummary::default(),
        }
    }

    pub fn is_passthrough(&self) -> bool {
        self.map.is_none()
    }
}

/// A configured transform. Immutable after construction and safe to share across
/// threads; every call builds its own parse state.
#[derive(Debug, Clone)]
pub struct KeepConsole {
    options: ResolvedOptions,
    matcher: ConsoleMatcher,
}

impl KeepConsole {
    pub fn new(options: KeepConsoleOptions) -> Self {
        let options = ResolvedOptions::from(options);
        let matcher = ConsoleMatcher::new(options.includes.clone());
        Self { options, matcher }
    }

    /// True if `id` would be rewritten rather than passed through.
    pub fn handles(&self, id: &str) -> bool {
        FileKind::from_path(id).is_some() && self.options.accepts_path(id)
    }

    /// Strip unmarked console calls from `code`.
    ///
    /// Files with an unsupported extension, or rejected by the `external` filters, come
    /// back unchanged with no map. Anything else is parsed and regenerated, even if no
    /// call was removed.
    pub fn transform(&self, code: &str, id: &str) -> Result<TransformOutput, TransformError> {
        let Some(kind) = FileKind::from_path(id) else {
            tracing::trace!(id, "unsupported extension, passing through");
            return Ok(TransformOutput::passthrough(code));
        };
        if !self.options.accepts_path(id) {
            tracing::trace!(id, "excluded by external filters, passing through");
            return Ok(TransformOutput::passthrough(code));
        }

        GLOBALS.set(&Globals::new(), || self.rewrite(code, id, kind))
    }

    fn rewrite(
        &self,
        code: &str,
        id: &str,
        kind: FileKind,
    ) -> Result<TransformOutput, TransformError> {
        let source_map = Arc::new(SourceMap::default());
        let parsed = parse_source(code, id, kind, source_map)?;
        let index = CommentIndex::new(&parsed.comments, parsed.source_file.clone());

        let mut module = parsed.module;
        let mut stripper = ConsoleStripper::new(
            &parsed.source_map,
            &self.matcher,
            &self.options.markers,
            &index,
        );
        module.visit_mut_with(&mut stripper);
        let summary = stripper.summary();

        tracing::debug!(
            id,
            removed = summary.removed_statements,
            replaced = summary.replaced_expressions,
            retained = summary.retained_calls,
            "transformed"
        );

        let emitted = emit_module(&module, parsed.source_map.clone(), &parsed.comments)?;
        Ok(TransformOutput {
            code: emitted.code,
            map: Some(emitted.map),
            summary,
        })
    }
}

/// Build a transform closure from `options`, for hosts that want a plain function.
pub fn generate_transform(
    options: KeepConsoleOptions,
) -> impl Fn(&str, &str) -> Result<TransformOutput, TransformError> + Send + Sync {
    let transform = KeepConsole::new(options);
    move |code: &str, id: &str| transform.transform(code, id)
}
