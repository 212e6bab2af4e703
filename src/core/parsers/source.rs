use std::sync::Arc;

use swc_common::{
    FileName, SourceFile, SourceMap, Spanned, comments::SingleThreadedComments,
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, error::Error as ParseError};

use crate::core::{error::TransformError, file_kind::FileKind};

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub source_file: Arc<SourceFile>,
    /// Kept as swc's own store so the emitter can print retained comments.
    pub comments: SingleThreadedComments,
}

/// Parse `code` as a module using the syntax selected by `kind`.
///
/// Errors the parser recovered from are still reported as failures, so a file either
/// parses cleanly or is rejected as a whole.
pub fn parse_source(
    code: &str,
    file_path: &str,
    kind: FileKind,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource, TransformError> {
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

    let comments = SingleThreadedComments::default();
    let mut parser = Parser::new(
        kind.syntax(),
        StringInput::from(&*source_file),
        Some(&comments),
    );

    let parsed = parser.parse_module();
    let recovered = parser.take_errors();

    let module = parsed.map_err(|e| parse_error(&source_map, file_path, e))?;
    if let Some(first) = recovered.into_iter().next() {
        return Err(parse_error(&source_map, file_path, first));
    }

    Ok(ParsedSource {
        module,
        source_map,
        source_file,
        comments,
    })
}

fn parse_error(source_map: &SourceMap, file_path: &str, error: ParseError) -> TransformError {
    let loc = source_map.lookup_char_pos(error.span().lo);
    TransformError::Parse {
        path: file_path.to_string(),
        line: loc.line,
        column: loc.col_display + 1,
        message: error.kind().msg().to_string(),
    }
}
