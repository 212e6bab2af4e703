//! Code generation for the rewritten module, with a source map back to the input.

use std::{io, sync::Arc};

use swc_common::{
    SourceMap, comments::SingleThreadedComments, source_map::DefaultSourceMapGenConfig,
};
use swc_ecma_ast::{EsVersion, Module};
use swc_ecma_codegen::{Config, Emitter, text_writer::JsWriter};

use crate::core::error::TransformError;

/// Generated code plus its serialized (JSON) source map.
#[derive(Debug, Clone)]
pub struct Emitted {
    pub code: String,
    pub map: String,
}

/// Print `module` with its surviving comments.
///
/// Syntax is emitted as written: no downleveling happens here. The map's `sources`
/// entry is the file name the source was registered under when parsing.
pub fn emit_module(
    module: &Module,
    source_map: Arc<SourceMap>,
    comments: &SingleThreadedComments,
) -> Result<Emitted, TransformError> {
    let mut code = Vec::new();
    let mut mappings = Vec::new();

    {
        let mut emitter = Emitter {
            cfg: Config::default().with_target(EsVersion::latest()),
            cm: source_map.clone(),
            comments: Some(comments),
            wr: JsWriter::new(source_map.clone(), "\n", &mut code, Some(&mut mappings)),
        };
        emitter.emit_module(module)?;
    }

    let mut map = Vec::new();
    source_map
        .build_source_map(&mappings, None, DefaultSourceMapGenConfig)
        .to_writer(&mut map)
        .map_err(|e| TransformError::SourceMap(e.to_string()))?;

    Ok(Emitted {
        code: into_utf8(code)?,
        map: into_utf8(map)?,
    })
}

fn into_utf8(bytes: Vec<u8>) -> Result<String, TransformError> {
    String::from_utf8(bytes)
        .map_err(|e| TransformError::Emit(io::Error::new(io::ErrorKind::InvalidData, e)))
}
