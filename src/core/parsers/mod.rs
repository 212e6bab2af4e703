//! Source parsing via swc.

pub mod source;
