//! Comment lookup for console calls.
//!
//! - `index`: every comment of a file, queried by position relative to a node
//! - `collector`: the comments associated with one call, with parent fallback

pub mod collector;
pub mod index;

pub use collector::CommentCollector;
pub use index::{ChildSpans, CommentIndex, NodeExtent};
