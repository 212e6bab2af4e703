//! Gathers every comment associated with a console call.
//!
//! A keep marker counts wherever it was written:
//!
//! ```js
//! // keep-console
//! console.log("above");
//!
//! console.log("after"); /* keep-console */
//!
//! console.log(/** keep-console */ "inside");
//! ```
//!
//! For each of the leading, trailing and interior slots the call's own comments are
//! used; only when that slot is empty are the parent's comments in the same slot used
//! instead. Comments around and inside each argument are always added.

use swc_common::{Spanned, comments::Comment};
use swc_ecma_ast::CallExpr;

use super::index::{CommentIndex, NodeExtent};

pub struct CommentCollector<'a> {
    index: &'a CommentIndex,
}

impl<'a> CommentCollector<'a> {
    pub fn new(index: &'a CommentIndex) -> Self {
        Self { index }
    }

    /// All comments reachable from `call`, falling back to `parent` per slot.
    ///
    /// Duplicates are possible when a comment is reachable through several slots.
    pub fn collect(&self, call: &CallExpr, parent: Option<&NodeExtent>) -> Vec<&'a Comment> {
        let own = NodeExtent::of(call);
        let index = self.index;

        let leading = or_parent(index.leading(own.span.lo), parent, |p| index.leading(p.span.lo));
        let trailing = or_parent(index.trailing(own.span.hi), parent, |p| {
            index.trailing(p.span.hi)
        });
        let interior = or_parent(index.interior(&own), parent, |p| index.interior(p));

        let mut all = leading;
        all.extend(trailing);
        all.extend(interior);

        for arg in &call.args {
            let extent = NodeExtent::of(&*arg.expr);
            let arg_span = arg.span();
            all.extend(index.leading(arg_span.lo));
            all.extend(index.interior(&extent));
            all.extend(index.trailing(arg_span.hi));
        }

        all
    }
}

fn or_parent<'a>(
    own: Vec<&'a Comment>,
    parent: Option<&NodeExtent>,
    lookup: impl FnOnce(&NodeExtent) -> Vec<&'a Comment>,
) -> Vec<&'a Comment> {
    match parent {
        Some(parent) if own.is_empty() => lookup(parent),
        _ => own,
    }
}
