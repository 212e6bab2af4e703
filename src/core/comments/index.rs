//! Position-based lookup of comments around and inside AST nodes.
//!
//! swc keys comments by the byte position of the token they were lexed next to, and
//! which neighbour wins depends on the token kind. The index instead works on the
//! source text: it flattens every comment into one sorted list and answers "which
//! comments sit right before / right after / inside this node" by looking at what
//! separates the comment from the node.

use std::sync::Arc;

use swc_common::{
    BytePos, SourceFile, Span, Spanned,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::{
    ClassMember, Expr, JSXAttrOrSpread, JSXElementChild, ModuleItem, Pat, Prop, Stmt, TsType,
    VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

/// All comments of one file, sorted by start position.
pub struct CommentIndex {
    comments: Vec<Comment>,
    source_file: Arc<SourceFile>,
}

impl CommentIndex {
    pub fn new(comments: &SingleThreadedComments, source_file: Arc<SourceFile>) -> Self {
        let (leading, trailing) = comments.borrow_all();
        let mut all: Vec<Comment> = leading
            .values()
            .chain(trailing.values())
            .flat_map(|cmts| cmts.iter().cloned())
            .collect();
        all.sort_by_key(|cmt| cmt.span.lo);
        all.dedup_by_key(|cmt| cmt.span);

        Self {
            comments: all,
            source_file,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.comments.len()
    }

    /// Comments directly before `pos`, separated from it and from each other only by
    /// whitespace. A comment trailing the previous statement on its line leads the next
    /// one as well. Returned in source order.
    pub fn leading(&self, pos: BytePos) -> Vec<&Comment> {
        let end = self.comments.partition_point(|cmt| cmt.span.hi <= pos);
        let mut cursor = pos;
        let mut found = Vec::new();

        for cmt in self.comments[..end].iter().rev() {
            if !self.is_blank(cmt.span.hi, cursor, true) {
                break;
            }
            found.push(cmt);
            cursor = cmt.span.lo;
        }

        found.reverse();
        found
    }

    /// Comments after `pos` on the same line, separated only by spaces or tabs.
    pub fn trailing(&self, pos: BytePos) -> Vec<&Comment> {
        let start = self.comments.partition_point(|cmt| cmt.span.lo < pos);
        let mut cursor = pos;
        let mut found = Vec::new();

        for cmt in &self.comments[start..] {
            if !self.is_blank(cursor, cmt.span.lo, false) {
                break;
            }
            found.push(cmt);
            cursor = cmt.span.hi;
        }

        found
    }

    /// Comments inside `extent` that belong to no child: not inside a child's span and
    /// not in the leading or trailing run of one.
    pub fn interior(&self, extent: &NodeExtent) -> Vec<&Comment> {
        let start = self
            .comments
            .partition_point(|cmt| cmt.span.lo < extent.span.lo);

        let candidates: Vec<&Comment> = self.comments[start..]
            .iter()
            .take_while(|cmt| cmt.span.hi <= extent.span.hi)
            .filter(|cmt| !extent.child_contains(cmt.span))
            .collect();
        if candidates.is_empty() {
            return candidates;
        }

        let attached: Vec<Span> = extent
            .children
            .iter()
            .flat_map(|child| {
                self.leading(child.lo)
                    .into_iter()
                    .chain(self.trailing(child.hi))
            })
            .map(|cmt| cmt.span)
            .collect();

        candidates
            .into_iter()
            .filter(|cmt| !attached.contains(&cmt.span))
            .collect()
    }

    /// True if the text between `lo` and `hi` is whitespace only. Line breaks are
    /// allowed only when `across_lines` is set.
    fn is_blank(&self, lo: BytePos, hi: BytePos, across_lines: bool) -> bool {
        let src: &str = &self.source_file.src;
        let start = self.source_file.start_pos;
        if lo < start || hi < lo {
            return false;
        }

        let from = (lo.0 - start.0) as usize;
        let to = (hi.0 - start.0) as usize;
        src.get(from..to).is_some_and(|gap| {
            gap.chars()
                .all(|c| c.is_whitespace() && (across_lines || (c != '\n' && c != '\r')))
        })
    }
}

/// The span of a node together with the spans of its direct children.
///
/// Built right before a node becomes the parent of something under evaluation, so
/// the parent's interior comments can be computed without holding a reference to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeExtent {
    pub span: Span,
    pub children: Vec<Span>,
}

impl NodeExtent {
    pub fn of<N>(node: &N) -> Self
    where
        N: Spanned + VisitWith<ChildSpans>,
    {
        let mut collector = ChildSpans::default();
        node.visit_children_with(&mut collector);
        Self {
            span: node.span(),
            children: collector.spans,
        }
    }

    fn child_contains(&self, span: Span) -> bool {
        self.children
            .iter()
            .any(|child| child.lo <= span.lo && span.hi <= child.hi)
    }
}

/// Records the spans of the first structural nodes below a node without descending
/// further.
#[derive(Default)]
pub struct ChildSpans {
    spans: Vec<Span>,
}

impl Visit for ChildSpans {
    fn visit_expr(&mut self, node: &Expr) {
        self.spans.push(node.span());
    }

    fn visit_stmt(&mut self, node: &Stmt) {
        self.spans.push(node.span());
    }

    fn visit_module_item(&mut self, node: &ModuleItem) {
        self.spans.push(node.span());
    }

    fn visit_pat(&mut self, node: &Pat) {
        self.spans.push(node.span());
    }

    fn visit_prop(&mut self, node: &Prop) {
        self.spans.push(node.span());
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        self.spans.push(node.span);
    }

    fn visit_class_member(&mut self, node: &ClassMember) {
        self.spans.push(node.span());
    }

    fn visit_jsx_attr_or_spread(&mut self, node: &JSXAttrOrSpread) {
        self.spans.push(node.span());
    }

    fn visit_jsx_element_child(&mut self, node: &JSXElementChild) {
        self.spans.push(node.span());
    }

    fn visit_ts_type(&mut self, node: &TsType) {
        self.spans.push(node.span());
    }
}
