//! AST rewrite that removes console calls not marked for keeping.
//!
//! A matched call is handled by its syntactic position:
//!
//! - the whole expression of a statement: the statement is removed
//! - anywhere else (a value, an argument, a ternary branch, a JSX child): the call is
//!   replaced by `undefined` so the surrounding expression stays valid
//!
//! Kept calls are still descended into, so `console.log(console.log(1))` with a marker
//! on the outer call keeps the outer call but still evaluates the inner one.

use swc_common::{SourceMap, Spanned};
use swc_ecma_ast::{
    CallExpr, ClassMember, Decorator, EmptyStmt, Expr, ExprStmt, Ident, JSXAttr, JSXExprContainer,
    ModuleDecl, ModuleItem, Pat, Prop, Stmt, SwitchCase, VarDeclarator,
};
use swc_ecma_visit::{VisitMut, VisitMutWith, VisitWith};

use crate::core::{
    comments::{ChildSpans, CommentCollector, CommentIndex, NodeExtent},
    keep::{Disposition, disposition},
    matcher::ConsoleMatcher,
    options::KeepMarkers,
};

/// Counts of what one rewrite did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Expression statements deleted outright.
    pub removed_statements: usize,
    /// Calls in value position replaced by `undefined`.
    pub replaced_expressions: usize,
    /// Matched calls left in place because of a keep marker.
    pub retained_calls: usize,
}

impl RewriteSummary {
    pub fn stripped(&self) -> usize {
        self.removed_statements + self.replaced_expressions
    }

    pub fn is_unchanged(&self) -> bool {
        self.stripped() == 0
    }
}

pub struct ConsoleStripper<'a> {
    source_map: &'a SourceMap,
    matcher: &'a ConsoleMatcher,
    markers: &'a KeepMarkers,
    collector: CommentCollector<'a>,

    /// Enclosing nodes that own an expression slot, innermost last. The last one is
    /// the structural parent of whatever call is evaluated next.
    parents: Vec<NodeExtent>,
    summary: RewriteSummary,
}

impl<'a> ConsoleStripper<'a> {
    pub fn new(
        source_map: &'a SourceMap,
        matcher: &'a ConsoleMatcher,
        markers: &'a KeepMarkers,
        comments: &'a CommentIndex,
    ) -> Self {
        Self {
            source_map,
            matcher,
            markers,
            collector: CommentCollector::new(comments),
            parents: Vec::new(),
            summary: RewriteSummary::default(),
        }
    }

    pub fn summary(&self) -> RewriteSummary {
        self.summary
    }

    /// Decide a call's fate, or `None` if it is not a console call we act on.
    fn evaluate(&self, call: &CallExpr, parent: Option<&NodeExtent>) -> Option<Disposition> {
        let console_call = self.matcher.matches(call)?;
        let comments = self.collector.collect(call, parent);
        let verdict = disposition(comments, self.markers);

        let line = self.source_map.lookup_char_pos(call.span.lo).line;
        tracing::debug!(
            line,
            method = console_call.method.unwrap_or("<computed>"),
            keep = verdict == Disposition::Keep,
            "console call"
        );

        Some(verdict)
    }

    fn with_parent(&mut self, extent: NodeExtent, f: impl FnOnce(&mut Self)) {
        self.parents.push(extent);
        f(self);
        self.parents.pop();
    }

    /// Visit the children of `node` with `node` as their parent.
    fn descend<N>(&mut self, node: &mut N)
    where
        N: Spanned + VisitWith<ChildSpans> + VisitMutWith<Self>,
    {
        let extent = NodeExtent::of(&*node);
        self.with_parent(extent, |this| node.visit_mut_children_with(this));
    }

    /// Visit a statement in a statement list. Returns false if it should be dropped.
    fn visit_statement(&mut self, stmt: &mut Stmt) -> bool {
        let extent = NodeExtent::of(&*stmt);

        if let Some(call) = statement_call(stmt) {
            match self.evaluate(call, Some(&extent)) {
                Some(Disposition::Strip) => {
                    self.summary.removed_statements += 1;
                    return false;
                }
                Some(Disposition::Keep) => {
                    self.summary.retained_calls += 1;
                    let call_extent = NodeExtent::of(&*call);
                    self.with_parent(call_extent, |this| call.visit_mut_children_with(this));
                    return true;
                }
                None => {}
            }
        }

        self.with_parent(extent, |this| stmt.visit_mut_children_with(this));
        true
    }
}

impl VisitMut for ConsoleStripper<'_> {
    fn visit_mut_module_items(&mut self, items: &mut Vec<ModuleItem>) {
        items.retain_mut(|item| match item {
            ModuleItem::Stmt(stmt) => self.visit_statement(stmt),
            ModuleItem::ModuleDecl(decl) => {
                decl.visit_mut_with(self);
                true
            }
        });
    }

    fn visit_mut_stmts(&mut self, stmts: &mut Vec<Stmt>) {
        stmts.retain_mut(|stmt| self.visit_statement(stmt));
    }

    /// Statement slots that cannot shrink, such as the body of a braceless `if`.
    fn visit_mut_stmt(&mut self, stmt: &mut Stmt) {
        if !self.visit_statement(stmt) {
            *stmt = Stmt::Empty(EmptyStmt { span: stmt.span() });
        }
    }

    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if let Expr::Call(call) = &*expr
            && let Some(verdict) = self.evaluate(call, self.parents.last())
        {
            match verdict {
                Disposition::Strip => {
                    let span = call.span;
                    *expr = Expr::Ident(Ident::new_no_ctxt("undefined".into(), span));
                    self.summary.replaced_expressions += 1;
                    return;
                }
                Disposition::Keep => self.summary.retained_calls += 1,
            }
        }

        self.descend(expr);
    }

    fn visit_mut_module_decl(&mut self, decl: &mut ModuleDecl) {
        self.descend(decl);
    }

    fn visit_mut_var_declarator(&mut self, declarator: &mut VarDeclarator) {
        self.descend(declarator);
    }

    fn visit_mut_prop(&mut self, prop: &mut Prop) {
        self.descend(prop);
    }

    fn visit_mut_class_member(&mut self, member: &mut ClassMember) {
        self.descend(member);
    }

    fn visit_mut_pat(&mut self, pat: &mut Pat) {
        self.descend(pat);
    }

    fn visit_mut_jsx_expr_container(&mut self, container: &mut JSXExprContainer) {
        self.descend(container);
    }

    fn visit_mut_jsx_attr(&mut self, attr: &mut JSXAttr) {
        self.descend(attr);
    }

    fn visit_mut_switch_case(&mut self, case: &mut SwitchCase) {
        self.descend(case);
    }

    fn visit_mut_decorator(&mut self, decorator: &mut Decorator) {
        self.descend(decorator);
    }
}

/// The call forming an expression statement, looking through parentheses.
fn statement_call(stmt: &mut Stmt) -> Option<&mut CallExpr> {
    let Stmt::Expr(ExprStmt { expr, .. }) = stmt else {
        return None;
    };
    match peel_parens(expr) {
        Expr::Call(call) => Some(call),
        _ => None,
    }
}

fn peel_parens(expr: &mut Expr) -> &mut Expr {
    match expr {
        Expr::Paren(paren) => peel_parens(&mut paren.expr),
        other => other,
    }
}
