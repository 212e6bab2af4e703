//! Lexical recognition of `console.<member>(...)` calls.
//!
//! No scope analysis is done: any identifier spelled `console` counts, and aliases
//! such as `const log = console.log` are not followed.

use std::collections::HashSet;

use swc_ecma_ast::{CallExpr, Callee, Expr, MemberProp};

/// A call whose callee is a member of `console`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleCall<'a> {
    /// Member name for `console.name(...)`; `None` for computed access like `console[key]()`.
    pub method: Option<&'a str>,
}

/// Decides whether a call targets the console API, honouring the member allow-list.
#[derive(Debug, Clone, Default)]
pub struct ConsoleMatcher {
    includes: HashSet<String>,
}

impl ConsoleMatcher {
    /// An empty `includes` set matches every member.
    pub fn new(includes: HashSet<String>) -> Self {
        Self { includes }
    }

    /// Returns the console call if `call` should be evaluated for stripping.
    pub fn matches<'a>(&self, call: &'a CallExpr) -> Option<ConsoleCall<'a>> {
        let console_call = console_call(call)?;

        if self.includes.is_empty() {
            return Some(console_call);
        }

        match console_call.method {
            Some(method) if self.includes.contains(method) => Some(console_call),
            _ => None,
        }
    }
}

/// Recognise `console.x(...)`, `console["x"](...)` and `(console.x)(...)`.
pub fn console_call(call: &CallExpr) -> Option<ConsoleCall<'_>> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };

    let Expr::Member(member) = unwrap_parens(callee) else {
        return None;
    };
    let Expr::Ident(object) = &*member.obj else {
        return None;
    };
    if object.sym.as_str() != "console" {
        return None;
    }

    let method = match &member.prop {
        MemberProp::Ident(name) => Some(name.sym.as_str()),
        _ => None,
    };
    Some(ConsoleCall { method })
}

fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        other => other,
    }
}
