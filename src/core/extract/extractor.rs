use std::collections::HashSet;

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{
    ArrowExpr, BlockStmt, BlockStmtOrExpr, Constructor, Expr, ExprStmt, Function, GetterProp,
    JSXExpr, JSXExprContainer, JSXText, Lit, Module, ModuleItem, SetterProp, Stmt, Str,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::node::{NodeKind, TextNode};
use crate::core::{
    detect::{Detector, ScanMode, ScriptDetector},
    parsers::jsx::ParsedSource,
    results::ExtractedEntry,
};

/// Walks a module and collects the text accepted by the active scan mode.
pub struct TextExtractor<'a> {
    file_path: &'a str,
    mode: ScanMode,
    detector: Detector,
    source_map: &'a SourceMap,
    /// Start positions of directive literals (`"use strict"` and the like).
    directives: HashSet<BytePos>,
    entries: Vec<ExtractedEntry>,
}

impl<'a> TextExtractor<'a> {
    pub fn new(file_path: &'a str, mode: ScanMode, source_map: &'a SourceMap) -> Self {
        Self {
            file_path,
            mode,
            detector: mode.detector(),
            source_map,
            directives: HashSet::new(),
            entries: Vec::new(),
        }
    }

    pub fn extract(mut self, module: &Module) -> Vec<ExtractedEntry> {
        self.visit_module(module);
        self.entries
    }

    /// Record the directive prologue: the leading run of statements that are
    /// a bare string literal.
    fn mark_directives<'s>(&mut self, stmts: impl IntoIterator<Item = Option<&'s Stmt>>) {
        self.directives.extend(
            stmts
                .into_iter()
                .map_while(|stmt| stmt.and_then(as_directive))
                .map(|s| s.span.lo),
        );
    }

    fn mark_body_directives(&mut self, body: Option<&BlockStmt>) {
        if let Some(body) = body {
            self.mark_directives(body.stmts.iter().map(Some));
        }
    }

    fn accept(&mut self, node: TextNode<'_>) {
        let (text, pos) = match (self.mode, node.kind) {
            (ScanMode::Arabic, NodeKind::JsxText) => {
                let trimmed = node.value.trim();
                // JSX text spans cover the raw value, so the leading
                // whitespace length is the offset of the trimmed text.
                let trim_start_offset = node.value.len() - node.value.trim_start().len();
                (trimmed, node.span.lo + BytePos(trim_start_offset as u32))
            }
            (ScanMode::Arabic, NodeKind::EmbeddedString) => (node.value.trim(), node.span.lo),
            (ScanMode::English, NodeKind::StringLiteral) => (node.value, node.span.lo),
            (ScanMode::Arabic, NodeKind::StringLiteral)
            | (ScanMode::English, NodeKind::JsxText | NodeKind::EmbeddedString) => return,
        };

        if !self.detector.matches(text) {
            return;
        }

        let loc = self.source_map.lookup_char_pos(pos);
        self.entries
            .push(ExtractedEntry::new(self.file_path, text).with_position(loc.line, loc.col.0 + 1));
    }
}

/// Unwrap parentheses around a string literal; anything else is not plain.
fn as_plain_str(expr: &Expr) -> Option<&Str> {
    match expr {
        Expr::Lit(Lit::Str(s)) => Some(s),
        Expr::Paren(paren) => as_plain_str(&paren.expr),
        _ => None,
    }
}

fn as_directive(stmt: &Stmt) -> Option<&Str> {
    match stmt {
        Stmt::Expr(ExprStmt { expr, .. }) => match &**expr {
            Expr::Lit(Lit::Str(s)) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

impl Visit for TextExtractor<'_> {
    fn visit_module(&mut self, node: &Module) {
        self.mark_directives(node.body.iter().map(|item| match item {
            ModuleItem::Stmt(stmt) => Some(stmt),
            ModuleItem::ModuleDecl(_) => None,
        }));
        node.visit_children_with(self);
    }

    fn visit_function(&mut self, node: &Function) {
        self.mark_body_directives(node.body.as_ref());
        node.visit_children_with(self);
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        if let BlockStmtOrExpr::BlockStmt(body) = &*node.body {
            self.mark_body_directives(Some(body));
        }
        node.visit_children_with(self);
    }

    fn visit_constructor(&mut self, node: &Constructor) {
        self.mark_body_directives(node.body.as_ref());
        node.visit_children_with(self);
    }

    fn visit_getter_prop(&mut self, node: &GetterProp) {
        self.mark_body_directives(node.body.as_ref());
        node.visit_children_with(self);
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        self.mark_body_directives(node.body.as_ref());
        node.visit_children_with(self);
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        self.accept(TextNode::new(NodeKind::JsxText, &node.value, node.span));
    }

    fn visit_jsx_expr_container(&mut self, node: &JSXExprContainer) {
        if let JSXExpr::Expr(expr) = &node.expr
            && let Some(s) = as_plain_str(expr)
            && let Some(value) = s.value.as_str()
        {
            self.accept(TextNode::new(NodeKind::EmbeddedString, value, s.span));
        }
        node.visit_children_with(self);
    }

    fn visit_str(&mut self, node: &Str) {
        if self.directives.contains(&node.span.lo) {
            return;
        }
        if let Some(value) = node.value.as_str() {
            self.accept(TextNode::new(NodeKind::StringLiteral, value, node.span));
        }
    }
}

/// Extract every text of `parsed` accepted by `mode`, in traversal order.
pub fn extract(parsed: &ParsedSource, file_path: &str, mode: ScanMode) -> Vec<ExtractedEntry> {
    TextExtractor::new(file_path, mode, &parsed.source_map).extract(&parsed.module)
}
