use swc_common::Span;

/// Syntax node kinds that can carry reportable text.
///
/// Every other node is only walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Literal text between JSX tags: `<p>text</p>`.
    JsxText,
    /// A plain string literal that is the whole content of a JSX expression
    /// container: `<p>{"text"}</p>`.
    EmbeddedString,
    /// Any string literal anywhere in the module.
    StringLiteral,
}

/// A text-bearing node lowered out of the swc AST.
#[derive(Debug, Clone, Copy)]
pub struct TextNode<'a> {
    pub kind: NodeKind,
    pub value: &'a str,
    pub span: Span,
}

impl<'a> TextNode<'a> {
    pub fn new(kind: NodeKind, value: &'a str, span: Span) -> Self {
        Self { kind, value, span }
    }
}
