//! Node: a lightweight, copyable view over one tree-sitter syntax node.

use typelint_core::TextRange;

use super::kind::NodeKind;

/// A syntax node borrowed from a `SourceFile`'s tree.
///
/// `Copy`, 16 bytes in practice; listeners receive these by value.
#[derive(Debug, Clone, Copy)]
pub struct Node<'t> {
    ts: tree_sitter::Node<'t>,
}

impl<'t> Node<'t> {
    pub(crate) fn from_ts(ts: tree_sitter::Node<'t>) -> Self {
        Self { ts }
    }

    /// The node's dispatch kind.
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_grammar(self.ts.kind())
    }

    /// The raw tree-sitter grammar kind name.
    pub fn grammar_kind(&self) -> &'static str {
        self.ts.kind()
    }

    /// Byte range of this node's text.
    pub fn range(&self) -> TextRange {
        TextRange::new(self.ts.start_byte() as u32, self.ts.end_byte() as u32)
    }

    pub fn start_byte(&self) -> usize {
        self.ts.start_byte()
    }

    pub fn end_byte(&self) -> usize {
        self.ts.end_byte()
    }

    /// Stable identity within one tree, used to recognize field children
    /// during traversal.
    pub fn id(&self) -> usize {
        self.ts.id()
    }

    pub fn is_named(&self) -> bool {
        self.ts.is_named()
    }

    /// Named AST children, in document order. Extras (comments) are
    /// excluded: they are trivia, not AST structure.
    pub fn named_children(&self) -> Vec<Node<'t>> {
        let count = self.ts.named_child_count();
        let mut children = Vec::with_capacity(count);
        for i in 0..count {
            if let Some(child) = self.ts.named_child(i) {
                if !child.is_extra() {
                    children.push(Node::from_ts(child));
                }
            }
        }
        children
    }

    /// All children including anonymous tokens, in document order.
    /// Used only where the traversal must see operator tokens.
    pub fn all_children(&self) -> Vec<Node<'t>> {
        let count = self.ts.child_count();
        let mut children = Vec::with_capacity(count);
        for i in 0..count {
            if let Some(child) = self.ts.child(i) {
                if !child.is_extra() {
                    children.push(Node::from_ts(child));
                }
            }
        }
        children
    }

    /// Child bound to a grammar field, e.g. `left`, `operator`, `value`.
    pub fn child_by_field(&self, field: &str) -> Option<Node<'t>> {
        self.ts.child_by_field_name(field).map(Node::from_ts)
    }
}
