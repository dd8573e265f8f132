//! Type-checker shards.
//!
//! The real checker is an external collaborator; this module models its
//! surface as the engine sees it: an owned, non-clonable shard handle the
//! worker pool moves between workers. Exclusive use is enforced by
//! ownership, not by locking.

use super::node::Node;
use super::source_file::SourceFile;
use super::NodeKind;

/// Primitive type facts the checker facade can answer syntactically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Number,
    String,
    Boolean,
    Null,
}

impl PrimitiveType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// One type-checker shard.
///
/// Deliberately not `Clone`: a shard is exclusively owned by whichever
/// worker currently holds its job, and that invariant is structural.
#[derive(Debug)]
pub struct TypeChecker {
    shard: usize,
}

impl TypeChecker {
    pub(crate) fn new(shard: usize) -> Self {
        Self { shard }
    }

    /// Index of this shard within its program's checker set.
    pub fn shard_index(&self) -> usize {
        self.shard
    }

    /// Literal type of `node`, when syntactically evident.
    pub fn primitive_type_of(&self, _file: &SourceFile, node: Node<'_>) -> Option<PrimitiveType> {
        match node.kind() {
            NodeKind::NumericLiteral => Some(PrimitiveType::Number),
            NodeKind::StringLiteral => Some(PrimitiveType::String),
            NodeKind::BooleanLiteral => Some(PrimitiveType::Boolean),
            NodeKind::NullLiteral => Some(PrimitiveType::Null),
            _ => None,
        }
    }
}
