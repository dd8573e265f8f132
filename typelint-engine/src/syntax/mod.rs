//! Syntax layer: tree-sitter TypeScript parsing behind a compiler-shaped API.
//!
//! The engine consumes the compiler as a capability: a `Program` owning
//! immutable `SourceFile`s and producing type-checker shards. This module
//! is that capability's surface.

pub mod checker;
pub mod kind;
pub mod node;
pub mod program;
pub mod source_file;

pub use checker::{PrimitiveType, TypeChecker};
pub use kind::NodeKind;
pub use node::Node;
pub use program::Program;
pub use source_file::SourceFile;
