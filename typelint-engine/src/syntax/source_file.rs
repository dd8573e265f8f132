//! SourceFile: immutable parsed syntax tree plus text for one input file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tree_sitter::{Parser, Tree};
use typelint_core::{ProgramError, TextRange};

use super::node::Node;

/// One parsed input file. Owned by a `Program`, shared read-only via `Arc`,
/// never mutated by the engine.
pub struct SourceFile {
    path: PathBuf,
    text: String,
    tree: Tree,
}

impl SourceFile {
    /// Parse `text` as TypeScript (TSX when the extension says so).
    pub fn parse(path: PathBuf, text: String) -> Result<Arc<Self>, ProgramError> {
        let language: tree_sitter::Language = if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsx"))
        {
            tree_sitter_typescript::LANGUAGE_TSX.into()
        } else {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        };

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|_| ProgramError::Parse { path: path.clone() })?;
        let tree = parser
            .parse(&text, None)
            .ok_or_else(|| ProgramError::Parse { path: path.clone() })?;

        Ok(Arc::new(Self { path, text, tree }))
    }

    /// Read and parse a file from disk.
    pub fn load(path: PathBuf) -> Result<Arc<Self>, ProgramError> {
        let text = std::fs::read_to_string(&path).map_err(|source| ProgramError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(path, text)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path as it appears on the wire.
    pub fn file_name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range spanning the whole file.
    pub fn full_range(&self) -> TextRange {
        TextRange::new(0, self.text.len() as u32)
    }

    /// Root syntax node.
    pub fn root(&self) -> Node<'_> {
        Node::from_ts(self.tree.root_node())
    }

    /// Text slice covered by `node`.
    pub fn node_text(&self, node: Node<'_>) -> &str {
        &self.text[node.start_byte()..node.end_byte()]
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("len", &self.text.len())
            .finish()
    }
}
