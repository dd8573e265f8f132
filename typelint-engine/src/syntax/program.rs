//! Program: a bound set of source files plus type-checking capability.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use typelint_core::types::collections::FxHashSet;
use typelint_core::{EngineError, ProgramError};

use super::checker::TypeChecker;
use super::source_file::SourceFile;

/// A compiled, bound set of source files. Immutable for the duration of a
/// run; shared freely across workers.
pub struct Program {
    files: Vec<Arc<SourceFile>>,
    checker_shards: usize,
}

impl Program {
    /// Load and parse `paths` from disk. Duplicate paths are loaded once.
    pub fn load(paths: &[PathBuf], checker_shards: usize) -> Result<Self, ProgramError> {
        let mut seen: FxHashSet<&Path> = FxHashSet::default();
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            if seen.insert(path.as_path()) {
                files.push(SourceFile::load(path.clone())?);
            }
        }
        Ok(Self::from_files(files, checker_shards))
    }

    /// Build a program from in-memory sources. Used by tests and embedders.
    pub fn from_sources(
        sources: Vec<(PathBuf, String)>,
        checker_shards: usize,
    ) -> Result<Self, ProgramError> {
        let mut files = Vec::with_capacity(sources.len());
        for (path, text) in sources {
            files.push(SourceFile::parse(path, text)?);
        }
        Ok(Self::from_files(files, checker_shards))
    }

    fn from_files(files: Vec<Arc<SourceFile>>, checker_shards: usize) -> Self {
        Self {
            files,
            checker_shards: checker_shards.max(1),
        }
    }

    /// All source files in this program.
    pub fn source_files(&self) -> &[Arc<SourceFile>] {
        &self.files
    }

    pub fn checker_shard_count(&self) -> usize {
        self.checker_shards
    }

    /// Produce one fresh checker handle per shard. Each handle is an
    /// ownership token; the pool moves them into shard jobs.
    pub fn take_checkers(&self) -> Vec<TypeChecker> {
        (0..self.checker_shards).map(TypeChecker::new).collect()
    }

    /// Resolve assigned file paths to this program's source files.
    ///
    /// A path with no matching source file is an invariant violation: the
    /// caller's assignment logic placed a file in the wrong program. That
    /// is fatal and never retried.
    pub fn files_for_paths(&self, paths: &[PathBuf]) -> Result<Vec<Arc<SourceFile>>, EngineError> {
        let mut matched = Vec::with_capacity(paths.len());
        let mut missing: Vec<String> = Vec::new();
        for path in paths {
            match self.files.iter().find(|f| f.path() == path) {
                Some(file) => matched.push(Arc::clone(file)),
                None => missing.push(path.to_string_lossy().into_owned()),
            }
        }
        if !missing.is_empty() {
            return Err(EngineError::MissingSourceFiles {
                paths: missing.join(", "),
            });
        }
        Ok(matched)
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("files", &self.files.len())
            .field("checker_shards", &self.checker_shards)
            .finish()
    }
}
