//! Program-creation errors: unreadable or unparseable source files.
//! Fatal for the program group they occur in.

use std::path::PathBuf;

use super::error_code::{self, LintErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse { path: PathBuf },
}

impl LintErrorCode for ProgramError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::PROGRAM_IO,
            Self::Parse { .. } => error_code::PROGRAM_PARSE,
        }
    }
}
