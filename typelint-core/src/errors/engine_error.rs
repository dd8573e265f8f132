//! Top-level engine errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, LintErrorCode};
use super::{ConfigError, ProgramError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("program error: {0}")]
    Program(#[from] ProgramError),

    /// A file was assigned to a program that does not contain it.
    /// This signals an upstream assignment bug and is never retried.
    #[error("files assigned to program but missing from its source files: {paths}")]
    MissingSourceFiles { paths: String },

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl LintErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Program(e) => e.error_code(),
            Self::MissingSourceFiles { .. } => error_code::ENGINE_MISSING_SOURCE_FILES,
            Self::Output(_) => error_code::ENGINE_OUTPUT_IO,
        }
    }
}
