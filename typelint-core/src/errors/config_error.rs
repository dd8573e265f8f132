//! Configuration errors: malformed headless payloads and unknown rules.
//! All of these are fatal before any linting starts.

use super::error_code::{self, LintErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to deserialize payload: {0}")]
    Malformed(String),

    #[error("unsupported version `{0}`: expected `unset` or `2`")]
    UnsupportedVersion(u32),

    #[error("payload has no files")]
    Empty,

    #[error("unknown rule: {name}")]
    UnknownRule { name: String },
}

impl LintErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => error_code::CONFIG_MALFORMED,
            Self::UnsupportedVersion(_) => error_code::CONFIG_UNSUPPORTED_VERSION,
            Self::Empty => error_code::CONFIG_EMPTY,
            Self::UnknownRule { .. } => error_code::CONFIG_UNKNOWN_RULE,
        }
    }
}
