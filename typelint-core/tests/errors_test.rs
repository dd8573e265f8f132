//! Tests for error enums, codes, and conversions.

use std::path::PathBuf;

use typelint_core::errors::error_code;
use typelint_core::{ConfigError, EngineError, LintErrorCode, ProgramError};

#[test]
fn config_errors_have_stable_codes() {
    assert_eq!(
        ConfigError::Malformed("bad".into()).error_code(),
        error_code::CONFIG_MALFORMED
    );
    assert_eq!(
        ConfigError::UnsupportedVersion(7).error_code(),
        error_code::CONFIG_UNSUPPORTED_VERSION
    );
    assert_eq!(
        ConfigError::UnknownRule { name: "x".into() }.error_code(),
        error_code::CONFIG_UNKNOWN_RULE
    );
}

#[test]
fn engine_error_delegates_codes_to_subsystems() {
    let err: EngineError = ConfigError::Empty.into();
    assert_eq!(err.error_code(), error_code::CONFIG_EMPTY);

    let err: EngineError = ProgramError::Parse {
        path: PathBuf::from("f.ts"),
    }
    .into();
    assert_eq!(err.error_code(), error_code::PROGRAM_PARSE);

    let err = EngineError::MissingSourceFiles {
        paths: "a.ts".into(),
    };
    assert_eq!(err.error_code(), error_code::ENGINE_MISSING_SOURCE_FILES);
}

#[test]
fn display_messages_are_host_readable() {
    let err = ConfigError::UnknownRule {
        name: "does-not-exist".into(),
    };
    assert_eq!(err.to_string(), "unknown rule: does-not-exist");

    let err = ConfigError::UnsupportedVersion(7);
    assert_eq!(
        err.to_string(),
        "unsupported version `7`: expected `unset` or `2`"
    );
}
