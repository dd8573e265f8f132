//! Stable error codes for host-facing error reporting.

/// Trait giving every subsystem error a stable, machine-readable code.
/// Codes are part of the host protocol surface and must not change
/// between releases.
pub trait LintErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_MALFORMED: &str = "CONFIG_MALFORMED";
pub const CONFIG_UNSUPPORTED_VERSION: &str = "CONFIG_UNSUPPORTED_VERSION";
pub const CONFIG_EMPTY: &str = "CONFIG_EMPTY";
pub const CONFIG_UNKNOWN_RULE: &str = "CONFIG_UNKNOWN_RULE";
pub const PROGRAM_IO: &str = "PROGRAM_IO";
pub const PROGRAM_PARSE: &str = "PROGRAM_PARSE";
pub const ENGINE_MISSING_SOURCE_FILES: &str = "ENGINE_MISSING_SOURCE_FILES";
pub const ENGINE_OUTPUT_IO: &str = "ENGINE_OUTPUT_IO";
