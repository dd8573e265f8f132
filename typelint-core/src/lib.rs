//! typelint-core: shared foundation for the typelint engine.
//!
//! Holds the pieces every other crate leans on: error enums (one per
//! subsystem, `thiserror` only), stable error codes, configuration,
//! text ranges, FxHash collection aliases, and tracing setup.

pub mod config;
pub mod errors;
pub mod tracing_setup;
pub mod types;

pub use config::LintConfig;
pub use errors::{ConfigError, EngineError, LintErrorCode, ProgramError};
pub use types::TextRange;
