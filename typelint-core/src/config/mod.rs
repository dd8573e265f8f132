//! Configuration for the typelint engine.

pub mod lint_config;

pub use lint_config::LintConfig;
