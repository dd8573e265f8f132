//! typelint-engine: type-aware lint engine with a headless streaming protocol.
//!
//! The engine runs every applicable rule against every file exactly once:
//! files are partitioned across type-checker shards, worker threads claim
//! shards and drive a single merged-listener traversal per file, and
//! diagnostics stream to the host over a length-prefixed binary protocol.

pub mod headless;
pub mod linter;
pub mod rule;
pub mod rules;
pub mod syntax;

pub use linter::{run_linter, run_linter_on_program, ConfiguredRule};
pub use rule::{FixMode, RuleContext, RuleDiagnostic, RuleFix, RuleListeners, RuleMessage, RuleSuggestion};
pub use syntax::{Node, NodeKind, Program, SourceFile, TypeChecker};
