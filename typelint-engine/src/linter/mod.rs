//! Per-file dispatch, traversal, and the checker-shard worker pool.

pub mod dispatch;
pub mod pool;

use std::sync::Arc;

use crate::rule::{Rule, RuleContext, RuleListeners};

pub use pool::{run_linter, run_linter_on_program};

/// A rule bound to its per-run configuration, instantiated fresh per file.
pub struct ConfiguredRule {
    pub name: String,
    pub run: RuleRunner,
}

/// Boxed rule entry point. Closures allow embedders and tests to capture
/// options; registry rules are plain function pointers behind the same type.
pub type RuleRunner =
    Arc<dyn for<'t> Fn(&RuleContext<'t>) -> RuleListeners<'t> + Send + Sync>;

impl ConfiguredRule {
    /// Wrap a registry rule with no extra configuration.
    pub fn from_rule(rule: &'static Rule) -> Self {
        Self {
            name: rule.name.to_string(),
            run: Arc::new(rule.run),
        }
    }
}

/// Callback choosing which rules apply to a file.
pub type RulesForFile<'a> = dyn Fn(&crate::syntax::SourceFile) -> Vec<ConfiguredRule> + Sync + 'a;
