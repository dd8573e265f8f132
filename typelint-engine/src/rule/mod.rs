//! Rule API: listener tables, diagnostics, and the reporting context.

pub mod context;
pub mod diagnostic;
pub mod listeners;

pub use context::{FixMode, RuleContext};
pub use diagnostic::{RuleDiagnostic, RuleFix, RuleMessage, RuleSuggestion};
pub use listeners::{ListenerKey, PatternContext, Phase, RuleListeners};

use context::RuleContext as Ctx;
use listeners::RuleListeners as Listeners;

/// Rule entry point: given a per-file context, return the listeners to
/// merge into that file's dispatch table. May also report directly.
pub type RuleRunFn = for<'t> fn(&Ctx<'t>) -> Listeners<'t>;

/// A named rule as registered with the engine.
pub struct Rule {
    pub name: &'static str,
    pub run: RuleRunFn,
}
