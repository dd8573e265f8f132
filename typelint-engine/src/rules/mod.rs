//! Built-in rules and the name-to-rule registry.

pub mod eqeqeq;
pub mod no_debugger;
pub mod no_empty_function;

use crate::rule::Rule;

/// Every rule the engine ships.
pub static ALL_RULES: &[&Rule] = &[
    &eqeqeq::RULE,
    &no_debugger::RULE,
    &no_empty_function::RULE,
];

/// Look up a rule by its registered name.
pub fn rule_by_name(name: &str) -> Option<&'static Rule> {
    ALL_RULES.iter().copied().find(|r| r.name == name)
}
