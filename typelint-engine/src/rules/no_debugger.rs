//! no-debugger: disallow `debugger` statements.

use crate::rule::{Rule, RuleContext, RuleFix, RuleListeners, RuleMessage, RuleSuggestion};
use crate::syntax::NodeKind;

pub static RULE: Rule = Rule {
    name: "no-debugger",
    run,
};

fn run<'t>(_ctx: &RuleContext<'t>) -> RuleListeners<'t> {
    let mut listeners = RuleListeners::new();
    listeners.on(NodeKind::DebuggerStatement, |ctx, node| {
        ctx.report_node_with_suggestions(
            node,
            RuleMessage::new("unexpected", "Unexpected 'debugger' statement."),
            || {
                vec![RuleSuggestion {
                    message: RuleMessage::new("remove", "Remove the 'debugger' statement."),
                    fixes: vec![RuleFix::remove(node.range())],
                }]
            },
        );
    });
    listeners
}
