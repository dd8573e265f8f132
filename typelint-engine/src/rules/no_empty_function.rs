//! no-empty-function: disallow functions with empty bodies.

use crate::rule::{Rule, RuleContext, RuleListeners, RuleMessage};
use crate::syntax::{Node, NodeKind};

pub static RULE: Rule = Rule {
    name: "no-empty-function",
    run,
};

fn is_empty_body(node: Node<'_>) -> bool {
    node.child_by_field("body")
        .map(|body| body.named_children().is_empty())
        .unwrap_or(false)
}

fn run<'t>(_ctx: &RuleContext<'t>) -> RuleListeners<'t> {
    let mut listeners = RuleListeners::new();
    for kind in [
        NodeKind::FunctionDeclaration,
        NodeKind::FunctionExpression,
        NodeKind::MethodDeclaration,
    ] {
        listeners.on(kind, |ctx, node| {
            if is_empty_body(node) {
                ctx.report_node(
                    node,
                    RuleMessage::new("empty", "Unexpected empty function body.").with_help(
                        "Add a comment inside the body if the function is intentionally empty.",
                    ),
                );
            }
        });
    }
    listeners
}
