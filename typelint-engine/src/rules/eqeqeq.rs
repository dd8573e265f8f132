//! eqeqeq: require strict equality operators.

use crate::rule::{Rule, RuleContext, RuleFix, RuleListeners, RuleMessage};
use crate::syntax::NodeKind;

pub static RULE: Rule = Rule {
    name: "eqeqeq",
    run,
};

fn run<'t>(_ctx: &RuleContext<'t>) -> RuleListeners<'t> {
    let mut listeners = RuleListeners::new();
    listeners.on(NodeKind::BinaryExpression, |ctx, node| {
        let Some(operator) = node.child_by_field("operator") else {
            return;
        };
        let strict = match ctx.node_text(operator) {
            "==" => "===",
            "!=" => "!==",
            _ => return,
        };

        let mut message = RuleMessage::new(
            "unexpected",
            format!(
                "Expected '{strict}' and instead saw '{}'.",
                ctx.node_text(operator)
            ),
        );

        // When both operand types are syntactically evident and disagree,
        // loose equality would coerce; say so.
        let left = node.child_by_field("left");
        let right = node.child_by_field("right");
        if let (Some(l), Some(r)) = (left, right) {
            let checker = ctx.checker();
            if let (Some(lt), Some(rt)) = (
                checker.primitive_type_of(ctx.file(), l),
                checker.primitive_type_of(ctx.file(), r),
            ) {
                if lt != rt {
                    message = message.with_help(format!(
                        "Comparing {} to {} with a loose operator coerces the operands.",
                        lt.as_str(),
                        rt.as_str()
                    ));
                }
            }
        }

        ctx.report_node_with_fixes(node, message, || {
            vec![RuleFix::replace(operator.range(), strict)]
        });
    });
    listeners
}
