//! Traversal and pattern-context behavior, observed through probe rules
//! that report what they hear.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use typelint_engine::linter::{run_linter_on_program, ConfiguredRule};
use typelint_engine::rule::{
    FixMode, ListenerKey, RuleContext, RuleDiagnostic, RuleListeners, RuleMessage, RuleRunFn,
};
use typelint_engine::syntax::{NodeKind, Program, SourceFile};

fn lint_source(source: &str, rules: &[(&str, RuleRunFn)]) -> Vec<RuleDiagnostic> {
    let program = Program::from_sources(
        vec![(PathBuf::from("test.ts"), source.to_string())],
        2,
    )
    .unwrap();
    let diagnostics = Mutex::new(Vec::new());
    let sink = |d: RuleDiagnostic| diagnostics.lock().unwrap().push(d);
    let rules_for_file = |_file: &SourceFile| -> Vec<ConfiguredRule> {
        rules
            .iter()
            .map(|(name, run)| ConfiguredRule {
                name: name.to_string(),
                run: Arc::new(*run),
            })
            .collect()
    };
    run_linter_on_program(
        &program,
        program.source_files(),
        1,
        &rules_for_file,
        &sink,
        FixMode::all(),
    );
    diagnostics.into_inner().unwrap()
}

/// Reports every identifier it sees, tagged with the pattern context.
fn identifier_probe<'t>(_ctx: &RuleContext<'t>) -> RuleListeners<'t> {
    let mut listeners = RuleListeners::new();
    listeners.on(NodeKind::Identifier, |ctx, node| {
        ctx.report_node(node, RuleMessage::new("normal", ctx.node_text(node)));
    });
    listeners.on_allow_pattern(NodeKind::Identifier, |ctx, node| {
        ctx.report_node(node, RuleMessage::new("allow", ctx.node_text(node)));
    });
    listeners
}

/// Reports array and object literals by pattern context.
fn literal_probe<'t>(_ctx: &RuleContext<'t>) -> RuleListeners<'t> {
    let mut listeners = RuleListeners::new();
    for kind in [
        NodeKind::ArrayLiteralExpression,
        NodeKind::ObjectLiteralExpression,
    ] {
        listeners.on_not_allow_pattern(kind, |ctx, node| {
            ctx.report_node(node, RuleMessage::new("value", ctx.node_text(node)));
        });
        listeners.on_allow_pattern(kind, |ctx, node| {
            ctx.report_node(node, RuleMessage::new("target", ctx.node_text(node)));
        });
    }
    listeners
}

/// Reports both phases of both pattern contexts for array and object
/// literals, plus every identifier.
fn literal_phase_probe<'t>(_ctx: &RuleContext<'t>) -> RuleListeners<'t> {
    let mut listeners = RuleListeners::new();
    for kind in [
        NodeKind::ArrayLiteralExpression,
        NodeKind::ObjectLiteralExpression,
    ] {
        listeners.on_not_allow_pattern(kind, |ctx, node| {
            ctx.report_node(node, RuleMessage::new("value-enter", ctx.node_text(node)));
        });
        listeners.add(ListenerKey::exit_not_allow_pattern(kind), |ctx, node| {
            ctx.report_node(node, RuleMessage::new("value-exit", ctx.node_text(node)));
        });
        listeners.on_allow_pattern(kind, |ctx, node| {
            ctx.report_node(node, RuleMessage::new("target-enter", ctx.node_text(node)));
        });
        listeners.add(ListenerKey::exit_allow_pattern(kind), |ctx, node| {
            ctx.report_node(node, RuleMessage::new("target-exit", ctx.node_text(node)));
        });
    }
    listeners.on(NodeKind::Identifier, |ctx, node| {
        ctx.report_node(node, RuleMessage::new("ident", ctx.node_text(node)));
    });
    listeners
}

/// Reports every property identifier, in either context.
fn property_key_probe<'t>(_ctx: &RuleContext<'t>) -> RuleListeners<'t> {
    let mut listeners = RuleListeners::new();
    listeners.on(NodeKind::PropertyIdentifier, |ctx, node| {
        ctx.report_node(node, RuleMessage::new("key", ctx.node_text(node)));
    });
    listeners.on_allow_pattern(NodeKind::PropertyIdentifier, |ctx, node| {
        ctx.report_node(node, RuleMessage::new("key-allow", ctx.node_text(node)));
    });
    listeners
}

/// Reports function declaration enter/exit plus every identifier.
fn function_probe<'t>(_ctx: &RuleContext<'t>) -> RuleListeners<'t> {
    let mut listeners = RuleListeners::new();
    listeners.on(NodeKind::FunctionDeclaration, |ctx, node| {
        ctx.report_node(node, RuleMessage::new("enter", "fn"));
    });
    listeners.on_exit(NodeKind::FunctionDeclaration, |ctx, node| {
        ctx.report_node(node, RuleMessage::new("exit", "fn"));
    });
    listeners.on(NodeKind::Identifier, |ctx, node| {
        ctx.report_node(node, RuleMessage::new("ident", ctx.node_text(node)));
    });
    listeners
}

fn events(diagnostics: &[RuleDiagnostic]) -> Vec<(String, String)> {
    diagnostics
        .iter()
        .map(|d| (d.message.id.clone(), d.message.description.clone()))
        .collect()
}

fn descriptions_with_id(diagnostics: &[RuleDiagnostic], id: &str) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| d.message.id == id)
        .map(|d| d.message.description.clone())
        .collect()
}

#[test]
fn assignment_target_enters_pattern_context() {
    let diagnostics = lint_source("a = b;\n", &[("probe", identifier_probe)]);
    assert_eq!(
        events(&diagnostics),
        vec![
            ("normal".to_string(), "a".to_string()),
            ("allow".to_string(), "a".to_string()),
            ("normal".to_string(), "b".to_string()),
        ]
    );
}

#[test]
fn compound_assignment_has_no_pattern_context() {
    let diagnostics = lint_source("a += b;\n", &[("probe", identifier_probe)]);
    assert!(descriptions_with_id(&diagnostics, "allow").is_empty());
    assert_eq!(
        descriptions_with_id(&diagnostics, "normal"),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn array_destructuring_splits_pattern_and_value_sides() {
    let source = "[a, b] = [c, d];\n";
    let diagnostics = lint_source(
        source,
        &[("idents", identifier_probe), ("literals", literal_probe)],
    );

    assert_eq!(
        descriptions_with_id(&diagnostics, "allow"),
        vec!["a".to_string(), "b".to_string()]
    );
    // The left array is a target, the right array is a value; each fires
    // its context exactly once.
    assert_eq!(
        descriptions_with_id(&diagnostics, "target"),
        vec!["[a, b]".to_string()]
    );
    assert_eq!(
        descriptions_with_id(&diagnostics, "value"),
        vec!["[c, d]".to_string()]
    );
}

#[test]
fn object_pattern_propagates_through_properties_and_rest() {
    let diagnostics = lint_source(
        "({ a: c, ...rest } = obj);\n",
        &[("probe", identifier_probe)],
    );

    assert_eq!(
        descriptions_with_id(&diagnostics, "allow"),
        vec!["c".to_string(), "rest".to_string()]
    );
    // The right side stays in normal context.
    let normals = descriptions_with_id(&diagnostics, "normal");
    assert!(normals.contains(&"obj".to_string()));
    assert!(!descriptions_with_id(&diagnostics, "allow").contains(&"obj".to_string()));
}

#[test]
fn nested_value_literals_are_never_patterns() {
    let diagnostics = lint_source(
        "x = { a: [p] };\n",
        &[("idents", identifier_probe), ("literals", literal_probe)],
    );

    assert_eq!(
        descriptions_with_id(&diagnostics, "allow"),
        vec!["x".to_string()]
    );
    // Both the object and the array it contains are values.
    assert_eq!(descriptions_with_id(&diagnostics, "value").len(), 2);
    assert!(descriptions_with_id(&diagnostics, "target").is_empty());
}

#[test]
fn pattern_context_exits_fire_once_after_children() {
    let diagnostics = lint_source("[p] = [q];\n", &[("probe", literal_phase_probe)]);
    assert_eq!(
        events(&diagnostics),
        vec![
            ("target-enter".to_string(), "[p]".to_string()),
            ("ident".to_string(), "p".to_string()),
            ("target-exit".to_string(), "[p]".to_string()),
            ("value-enter".to_string(), "[q]".to_string()),
            ("ident".to_string(), "q".to_string()),
            ("value-exit".to_string(), "[q]".to_string()),
        ]
    );
}

#[test]
fn property_keys_inside_patterns_fire_no_listeners() {
    let diagnostics = lint_source("({ a: c } = obj);\n", &[("probe", property_key_probe)]);
    assert!(diagnostics.is_empty());
}

#[test]
fn property_keys_in_value_position_still_fire() {
    let diagnostics = lint_source("x = { a: 1 };\n", &[("probe", property_key_probe)]);
    assert_eq!(
        events(&diagnostics),
        vec![("key".to_string(), "a".to_string())]
    );
}

#[test]
fn exit_listeners_fire_after_descendants() {
    let diagnostics = lint_source("function f() { g; }\n", &[("probe", function_probe)]);
    let ids: Vec<&str> = diagnostics.iter().map(|d| d.message.id.as_str()).collect();
    assert_eq!(ids, vec!["enter", "ident", "ident", "exit"]);
    assert_eq!(
        descriptions_with_id(&diagnostics, "ident"),
        vec!["f".to_string(), "g".to_string()]
    );
}

proptest! {
    #[test]
    fn allow_events_track_assignment_targets(count in 1usize..8) {
        let mut source = String::new();
        for i in 0..count {
            source.push_str(&format!("t{i} = v{i};\n"));
        }
        let diagnostics = lint_source(&source, &[("probe", identifier_probe)]);
        let allows = descriptions_with_id(&diagnostics, "allow");
        let expected: Vec<String> = (0..count).map(|i| format!("t{i}")).collect();
        prop_assert_eq!(allows, expected);
    }
}
