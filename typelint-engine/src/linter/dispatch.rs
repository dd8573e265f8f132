//! Per-file dispatch table and the single-pass traversal.
//!
//! All configured rules' listeners merge into one table, and the tree is
//! walked exactly once. Two mutually recursive descent modes track whether
//! the walk is inside a destructuring target: normal descent fires
//! `Normal` (and, on literals, `NotAllowPattern`) listeners; pattern
//! descent, entered only for the left side of a plain `=` assignment,
//! additionally fires `AllowPattern` listeners and propagates through the
//! literal/spread/property forms that make up a destructuring target.
//!
//! The table is private to the worker processing the file and is rebuilt
//! for every file; it never leaks across files or workers.

use smallvec::SmallVec;
use typelint_core::types::collections::FxHashMap;

use crate::rule::context::DiagnosticSink;
use crate::rule::listeners::ListenerFn;
use crate::rule::{FixMode, ListenerKey, RuleContext};
use crate::syntax::{Node, NodeKind, Program, SourceFile, TypeChecker};

use super::{ConfiguredRule, RulesForFile};

struct ListenerEntry<'t> {
    /// Index of the owning rule; pairs the callback with that rule's context.
    rule: usize,
    callback: ListenerFn<'t>,
}

/// Merged listener table for one file, plus the per-rule contexts the
/// callbacks fire against.
pub(crate) struct DispatchTable<'c, 't> {
    listeners: FxHashMap<ListenerKey, SmallVec<[ListenerEntry<'t>; 4]>>,
    contexts: &'c [RuleContext<'t>],
}

impl<'c, 't> DispatchTable<'c, 't> {
    /// Call each rule's `run` once and merge the returned tables,
    /// concatenating callback lists in rule order.
    pub(crate) fn build(rules: &[ConfiguredRule], contexts: &'c [RuleContext<'t>]) -> Self {
        let mut listeners: FxHashMap<ListenerKey, SmallVec<[ListenerEntry<'t>; 4]>> =
            FxHashMap::default();
        for (rule_idx, rule) in rules.iter().enumerate() {
            let table = (rule.run)(&contexts[rule_idx]);
            for (key, callback) in table.into_entries() {
                listeners.entry(key).or_default().push(ListenerEntry {
                    rule: rule_idx,
                    callback,
                });
            }
        }
        Self {
            listeners,
            contexts,
        }
    }

    fn fire(&mut self, key: ListenerKey, node: Node<'t>) {
        let contexts = self.contexts;
        if let Some(entries) = self.listeners.get_mut(&key) {
            for entry in entries.iter_mut() {
                (entry.callback)(&contexts[entry.rule], node);
            }
        }
    }

    /// Walk the file: the root's children, in document order.
    pub(crate) fn run(&mut self, root: Node<'t>) {
        for child in root.named_children() {
            self.visit(child);
        }
    }

    /// Normal descent.
    fn visit(&mut self, node: Node<'t>) {
        let kind = node.kind();
        self.fire(ListenerKey::enter(kind), node);

        if kind.is_literal_pattern_form() {
            // A literal reached by normal descent is definitely a value,
            // never a destructuring target.
            self.fire(ListenerKey::enter_not_allow_pattern(kind), node);
            for child in node.named_children() {
                self.visit(child);
            }
            self.fire(ListenerKey::exit_not_allow_pattern(kind), node);
        } else if kind == NodeKind::AssignmentExpression {
            // Plain `=` only: the left operand is a destructuring target.
            let left_id = node.child_by_field("left").map(|n| n.id());
            for child in node.all_children() {
                if Some(child.id()) == left_id {
                    self.visit_pattern(child);
                } else {
                    self.visit(child);
                }
            }
        } else {
            for child in node.named_children() {
                self.visit(child);
            }
        }

        self.fire(ListenerKey::exit(kind), node);
    }

    /// Pattern descent. Entered only for the left side of a plain `=`
    /// assignment; the context is lexically scoped and ends with this
    /// subtree.
    fn visit_pattern(&mut self, node: Node<'t>) {
        let kind = node.kind();
        self.fire(ListenerKey::enter(kind), node);
        self.fire(ListenerKey::enter_allow_pattern(kind), node);

        match kind {
            NodeKind::ArrayLiteralExpression | NodeKind::ObjectLiteralExpression => {
                for child in node.named_children() {
                    self.visit_pattern(child);
                }
            }
            NodeKind::SpreadElement => {
                if let Some(inner) = node.named_children().into_iter().next() {
                    self.visit_pattern(inner);
                }
            }
            NodeKind::PropertyAssignment => {
                // Only the value is descended; the key names a property and
                // is skipped outright, firing no listener.
                if let Some(value) = node.child_by_field("value") {
                    self.visit_pattern(value);
                }
            }
            _ => {
                // Anything else ends pattern propagation; children resume
                // normal descent.
                for child in node.named_children() {
                    self.visit(child);
                }
            }
        }

        self.fire(ListenerKey::exit_allow_pattern(kind), node);
        self.fire(ListenerKey::exit(kind), node);
    }
}

/// Lint one file: instantiate its rules, merge their listeners, and run
/// the single-pass traversal. Rule panics are not caught; rules are
/// trusted, and a fault aborts the run.
pub(crate) fn lint_file(
    program: &Program,
    file: &std::sync::Arc<SourceFile>,
    checker: &TypeChecker,
    rules_for_file: &RulesForFile<'_>,
    sink: &DiagnosticSink<'_>,
    fix_mode: FixMode,
) {
    tracing::debug!(file = %file.path().display(), shard = checker.shard_index(), "linting");

    let rules = rules_for_file(file);
    if rules.is_empty() {
        return;
    }

    let contexts: Vec<RuleContext<'_>> = rules
        .iter()
        .map(|rule| RuleContext::new(&rule.name, file, program, checker, fix_mode, sink))
        .collect();

    let mut table = DispatchTable::build(&rules, &contexts);
    table.run(file.root());
}
