//! Listener tables: what a rule wants to hear during traversal.

use crate::syntax::{Node, NodeKind};

use super::context::RuleContext;

/// Traversal phase a listener fires in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Enter,
    Exit,
}

/// Pattern context a listener is keyed on.
///
/// `AllowPattern` fires only inside destructuring targets (the left side
/// of a plain `=` assignment). `NotAllowPattern` fires only for array and
/// object literals reached by normal descent, i.e. literals that are
/// definitely values, not binding targets. `Normal` fires in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternContext {
    Normal,
    AllowPattern,
    NotAllowPattern,
}

/// Key a listener is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerKey {
    pub kind: NodeKind,
    pub phase: Phase,
    pub pattern: PatternContext,
}

impl ListenerKey {
    pub fn enter(kind: NodeKind) -> Self {
        Self {
            kind,
            phase: Phase::Enter,
            pattern: PatternContext::Normal,
        }
    }

    pub fn exit(kind: NodeKind) -> Self {
        Self {
            kind,
            phase: Phase::Exit,
            pattern: PatternContext::Normal,
        }
    }

    pub fn enter_allow_pattern(kind: NodeKind) -> Self {
        Self {
            kind,
            phase: Phase::Enter,
            pattern: PatternContext::AllowPattern,
        }
    }

    pub fn exit_allow_pattern(kind: NodeKind) -> Self {
        Self {
            kind,
            phase: Phase::Exit,
            pattern: PatternContext::AllowPattern,
        }
    }

    pub fn enter_not_allow_pattern(kind: NodeKind) -> Self {
        Self {
            kind,
            phase: Phase::Enter,
            pattern: PatternContext::NotAllowPattern,
        }
    }

    pub fn exit_not_allow_pattern(kind: NodeKind) -> Self {
        Self {
            kind,
            phase: Phase::Exit,
            pattern: PatternContext::NotAllowPattern,
        }
    }
}

/// A listener callback. Receives the rule's own context and the node
/// being visited.
pub type ListenerFn<'t> = Box<dyn FnMut(&RuleContext<'t>, Node<'t>) + 't>;

/// Ordered listener table returned by a rule's `run`.
///
/// Order is preserved: within one rule, listeners fire in the order they
/// were registered here.
#[derive(Default)]
pub struct RuleListeners<'t> {
    entries: Vec<(ListenerKey, ListenerFn<'t>)>,
}

impl<'t> RuleListeners<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener under an explicit key.
    pub fn add(&mut self, key: ListenerKey, f: impl FnMut(&RuleContext<'t>, Node<'t>) + 't) {
        self.entries.push((key, Box::new(f)));
    }

    /// Listener on node enter.
    pub fn on(&mut self, kind: NodeKind, f: impl FnMut(&RuleContext<'t>, Node<'t>) + 't) {
        self.add(ListenerKey::enter(kind), f);
    }

    /// Listener on node exit, after all descendants.
    pub fn on_exit(&mut self, kind: NodeKind, f: impl FnMut(&RuleContext<'t>, Node<'t>) + 't) {
        self.add(ListenerKey::exit(kind), f);
    }

    /// Listener firing only inside destructuring targets.
    pub fn on_allow_pattern(
        &mut self,
        kind: NodeKind,
        f: impl FnMut(&RuleContext<'t>, Node<'t>) + 't,
    ) {
        self.add(ListenerKey::enter_allow_pattern(kind), f);
    }

    /// Listener firing only for literals that are definitely not patterns.
    pub fn on_not_allow_pattern(
        &mut self,
        kind: NodeKind,
        f: impl FnMut(&RuleContext<'t>, Node<'t>) + 't,
    ) {
        self.add(ListenerKey::enter_not_allow_pattern(kind), f);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn into_entries(self) -> Vec<(ListenerKey, ListenerFn<'t>)> {
        self.entries
    }
}
