//! RuleContext: the reporting API handed to every rule invocation.
//!
//! Every report call synchronously builds a `RuleDiagnostic`, attaching
//! the current rule name and source file, and hands it to the
//! engine-supplied sink. No buffering, no deduplication. The sink is the
//! only extension point the rule layer sees.

use std::sync::Arc;

use typelint_core::TextRange;

use crate::syntax::{Node, Program, SourceFile, TypeChecker};

use super::diagnostic::{RuleDiagnostic, RuleFix, RuleMessage, RuleSuggestion};

/// Gates whether fix and suggestion closures are invoked at report time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixMode {
    pub fix: bool,
    pub fix_suggestions: bool,
}

impl FixMode {
    pub fn all() -> Self {
        Self {
            fix: true,
            fix_suggestions: true,
        }
    }
}

/// Diagnostic sink supplied by the engine's caller.
pub type DiagnosticSink<'s> = dyn Fn(RuleDiagnostic) + Sync + 's;

/// Per-rule, per-file context. Exposes the file, program, and the checker
/// shard the owning worker currently holds, plus the reporting API.
pub struct RuleContext<'t> {
    rule_name: &'t str,
    file: &'t Arc<SourceFile>,
    program: &'t Program,
    checker: &'t TypeChecker,
    fix_mode: FixMode,
    sink: &'t DiagnosticSink<'t>,
}

impl<'t> RuleContext<'t> {
    pub(crate) fn new(
        rule_name: &'t str,
        file: &'t Arc<SourceFile>,
        program: &'t Program,
        checker: &'t TypeChecker,
        fix_mode: FixMode,
        sink: &'t DiagnosticSink<'t>,
    ) -> Self {
        Self {
            rule_name,
            file,
            program,
            checker,
            fix_mode,
            sink,
        }
    }

    pub fn rule_name(&self) -> &str {
        self.rule_name
    }

    pub fn file(&self) -> &SourceFile {
        self.file
    }

    pub fn source_file(&self) -> &Arc<SourceFile> {
        self.file
    }

    pub fn program(&self) -> &Program {
        self.program
    }

    pub fn checker(&self) -> &TypeChecker {
        self.checker
    }

    /// Text covered by `node`.
    pub fn node_text(&self, node: Node<'t>) -> &'t str {
        let text: &'t str = self.file.text();
        &text[node.start_byte()..node.end_byte()]
    }

    fn emit(
        &self,
        range: TextRange,
        message: RuleMessage,
        fixes: Vec<RuleFix>,
        suggestions: Vec<RuleSuggestion>,
    ) {
        (self.sink)(RuleDiagnostic {
            rule_name: self.rule_name.to_string(),
            range,
            message,
            fixes,
            suggestions,
            file: Arc::clone(self.file),
        });
    }

    /// Report at an explicit range.
    pub fn report_range(&self, range: TextRange, message: RuleMessage) {
        self.emit(range, message, Vec::new(), Vec::new());
    }

    /// Report at a node's range.
    pub fn report_node(&self, node: Node<'t>, message: RuleMessage) {
        self.emit(node.range(), message, Vec::new(), Vec::new());
    }

    /// Report for the file as a whole; usable directly from `run`, with no
    /// listener involved.
    pub fn report_file(&self, message: RuleMessage) {
        self.emit(self.file.full_range(), message, Vec::new(), Vec::new());
    }

    /// Report with fixes. The closure only runs when fixes are enabled.
    pub fn report_node_with_fixes(
        &self,
        node: Node<'t>,
        message: RuleMessage,
        fixes: impl FnOnce() -> Vec<RuleFix>,
    ) {
        let fixes = if self.fix_mode.fix { fixes() } else { Vec::new() };
        self.emit(node.range(), message, fixes, Vec::new());
    }

    /// Report with suggestions. The closure only runs when suggestions are
    /// enabled.
    pub fn report_node_with_suggestions(
        &self,
        node: Node<'t>,
        message: RuleMessage,
        suggestions: impl FnOnce() -> Vec<RuleSuggestion>,
    ) {
        self.report_range_with_suggestions(node.range(), message, suggestions);
    }

    /// Range form of [`Self::report_node_with_suggestions`].
    pub fn report_range_with_suggestions(
        &self,
        range: TextRange,
        message: RuleMessage,
        suggestions: impl FnOnce() -> Vec<RuleSuggestion>,
    ) {
        let suggestions = if self.fix_mode.fix_suggestions {
            suggestions()
        } else {
            Vec::new()
        };
        self.emit(range, message, Vec::new(), suggestions);
    }
}
