//! Diagnostics: the findings rules report.

use std::sync::Arc;

use typelint_core::TextRange;

use crate::syntax::SourceFile;

/// What a rule has to say about a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMessage {
    /// Stable message id within the rule, e.g. `unexpected`.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Optional remediation hint.
    pub help: Option<String>,
}

impl RuleMessage {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// A single text edit: replace `range` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFix {
    pub range: TextRange,
    pub text: String,
}

impl RuleFix {
    pub fn replace(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    pub fn remove(range: TextRange) -> Self {
        Self {
            range,
            text: String::new(),
        }
    }
}

/// An alternative the host may offer instead of the primary fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSuggestion {
    pub message: RuleMessage,
    pub fixes: Vec<RuleFix>,
}

/// A reported finding, fully attributed: rule, location, message, edits,
/// and the file it belongs to.
#[derive(Debug, Clone)]
pub struct RuleDiagnostic {
    pub rule_name: String,
    pub range: TextRange,
    pub message: RuleMessage,
    pub fixes: Vec<RuleFix>,
    pub suggestions: Vec<RuleSuggestion>,
    pub file: Arc<SourceFile>,
}
