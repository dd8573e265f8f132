//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a lint run.
///
/// Every field is optional; `effective_*` accessors apply the defaults so
/// a config deserialized from an empty document behaves identically to
/// `LintConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    /// Worker thread count. Default: logical CPU count.
    pub workers: Option<usize>,
    /// Type-checker shard count per program. Default: 4.
    pub checker_shards: Option<usize>,
    /// Whether fix closures run and fixes are attached to diagnostics.
    /// Default: true (the host decides what to apply).
    pub fix: Option<bool>,
    /// Whether suggestion closures run. Default: true.
    pub fix_suggestions: Option<bool>,
}

impl LintConfig {
    /// Returns the effective worker count, defaulting to the logical CPU count.
    pub fn effective_workers(&self) -> usize {
        self.workers
            .filter(|w| *w >= 1)
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
    }

    /// Returns the effective checker shard count, defaulting to 4.
    pub fn effective_checker_shards(&self) -> usize {
        self.checker_shards.filter(|s| *s >= 1).unwrap_or(4)
    }

    /// Returns whether fixes are collected, defaulting to true.
    pub fn effective_fix(&self) -> bool {
        self.fix.unwrap_or(true)
    }

    /// Returns whether suggestions are collected, defaulting to true.
    pub fn effective_fix_suggestions(&self) -> bool {
        self.fix_suggestions.unwrap_or(true)
    }
}
