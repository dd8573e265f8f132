//! Byte-offset text ranges.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[pos, end)` into a source file's text.
///
/// Serializes as `{"pos": .., "end": ..}`, the shape the headless wire
/// format carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub pos: u32,
    pub end: u32,
}

impl TextRange {
    pub fn new(pos: u32, end: u32) -> Self {
        Self { pos, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.pos
    }

    /// True if `other` lies entirely within this range.
    pub fn contains(&self, other: TextRange) -> bool {
        self.pos <= other.pos && other.end <= self.end
    }
}
