//! Shared primitive types.

pub mod collections;
pub mod text_range;

pub use text_range::TextRange;
