//! Foundation types for the templar toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Interned host-file identifiers
//! - [`Span`] - Half-open byte-offset ranges in some coordinate space
//!
//! Spans are deliberately opaque offset pairs: whether a span is
//! template-local or host-file-absolute is a property of where it came
//! from, not of the type. [`Span::offset_by`] translates between the two.
//!
//! This module has NO dependencies on other templar modules.

mod file_id;
mod span;

pub use file_id::FileId;
pub use span::Span;

// Re-export the offset scalar for convenience
pub use text_size::TextSize;
