//! Byte-offset spans.
//!
//! A [`Span`] is a half-open range `[start, end)` of byte offsets into
//! some coordinate space. The same type covers template-local and
//! host-file-absolute offsets; [`Span::offset_by`] moves a span from the
//! template's coordinate space into its owning host file.

use text_size::TextSize;

/// A half-open byte range `[start, end)` in source text.
///
/// Invariant: `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: TextSize,
    pub end: TextSize,
}

impl Span {
    pub fn new(start: TextSize, end: TextSize) -> Self {
        debug_assert!(end >= start, "span end must not precede start");
        Self { start, end }
    }

    /// Create a span from raw u32 offsets.
    pub fn from_raw(start: u32, end: u32) -> Self {
        Self::new(TextSize::new(start), TextSize::new(end))
    }

    /// An empty span at a single offset.
    pub fn point(offset: TextSize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> TextSize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset falls within this span.
    pub fn contains_offset(&self, offset: TextSize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if `other` lies entirely within this span.
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Translate this span by `anchor`: a template-local span becomes
    /// host-file-absolute when `anchor` is the offset of the template's
    /// first character within its host file.
    pub fn offset_by(&self, anchor: TextSize) -> Span {
        Span {
            start: self.start + anchor,
            end: self.end + anchor,
        }
    }

    /// Widen a point span to the minimal non-empty span.
    ///
    /// Some error producers report only a single position; a zero-length
    /// span would render as an invisible squiggle, so it becomes
    /// `start .. start+1`. Non-empty spans pass through unchanged.
    pub fn widen_to_min(&self) -> Span {
        if self.is_empty() {
            Span {
                start: self.start,
                end: self.start + TextSize::new(1),
            }
        } else {
            *self
        }
    }
}
