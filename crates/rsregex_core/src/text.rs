//! Text span types for locating tokens and errors inside a pattern.
//!
//! Patterns are stored as UTF-16 code units, so every position here is a
//! code-unit offset from the start of the pattern, not a byte offset.

use std::fmt;
use std::ops::Range;

/// A position in a pattern, measured in UTF-16 code units.
pub type TextPos = u32;

/// A span in pattern text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    /// The code-unit offset where this span starts.
    pub start: TextPos,
    /// The length of this span in code units.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    /// Translate this span into a byte range of `text`, the UTF-8 rendering
    /// of the UTF-16 buffer the span was measured against.
    ///
    /// Offsets past the end of `text` clamp to `text.len()`.
    pub fn to_byte_range(&self, text: &str) -> Range<usize> {
        let mut units = 0u32;
        let mut start = text.len();
        let mut end = text.len();
        for (byte_index, ch) in text.char_indices() {
            if units == self.start {
                start = byte_index;
            }
            if units == self.end() {
                end = byte_index;
                break;
            }
            units += ch.len_utf16() as u32;
        }
        start.min(end)..end
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
