//! Selected character ranges.

use crate::text::char_slice;

/// A `[start, end)` character range with `start <= end`.
///
/// Offsets count Unicode scalar values, the unit edit surfaces report caret
/// positions in. An empty range is a collapsed selection, i.e. a bare caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Build a range from two endpoints in either order.
    #[inline]
    pub fn new(anchor: usize, focus: usize) -> Self {
        if anchor <= focus {
            Self {
                start: anchor,
                end: focus,
            }
        } else {
            Self {
                start: focus,
                end: anchor,
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Pull both endpoints inside a text of `len` characters.
    #[inline]
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// The selected part of `value`. Out-of-range offsets are clamped.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        char_slice(value, self.start, self.end)
    }
}
