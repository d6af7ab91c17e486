//! Internal surface state representation.
//!
//! This module contains the editing state that is owned by a
//! [`MemorySurface`](crate::MemorySurface).

/// Internal state for a software edit surface.
#[derive(Clone, Debug, Default)]
pub(crate) struct SurfaceState {
    /// The current text value.
    pub value: String,

    /// Monotonic revision counter, incremented on any text change.
    pub value_rev: u64,

    /// Caret position as a character offset into `value`.
    pub caret: usize,

    /// Selection anchor as a character offset into `value`.
    ///
    /// When `Some(anchor)`, the selection range is `min(anchor, caret)..max(anchor, caret)`.
    pub selection_anchor: Option<usize>,

    /// Horizontal scroll offset in px.
    pub scroll_left: f32,

    /// Vertical scroll offset in px.
    pub scroll_top: f32,

    /// Whether the element currently holds native focus.
    pub focused: bool,

    /// Whether input/keydown/keyup listeners are attached.
    pub listening: bool,

    /// Set once the element was removed.
    pub destroyed: bool,
}

impl SurfaceState {
    /// Selection bounds `(start, end)`, or a collapsed range at the caret.
    pub fn bounds(&self) -> (usize, usize) {
        match self.selection_anchor {
            Some(anchor) => (anchor.min(self.caret), anchor.max(self.caret)),
            None => (self.caret, self.caret),
        }
    }

    /// Bounds of a non-empty selection, if any.
    pub fn selected(&self) -> Option<(usize, usize)> {
        let (a, b) = self.bounds();
        (a != b).then_some((a, b))
    }
}
