//! Edit surface trait defining the contract of the hidden edit primitive.
//!
//! A surface is an off-screen, focusable text element. It owns the raw value,
//! caret and selection, and reports what happened to it through
//! [`SurfaceEvent`]s. The field controller never edits text itself; it only
//! reads the surface back and mirrors it.
//!
//! # Design Principles
//!
//! - Offsets are character offsets
//! - Events are pulled with [`EditSurface::drain_events`] once per tick rather
//!   than pushed through callbacks, so the controller can treat them as plain
//!   state-machine inputs
//! - `FocusIn`/`FocusOut` are signals about native focus and are delivered
//!   even while the input listeners are detached

use crate::id::InputId;
use crate::kind::FieldKind;
use crate::selection::SelectionRange;

/// A key as reported by keydown/keyup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    /// A key that produces this character.
    Character(char),
    /// Any other key, by platform key code.
    Other(u32),
}

/// Something that happened to the surface since the last drain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The value changed through user editing.
    Input,
    KeyDown(Key),
    KeyUp(Key),
    /// The element gained native focus.
    FocusIn,
    /// The element lost native focus, possibly for reasons the controller did
    /// not initiate (e.g. a soft keyboard was dismissed).
    FocusOut,
}

/// Construction-time configuration of a surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceConfig {
    pub kind: FieldKind,
    pub multiline: bool,
    /// Maximum value length in characters (text and password kinds).
    pub max_length: Option<usize>,
    /// Numeric lower bound (number kind).
    pub min: Option<f64>,
    /// Numeric upper bound (number kind).
    pub max: Option<f64>,
    pub font_px: f32,
    pub width: f32,
    pub height: f32,
}

/// Trait defining the edit surface interface.
///
/// This trait captures the minimal set of operations needed for:
/// - Value access (get/set)
/// - Native focus control
/// - Caret and selection read-back
/// - Scroll position for scroll-based fields
/// - Listener attachment and event delivery
/// - Teardown of the underlying element
pub trait EditSurface {
    // =========================================================================
    // Identity
    // =========================================================================

    fn id(&self) -> InputId;

    fn kind(&self) -> FieldKind;

    // =========================================================================
    // Value
    // =========================================================================

    fn value(&self) -> &str;

    /// Replace the value programmatically.
    ///
    /// Does not emit [`SurfaceEvent::Input`]; only user edits do.
    fn set_value(&mut self, value: &str);

    // =========================================================================
    // Focus
    // =========================================================================

    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    // =========================================================================
    // Caret & Selection
    // =========================================================================

    /// Current caret offset, or `None` when unknown or not applicable.
    ///
    /// Always `None` for [`FieldKind::Number`].
    fn caret_position(&self) -> Option<usize>;

    /// Move the caret, collapsing any selection. Ignored for number kind.
    fn set_caret_position(&mut self, offset: usize);

    /// Raw selection start; never greater than [`selection_end`](Self::selection_end).
    fn selection_start(&self) -> usize;

    fn selection_end(&self) -> usize;

    /// Normalized selection.
    fn selection(&self) -> SelectionRange {
        SelectionRange::new(self.selection_start(), self.selection_end())
    }

    /// `start != end`; always `false` for number kind.
    fn has_selection(&self) -> bool {
        !self.kind().is_number() && self.selection_start() != self.selection_end()
    }

    // =========================================================================
    // Scroll
    // =========================================================================

    fn scroll_left(&self) -> f32;

    fn set_scroll_left(&mut self, px: f32);

    fn scroll_top(&self) -> f32;

    fn set_scroll_top(&mut self, px: f32);

    // =========================================================================
    // Events
    // =========================================================================

    /// Start delivering input, keydown and keyup events.
    fn attach_listeners(&mut self);

    /// Stop delivering input, keydown and keyup events.
    fn detach_listeners(&mut self);

    fn listening(&self) -> bool;

    /// Move all pending events into `out`, in arrival order.
    fn drain_events(&mut self, out: &mut Vec<SurfaceEvent>);

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Remove the underlying element. The surface emits nothing afterwards.
    fn destroy(&mut self);
}
