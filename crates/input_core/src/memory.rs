//! Software edit surface.
//!
//! [`MemorySurface`] is an in-process stand-in for a hidden native text
//! element. It is used by hosts that draw everything themselves (the egui
//! backend routes keyboard events into it) and by tests. It performs no layout
//! or measurement; integration layers translate pointer positions into
//! character offsets and set them here.

use crate::id::InputId;
use crate::kind::FieldKind;
use crate::state::SurfaceState;
use crate::text::{byte_index_for_char, char_len, filter_numeric, filter_single_line, normalize_newlines};
use crate::traits::{EditSurface, Key, SurfaceConfig, SurfaceEvent};

/// Software implementation of [`EditSurface`].
///
/// Editing only takes effect while the surface holds focus, just like a
/// native element that receives keystrokes only when focused.
///
/// # Example
///
/// ```
/// use input_core::{EditSurface, InputId, MemorySurface, SurfaceConfig, SurfaceEvent};
///
/// let mut surface = MemorySurface::new(InputId::from_raw(1), "Hello", SurfaceConfig::default());
/// surface.focus();
/// surface.attach_listeners();
/// surface.set_caret_position(5);
/// surface.insert_text(" World");
///
/// assert_eq!(surface.value(), "Hello World");
///
/// let mut events = Vec::new();
/// surface.drain_events(&mut events);
/// assert!(events.contains(&SurfaceEvent::Input));
/// ```
#[derive(Clone, Debug)]
pub struct MemorySurface {
    id: InputId,
    config: SurfaceConfig,
    st: SurfaceState,
    events: Vec<SurfaceEvent>,
}

impl MemorySurface {
    /// Create a surface holding `initial` with the caret at its end.
    pub fn new(id: InputId, initial: &str, config: SurfaceConfig) -> Self {
        let mut surface = Self {
            id,
            config,
            st: SurfaceState::default(),
            events: Vec::new(),
        };
        surface.replace_value(initial);
        surface
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Monotonic revision counter for the value.
    ///
    /// Increments on any text change. Useful for cache invalidation.
    pub fn value_revision(&self) -> u64 {
        self.st.value_rev
    }

    pub fn is_destroyed(&self) -> bool {
        self.st.destroyed
    }

    // =========================================================================
    // User editing (emits key and input events)
    // =========================================================================

    /// Insert text at the caret as the user would by typing or pasting.
    ///
    /// A single character is reported as that character's key; longer text
    /// as a composition commit (key code 229).
    pub fn insert_text(&mut self, s: &str) {
        let mut chars = s.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(ch), None) => Key::Character(ch),
            _ => Key::Other(229),
        };
        self.user_edit(key, |surface| surface.insert_raw(s));
    }

    /// Press a key. `shift` extends the selection for caret movement keys.
    ///
    /// Keys without an editing action (e.g. Enter on a single-line field)
    /// still produce keydown and keyup.
    pub fn press_key(&mut self, key: Key, shift: bool) {
        self.user_edit(key, |surface| match key {
            Key::Backspace => surface.backspace(),
            Key::Delete => surface.delete(),
            Key::ArrowLeft => surface.move_caret_left(shift),
            Key::ArrowRight => surface.move_caret_right(shift),
            Key::Home | Key::ArrowUp => surface.move_caret_to_start(shift),
            Key::End | Key::ArrowDown => surface.move_caret_to_end(shift),
            Key::Enter if surface.config.multiline => surface.insert_raw("\n"),
            Key::Character(ch) => {
                let mut buf = [0u8; 4];
                surface.insert_raw(ch.encode_utf8(&mut buf));
            }
            Key::Enter | Key::Other(_) => {}
        });
    }

    /// Select the whole value (Ctrl/Cmd+A).
    pub fn select_all(&mut self) {
        if !self.editable() {
            return;
        }
        let len = char_len(&self.st.value);
        self.st.selection_anchor = Some(0);
        self.st.caret = len;
        self.normalize_selection_anchor();
    }

    /// Set the selection with an explicit anchor (`start`) and caret (`end`).
    pub fn set_selection(&mut self, start: usize, end: usize) {
        if self.st.destroyed {
            return;
        }
        let len = char_len(&self.st.value);
        self.st.selection_anchor = Some(start.min(len));
        self.st.caret = end.min(len);
        self.normalize_selection_anchor();
    }

    /// Model the platform taking focus away, e.g. a dismissed soft keyboard.
    pub fn simulate_external_blur(&mut self) {
        if self.st.focused {
            log::debug!(target: "surface.memory", "{}: external blur", self.id);
        }
        self.blur();
    }

    // =========================================================================
    // Editing primitives
    // =========================================================================

    fn user_edit(&mut self, key: Key, edit: impl FnOnce(&mut Self)) {
        if !self.editable() {
            return;
        }
        self.push_listened(SurfaceEvent::KeyDown(key));
        let rev = self.st.value_rev;
        edit(self);
        if self.st.value_rev != rev {
            log::trace!(
                target: "surface.memory",
                "{}: value now {} chars, caret {}",
                self.id,
                char_len(&self.st.value),
                self.st.caret
            );
            self.push_listened(SurfaceEvent::Input);
        }
        self.push_listened(SurfaceEvent::KeyUp(key));
    }

    fn insert_raw(&mut self, s: &str) {
        let sanitized = if self.config.multiline {
            normalize_newlines(s)
        } else {
            filter_single_line(s)
        };
        let sanitized = if self.config.kind.is_number() {
            filter_numeric(&sanitized).into_owned()
        } else {
            sanitized.into_owned()
        };
        if sanitized.is_empty() {
            return;
        }

        let selected = self.st.selected().map(|(a, b)| b - a).unwrap_or(0);
        let current = char_len(&self.st.value);
        let room = match self.max_length() {
            Some(max) => max.saturating_sub(current - selected),
            None => usize::MAX,
        };
        let insert: String = sanitized.chars().take(room).collect();
        if insert.is_empty() {
            return;
        }

        self.delete_selection_if_any();
        let at = byte_index_for_char(&self.st.value, self.st.caret);
        self.st.value.insert_str(at, &insert);
        self.st.caret += char_len(&insert);
        self.mark_text_dirty();
    }

    fn backspace(&mut self) {
        if self.delete_selection_if_any() || self.st.caret == 0 {
            return;
        }
        let start = byte_index_for_char(&self.st.value, self.st.caret - 1);
        let end = byte_index_for_char(&self.st.value, self.st.caret);
        self.st.value.drain(start..end);
        self.st.caret -= 1;
        self.mark_text_dirty();
    }

    fn delete(&mut self) {
        if self.delete_selection_if_any() || self.st.caret >= char_len(&self.st.value) {
            return;
        }
        let start = byte_index_for_char(&self.st.value, self.st.caret);
        let end = byte_index_for_char(&self.st.value, self.st.caret + 1);
        self.st.value.drain(start..end);
        self.mark_text_dirty();
    }

    fn move_caret_left(&mut self, selecting: bool) {
        if selecting {
            self.begin_selecting();
            self.st.caret = self.st.caret.saturating_sub(1);
            self.normalize_selection_anchor();
            return;
        }
        self.st.caret = match self.st.selected() {
            Some((start, _)) => start,
            None => self.st.caret.saturating_sub(1),
        };
        self.st.selection_anchor = None;
    }

    fn move_caret_right(&mut self, selecting: bool) {
        let len = char_len(&self.st.value);
        if selecting {
            self.begin_selecting();
            self.st.caret = (self.st.caret + 1).min(len);
            self.normalize_selection_anchor();
            return;
        }
        self.st.caret = match self.st.selected() {
            Some((_, end)) => end,
            None => (self.st.caret + 1).min(len),
        };
        self.st.selection_anchor = None;
    }

    fn move_caret_to_start(&mut self, selecting: bool) {
        self.move_caret_to(0, selecting);
    }

    fn move_caret_to_end(&mut self, selecting: bool) {
        self.move_caret_to(char_len(&self.st.value), selecting);
    }

    fn move_caret_to(&mut self, caret: usize, selecting: bool) {
        if selecting {
            self.begin_selecting();
            self.st.caret = caret;
            self.normalize_selection_anchor();
        } else {
            self.st.caret = caret;
            self.st.selection_anchor = None;
        }
    }

    fn begin_selecting(&mut self) {
        if self.st.selection_anchor.is_none() {
            self.st.selection_anchor = Some(self.st.caret);
        }
    }

    fn normalize_selection_anchor(&mut self) {
        if self.st.selection_anchor == Some(self.st.caret) {
            self.st.selection_anchor = None;
        }
    }

    fn delete_selection_if_any(&mut self) -> bool {
        let Some((a, b)) = self.st.selected() else {
            return false;
        };
        let start = byte_index_for_char(&self.st.value, a);
        let end = byte_index_for_char(&self.st.value, b);
        self.st.value.drain(start..end);
        self.st.caret = a;
        self.st.selection_anchor = None;
        self.mark_text_dirty();
        true
    }

    fn replace_value(&mut self, value: &str) {
        let value = if self.config.multiline {
            normalize_newlines(value)
        } else {
            filter_single_line(value)
        };
        self.st.value = value.into_owned();
        self.st.caret = char_len(&self.st.value);
        self.st.selection_anchor = None;
        self.mark_text_dirty();
    }

    fn mark_text_dirty(&mut self) {
        self.st.value_rev = self.st.value_rev.wrapping_add(1);
    }

    fn max_length(&self) -> Option<usize> {
        match self.config.kind {
            FieldKind::Text | FieldKind::Password => self.config.max_length,
            FieldKind::Number => None,
        }
    }

    fn editable(&self) -> bool {
        self.st.focused && !self.st.destroyed
    }

    fn push_listened(&mut self, event: SurfaceEvent) {
        if self.st.listening && !self.st.destroyed {
            self.events.push(event);
        }
    }
}

impl EditSurface for MemorySurface {
    fn id(&self) -> InputId {
        self.id
    }

    fn kind(&self) -> FieldKind {
        self.config.kind
    }

    fn value(&self) -> &str {
        &self.st.value
    }

    fn set_value(&mut self, value: &str) {
        if self.st.destroyed {
            return;
        }
        self.replace_value(value);
    }

    fn focus(&mut self) {
        if self.st.destroyed || self.st.focused {
            return;
        }
        self.st.focused = true;
        self.st.caret = self.st.caret.min(char_len(&self.st.value));
        self.events.push(SurfaceEvent::FocusIn);
    }

    fn blur(&mut self) {
        if self.st.destroyed || !self.st.focused {
            return;
        }
        self.st.focused = false;
        self.st.selection_anchor = None;
        self.events.push(SurfaceEvent::FocusOut);
    }

    fn is_focused(&self) -> bool {
        self.st.focused
    }

    fn caret_position(&self) -> Option<usize> {
        if self.config.kind.is_number() {
            return None;
        }
        Some(self.st.caret)
    }

    fn set_caret_position(&mut self, offset: usize) {
        if self.config.kind.is_number() || self.st.destroyed {
            return;
        }
        self.st.caret = offset.min(char_len(&self.st.value));
        self.st.selection_anchor = None;
    }

    fn selection_start(&self) -> usize {
        self.st.bounds().0
    }

    fn selection_end(&self) -> usize {
        self.st.bounds().1
    }

    fn scroll_left(&self) -> f32 {
        self.st.scroll_left
    }

    fn set_scroll_left(&mut self, px: f32) {
        self.st.scroll_left = px.max(0.0);
    }

    fn scroll_top(&self) -> f32 {
        self.st.scroll_top
    }

    fn set_scroll_top(&mut self, px: f32) {
        self.st.scroll_top = px.max(0.0);
    }

    fn attach_listeners(&mut self) {
        if !self.st.destroyed {
            self.st.listening = true;
        }
    }

    fn detach_listeners(&mut self) {
        self.st.listening = false;
    }

    fn listening(&self) -> bool {
        self.st.listening
    }

    fn drain_events(&mut self, out: &mut Vec<SurfaceEvent>) {
        out.append(&mut self.events);
    }

    fn destroy(&mut self) {
        if self.st.destroyed {
            return;
        }
        log::debug!(target: "surface.memory", "{}: element removed", self.id);
        self.st.destroyed = true;
        self.st.focused = false;
        self.st.listening = false;
        self.events.clear();
    }
}
