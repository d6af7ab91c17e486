//! State shared by every field of one input session.
//!
//! Only one field can hold device-level focus at a time, so the zoom lock and
//! the soft-keyboard flag live here rather than on any single field. Every
//! field receives a clone of the same session at construction.

use std::cell::RefCell;
use std::rc::Rc;

use input_core::InputId;

/// Notification for the host about soft keyboard state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    KeyboardOpened(InputId),
    KeyboardClosed(InputId),
}

#[derive(Debug, Default)]
struct SessionState {
    zoom_owner: Option<InputId>,
    keyboard_owner: Option<InputId>,
    events: Vec<SessionEvent>,
}

/// Cheaply clonable handle to the shared session flags.
#[derive(Clone, Debug, Default)]
pub struct InputSession {
    inner: Rc<RefCell<SessionState>>,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field currently holding the zoom, if any.
    pub fn zoom_owner(&self) -> Option<InputId> {
        self.inner.borrow().zoom_owner
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom_owner().is_some()
    }

    /// Take the zoom lock for `id`. Fails if another field holds it.
    pub fn try_acquire_zoom(&self, id: InputId) -> bool {
        let mut st = self.inner.borrow_mut();
        match st.zoom_owner {
            Some(owner) => owner == id,
            None => {
                st.zoom_owner = Some(id);
                true
            }
        }
    }

    /// Release the zoom lock if `id` holds it.
    pub fn release_zoom(&self, id: InputId) -> bool {
        let mut st = self.inner.borrow_mut();
        if st.zoom_owner == Some(id) {
            st.zoom_owner = None;
            true
        } else {
            false
        }
    }

    pub fn keyboard_open(&self) -> bool {
        self.keyboard_owner().is_some()
    }

    /// Field the soft keyboard is currently open for, if any.
    pub fn keyboard_owner(&self) -> Option<InputId> {
        self.inner.borrow().keyboard_owner
    }

    /// Open the keyboard for `id`, taking it over from any other field.
    pub fn open_keyboard(&self, id: InputId) {
        let mut st = self.inner.borrow_mut();
        match st.keyboard_owner.replace(id) {
            Some(owner) if owner == id => {}
            Some(owner) => {
                st.events.push(SessionEvent::KeyboardOpened(id));
                log::debug!(target: "field.keyboard", "{id}: soft keyboard taken over from {owner}");
            }
            None => {
                st.events.push(SessionEvent::KeyboardOpened(id));
                log::debug!(target: "field.keyboard", "{id}: soft keyboard open");
            }
        }
    }

    /// Close the keyboard if `id` owns it. A field that lost the keyboard to
    /// another one leaves it open.
    pub fn close_keyboard(&self, id: InputId) {
        let mut st = self.inner.borrow_mut();
        if st.keyboard_owner == Some(id) {
            st.keyboard_owner = None;
            st.events.push(SessionEvent::KeyboardClosed(id));
            log::debug!(target: "field.keyboard", "{id}: soft keyboard closed");
        }
    }

    /// Drain pending notifications, oldest first.
    pub fn take_events(&self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.inner.borrow_mut().events)
    }
}
