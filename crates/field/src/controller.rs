//! The field controller.
//!
//! [`InputField`] owns a hidden [`EditSurface`] and a [`FieldView`] and keeps
//! the latter in step with the former. Input arrives as [`FieldEvent`]s that
//! are drained once per tick; focus changes are [`Transition`]s run through a
//! FIFO queue so the one-tick desktop deferral can never reorder them.
//!
//! Within one tick the work is always:
//!
//! 1. collect surface events and drain the event queue
//! 2. run every transition that is due, then retry a zoom that was busy
//! 3. poll the keyboard-dismiss watch
//! 4. reconcile: value pull, layout (only if the value changed), caret,
//!    scroll, selection
//! 5. advance the caret blink
//!
//! Step 1 only hit-tests and queues work, so a registry can run it for every
//! field before any field runs steps 2-5. All pointer presses of a tick are
//! then tested against the same world transform.

use std::collections::VecDeque;
use std::time::Duration;

use input_core::{EditSurface, InputId, Key, SurfaceEvent};
use layout::{
    Line, Point, Rect, TextMeasurer, block_width, caret_pixel_for_offset, display_text,
    layout_lines, offset_for_pixel, selection_rects,
};

use crate::config::FieldConfig;
use crate::device::DeviceProfile;
use crate::host::{SceneHost, WorldTransform};
use crate::keyboard::KeyboardWatch;
use crate::scheduler::{Transition, TransitionQueue};
use crate::session::InputSession;
use crate::view::{FieldView, align_anchor};
use crate::zoom::zoomed_transform;

/// Ticks between caret visibility toggles.
pub const BLINK_TICKS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusState {
    Blurred,
    /// Focus was requested and will attach on a later tick (desktop only).
    FocusPending,
    Focused,
}

/// Input to the focus state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
    /// Global pointer press, anywhere on screen.
    PointerDown(Point),
    Surface(SurfaceEvent),
}

#[derive(Debug)]
struct FieldState {
    focus: FocusState,
    caret_px: Point,
    /// Left/top of the visible window, in text coordinates.
    scroll: Point,
    lines: Vec<Line>,
    /// Raw value the current `lines` were computed from.
    cached_value: Option<String>,
    block_w: f32,
    line_h: f32,
    blink: bool,
    blink_ticks: u32,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            focus: FocusState::Blurred,
            caret_px: Point::ZERO,
            scroll: Point::ZERO,
            lines: Vec::new(),
            cached_value: None,
            block_w: 0.0,
            line_h: 0.0,
            blink: false,
            blink_ticks: 0,
        }
    }
}

/// An editable text field rendered in the scene graph.
pub struct InputField<S: EditSurface> {
    id: InputId,
    position: Point,
    config: FieldConfig,
    surface: S,
    session: InputSession,
    device: DeviceProfile,
    view: FieldView,
    state: FieldState,
    events: VecDeque<FieldEvent>,
    transitions: TransitionQueue,
    keyboard_watch: Option<KeyboardWatch>,
    /// World transform from before this field zoomed in.
    zoom_saved: Option<WorldTransform>,
    /// Focused with zoom enabled while another field still held the lock.
    zoom_waiting: bool,
    tick: u64,
    destroyed: bool,
    scratch: Vec<SurfaceEvent>,
}

impl<S: EditSurface> InputField<S> {
    pub fn new(
        id: InputId,
        position: Point,
        config: FieldConfig,
        surface: S,
        session: InputSession,
        device: DeviceProfile,
    ) -> Self {
        let view = FieldView::new(&config, position);
        log::debug!(
            target: "field.plugin",
            "{id}: created at ({}, {}) as {:?}",
            position.x,
            position.y,
            config.kind
        );
        Self {
            id,
            position,
            config,
            surface,
            session,
            device,
            view,
            state: FieldState::default(),
            events: VecDeque::new(),
            transitions: TransitionQueue::new(),
            keyboard_watch: None,
            zoom_saved: None,
            zoom_waiting: false,
            tick: 0,
            destroyed: false,
            scratch: Vec::new(),
        }
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Queue a global pointer press. Every field sees every press; the hit
    /// test happens when the queue is drained.
    pub fn on_pointer_down(&mut self, global: Point) {
        if self.check_destroyed("on_pointer_down") {
            return;
        }
        // Keep surface events that happened before the press ahead of it.
        self.collect_surface_events();
        self.events.push_back(FieldEvent::PointerDown(global));
    }

    /// Advance one frame.
    pub fn tick(&mut self, host: &mut dyn SceneHost, dt: Duration) {
        self.begin_tick(host);
        self.finish_tick(host, dt);
    }

    /// First half of a tick: drain queued input into transitions.
    pub(crate) fn begin_tick(&mut self, host: &mut dyn SceneHost) {
        if self.check_destroyed("tick") {
            return;
        }
        self.tick += 1;
        self.collect_surface_events();
        self.drain_events(host);
    }

    /// Second half of a tick: transitions, keyboard watch, reconcile, blink.
    pub(crate) fn finish_tick(&mut self, host: &mut dyn SceneHost, dt: Duration) {
        if self.destroyed {
            return;
        }
        self.run_due_transitions(host);
        if self.zoom_waiting && self.state.focus == FocusState::Focused {
            self.zoom_in(host);
        }
        self.poll_keyboard(host, dt);
        self.reconcile(host.measurer());
        self.advance_blink();
    }

    /// Replace the value, then leave focus.
    ///
    /// The surface is updated at once; the view catches up on the next tick.
    pub fn set_value(&mut self, text: &str) {
        if self.check_destroyed("set_value") {
            return;
        }
        self.surface.set_value(text);
        self.schedule(Transition::EndFocus, 0);
    }

    pub fn reset_text(&mut self) {
        self.set_value("");
    }

    /// Tear the field down: drop queued work, release session flags and
    /// remove the surface's element.
    pub fn destroy(&mut self, host: &mut dyn SceneHost) {
        if self.check_destroyed("destroy") {
            return;
        }
        self.transitions.clear();
        self.events.clear();
        self.keyboard_watch = None;
        self.zoom_waiting = false;
        self.zoom_out(host);
        if !self.device.desktop && self.state.focus != FocusState::Blurred {
            self.session.close_keyboard(self.id);
        }
        self.surface.detach_listeners();
        self.surface.destroy();
        self.state.focus = FocusState::Blurred;
        self.destroyed = true;
        log::debug!(target: "field.plugin", "{}: destroyed", self.id);
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The raw value, as held by the surface.
    pub fn value(&self) -> &str {
        self.surface.value()
    }

    pub fn focus_state(&self) -> FocusState {
        self.state.focus
    }

    pub fn is_focused(&self) -> bool {
        self.state.focus == FocusState::Focused
    }

    pub fn view(&self) -> &FieldView {
        &self.view
    }

    pub fn caret_offset(&self) -> Option<usize> {
        self.surface.caret_position()
    }

    /// Caret position relative to the text origin, as of the last tick.
    pub fn caret_pixel(&self) -> Point {
        self.state.caret_px
    }

    /// Left/top of the visible window in text coordinates.
    pub fn scroll(&self) -> Point {
        self.state.scroll
    }

    pub fn lines(&self) -> &[Line] {
        &self.state.lines
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom_saved.is_some()
    }

    pub fn keyboard_watch_active(&self) -> bool {
        self.keyboard_watch.is_some()
    }

    pub fn pending_transitions(&self) -> usize {
        self.transitions.len()
    }

    // =========================================================================
    // State machine
    // =========================================================================

    fn collect_surface_events(&mut self) {
        self.surface.drain_events(&mut self.scratch);
        self.events
            .extend(self.scratch.drain(..).map(FieldEvent::Surface));
    }

    fn drain_events(&mut self, host: &mut dyn SceneHost) {
        while let Some(event) = self.events.pop_front() {
            match event {
                FieldEvent::PointerDown(global) => self.on_pointer(host, global),
                FieldEvent::Surface(SurfaceEvent::KeyDown(Key::Enter))
                    if self.config.focus_out_on_enter
                        && self.state.focus != FocusState::Blurred =>
                {
                    log::debug!(target: "field.focus", "{}: enter pressed, leaving", self.id);
                    self.schedule(Transition::EndFocus, 0);
                }
                FieldEvent::Surface(SurfaceEvent::FocusOut) => self.on_external_blur("focus out"),
                FieldEvent::Surface(other) => {
                    log::trace!(target: "field.sync", "{}: surface {other:?}", self.id);
                }
            }
        }
    }

    fn on_pointer(&mut self, host: &mut dyn SceneHost, global: Point) {
        let bounds = host.world_bounds(self.position, self.view.box_size());
        let inside = host.pointer_over(bounds, global);
        match (inside, self.state.focus) {
            (true, FocusState::Blurred) => {
                self.state.focus = FocusState::FocusPending;
                log::debug!(target: "field.focus", "{}: focus requested", self.id);
                self.schedule(
                    Transition::FinishFocus { pointer: global },
                    self.device.focus_delay(),
                );
            }
            (true, _) => self.schedule(Transition::PlaceCaret { pointer: global }, 0),
            (false, FocusState::Blurred) => {}
            (false, _) => self.schedule(Transition::EndFocus, 0),
        }
    }

    /// Native focus was lost. Only meaningful while this field holds the soft
    /// keyboard: that is how a dismissed keyboard shows up.
    fn on_external_blur(&mut self, cause: &str) {
        if self.session.keyboard_owner() == Some(self.id) && self.state.focus != FocusState::Blurred
        {
            log::debug!(target: "field.focus", "{}: {cause} with keyboard open", self.id);
            self.schedule(Transition::EndFocus, 0);
        }
    }

    fn schedule(&mut self, transition: Transition, delay: u64) {
        self.transitions.push(self.tick, delay, transition);
    }

    fn run_due_transitions(&mut self, host: &mut dyn SceneHost) {
        while let Some(transition) = self.transitions.pop_due(self.tick) {
            match transition {
                Transition::FinishFocus { pointer } => self.finish_focus(host, pointer),
                Transition::PlaceCaret { pointer } => {
                    if self.state.focus == FocusState::Focused {
                        self.place_caret(host, pointer);
                    }
                }
                Transition::EndFocus => self.end_focus(host),
                Transition::BlurSurface => self.surface.blur(),
            }
        }
    }

    fn finish_focus(&mut self, host: &mut dyn SceneHost, pointer: Point) {
        if self.state.focus != FocusState::FocusPending {
            return;
        }
        self.state.focus = FocusState::Focused;
        self.view.set_placeholder_visible(false);
        self.surface.attach_listeners();
        self.surface.focus();
        self.place_caret(host, pointer);

        self.view.caret.visible = true;
        self.state.blink = false;
        self.state.blink_ticks = 0;

        if !self.device.desktop {
            self.session.open_keyboard(self.id);
            if self.device.chrome {
                self.keyboard_watch = Some(KeyboardWatch::start(host.viewport_size()));
            }
        }
        if self.config.zoom {
            self.zoom_waiting = true;
            self.zoom_in(host);
        }
        log::debug!(target: "field.focus", "{}: focused", self.id);
    }

    fn end_focus(&mut self, host: &mut dyn SceneHost) {
        if self.state.focus == FocusState::Blurred {
            return;
        }
        self.state.focus = FocusState::Blurred;

        self.surface.detach_listeners();
        if self.device.desktop {
            self.schedule(Transition::BlurSurface, 1);
        } else {
            self.surface.blur();
        }

        self.view.caret.visible = false;
        self.view.selection.rects.clear();
        let empty = self.surface.value().is_empty();
        self.view.set_placeholder_visible(empty);

        self.zoom_waiting = false;
        self.zoom_out(host);
        if !self.device.desktop {
            self.session.close_keyboard(self.id);
        }
        self.keyboard_watch = None;
        log::debug!(target: "field.focus", "{}: blurred", self.id);
    }

    fn place_caret(&mut self, host: &mut dyn SceneHost, pointer: Point) {
        let local = host.to_local(self.position, pointer);
        let measurer = host.measurer();
        self.refresh_layout(measurer);
        let origin = self.text_origin();
        let offset = offset_for_pixel(
            measurer,
            &self.config.font,
            &self.state.lines,
            local.x - origin.x,
            local.y - origin.y,
        );
        self.surface.set_caret_position(offset);
        log::trace!(target: "field.focus", "{}: caret placed at {offset}", self.id);
    }

    fn poll_keyboard(&mut self, host: &mut dyn SceneHost, dt: Duration) {
        let viewport = host.viewport_size();
        let Some(watch) = self.keyboard_watch.as_mut() else {
            return;
        };
        if watch.poll(dt, viewport) {
            self.keyboard_watch = None;
            self.on_external_blur("keyboard dismissed");
            self.run_due_transitions(host);
        }
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    /// Zoom onto the field. While another field holds the lock the attempt
    /// is repeated every tick until it is released or this field blurs.
    fn zoom_in(&mut self, host: &mut dyn SceneHost) {
        if self.zoom_saved.is_some() {
            self.zoom_waiting = false;
            return;
        }
        if !self.session.try_acquire_zoom(self.id) {
            log::debug!(target: "field.zoom", "{}: zoom held by another field, waiting", self.id);
            return;
        }
        self.zoom_waiting = false;

        let before = host.world();
        let (w, h) = self.view.box_size();
        let bounds = Rect::new(self.position.x, self.position.y, w, h);
        match zoomed_transform(
            before,
            bounds,
            self.config.padding,
            host.viewport_size(),
            host.game_width(),
        ) {
            Some(zoomed) => {
                host.set_world(zoomed);
                self.zoom_saved = Some(before);
                log::debug!(
                    target: "field.zoom",
                    "{}: zoomed to scale {}",
                    self.id,
                    zoomed.scale.x
                );
            }
            None => {
                self.session.release_zoom(self.id);
                log::warn!(target: "field.zoom", "{}: degenerate bounds, not zooming", self.id);
            }
        }
    }

    fn zoom_out(&mut self, host: &mut dyn SceneHost) {
        if let Some(before) = self.zoom_saved.take() {
            host.set_world(before);
            self.session.release_zoom(self.id);
            log::debug!(target: "field.zoom", "{}: zoom restored", self.id);
        }
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    fn reconcile(&mut self, measurer: &dyn TextMeasurer) {
        self.refresh_layout(measurer);

        let focused = self.state.focus == FocusState::Focused;
        let text_len: usize = self.state.lines.iter().map(Line::span).sum();
        // Blurred fields show the end of an overflowing value.
        let caret = if focused {
            self.surface.caret_position().unwrap_or(text_len).min(text_len)
        } else {
            text_len
        };

        self.state.caret_px =
            caret_pixel_for_offset(measurer, &self.config.font, &self.state.lines, caret);
        self.clamp_scroll();
        self.surface.set_scroll_left(self.state.scroll.x);
        self.surface.set_scroll_top(self.state.scroll.y);

        let origin = self.text_origin();
        self.place_text_node(origin);
        self.view.caret.x = origin.x + self.state.caret_px.x;
        self.view.caret.y = origin.y + self.state.caret_px.y;

        self.view.selection.rects.clear();
        if focused && self.surface.has_selection() {
            let sel = self.surface.selection().clamped(text_len);
            self.view.selection.rects.extend(
                selection_rects(
                    measurer,
                    &self.config.font,
                    &self.state.lines,
                    sel.start,
                    sel.end,
                )
                    .into_iter()
                    .map(|r| r.translate(origin.x, origin.y)),
            );
        }
    }

    /// Recompute lines when the raw value differs from the cached one.
    fn refresh_layout(&mut self, measurer: &dyn TextMeasurer) {
        let value = self.surface.value();
        if self.state.cached_value.as_deref() == Some(value) {
            return;
        }

        let font = &self.config.font;
        let shown = display_text(self.config.kind, value, self.config.bounds);
        self.state.lines = layout_lines(
            measurer,
            font,
            &shown,
            self.config.width,
            self.config.multiline,
        );
        self.state.block_w = block_width(measurer, font, &self.state.lines);
        self.state.line_h = measurer.line_height(font);

        self.view.text.text = join_lines(&self.state.lines);
        self.view.text.line_height = self.state.line_h;
        if let Some(placeholder) = &mut self.view.placeholder {
            placeholder.line_height = self.state.line_h;
            if self.config.multiline {
                if let Some(source) = self.config.placeholder.as_deref() {
                    let lines = layout_lines(measurer, font, source, self.config.width, true);
                    placeholder.text = join_lines(&lines);
                }
            }
        }
        let show_placeholder = value.is_empty() && self.state.focus != FocusState::Focused;
        self.view.set_placeholder_visible(show_placeholder);

        log::trace!(
            target: "field.sync",
            "{}: relayout, {} line(s), block width {}",
            self.id,
            self.state.lines.len(),
            self.state.block_w
        );
        self.state.cached_value = Some(value.to_string());
    }

    /// Single-line text wider than the field scrolls horizontally.
    fn overflows_x(&self) -> bool {
        !self.config.multiline && self.state.block_w > self.config.width
    }

    /// Move the visible window the least amount that keeps the caret inside it.
    fn clamp_scroll(&mut self) {
        let before = self.state.scroll;
        let width = self.config.width;
        let height = self.config.content_height();
        let caret = self.state.caret_px;
        let lh = self.state.line_h;

        self.state.scroll.x = if self.overflows_x() {
            let max = self.state.block_w - width;
            let mut left = self.state.scroll.x.clamp(0.0, max);
            if caret.x < left {
                left = caret.x;
            } else if caret.x > left + width {
                left = caret.x - width;
            }
            left.clamp(0.0, max)
        } else {
            0.0
        };

        let block_h = self.state.lines.len() as f32 * lh;
        self.state.scroll.y = if self.config.multiline && block_h > height {
            let max = block_h - height;
            let mut top = self.state.scroll.y.clamp(0.0, max);
            if caret.y < top {
                top = caret.y;
            } else if caret.y + lh > top + height {
                top = caret.y + lh - height;
            }
            top.clamp(0.0, max)
        } else {
            0.0
        };

        if self.state.scroll != before {
            log::trace!(
                target: "field.sync",
                "{}: scroll ({}, {}) -> ({}, {})",
                self.id,
                before.x,
                before.y,
                self.state.scroll.x,
                self.state.scroll.y
            );
        }
    }

    /// Left/top of the laid-out text in field-local coordinates. Value, caret
    /// and selection are all placed relative to this one point.
    fn text_origin(&self) -> Point {
        let p = self.config.padding;
        let x = if self.overflows_x() {
            p - self.state.scroll.x
        } else {
            let (anchor_x, ax) = align_anchor(self.config.align, p, self.config.width);
            ax - anchor_x * self.state.block_w
        };
        Point::new(x, p - self.state.scroll.y)
    }

    /// Position the value node so its left edge lands on `origin.x`.
    fn place_text_node(&mut self, origin: Point) {
        let p = self.config.padding;
        let width = self.config.width;
        let (anchor_x, x) = if self.overflows_x() {
            // Right-anchored overflow: the anchor sits at the right edge and
            // moves right by however much of the tail is scrolled out.
            let max = self.state.block_w - width;
            (1.0, p + width + (max - self.state.scroll.x))
        } else {
            align_anchor(self.config.align, p, width)
        };
        self.view.text.anchor_x = anchor_x;
        self.view.text.x = x;
        self.view.text.y = origin.y;
    }

    fn advance_blink(&mut self) {
        if self.state.focus != FocusState::Focused {
            return;
        }
        self.state.blink_ticks += 1;
        if self.state.blink_ticks >= BLINK_TICKS {
            self.view.caret.visible = self.state.blink;
            self.state.blink = !self.state.blink;
            self.state.blink_ticks = 0;
        }
    }

    fn check_destroyed(&self, op: &str) -> bool {
        if self.destroyed {
            log::warn!(target: "field.focus", "{}: {op} on destroyed field", self.id);
        }
        self.destroyed
    }
}

fn join_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
