//! Routing egui input into fields.

use std::time::Duration;

use egui::{Context, Event, PointerButton, Pos2, Ui};
use field::{
    ConfigError, DeviceProfile, FieldHandle, FieldOptions, FocusState, InputFieldPlugin,
    MemorySurfaceFactory, SceneHost, Stage,
};
use input_core::{Key, MemorySurface};
use layout::Point;

use crate::paint::{PaintArgs, paint_field};
use crate::text_measurer::EguiTextMeasurer;

/// Map an egui key to an edit key. Printable keys arrive as
/// [`Event::Text`] and are not mapped here.
pub fn map_key(key: egui::Key) -> Option<Key> {
    use egui::Key as K;
    Some(match key {
        K::Enter => Key::Enter,
        K::Backspace => Key::Backspace,
        K::Delete => Key::Delete,
        K::ArrowLeft => Key::ArrowLeft,
        K::ArrowRight => Key::ArrowRight,
        K::ArrowUp => Key::ArrowUp,
        K::ArrowDown => Key::ArrowDown,
        K::Home => Key::Home,
        K::End => Key::End,
        _ => return None,
    })
}

/// Apply one egui event to the focused field's surface.
///
/// Returns `true` when the event was consumed.
pub fn apply_edit_event(surface: &mut MemorySurface, event: &Event) -> bool {
    match event {
        Event::Text(t) => {
            surface.insert_text(t);
            true
        }
        Event::Paste(t) => {
            surface.insert_text(t);
            true
        }
        Event::Key {
            key: egui::Key::A,
            pressed: true,
            modifiers,
            ..
        } if modifiers.command || modifiers.ctrl => {
            surface.select_all();
            true
        }
        Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => match map_key(*key) {
            Some(k) => {
                surface.press_key(k, modifiers.shift);
                true
            }
            None => false,
        },
        _ => false,
    }
}

fn is_edit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Text(_) | Event::Paste(_) | Event::Key { pressed: true, .. }
    )
}

/// Primary-button presses in canvas coordinates.
fn pointer_presses(events: &[Event], origin: Pos2) -> impl Iterator<Item = Point> + '_ {
    events.iter().filter_map(move |e| match e {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            ..
        } => Some(Point::new(pos.x - origin.x, pos.y - origin.y)),
        _ => None,
    })
}

/// Fields on an egui canvas, backed by software edit surfaces.
///
/// Each frame [`show`](Self::show) forwards pointer presses to every field,
/// ticks the plugin, routes keyboard input to the field that is focused after
/// the tick and paints.
pub struct EguiFieldHost {
    plugin: InputFieldPlugin<MemorySurfaceFactory>,
    stage: Stage,
    /// Edits typed while a field's focus was still pending.
    pending_edits: Vec<Event>,
}

impl EguiFieldHost {
    pub fn new(ctx: &Context, device: DeviceProfile, game_width: f32) -> Self {
        let viewport = ctx.screen_rect().size();
        Self {
            plugin: InputFieldPlugin::new(MemorySurfaceFactory, device),
            stage: Stage::new(
                EguiTextMeasurer::new(ctx),
                game_width,
                (viewport.x, viewport.y),
            ),
            pending_edits: Vec::new(),
        }
    }

    pub fn add_input_field(
        &mut self,
        x: f32,
        y: f32,
        options: &FieldOptions,
    ) -> Result<FieldHandle, ConfigError> {
        self.plugin.add_input_field(x, y, options)
    }

    pub fn destroy(&mut self, handle: FieldHandle) -> bool {
        self.plugin.destroy(handle, &mut self.stage)
    }

    pub fn plugin(&self) -> &InputFieldPlugin<MemorySurfaceFactory> {
        &self.plugin
    }

    pub fn plugin_mut(&mut self) -> &mut InputFieldPlugin<MemorySurfaceFactory> {
        &mut self.plugin
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Route input, advance one tick and paint, with the canvas at `origin`.
    pub fn show(&mut self, ui: &Ui, origin: Pos2) {
        let (events, dt, viewport) = ui.input(|i| {
            (
                i.events.clone(),
                Duration::from_secs_f32(i.stable_dt.min(1.0).max(0.0)),
                i.screen_rect().size(),
            )
        });
        self.stage.set_viewport_size((viewport.x, viewport.y));
        self.step(&events, origin, dt);
        self.paint(ui, origin);

        if self.plugin.focused().is_some() {
            // Keep ticking for the caret blink.
            ui.ctx().request_repaint();
        }
    }

    /// One frame of input: presses, tick, then edits.
    ///
    /// Edits are routed after the tick so a press that moves focus in the
    /// same frame is seen first. The field shows them on the next tick.
    pub fn step(&mut self, events: &[Event], origin: Pos2, dt: Duration) {
        for global in pointer_presses(events, origin) {
            log::trace!(target: "gfx.input", "pointer down at ({}, {})", global.x, global.y);
            self.plugin.pointer_down(global);
        }
        self.plugin.tick(&mut self.stage, dt);
        self.route_edits(events);
    }

    /// Edits go to the focused field only. While a focus is still pending
    /// they are held back for it; with no focus at all they are dropped.
    fn route_edits(&mut self, events: &[Event]) {
        let edits = events.iter().filter(|e| is_edit_event(e));
        if let Some(handle) = self.plugin.focused() {
            let held = std::mem::take(&mut self.pending_edits);
            let Some(field) = self.plugin.field_mut(handle) else {
                return;
            };
            let surface = field.surface_mut();
            for event in held.iter().chain(edits) {
                apply_edit_event(surface, event);
            }
        } else if self
            .plugin
            .fields()
            .any(|f| f.focus_state() == FocusState::FocusPending)
        {
            self.pending_edits.extend(edits.cloned());
        } else if !self.pending_edits.is_empty() {
            log::debug!(
                target: "gfx.input",
                "dropping {} edit(s), no field took focus",
                self.pending_edits.len()
            );
            self.pending_edits.clear();
        }
    }

    fn paint(&self, ui: &Ui, origin: Pos2) {
        let painter = ui.painter();
        let args = PaintArgs {
            painter,
            origin,
            measurer: self.stage.measurer(),
            world: self.stage.world(),
        };
        for field in self.plugin.fields() {
            paint_field(args, field.view(), &field.config().font);
        }
    }
}
