//! Factory and registry for fields sharing one input session.

use std::time::Duration;

use input_core::{EditSurface, InputId, MemorySurface, SurfaceConfig};
use layout::Point;

use crate::config::{FieldConfig, FieldOptions};
use crate::controller::InputField;
use crate::device::DeviceProfile;
use crate::error::ConfigError;
use crate::host::SceneHost;
use crate::session::{InputSession, SessionEvent};

/// Creates the hidden edit surface behind each new field.
pub trait SurfaceFactory {
    type Surface: EditSurface;

    fn create(&mut self, id: InputId, initial: &str, config: SurfaceConfig) -> Self::Surface;
}

/// Backs every field with a [`MemorySurface`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MemorySurfaceFactory;

impl SurfaceFactory for MemorySurfaceFactory {
    type Surface = MemorySurface;

    fn create(&mut self, id: InputId, initial: &str, config: SurfaceConfig) -> MemorySurface {
        MemorySurface::new(id, initial, config)
    }
}

/// Stable reference to a field owned by an [`InputFieldPlugin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldHandle(InputId);

impl FieldHandle {
    pub fn id(self) -> InputId {
        self.0
    }
}

/// Owns every field of one session and fans host input out to them.
pub struct InputFieldPlugin<F: SurfaceFactory> {
    factory: F,
    session: InputSession,
    device: DeviceProfile,
    fields: Vec<InputField<F::Surface>>,
    next_id: u64,
}

impl<F: SurfaceFactory> InputFieldPlugin<F> {
    pub fn new(factory: F, device: DeviceProfile) -> Self {
        Self {
            factory,
            session: InputSession::new(),
            device,
            fields: Vec::new(),
            next_id: 1,
        }
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn device(&self) -> DeviceProfile {
        self.device
    }

    /// Create a field at world `(x, y)`.
    pub fn add_input_field(
        &mut self,
        x: f32,
        y: f32,
        options: &FieldOptions,
    ) -> Result<FieldHandle, ConfigError> {
        let config = FieldConfig::from_options(options, &self.device)?;
        let id = InputId::from_raw(self.next_id);
        self.next_id += 1;

        let surface = self.factory.create(id, "", config.surface_config());
        let field = InputField::new(
            id,
            Point::new(x, y),
            config,
            surface,
            self.session.clone(),
            self.device,
        );
        self.fields.push(field);
        log::debug!(target: "field.plugin", "{id}: registered ({} live)", self.fields.len());
        Ok(FieldHandle(id))
    }

    /// Create a field positioned by the `x`/`y` keys of `options` (default 0).
    pub fn add_from_options(&mut self, options: &FieldOptions) -> Result<FieldHandle, ConfigError> {
        let x = options.x.unwrap_or(0.0);
        let y = options.y.unwrap_or(0.0);
        self.add_input_field(x, y, options)
    }

    pub fn field(&self, handle: FieldHandle) -> Option<&InputField<F::Surface>> {
        self.fields.iter().find(|f| f.id() == handle.0)
    }

    pub fn field_mut(&mut self, handle: FieldHandle) -> Option<&mut InputField<F::Surface>> {
        self.fields.iter_mut().find(|f| f.id() == handle.0)
    }

    pub fn fields(&self) -> impl Iterator<Item = &InputField<F::Surface>> {
        self.fields.iter()
    }

    /// Handle of the focused field, if any.
    pub fn focused(&self) -> Option<FieldHandle> {
        self.fields
            .iter()
            .find(|f| f.is_focused())
            .map(|f| FieldHandle(f.id()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Forward a global pointer press to every field.
    pub fn pointer_down(&mut self, global: Point) {
        for field in &mut self.fields {
            field.on_pointer_down(global);
        }
    }

    /// Advance every field one frame. All fields hit-test their pointer
    /// presses before any of them runs a focus change, so a blur that zooms
    /// the world back out cannot move a press another field still has to test.
    pub fn tick(&mut self, host: &mut dyn SceneHost, dt: Duration) {
        for field in &mut self.fields {
            field.begin_tick(host);
        }
        for field in &mut self.fields {
            field.finish_tick(host, dt);
        }
    }

    /// Destroy and forget a field. Returns `false` for an unknown handle.
    pub fn destroy(&mut self, handle: FieldHandle, host: &mut dyn SceneHost) -> bool {
        let Some(idx) = self.fields.iter().position(|f| f.id() == handle.0) else {
            log::warn!(target: "field.plugin", "{}: destroy of unknown field", handle.0);
            return false;
        };
        let mut field = self.fields.remove(idx);
        field.destroy(host);
        true
    }

    /// Drain soft keyboard notifications for the host.
    pub fn take_session_events(&self) -> Vec<SessionEvent> {
        self.session.take_events()
    }
}
