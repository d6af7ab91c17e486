//! Editable text fields for a 2D scene graph.
//!
//! A field renders its value, caret and selection as scene nodes while a
//! hidden [`EditSurface`](input_core::EditSurface) owns the real editing
//! state. Every tick the [`InputField`] controller pulls the surface state,
//! lays it out with the `layout` crate and updates its [`FieldView`].
//!
//! Hosts usually go through [`InputFieldPlugin`], which owns the shared
//! [`InputSession`] and creates surfaces through a [`SurfaceFactory`].

mod color;
mod config;
mod controller;
mod device;
mod error;
mod host;
mod keyboard;
mod plugin;
mod scheduler;
mod session;
mod view;
mod zoom;

pub use color::{Rgba, parse_color};
pub use config::{Align, FieldConfig, FieldOptions};
pub use controller::{BLINK_TICKS, FieldEvent, FocusState, InputField};
pub use device::DeviceProfile;
pub use error::ConfigError;
pub use host::{SceneHost, Stage, WorldTransform};
pub use keyboard::{KEYBOARD_POLL_INTERVAL, KeyboardWatch};
pub use plugin::{FieldHandle, InputFieldPlugin, MemorySurfaceFactory, SurfaceFactory};
pub use scheduler::{Transition, TransitionQueue};
pub use session::{InputSession, SessionEvent};
pub use view::{BoxShape, CARET_GLYPH, FieldView, MaskShape, SelectionShape, TextNode};
