//! Editable text fields for a 2D scene graph.
//!
//! A field renders its value, caret and selection as scene nodes while a
//! hidden edit surface does the actual editing:
//! - [`input_core`]: the edit surface contract and a software surface
//! - [`layout`]: line breaking, caret and selection geometry
//! - [`field`]: the field controller, options and the plugin registry
//! - [`gfx`]: an egui backend

pub use field;
pub use gfx;
pub use input_core;
pub use layout;

pub use field::{
    DeviceProfile, FieldHandle, FieldOptions, InputField, InputFieldPlugin, MemorySurfaceFactory,
    Stage,
};
pub use gfx::EguiFieldHost;
