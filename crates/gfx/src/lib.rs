//! egui backend for scene-graph text fields: text measurement, painting and
//! input routing over software edit surfaces.

pub mod input;
pub mod paint;
pub mod text_measurer;

pub use input::{EguiFieldHost, apply_edit_event, map_key};
pub use paint::{PaintArgs, paint_field};
pub use text_measurer::{EguiTextMeasurer, font_id};
