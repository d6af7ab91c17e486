//! Text geometry for scene-graph text fields.
//!
//! Pure functions mapping a value, a font and a wrap width to lines, caret
//! pixels, click offsets and selection rectangles. Nothing here holds state;
//! measurement is delegated to a [`TextMeasurer`] supplied by the rendering
//! backend.

mod caret;
mod display;
mod geometry;
mod lines;
mod selection;
mod text;

pub use caret::{caret_pixel_for_offset, offset_for_pixel};
pub use display::{MASK_CHAR, NumericBounds, display_text};
pub use geometry::{Point, Rect};
pub use lines::{Line, block_width, break_prefix_chars, layout_lines};
pub use selection::selection_rects;
pub use text::{FontSpec, TextMeasurer};

#[cfg(test)]
pub(crate) mod test_support {
    use super::{FontSpec, TextMeasurer};

    pub const ADVANCE: f32 = 10.0;
    pub const LINE_H: f32 = 16.0;

    /// Every character is `ADVANCE` px wide.
    #[derive(Default)]
    pub struct FixedMeasurer;

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, text: &str, _font: &FontSpec) -> f32 {
            text.chars().count() as f32 * ADVANCE
        }

        fn line_height(&self, _font: &FontSpec) -> f32 {
            LINE_H
        }
    }

    pub fn font() -> FontSpec {
        FontSpec::new(14.0, "Arial")
    }
}
