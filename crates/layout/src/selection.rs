//! Highlight rectangles for a selected character range.

use input_core::{SelectionRange, char_prefix};

use crate::{FontSpec, Line, Rect, TextMeasurer};

/// Rectangles covering characters `[start, end)`, one per covered line.
///
/// The bounds may be given in either order. Each rectangle spans from the
/// measured width of the line prefix up to the clipped start to that up to
/// the clipped end: `(w(a), i * lh, w(b) - w(a), lh)`. Lines entirely outside
/// the range emit nothing, and an empty range yields no rectangles.
pub fn selection_rects(
    measurer: &dyn TextMeasurer,
    font: &FontSpec,
    lines: &[Line],
    start: usize,
    end: usize,
) -> Vec<Rect> {
    let range = SelectionRange::new(start, end);
    let mut rects = Vec::new();
    if range.is_empty() {
        return rects;
    }

    let lh = measurer.line_height(font);
    let mut index = 0usize;
    for (i, line) in lines.iter().enumerate() {
        if index >= range.end {
            break;
        }
        let line_end = index + line.chars;
        let a = range.start.max(index);
        let b = range.end.min(line_end);
        if a < b {
            let x0 = measurer.measure(char_prefix(&line.text, a - index), font);
            let x1 = measurer.measure(char_prefix(&line.text, b - index), font);
            rects.push(Rect::new(x0, i as f32 * lh, x1 - x0, lh));
        }
        index = line_end + line.break_chars;
    }

    rects
}
