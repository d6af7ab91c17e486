//! Caret offset <-> pixel mapping over a line breakdown.

use input_core::char_prefix;

use crate::{FontSpec, Line, Point, TextMeasurer};

/// Pixel position of the caret at `offset`, relative to the text origin.
///
/// The line holding `offset` is found by cumulative scan; `x` is the measured
/// width of that line's prefix and `y` is `line_index * line_height`. An
/// offset past every line lands at the end of the final line, and an empty
/// breakdown yields the origin.
pub fn caret_pixel_for_offset(
    measurer: &dyn TextMeasurer,
    font: &FontSpec,
    lines: &[Line],
    offset: usize,
) -> Point {
    if lines.is_empty() {
        return Point::ZERO;
    }

    let lh = measurer.line_height(font);
    let last = lines.len() - 1;
    let mut index = 0usize;
    for (i, line) in lines.iter().enumerate() {
        if offset <= index + line.chars || i == last {
            let within = offset.saturating_sub(index).min(line.chars);
            let x = measurer.measure(char_prefix(&line.text, within), font);
            return Point::new(x, i as f32 * lh);
        }
        index += line.span();
    }

    Point::ZERO
}

/// Character offset nearest to a point relative to the text origin.
///
/// Line `i` covers `[i * lh, (i + 1) * lh)`; a point above the first line maps
/// to the first line and a point below the last line maps to the end of the
/// text. Within a line the result is the offset just before the first
/// character whose right edge is strictly past `x`, so clicking a character
/// never places the caret after it.
pub fn offset_for_pixel(
    measurer: &dyn TextMeasurer,
    font: &FontSpec,
    lines: &[Line],
    x: f32,
    y: f32,
) -> usize {
    if lines.is_empty() {
        return 0;
    }

    let lh = measurer.line_height(font);
    let line_idx = if lh.is_finite() && lh > 0.0 && y > 0.0 {
        (y / lh).floor() as usize
    } else {
        0
    };
    if line_idx >= lines.len() {
        return lines.iter().map(Line::span).sum();
    }

    let start: usize = lines[..line_idx].iter().map(Line::span).sum();
    let line = &lines[line_idx];

    // Largest prefix whose measured width does not exceed `x`.
    let (mut lo, mut hi) = (0usize, line.chars);
    while lo < hi {
        let mid = (lo + hi).div_ceil(2);
        if measurer.measure(char_prefix(&line.text, mid), font) <= x {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    start + lo
}
