//! Line breakdown of a field value.

use input_core::{char_len, char_prefix, char_slice};

use crate::{FontSpec, TextMeasurer};

/// One visual line of a field.
///
/// `break_chars` is the number of source characters consumed by the break
/// that ends this line: 1 for a wrapped space or an explicit newline, 0 for a
/// forced break inside a word and for the final line. Scanning the value line
/// by line therefore advances by `chars + break_chars`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub chars: usize,
    pub break_chars: usize,
}

impl Line {
    pub fn new(text: &str, break_chars: usize) -> Self {
        Self {
            text: text.to_string(),
            chars: char_len(text),
            break_chars,
        }
    }

    /// Characters this line advances a cumulative offset scan by.
    #[inline]
    pub fn span(&self) -> usize {
        self.chars + self.break_chars
    }
}

/// Break `value` into lines.
///
/// Single-line fields get exactly one line holding the whole value. Multi-line
/// fields split on `\n` and word-wrap every paragraph to `wrap_width`: the
/// longest prefix that fits is found by measurement, the break goes after the
/// last space inside it, and a run with no space is split at a character
/// boundary. A non-finite or non-positive `wrap_width` disables wrapping.
///
/// Every produced line fits, so re-laying out the lines joined by `\n`
/// reproduces the same line texts.
pub fn layout_lines(
    measurer: &dyn TextMeasurer,
    font: &FontSpec,
    value: &str,
    wrap_width: f32,
    multiline: bool,
) -> Vec<Line> {
    if !multiline {
        return vec![Line::new(value, 0)];
    }

    let wrap = wrap_width.is_finite() && wrap_width > 0.0;
    let mut out = Vec::new();
    let mut paragraphs = value.split('\n').peekable();
    while let Some(paragraph) = paragraphs.next() {
        if wrap {
            wrap_paragraph(measurer, font, paragraph, wrap_width, &mut out);
        } else {
            out.push(Line::new(paragraph, 0));
        }
        if paragraphs.peek().is_some() {
            if let Some(last) = out.last_mut() {
                last.break_chars = 1;
            }
        }
    }
    out
}

fn wrap_paragraph(
    measurer: &dyn TextMeasurer,
    font: &FontSpec,
    paragraph: &str,
    max_w: f32,
    out: &mut Vec<Line>,
) {
    let mut rest = paragraph;
    loop {
        if measurer.measure(rest, font) <= max_w {
            out.push(Line::new(rest, 0));
            return;
        }

        let fit = break_prefix_chars(measurer, font, rest, max_w);
        let len = char_len(rest);
        let space = rest
            .chars()
            .enumerate()
            .take(fit + 1)
            .skip(1)
            .filter(|&(i, ch)| ch == ' ' && i < len)
            .map(|(i, _)| i)
            .last();

        match space {
            Some(sp) => {
                out.push(Line::new(char_prefix(rest, sp), 1));
                rest = char_slice(rest, sp + 1, len);
            }
            None => {
                out.push(Line::new(char_prefix(rest, fit), 0));
                rest = char_slice(rest, fit, len);
            }
        }
    }
}

/// Return the number of leading characters of `text` that fit within
/// `max_w` px, never less than one so wrapping always makes progress.
pub fn break_prefix_chars(
    measurer: &dyn TextMeasurer,
    font: &FontSpec,
    text: &str,
    max_w: f32,
) -> usize {
    if text.is_empty() {
        return 0;
    }

    let max_w = max_w.max(0.0);

    // Candidate cut positions at UTF-8 char boundaries (end indices).
    let ends: Vec<usize> = text.char_indices().map(|(i, ch)| i + ch.len_utf8()).collect();

    // Find the largest prefix that fits using binary search.
    let mut lo = 0usize;
    let mut hi = ends.len();
    let mut best = 0usize;
    while lo < hi {
        let mid = (lo + hi) / 2;
        let w = measurer.measure(&text[..ends[mid]], font);
        let w = if w.is_finite() { w } else { f32::INFINITY };
        if w <= max_w {
            best = mid + 1;
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    best.max(1)
}

/// Width of the widest line.
pub fn block_width(measurer: &dyn TextMeasurer, font: &FontSpec, lines: &[Line]) -> f32 {
    lines
        .iter()
        .map(|line| measurer.measure(&line.text, font))
        .fold(0.0, f32::max)
}
