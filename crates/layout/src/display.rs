//! Text as it is shown, which is not always the text as it is stored.

use std::borrow::Cow;

use input_core::{FieldKind, char_len};

/// Character substituted for every character of a password.
pub const MASK_CHAR: char = '*';

/// Optional numeric bounds of a number field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NumericBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericBounds {
    pub fn clamp(&self, n: f64) -> f64 {
        let n = match self.max {
            Some(max) if n > max => max,
            _ => n,
        };
        match self.min {
            Some(min) if n < min => min,
            _ => n,
        }
    }
}

/// The text fed to measurement and rendering for a stored `value`.
///
/// - password: a same-length run of [`MASK_CHAR`], so the real value never
///   reaches layout
/// - number: the value clamped to `bounds` when it parses outside them; the
///   stored value is left alone
/// - text: the value itself
pub fn display_text<'a>(kind: FieldKind, value: &'a str, bounds: NumericBounds) -> Cow<'a, str> {
    match kind {
        FieldKind::Text => Cow::Borrowed(value),
        FieldKind::Password => Cow::Owned(mask(char_len(value))),
        FieldKind::Number => {
            let Ok(n) = value.trim().parse::<f64>() else {
                return Cow::Borrowed(value);
            };
            if !n.is_finite() {
                return Cow::Borrowed(value);
            }
            let clamped = bounds.clamp(n);
            if clamped == n {
                Cow::Borrowed(value)
            } else {
                Cow::Owned(clamped.to_string())
            }
        }
    }
}

fn mask(len: usize) -> String {
    std::iter::repeat_n(MASK_CHAR, len).collect()
}
