use std::fmt;

/// Something that can measure text for layout.
pub trait TextMeasurer {
    /// Return the width of `text` in px when rendered with `font`.
    fn measure(&self, text: &str, font: &FontSpec) -> f32;

    /// Return the line-height in px for the given `font`.
    /// (The egui side implements this as the row height of the font.)
    fn line_height(&self, font: &FontSpec) -> f32;
}

/// A parsed font descriptor such as `"14px Arial"` or `"bold 18px Courier New"`.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size_px: f32,
    pub family: String,
    pub weight: String,
}

impl FontSpec {
    pub fn new(size_px: f32, family: impl Into<String>) -> Self {
        Self {
            size_px,
            family: family.into(),
            weight: "normal".to_string(),
        }
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Parse `"[weight] <n>px <family>"`.
    ///
    /// Returns `None` when no positive, finite pixel size is present or the
    /// family is missing.
    pub fn parse(descriptor: &str) -> Option<Self> {
        let tokens: Vec<&str> = descriptor.split_whitespace().collect();
        let size_at = tokens.iter().position(|t| t.ends_with("px"))?;
        let size_px: f32 = tokens[size_at].strip_suffix("px")?.parse().ok()?;
        if !size_px.is_finite() || size_px <= 0.0 {
            return None;
        }

        let family = tokens[size_at + 1..].join(" ");
        if family.is_empty() {
            return None;
        }

        let weight = match size_at {
            0 => "normal".to_string(),
            _ => tokens[..size_at].join(" "),
        };

        Some(Self {
            size_px,
            family,
            weight,
        })
    }

    pub fn is_bold(&self) -> bool {
        self.weight.split_whitespace().any(|w| {
            w.eq_ignore_ascii_case("bold")
                || w.eq_ignore_ascii_case("bolder")
                || w.parse::<u32>().is_ok_and(|n| n >= 600)
        })
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weight != "normal" {
            write!(f, "{} ", self.weight)?;
        }
        write!(f, "{}px {}", self.size_px, self.family)
    }
}
