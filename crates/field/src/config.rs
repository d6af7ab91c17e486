//! Field options and the validated configuration built from them.

use input_core::{FieldKind, SurfaceConfig};
use layout::{FontSpec, NumericBounds};
use serde::Deserialize;

use crate::color::{Rgba, parse_color, with_alpha};
use crate::device::DeviceProfile;
use crate::error::ConfigError;

/// Horizontal alignment of the value inside the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// User-facing option object. Every key is optional.
///
/// Key names follow the camelCase convention of hosts that pass plain option
/// objects, so this deserializes directly from JSON or TOML.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOptions {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub padding: Option<f32>,
    pub align: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub place_holder: Option<String>,
    pub place_holder_color: Option<String>,
    pub font: Option<String>,
    pub font_weight: Option<String>,
    pub fill: Option<String>,
    pub background_color: Option<String>,
    pub fill_alpha: Option<f32>,
    pub border_width: Option<f32>,
    pub border_color: Option<String>,
    pub border_radius: Option<f32>,
    pub cursor_color: Option<String>,
    pub selection_color: Option<String>,
    pub zoom: Option<bool>,
    pub focus_out_on_enter: Option<bool>,
    pub word_wrap: Option<bool>,
}

/// Validated, immutable configuration of one field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub align: Align,
    pub kind: FieldKind,
    pub bounds: NumericBounds,
    /// Forwarded to the surface as its maximum length (text and password).
    pub max_length: Option<usize>,
    pub placeholder: Option<String>,
    pub placeholder_color: Rgba,
    pub font: FontSpec,
    pub fill: Rgba,
    pub background: Rgba,
    pub border_width: f32,
    pub border_color: Rgba,
    pub border_radius: f32,
    pub cursor_color: Rgba,
    pub selection_color: Rgba,
    pub zoom: bool,
    pub focus_out_on_enter: bool,
    pub multiline: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 14.0,
            padding: 0.0,
            align: Align::Left,
            kind: FieldKind::Text,
            bounds: NumericBounds::default(),
            max_length: None,
            placeholder: None,
            placeholder_color: (0xbf, 0xbe, 0xbd, 255),
            font: FontSpec::new(14.0, "Arial"),
            fill: (0, 0, 0, 255),
            background: (255, 255, 255, 255),
            border_width: 1.0,
            border_color: (0x95, 0x95, 0x95, 255),
            border_radius: 0.0,
            cursor_color: (0, 0, 0, 255),
            selection_color: (179, 212, 253, 204),
            zoom: false,
            focus_out_on_enter: false,
            multiline: false,
        }
    }
}

impl FieldConfig {
    /// Apply defaults to `options` and validate the result.
    ///
    /// Zoom is only honored on non-desktop devices.
    pub fn from_options(
        options: &FieldOptions,
        device: &DeviceProfile,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = options.width {
            config.width = non_negative("width", v)?;
        }
        if let Some(v) = options.height {
            config.height = non_negative("height", v)?;
        }
        if let Some(v) = options.padding {
            config.padding = non_negative("padding", v)?;
        }
        if let Some(v) = options.border_width {
            config.border_width = non_negative("borderWidth", v)?;
        }
        if let Some(v) = options.border_radius {
            config.border_radius = non_negative("borderRadius", v)?;
        }

        if let Some(align) = &options.align {
            config.align = Align::parse(align).ok_or_else(|| ConfigError::InvalidAlign {
                value: align.clone(),
            })?;
        }
        if let Some(kind) = &options.kind {
            config.kind = FieldKind::parse(kind).ok_or_else(|| ConfigError::InvalidKind {
                value: kind.clone(),
            })?;
        }

        let min = options.min.map(|v| finite64("min", v)).transpose()?;
        let max = options.max.map(|v| finite64("max", v)).transpose()?;
        match config.kind {
            FieldKind::Number => {
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(ConfigError::InvalidBounds { min, max });
                    }
                }
                config.bounds = NumericBounds { min, max };
            }
            FieldKind::Text | FieldKind::Password => {
                if let Some(max) = max {
                    if max < 0.0 {
                        return Err(ConfigError::Negative {
                            key: "max",
                            value: max as f32,
                        });
                    }
                    config.max_length = Some(max.floor() as usize);
                }
            }
        }

        if let Some(font) = &options.font {
            config.font = FontSpec::parse(font).ok_or_else(|| ConfigError::InvalidFont {
                value: font.clone(),
            })?;
        }
        if let Some(weight) = &options.font_weight {
            config.font.weight = weight.trim().to_string();
        }

        config.placeholder = options.place_holder.clone().filter(|p| !p.is_empty());
        color_opt(&mut config.placeholder_color, "placeHolderColor", &options.place_holder_color)?;
        color_opt(&mut config.fill, "fill", &options.fill)?;
        color_opt(&mut config.background, "backgroundColor", &options.background_color)?;
        color_opt(&mut config.border_color, "borderColor", &options.border_color)?;
        color_opt(&mut config.cursor_color, "cursorColor", &options.cursor_color)?;
        color_opt(&mut config.selection_color, "selectionColor", &options.selection_color)?;

        if let Some(alpha) = options.fill_alpha {
            let alpha = non_negative("fillAlpha", alpha)?;
            config.background = with_alpha(config.background, alpha);
        }

        config.zoom = options.zoom.unwrap_or(false) && !device.desktop;
        config.focus_out_on_enter = options.focus_out_on_enter.unwrap_or(false);
        config.multiline = options.word_wrap.unwrap_or(false);

        Ok(config)
    }

    /// Height of the content area: never shorter than one line of the font.
    pub fn content_height(&self) -> f32 {
        self.height.max(self.font.size_px)
    }

    /// Configuration handed to the edit surface at construction.
    pub fn surface_config(&self) -> SurfaceConfig {
        SurfaceConfig {
            kind: self.kind,
            multiline: self.multiline,
            max_length: self.max_length,
            min: self.bounds.min,
            max: self.bounds.max,
            font_px: self.font.size_px,
            width: self.width,
            height: self.content_height(),
        }
    }
}

fn non_negative(key: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { key });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { key, value });
    }
    Ok(value)
}

fn finite64(key: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { key })
    }
}

fn color_opt(
    slot: &mut Rgba,
    key: &'static str,
    value: &Option<String>,
) -> Result<(), ConfigError> {
    if let Some(v) = value {
        *slot = parse_color(v).ok_or_else(|| ConfigError::InvalidColor {
            key,
            value: v.clone(),
        })?;
    }
    Ok(())
}
