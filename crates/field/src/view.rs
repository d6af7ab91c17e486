//! Drawable composition of a field.
//!
//! A [`FieldView`] is plain data: every node position is local to the field's
//! top-left corner. Renderers draw it as-is; the controller is the only writer.

use layout::{Point, Rect};

use crate::color::Rgba;
use crate::config::{Align, FieldConfig};

/// The caret glyph.
pub const CARET_GLYPH: &str = "|";

/// Filled (optionally rounded) rectangle with a border.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxShape {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Rgba,
    pub border_width: f32,
    pub border_color: Rgba,
}

/// Clip region for text, caret and selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskShape {
    pub rect: Rect,
}

/// A text node. `anchor_x` is the fraction of the text width that sits at `x`
/// (0 = left edge at `x`, 0.5 = centered on `x`, 1 = right edge at `x`).
/// Multi-line text is separated by `\n` and advances by `line_height`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub anchor_x: f32,
    pub line_height: f32,
    pub color: Rgba,
    pub visible: bool,
}

impl TextNode {
    fn new(text: &str, x: f32, y: f32, anchor_x: f32, color: Rgba) -> Self {
        Self {
            text: text.to_string(),
            x,
            y,
            anchor_x,
            line_height: 0.0,
            color,
            visible: true,
        }
    }

    /// Left edge of the text given its measured width.
    pub fn left(&self, text_width: f32) -> f32 {
        self.x - self.anchor_x * text_width
    }
}

/// Selection highlight, cleared and refilled on every reconciliation.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionShape {
    pub rects: Vec<Rect>,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldView {
    /// World position of the field's top-left corner.
    pub position: Point,
    pub background: BoxShape,
    pub mask: MaskShape,
    pub placeholder: Option<TextNode>,
    pub text: TextNode,
    pub caret: TextNode,
    pub selection: SelectionShape,
}

impl FieldView {
    /// Build the static parts of the view from `config`.
    pub fn new(config: &FieldConfig, position: Point) -> Self {
        let p = config.padding;
        let content_h = config.content_height();
        let (anchor_x, x) = align_anchor(config.align, p, config.width);

        let placeholder = config
            .placeholder
            .as_deref()
            .map(|text| TextNode::new(text, x, p, anchor_x, config.placeholder_color));

        let mut caret = TextNode::new(CARET_GLYPH, p, p, 0.0, config.cursor_color);
        caret.visible = false;

        Self {
            position,
            background: BoxShape {
                rect: Rect::new(0.0, 0.0, config.width + 2.0 * p, content_h + 2.0 * p),
                radius: config.border_radius,
                fill: config.background,
                border_width: config.border_width,
                border_color: config.border_color,
            },
            mask: MaskShape {
                rect: Rect::new(p, p, config.width, content_h),
            },
            placeholder,
            text: TextNode::new("", x, p, anchor_x, config.fill),
            caret,
            selection: SelectionShape {
                rects: Vec::new(),
                color: config.selection_color,
            },
        }
    }

    /// Size of the hit region (the background box).
    pub fn box_size(&self) -> (f32, f32) {
        (self.background.rect.width, self.background.rect.height)
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder.as_ref().is_some_and(|p| p.visible)
    }

    pub(crate) fn set_placeholder_visible(&mut self, visible: bool) {
        if let Some(placeholder) = &mut self.placeholder {
            placeholder.visible = visible;
        }
    }
}

/// Anchor fraction and anchor x for an alignment inside `[padding, padding + width]`.
pub(crate) fn align_anchor(align: Align, padding: f32, width: f32) -> (f32, f32) {
    match align {
        Align::Left => (0.0, padding),
        Align::Center => (0.5, padding + width / 2.0),
        Align::Right => (1.0, padding + width),
    }
}
