//! Painting a [`FieldView`] with an egui [`Painter`].
//!
//! Field nodes live in field-local coordinates. They are mapped through the
//! field position, the world transform and finally the canvas origin, so a
//! zoomed world paints a zoomed field.

use egui::{Align2, Color32, CornerRadius, Painter, Pos2, Rect, Stroke, StrokeKind};
use field::{FieldView, Rgba, TextNode, WorldTransform};
use layout::{FontSpec, Point, TextMeasurer};

use crate::text_measurer::font_id;

#[derive(Clone, Copy)]
pub struct PaintArgs<'a> {
    pub painter: &'a Painter,
    /// Screen position of the canvas' world origin.
    pub origin: Pos2,
    pub measurer: &'a dyn TextMeasurer,
    pub world: WorldTransform,
}

impl PaintArgs<'_> {
    fn to_screen(&self, view: &FieldView, local: Point) -> Pos2 {
        let world = Point::new(view.position.x + local.x, view.position.y + local.y);
        let p = self.world.to_screen(world);
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }

    fn rect_to_screen(&self, view: &FieldView, r: layout::Rect) -> Rect {
        Rect::from_min_max(
            self.to_screen(view, Point::new(r.x, r.y)),
            self.to_screen(view, Point::new(r.right(), r.bottom())),
        )
    }
}

pub(crate) fn color32((r, g, b, a): Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Draw one field: box, then the masked selection, value, placeholder and caret.
pub fn paint_field(args: PaintArgs<'_>, view: &FieldView, font: &FontSpec) {
    let painter = args.painter;
    let scale = args.world.scale.x;

    let bg = &view.background;
    let box_rect = args.rect_to_screen(view, bg.rect);
    let radius = CornerRadius::from(bg.radius * scale);
    painter.rect_filled(box_rect, radius, color32(bg.fill));
    if bg.border_width > 0.0 {
        painter.rect_stroke(
            box_rect,
            radius,
            Stroke::new(bg.border_width * scale, color32(bg.border_color)),
            StrokeKind::Inside,
        );
    }

    let clip = painter.with_clip_rect(args.rect_to_screen(view, view.mask.rect));

    for r in &view.selection.rects {
        clip.rect_filled(
            args.rect_to_screen(view, *r),
            0.0,
            color32(view.selection.color),
        );
    }

    paint_text_node(&clip, args, view, &view.text, font);
    if let Some(placeholder) = &view.placeholder {
        paint_text_node(&clip, args, view, placeholder, font);
    }

    let caret = &view.caret;
    if caret.visible {
        clip.text(
            args.to_screen(view, Point::new(caret.x, caret.y)),
            Align2::CENTER_TOP,
            &caret.text,
            font_id(font, scale),
            color32(caret.color),
        );
    }
}

/// Paint a possibly multi-line node. Lines are left-aligned inside a block
/// whose anchor sits at `node.x`, matching the controller's text origin.
fn paint_text_node(
    painter: &Painter,
    args: PaintArgs<'_>,
    view: &FieldView,
    node: &TextNode,
    font: &FontSpec,
) {
    if !node.visible || node.text.is_empty() {
        return;
    }

    let block_w = node
        .text
        .split('\n')
        .map(|line| args.measurer.measure(line, font))
        .fold(0.0_f32, f32::max);
    let left = node.left(block_w);
    let font_id = font_id(font, args.world.scale.x);
    let color = color32(node.color);

    for (i, line) in node.text.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }
        let y = node.y + i as f32 * node.line_height;
        painter.text(
            args.to_screen(view, Point::new(left, y)),
            Align2::LEFT_TOP,
            line,
            font_id.clone(),
            color,
        );
    }
}
