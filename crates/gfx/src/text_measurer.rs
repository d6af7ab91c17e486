use std::cell::RefCell;
use std::collections::HashMap;

use egui::{Color32, Context, FontFamily, FontId};
use layout::{FontSpec, TextMeasurer};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// `egui`-backed adapter for measuring field text.
pub struct EguiTextMeasurer {
    ctx: Context,
    space_width_cache: RefCell<HashMap<(u32, bool), f32>>,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            space_width_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    fn width_of(&self, text: &str, font_id: &FontId) -> f32 {
        // `Color32` does not affect text metrics.
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font_id.clone(), Color32::BLACK)
                .rect
                .width()
        })
    }

    fn space_width(&self, font: &FontSpec, font_id: &FontId) -> f32 {
        let key = (
            font.size_px.round().max(0.0) as u32,
            font_id.family == FontFamily::Monospace,
        );
        if let Some(w) = self.space_width_cache.borrow().get(&key).copied() {
            return w;
        }

        // NBSP is the most stable in egui; fall back to the difference method.
        let nbsp = "\u{00A0}";
        let w_nbsp = self.width_of(nbsp, font_id);
        let w = if w_nbsp.is_finite() && w_nbsp > 0.0 {
            w_nbsp
        } else {
            let w = (self.width_of(&format!("x{nbsp}x"), font_id) - self.width_of("xx", font_id))
                .max(0.0);
            if w.is_finite() && w > 0.0 {
                w
            } else {
                (font.size_px * 0.33).max(1.0)
            }
        };

        self.space_width_cache.borrow_mut().insert(key, w);
        w
    }
}

/// egui font for a field font. Monospace families map to egui's monospace
/// font, everything else to the proportional one.
pub fn font_id(font: &FontSpec, scale: f32) -> FontId {
    let family = font.family.to_ascii_lowercase();
    let size = font.size_px * scale;
    if family.contains("mono") || family.contains("courier") {
        FontId::monospace(size)
    } else {
        FontId::proportional(size)
    }
}

impl TextMeasurer for EguiTextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let font_id = font_id(font, 1.0);
        if text == " " {
            return self.space_width(font, &font_id);
        }
        self.width_of(text, &font_id)
    }

    fn line_height(&self, font: &FontSpec) -> f32 {
        font.size_px * LINE_HEIGHT_FACTOR
    }
}
