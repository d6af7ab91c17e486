//! Viewport zoom onto a focused field.

use layout::{Point, Rect};

use crate::host::WorldTransform;

/// Extra room kept around the field, as a multiple of its width.
const ZOOM_MARGIN: f32 = 1.5;

/// World transform that zooms onto `bounds` (world coordinates).
///
/// In portrait the field plus margin spans the game width; in landscape half
/// of it. Returns `None` for degenerate inputs, leaving the world untouched.
pub(crate) fn zoomed_transform(
    before: WorldTransform,
    bounds: Rect,
    padding: f32,
    viewport: (f32, f32),
    game_width: f32,
) -> Option<WorldTransform> {
    let span = bounds.width * ZOOM_MARGIN;
    let landscape = viewport.0 > viewport.1;
    let target = if landscape { game_width / 2.0 } else { game_width };
    let factor = target / span;
    if !factor.is_finite() || factor <= 0.0 {
        return None;
    }

    let offset_x = ((game_width - span) / 2.0) / factor;
    Some(WorldTransform {
        scale: Point::new(before.scale.x * factor, before.scale.y * factor),
        pivot: Point::new(bounds.x - offset_x, bounds.y - padding * 2.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_zoom_uses_full_game_width() {
        let t = zoomed_transform(
            WorldTransform::default(),
            Rect::new(100.0, 200.0, 100.0, 20.0),
            5.0,
            (400.0, 800.0),
            600.0,
        )
        .unwrap();
        assert_eq!(t.scale, Point::new(4.0, 4.0));
        assert_eq!(t.pivot, Point::new(100.0 - 56.25, 190.0));
    }

    #[test]
    fn landscape_zoom_is_half() {
        let t = zoomed_transform(
            WorldTransform::default(),
            Rect::new(0.0, 0.0, 100.0, 20.0),
            0.0,
            (800.0, 400.0),
            600.0,
        )
        .unwrap();
        assert_eq!(t.scale, Point::new(2.0, 2.0));
    }

    #[test]
    fn degenerate_bounds_do_not_zoom() {
        let t = zoomed_transform(
            WorldTransform::default(),
            Rect::new(0.0, 0.0, 0.0, 20.0),
            0.0,
            (400.0, 800.0),
            600.0,
        );
        assert!(t.is_none());
    }
}
