//! What a field needs from the scene graph it lives in.

use layout::{Point, Rect, TextMeasurer};

/// Camera-like transform of the world: `screen = (world - pivot) * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldTransform {
    pub scale: Point,
    pub pivot: Point,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self {
            scale: Point::new(1.0, 1.0),
            pivot: Point::ZERO,
        }
    }
}

impl WorldTransform {
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.pivot.x) * self.scale.x,
            (p.y - self.pivot.y) * self.scale.y,
        )
    }

    /// Inverse of [`to_screen`](Self::to_screen). A zero scale axis maps to the pivot.
    pub fn to_world(&self, p: Point) -> Point {
        let inv = |v: f32, s: f32| if s != 0.0 { v / s } else { 0.0 };
        Point::new(
            inv(p.x, self.scale.x) + self.pivot.x,
            inv(p.y, self.scale.y) + self.pivot.y,
        )
    }
}

/// Host scene-graph services used by a field.
///
/// Pointer coordinates handed to fields are global (screen) coordinates.
/// Field positions are world coordinates.
pub trait SceneHost {
    /// Text measurement for the fonts fields render with.
    fn measurer(&self) -> &dyn TextMeasurer;

    /// Whether `global` lies over a node occupying `bounds` (screen space).
    fn pointer_over(&self, bounds: Rect, global: Point) -> bool;

    /// `global` relative to a node whose top-left is at world `origin`.
    fn to_local(&self, origin: Point, global: Point) -> Point;

    /// Screen-space bounds of a node at world `origin` with the given size.
    fn world_bounds(&self, origin: Point, size: (f32, f32)) -> Rect;

    fn world(&self) -> WorldTransform;

    fn set_world(&mut self, world: WorldTransform);

    /// Inner size of the window or viewport, in screen px.
    fn viewport_size(&self) -> (f32, f32);

    /// Logical width of the game canvas.
    fn game_width(&self) -> f32;
}

/// Reference [`SceneHost`]: a single world transform over a fixed canvas.
pub struct Stage {
    measurer: Box<dyn TextMeasurer>,
    world: WorldTransform,
    viewport: (f32, f32),
    game_width: f32,
}

impl Stage {
    pub fn new(measurer: impl TextMeasurer + 'static, game_width: f32, viewport: (f32, f32)) -> Self {
        Self {
            measurer: Box::new(measurer),
            world: WorldTransform::default(),
            viewport,
            game_width,
        }
    }

    /// Window resize, e.g. a soft keyboard appearing.
    pub fn set_viewport_size(&mut self, viewport: (f32, f32)) {
        self.viewport = viewport;
    }

    pub fn set_game_width(&mut self, game_width: f32) {
        self.game_width = game_width;
    }
}

impl SceneHost for Stage {
    fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    fn pointer_over(&self, bounds: Rect, global: Point) -> bool {
        bounds.contains(global)
    }

    fn to_local(&self, origin: Point, global: Point) -> Point {
        let world = self.world.to_world(global);
        Point::new(world.x - origin.x, world.y - origin.y)
    }

    fn world_bounds(&self, origin: Point, size: (f32, f32)) -> Rect {
        let top_left = self.world.to_screen(origin);
        Rect::new(
            top_left.x,
            top_left.y,
            size.0 * self.world.scale.x,
            size.1 * self.world.scale.y,
        )
    }

    fn world(&self) -> WorldTransform {
        self.world
    }

    fn set_world(&mut self, world: WorldTransform) {
        self.world = world;
    }

    fn viewport_size(&self) -> (f32, f32) {
        self.viewport
    }

    fn game_width(&self) -> f32 {
        self.game_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::FontSpec;

    struct NoText;

    impl TextMeasurer for NoText {
        fn measure(&self, _text: &str, _font: &FontSpec) -> f32 {
            0.0
        }

        fn line_height(&self, _font: &FontSpec) -> f32 {
            0.0
        }
    }

    #[test]
    fn screen_and_world_round_trip() {
        let t = WorldTransform {
            scale: Point::new(2.0, 2.0),
            pivot: Point::new(10.0, 5.0),
        };
        let p = Point::new(30.0, 25.0);
        assert_eq!(t.to_screen(p), Point::new(40.0, 40.0));
        assert_eq!(t.to_world(t.to_screen(p)), p);
    }

    #[test]
    fn stage_maps_pointer_into_node_space() {
        let mut stage = Stage::new(NoText, 800.0, (800.0, 600.0));
        stage.set_world(WorldTransform {
            scale: Point::new(2.0, 2.0),
            pivot: Point::new(100.0, 0.0),
        });
        let origin = Point::new(110.0, 20.0);
        let bounds = stage.world_bounds(origin, (50.0, 10.0));
        assert_eq!(bounds, Rect::new(20.0, 40.0, 100.0, 20.0));
        assert!(stage.pointer_over(bounds, Point::new(30.0, 45.0)));
        assert_eq!(
            stage.to_local(origin, Point::new(30.0, 45.0)),
            Point::new(5.0, 2.5)
        );
    }
}
