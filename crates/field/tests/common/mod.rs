#![allow(dead_code)]

use std::time::Duration;

use field::{DeviceProfile, FieldConfig, InputField, InputSession, Stage};
use input_core::{InputId, MemorySurface};
use layout::{FontSpec, Point, TextMeasurer};

pub const LINE_H: f32 = 16.0;
pub const FRAME: Duration = Duration::from_millis(16);

/// Field top-left in world coordinates.
pub const ORIGIN: Point = Point::new(100.0, 50.0);

/// Every character is `advance` px wide.
pub struct FixedMeasurer {
    pub advance: f32,
}

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, text: &str, _font: &FontSpec) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self, _font: &FontSpec) -> f32 {
        LINE_H
    }
}

/// Portrait stage, 800 wide.
pub fn stage(advance: f32) -> Stage {
    Stage::new(FixedMeasurer { advance }, 800.0, (400.0, 800.0))
}

pub fn field_with(
    config: FieldConfig,
    device: DeviceProfile,
    session: InputSession,
    raw_id: u64,
) -> InputField<MemorySurface> {
    field_at(config, device, session, raw_id, ORIGIN)
}

pub fn field_at(
    config: FieldConfig,
    device: DeviceProfile,
    session: InputSession,
    raw_id: u64,
    position: Point,
) -> InputField<MemorySurface> {
    let id = InputId::from_raw(raw_id);
    let surface = MemorySurface::new(id, "", config.surface_config());
    InputField::new(id, position, config, surface, session, device)
}

pub fn field(config: FieldConfig, device: DeviceProfile) -> InputField<MemorySurface> {
    field_with(config, device, InputSession::new(), 1)
}

/// A point inside the field at local `(dx, dy)`, assuming an identity world.
pub fn inside(dx: f32, dy: f32) -> Point {
    Point::new(ORIGIN.x + dx, ORIGIN.y + dy)
}

pub fn outside() -> Point {
    Point::new(5.0, 790.0)
}

pub fn ticks(field: &mut InputField<MemorySurface>, stage: &mut Stage, n: usize) {
    for _ in 0..n {
        field.tick(stage, FRAME);
    }
}

/// Click inside and tick until the focus attaches.
pub fn focus_at(field: &mut InputField<MemorySurface>, stage: &mut Stage, dx: f32) {
    field.on_pointer_down(inside(dx, 2.0));
    ticks(field, stage, 2);
    assert!(field.is_focused());
}
