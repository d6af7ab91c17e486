mod common;

use common::*;
use field::{
    DeviceProfile, FieldConfig, FieldHandle, FieldOptions, InputFieldPlugin, MemorySurfaceFactory,
    SceneHost, SessionEvent, WorldTransform,
};
use layout::Point;

fn options(width: f32) -> FieldOptions {
    FieldOptions {
        width: Some(width),
        ..FieldOptions::default()
    }
}

#[test]
fn fields_get_sequential_element_ids() {
    let mut plugin = InputFieldPlugin::new(MemorySurfaceFactory, DeviceProfile::desktop());
    let a = plugin.add_input_field(0.0, 0.0, &options(100.0)).unwrap();
    let b = plugin.add_input_field(0.0, 100.0, &options(100.0)).unwrap();

    assert_eq!(a.id().to_string(), "scene-input-1");
    assert_eq!(b.id().to_string(), "scene-input-2");
    assert_eq!(plugin.len(), 2);
    assert_eq!(plugin.field(b).unwrap().position(), Point::new(0.0, 100.0));
}

#[test]
fn add_from_options_uses_option_position() {
    let mut plugin = InputFieldPlugin::new(MemorySurfaceFactory, DeviceProfile::desktop());
    let opts = FieldOptions {
        x: Some(30.0),
        y: Some(60.0),
        ..FieldOptions::default()
    };
    let handle = plugin.add_from_options(&opts).unwrap();
    assert_eq!(plugin.field(handle).unwrap().position(), Point::new(30.0, 60.0));
}

#[test]
fn invalid_options_create_nothing() {
    let mut plugin = InputFieldPlugin::new(MemorySurfaceFactory, DeviceProfile::desktop());
    assert!(plugin.add_input_field(0.0, 0.0, &options(-5.0)).is_err());
    assert!(plugin.is_empty());
}

#[test]
fn clicking_another_field_moves_focus() {
    let mut stage = stage(10.0);
    let mut plugin = InputFieldPlugin::new(MemorySurfaceFactory, DeviceProfile::desktop());
    let a = plugin.add_input_field(0.0, 0.0, &options(100.0)).unwrap();
    let b = plugin.add_input_field(0.0, 100.0, &options(100.0)).unwrap();

    plugin.pointer_down(Point::new(10.0, 5.0));
    plugin.tick(&mut stage, FRAME);
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.focused(), Some(a));

    plugin.pointer_down(Point::new(10.0, 105.0));
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.focused(), None);
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.focused(), Some(b));
    assert_eq!(plugin.fields().filter(|f| f.is_focused()).count(), 1);
}

#[test]
fn mobile_focus_reports_keyboard_events() {
    let mut stage = stage(10.0);
    let mut plugin = InputFieldPlugin::new(MemorySurfaceFactory, DeviceProfile::mobile());
    let a = plugin.add_input_field(0.0, 0.0, &options(100.0)).unwrap();

    plugin.pointer_down(Point::new(10.0, 5.0));
    plugin.tick(&mut stage, FRAME);
    plugin.pointer_down(Point::new(300.0, 500.0));
    plugin.tick(&mut stage, FRAME);

    assert_eq!(
        plugin.take_session_events(),
        vec![
            SessionEvent::KeyboardOpened(a.id()),
            SessionEvent::KeyboardClosed(a.id()),
        ]
    );
    assert!(plugin.take_session_events().is_empty());
}

fn zoomed_pair() -> (InputFieldPlugin<MemorySurfaceFactory>, FieldHandle, FieldHandle) {
    let opts = FieldOptions {
        zoom: Some(true),
        ..options(100.0)
    };
    let mut plugin = InputFieldPlugin::new(MemorySurfaceFactory, DeviceProfile::mobile());
    let a = plugin.add_input_field(0.0, 0.0, &opts).unwrap();
    let b = plugin.add_input_field(0.0, 300.0, &opts).unwrap();
    (plugin, a, b)
}

#[test]
fn zoomed_focus_moves_to_an_earlier_field() {
    let mut stage = stage(10.0);
    let (mut plugin, a, b) = zoomed_pair();

    plugin.pointer_down(Point::new(5.0, 305.0));
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.focused(), Some(b));
    assert_eq!(plugin.session().keyboard_owner(), Some(b.id()));
    assert_eq!(plugin.session().zoom_owner(), Some(b.id()));

    plugin.pointer_down(stage.world().to_screen(Point::new(5.0, 5.0)));
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.focused(), Some(a));
    assert!(!plugin.field(b).unwrap().is_focused());
    assert!(plugin.session().keyboard_open());
    assert_eq!(plugin.session().keyboard_owner(), Some(a.id()));
    assert_eq!(stage.world(), WorldTransform::default());

    plugin.tick(&mut stage, FRAME);
    assert!(plugin.field(a).unwrap().is_zoomed());
    assert_eq!(plugin.session().zoom_owner(), Some(a.id()));

    // Dismissing the keyboard still ends the new focus.
    plugin.field_mut(a).unwrap().surface_mut().simulate_external_blur();
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.focused(), None);
    assert!(!plugin.session().keyboard_open());
    assert_eq!(plugin.session().zoom_owner(), None);
    assert_eq!(stage.world(), WorldTransform::default());
    assert_eq!(
        plugin.take_session_events(),
        vec![
            SessionEvent::KeyboardOpened(b.id()),
            SessionEvent::KeyboardOpened(a.id()),
            SessionEvent::KeyboardClosed(a.id()),
        ]
    );
}

#[test]
fn zoomed_focus_moves_to_a_later_field() {
    let mut stage = stage(10.0);
    let (mut plugin, a, b) = zoomed_pair();

    plugin.pointer_down(Point::new(5.0, 5.0));
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.session().zoom_owner(), Some(a.id()));

    plugin.pointer_down(stage.world().to_screen(Point::new(5.0, 305.0)));
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.focused(), Some(b));
    assert!(plugin.field(b).unwrap().is_zoomed());
    assert!(!plugin.field(a).unwrap().is_zoomed());
    assert_eq!(plugin.session().keyboard_owner(), Some(b.id()));
    assert_eq!(plugin.session().zoom_owner(), Some(b.id()));

    plugin.pointer_down(Point::new(5.0, 790.0));
    plugin.tick(&mut stage, FRAME);
    assert_eq!(plugin.focused(), None);
    assert_eq!(stage.world(), WorldTransform::default());
    assert!(!plugin.session().keyboard_open());
}

#[test]
fn destroy_removes_the_field() {
    let mut stage = stage(10.0);
    let mut plugin = InputFieldPlugin::new(MemorySurfaceFactory, DeviceProfile::desktop());
    let a = plugin.add_input_field(0.0, 0.0, &options(100.0)).unwrap();

    assert!(plugin.destroy(a, &mut stage));
    assert!(plugin.field(a).is_none());
    assert!(plugin.is_empty());
    assert!(!plugin.destroy(a, &mut stage));
}

#[test]
fn destroyed_field_ignores_further_calls() {
    let mut stage = stage(10.0);
    let mut f = field(FieldConfig::default(), DeviceProfile::desktop());
    f.destroy(&mut stage);

    f.on_pointer_down(inside(1.0, 1.0));
    f.set_value("late");
    ticks(&mut f, &mut stage, 3);
    assert!(!f.is_focused());
    assert_eq!(f.value(), "");
    assert_eq!(f.pending_transitions(), 0);
}
