mod common;

use common::*;
use field::{
    DeviceProfile, FieldConfig, FocusState, InputSession, KEYBOARD_POLL_INTERVAL, SessionEvent,
};
use input_core::EditSurface;

#[test]
fn chrome_keyboard_dismissal_blurs_the_field() {
    let mut stage = stage(10.0);
    let session = InputSession::new();
    let mut f = field_with(
        FieldConfig::default(),
        DeviceProfile::mobile_chrome(),
        session.clone(),
        1,
    );

    f.on_pointer_down(inside(1.0, 1.0));
    ticks(&mut f, &mut stage, 1);
    assert!(f.is_focused());
    assert!(f.keyboard_watch_active());
    assert!(session.keyboard_open());

    // Keyboard slides in.
    stage.set_viewport_size((400.0, 500.0));
    f.tick(&mut stage, KEYBOARD_POLL_INTERVAL);
    assert!(f.is_focused());

    // Back button: the viewport returns to full height without a blur event.
    stage.set_viewport_size((400.0, 800.0));
    f.tick(&mut stage, KEYBOARD_POLL_INTERVAL);
    assert_eq!(f.focus_state(), FocusState::Blurred);
    assert!(!f.keyboard_watch_active());
    assert!(!f.surface().is_focused());
    assert_eq!(
        session.take_events(),
        vec![
            SessionEvent::KeyboardOpened(f.id()),
            SessionEvent::KeyboardClosed(f.id()),
        ]
    );
}

#[test]
fn steady_viewport_keeps_focus() {
    let mut stage = stage(10.0);
    let mut f = field(FieldConfig::default(), DeviceProfile::mobile_chrome());
    f.on_pointer_down(inside(1.0, 1.0));
    ticks(&mut f, &mut stage, 1);

    for _ in 0..10 {
        f.tick(&mut stage, KEYBOARD_POLL_INTERVAL);
    }
    assert!(f.is_focused());
    assert!(f.keyboard_watch_active());
}

#[test]
fn other_mobile_browsers_do_not_poll() {
    let mut stage = stage(10.0);
    let mut f = field(FieldConfig::default(), DeviceProfile::mobile());
    f.on_pointer_down(inside(1.0, 1.0));
    ticks(&mut f, &mut stage, 1);
    assert!(f.is_focused());
    assert!(!f.keyboard_watch_active());
}

#[test]
fn leaving_focus_stops_the_watch() {
    let mut stage = stage(10.0);
    let mut f = field(FieldConfig::default(), DeviceProfile::mobile_chrome());
    f.on_pointer_down(inside(1.0, 1.0));
    ticks(&mut f, &mut stage, 1);
    f.on_pointer_down(outside());
    ticks(&mut f, &mut stage, 1);
    assert!(!f.keyboard_watch_active());
}
