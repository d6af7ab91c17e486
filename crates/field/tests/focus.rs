mod common;

use common::*;
use field::{DeviceProfile, FieldConfig, FocusState, SessionEvent};
use input_core::{EditSurface, Key};

fn config_250() -> FieldConfig {
    FieldConfig {
        width: 250.0,
        placeholder: Some("Name".into()),
        ..FieldConfig::default()
    }
}

#[test]
fn pointer_inside_focuses_with_caret_at_zero() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::desktop());
    ticks(&mut f, &mut stage, 1);
    assert!(f.view().placeholder_visible());

    f.on_pointer_down(inside(3.0, 3.0));
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::FocusPending);
    assert!(!f.surface().listening());

    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::Focused);
    assert!(!f.view().placeholder_visible());
    assert!(f.surface().listening());
    assert!(f.surface().is_focused());
    assert_eq!(f.caret_offset(), Some(0));
    assert!(f.view().caret.visible);
}

#[test]
fn non_desktop_focuses_in_the_same_tick() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::mobile());
    f.on_pointer_down(inside(3.0, 3.0));
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::Focused);
}

#[test]
fn pointer_inside_while_focused_moves_caret() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::desktop());
    f.set_value("hello");
    ticks(&mut f, &mut stage, 1);
    focus_at(&mut f, &mut stage, 45.0);
    assert_eq!(f.caret_offset(), Some(4));

    // 22px is inside the third character: the caret goes before it.
    f.on_pointer_down(inside(22.0, 2.0));
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.caret_offset(), Some(2));
    assert_eq!(f.view().caret.x, 20.0);
}

#[test]
fn pointer_outside_blurs_and_defers_surface_blur_on_desktop() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::desktop());
    focus_at(&mut f, &mut stage, 1.0);

    f.on_pointer_down(outside());
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::Blurred);
    assert!(!f.view().caret.visible);
    assert!(!f.surface().listening());
    assert!(f.view().placeholder_visible());
    // Native blur lands one tick later.
    assert!(f.surface().is_focused());

    ticks(&mut f, &mut stage, 1);
    assert!(!f.surface().is_focused());
    assert_eq!(f.pending_transitions(), 0);
}

#[test]
fn pointer_outside_while_blurred_is_ignored() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::desktop());
    f.on_pointer_down(outside());
    ticks(&mut f, &mut stage, 2);
    assert_eq!(f.focus_state(), FocusState::Blurred);
    assert_eq!(f.pending_transitions(), 0);
}

#[test]
fn click_in_then_out_within_one_tick_stays_ordered() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::desktop());
    f.on_pointer_down(inside(1.0, 1.0));
    f.on_pointer_down(outside());

    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::FocusPending);
    assert_eq!(f.pending_transitions(), 2);

    // Focus attaches first, then the queued blur runs right behind it.
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::Blurred);
    assert!(!f.surface().listening());

    ticks(&mut f, &mut stage, 1);
    assert!(!f.surface().is_focused());
}

#[test]
fn enter_leaves_focus_only_when_configured() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::desktop());
    focus_at(&mut f, &mut stage, 1.0);
    f.surface_mut().press_key(Key::Enter, false);
    ticks(&mut f, &mut stage, 1);
    assert!(f.is_focused());

    let config = FieldConfig {
        focus_out_on_enter: true,
        ..config_250()
    };
    let mut f = field(config, DeviceProfile::desktop());
    focus_at(&mut f, &mut stage, 1.0);
    f.surface_mut().press_key(Key::Enter, false);
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::Blurred);
}

#[test]
fn external_blur_ends_focus_while_keyboard_is_open() {
    let mut stage = stage(10.0);
    let session = field::InputSession::new();
    let mut f = field_with(config_250(), DeviceProfile::mobile(), session.clone(), 1);
    f.on_pointer_down(inside(1.0, 1.0));
    ticks(&mut f, &mut stage, 1);
    assert!(session.keyboard_open());

    f.surface_mut().simulate_external_blur();
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::Blurred);
    assert!(!session.keyboard_open());
    let id = f.id();
    assert_eq!(
        session.take_events(),
        vec![
            SessionEvent::KeyboardOpened(id),
            SessionEvent::KeyboardClosed(id)
        ]
    );
}

#[test]
fn external_blur_on_desktop_is_ignored() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::desktop());
    focus_at(&mut f, &mut stage, 1.0);
    f.surface_mut().simulate_external_blur();
    ticks(&mut f, &mut stage, 1);
    assert!(f.is_focused());
}

#[test]
fn set_value_pushes_to_surface_and_ends_focus() {
    let mut stage = stage(10.0);
    let mut f = field(config_250(), DeviceProfile::desktop());
    focus_at(&mut f, &mut stage, 1.0);

    f.set_value("replaced");
    assert_eq!(f.value(), "replaced");
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.focus_state(), FocusState::Blurred);
    assert_eq!(f.view().text.text, "replaced");
    assert!(!f.view().placeholder_visible());

    f.reset_text();
    ticks(&mut f, &mut stage, 1);
    assert_eq!(f.value(), "");
    assert!(f.view().placeholder_visible());
}
