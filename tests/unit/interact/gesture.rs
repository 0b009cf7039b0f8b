use super::*;

fn base() -> FieldStyle {
    FieldStyle::with_scale(1.5)
}

#[test]
fn drag_moves_only_in_move_mode() {
    let mut g = GestureController::new(4.0);
    assert!(g.press_field(FieldId::GroomName, Point::new(100.0, 100.0), base()));
    assert!(g.captures_scroll());
    assert_eq!(g.pointer_move(Point::new(130.0, 90.0), false), None);

    let up = g.pointer_move(Point::new(130.0, 90.0), true).unwrap();
    assert_eq!(up.field, FieldId::GroomName);
    assert_eq!((up.style.x, up.style.y), (30.0, -10.0));
    assert_eq!(up.style.font_size, 1.5);

    let done = g.release().unwrap();
    assert!(done.changed);
    assert_eq!((done.style.x, done.style.y), (30.0, -10.0));
    assert!(g.is_idle());
    assert!(!g.captures_scroll());
}

#[test]
fn resize_averages_both_axes() {
    let mut g = GestureController::new(4.0);
    assert!(g.press_resize_handle(FieldId::Headline, Point::new(0.0, 0.0), base()));
    let up = g.pointer_move(Point::new(120.0, 80.0), false).unwrap();
    assert!((up.style.font_size - 2.5).abs() < 1e-9);
}

#[test]
fn resize_is_clamped_both_ways() {
    let mut g = GestureController::new(4.0);
    g.press_resize_handle(FieldId::Headline, Point::ORIGIN, base());
    let up = g.pointer_move(Point::new(-1000.0, -1000.0), false).unwrap();
    assert_eq!(up.style.font_size, 0.2);
    let up = g.pointer_move(Point::new(5000.0, 5000.0), false).unwrap();
    assert_eq!(up.style.font_size, 4.0);
}

#[test]
fn abort_hands_back_the_baseline() {
    let mut g = GestureController::new(4.0);
    g.press_field(FieldId::Message, Point::ORIGIN, base());
    g.pointer_move(Point::new(50.0, 50.0), true);
    let restore = g.abort().unwrap();
    assert_eq!(restore.style, base());
    assert!(g.is_idle());
    assert_eq!(g.abort(), None);
}

#[test]
fn cancel_keeps_the_partial_value() {
    let mut g = GestureController::new(4.0);
    g.press_field(FieldId::Message, Point::ORIGIN, base());
    g.pointer_move(Point::new(5.0, 0.0), true);
    let done = g.cancel().unwrap();
    assert_eq!(done.style.x, 5.0);
}

#[test]
fn release_without_movement_is_unchanged() {
    let mut g = GestureController::new(4.0);
    g.press_field(FieldId::Rsvp, Point::ORIGIN, base());
    let done = g.release().unwrap();
    assert!(!done.changed);
    assert_eq!(done.style, base());
    assert_eq!(g.release(), None);
}

#[test]
fn one_gesture_at_a_time() {
    let mut g = GestureController::new(4.0);
    assert!(g.press_field(FieldId::Rsvp, Point::ORIGIN, base()));
    assert!(!g.press_resize_handle(FieldId::Headline, Point::ORIGIN, base()));
    assert_eq!(g.active_field(), Some(FieldId::Rsvp));
}

#[test]
fn read_only_ignores_presses() {
    let mut g = GestureController::read_only();
    assert!(!g.press_field(FieldId::Rsvp, Point::ORIGIN, base()));
    assert!(!g.press_resize_handle(FieldId::Rsvp, Point::ORIGIN, base()));
    assert_eq!(g.pointer_move(Point::new(10.0, 10.0), true), None);
}
