//! Drag lifecycle tests: session management, listeners, callbacks, overlay.

use crate::helpers::{
    drag_by, instrument, move_to, press, release, CallbackLog, TestWidgetBuilder,
};
use resizable::{
    Cursor, DetachedSurface, Dimension, Direction, FlexDirection, NumberSize, Point, PointerEvent,
    Resizable, ResizableOptions, Size,
};

#[test]
fn test_basic_right_drag_commits_and_notifies() {
    let log = CallbackLog::new();
    let mut widget = instrument(
        TestWidgetBuilder::new()
            .with_element(100.0, 100.0, 200.0, 200.0)
            .with_options(|o| o.default_size = Some(Size::new(200, 200)))
            .build(),
        &log,
    );

    assert!(press(&mut widget, Direction::Right, 0.0, 0.0));
    assert!(widget.is_resizing());
    assert_eq!(widget.direction(), Some(Direction::Right));
    assert_eq!(widget.host().bind_count, 1);

    assert!(move_to(&mut widget, 50.0, 0.0));
    assert_eq!(widget.declared_size().width, Dimension::Px(250.0));
    assert_eq!(widget.declared_size().height, Dimension::Px(200.0));
    assert_eq!(log.last_move_delta(), Some(NumberSize::new(50.0, 0.0)));

    assert!(release(&mut widget, 50.0, 0.0));
    assert!(!widget.is_resizing());
    assert_eq!(widget.host().unbind_count, 1);
    assert_eq!(log.last_stop_delta(), Some(NumberSize::new(50.0, 0.0)));
    assert_eq!(log.starts.borrow().as_slice(), &[Direction::Right]);
}

#[test]
fn test_zero_delta_move_is_a_noop() {
    let log = CallbackLog::new();
    let mut widget = instrument(
        TestWidgetBuilder::new()
            .with_options(|o| o.default_size = Some(Size::new(200, 200)))
            .build(),
        &log,
    );

    press(&mut widget, Direction::Right, 0.0, 0.0);
    assert!(!move_to(&mut widget, 0.0, 0.0));
    assert_eq!(log.move_count(), 0);
    assert_eq!(widget.declared_size().width, Dimension::Px(200.0));
}

#[test]
fn test_veto_blocks_the_session_entirely() {
    let log = CallbackLog::new();
    let moves = log.moves.clone();
    let mut widget = TestWidgetBuilder::new()
        .build()
        .on_resize_start(|_event, _direction| false)
        .on_resize(move |_event, _direction, delta| moves.borrow_mut().push(delta));

    assert!(!press(&mut widget, Direction::Right, 0.0, 0.0));
    assert!(!widget.is_resizing());
    assert_eq!(widget.host().bind_count, 0);

    // Simulated pointer-moves after the veto must not resize or notify.
    assert!(!move_to(&mut widget, 100.0, 200.0));
    assert!(!move_to(&mut widget, 300.0, 200.0));
    assert_eq!(log.move_count(), 0);
}

#[test]
fn test_pointer_down_routes_through_hit_testing() {
    let mut widget = TestWidgetBuilder::new()
        .with_element(100.0, 100.0, 200.0, 200.0)
        .build();

    // Interior point: no handle, no session.
    assert!(!widget.pointer_down(&PointerEvent::mouse(200.0, 200.0)));
    assert!(!widget.is_resizing());

    // On the right edge band.
    assert!(widget.pointer_down(&PointerEvent::mouse(299.0, 200.0)));
    assert_eq!(widget.direction(), Some(Direction::Right));
}

#[test]
fn test_disabled_handles_do_not_start_sessions() {
    let mut widget = TestWidgetBuilder::new()
        .with_element(100.0, 100.0, 200.0, 200.0)
        .with_options(|o| o.enable = resizable::EnableHandles::none())
        .build();

    assert!(!widget.pointer_down(&PointerEvent::mouse(299.0, 200.0)));
    assert!(widget.handle_layout().is_empty());
}

#[test]
fn test_controlled_size_snaps_back_on_stop() {
    let mut widget = TestWidgetBuilder::new()
        .with_element(100.0, 100.0, 300.0, 300.0)
        .with_options(|o| o.size = Some(Size::new(300, 300)))
        .build();

    press(&mut widget, Direction::Right, 0.0, 0.0);
    move_to(&mut widget, 50.0, 0.0);

    // Mid-drag the live state wins so the box tracks the pointer.
    assert_eq!(widget.size_style().width, Dimension::Px(350.0));

    release(&mut widget, 50.0, 0.0);

    // The drag result was provisional: the controlled size reasserts.
    assert_eq!(widget.declared_size(), Size::new(300, 300));
    assert_eq!(widget.size_style().width, Dimension::Px(300.0));
}

#[test]
fn test_controlled_size_resyncs_state_at_start() {
    let mut widget = TestWidgetBuilder::new()
        .with_element(100.0, 100.0, 300.0, 300.0)
        .with_options(|o| o.size = Some(Size::new(300, 300)))
        .build();

    // State drifted away from the controlled value while idle.
    widget.update_size(Size::new(100, 100));
    press(&mut widget, Direction::Right, 0.0, 0.0);
    assert_eq!(widget.declared_size(), Size::new(300, 300));
    release(&mut widget, 0.0, 0.0);
}

#[test]
fn test_overlapping_down_replaces_the_session() {
    let mut widget = TestWidgetBuilder::new().build();

    press(&mut widget, Direction::Right, 0.0, 0.0);
    press(&mut widget, Direction::Left, 10.0, 10.0);

    assert_eq!(widget.direction(), Some(Direction::Left));
    // The first session released its listeners before the second bound.
    assert_eq!(widget.host().bind_count, 2);
    assert_eq!(widget.host().unbind_count, 1);

    release(&mut widget, 10.0, 10.0);
    assert_eq!(widget.host().unbind_count, 2);
}

#[test]
fn test_pointer_leave_is_a_stop_safety_net() {
    let log = CallbackLog::new();
    let mut widget = instrument(TestWidgetBuilder::new().build(), &log);

    press(&mut widget, Direction::Bottom, 0.0, 0.0);
    assert!(widget.handle_pointer_leave(&PointerEvent::mouse(0.0, 500.0)));
    assert!(!widget.is_resizing());
    assert_eq!(widget.host().unbind_count, 1);
    assert_eq!(log.stops.borrow().len(), 1);
}

#[test]
fn test_stale_events_after_release_are_ignored() {
    let log = CallbackLog::new();
    let mut widget = instrument(
        TestWidgetBuilder::new()
            .with_options(|o| o.default_size = Some(Size::new(200, 200)))
            .build(),
        &log,
    );

    press(&mut widget, Direction::Right, 0.0, 0.0);
    move_to(&mut widget, 50.0, 0.0);
    release(&mut widget, 50.0, 0.0);

    // A listener that was released must never fire against the torn-down
    // session: moves and ups while idle are no-ops.
    assert!(!move_to(&mut widget, 120.0, 0.0));
    assert!(!release(&mut widget, 120.0, 0.0));
    assert_eq!(log.move_count(), 1);
    assert_eq!(log.stops.borrow().len(), 1);
    assert_eq!(widget.host().unbind_count, 1);
}

#[test]
fn test_touch_moves_suppress_native_gestures_only_while_resizing() {
    let mut widget = TestWidgetBuilder::new().build();

    // Idle: a touch move passes through untouched.
    let idle_move = PointerEvent::touch(50.0, 0.0);
    widget.handle_pointer_move(&idle_move);
    assert!(!idle_move.default_prevented());

    press(&mut widget, Direction::Right, 0.0, 0.0);

    let resizing_move = PointerEvent::touch(50.0, 0.0);
    widget.handle_pointer_move(&resizing_move);
    assert!(resizing_move.default_prevented());

    // A non-cancelable touch move cannot be suppressed.
    let passive_move = PointerEvent::touch(60.0, 0.0).with_cancelable(false);
    widget.handle_pointer_move(&passive_move);
    assert!(!passive_move.default_prevented());
}

#[test]
fn test_overlay_captures_the_handle_cursor() {
    let mut widget = TestWidgetBuilder::new().build();

    press(&mut widget, Direction::Right, 0.0, 0.0);
    assert!(widget.overlay().active);
    assert_eq!(widget.overlay().cursor, Cursor::ColResize);

    release(&mut widget, 0.0, 0.0);
    assert!(!widget.overlay().active);
    assert_eq!(widget.overlay().cursor, Cursor::Auto);
}

#[test]
fn test_flex_row_mirrors_width_into_basis() {
    let mut widget = TestWidgetBuilder::new()
        .with_flex(FlexDirection::Row, "200px")
        .with_options(|o| o.default_size = Some(Size::new(200, 200)))
        .build();

    press(&mut widget, Direction::Right, 0.0, 0.0);
    assert_eq!(widget.flex_basis(), Some(Dimension::Px(200.0)));

    move_to(&mut widget, 50.0, 0.0);
    assert_eq!(widget.flex_basis(), Some(Dimension::Px(250.0)));
    assert_eq!(widget.size_style().flex_basis, Some(Dimension::Px(250.0)));
}

#[test]
fn test_flex_column_mirrors_height_into_basis() {
    let mut widget = TestWidgetBuilder::new()
        .with_flex(FlexDirection::Column, "200px")
        .with_options(|o| o.default_size = Some(Size::new(200, 200)))
        .build();

    press(&mut widget, Direction::Bottom, 0.0, 0.0);
    move_to(&mut widget, 0.0, 30.0);
    assert_eq!(widget.flex_basis(), Some(Dimension::Px(230.0)));
}

#[test]
fn test_update_size_replaces_declared_size() {
    let mut widget = TestWidgetBuilder::new().build();
    widget.update_size(Size::new(300, 100));
    assert_eq!(widget.declared_size(), Size::new(300, 100));
}

#[test]
fn test_detached_surface_degrades_without_crashing() {
    // No windowing environment: measurements are zero-sized, listener
    // management is a no-op, and the engine still runs the full lifecycle.
    let mut widget = Resizable::new(DetachedSurface, ResizableOptions::default());

    assert!(widget.handle_pointer_down(Direction::Right, &PointerEvent::mouse(0.0, 0.0)));
    assert!(widget.handle_pointer_move(&PointerEvent::mouse(50.0, 0.0)));
    // Zero-size original, 50px of drag, 10px default minimum on the idle axis.
    assert_eq!(widget.declared_size().width, Dimension::Px(50.0));
    assert!(widget.handle_pointer_up(&PointerEvent::mouse(50.0, 0.0)));
    assert!(!widget.is_resizing());
}

#[test]
fn test_handle_layout_reports_active_zones() {
    let widget = TestWidgetBuilder::new()
        .with_element(100.0, 100.0, 200.0, 200.0)
        .with_options(|o| o.enable = resizable::EnableHandles::only(Direction::BottomRight))
        .build();

    let layout = widget.handle_layout();
    assert_eq!(layout.len(), 1);
    assert_eq!(layout[0].direction, Direction::BottomRight);
    assert_eq!(layout[0].cursor, Cursor::SeResize);
    assert!(layout[0].zone.contains(Point::new(300.0, 300.0)));
}

#[test]
fn test_drag_by_helper_round_trip() {
    let mut widget = TestWidgetBuilder::new()
        .with_options(|o| o.default_size = Some(Size::new(200, 200)))
        .build();
    drag_by(&mut widget, Direction::BottomRight, 40.0, 25.0);
    assert_eq!(widget.declared_size(), Size::new(240, 225));
}
