//! Tests for mouse handling

use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::test_utils::test_helpers::test_app;
use crate::toggle::WorkerHandle;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_click_on_link_toggles() {
    let mut app = test_app(false);
    let (worker, mut request_rx) = WorkerHandle::detached();
    app.worker = Some(worker);
    app.link_area = Some(Rect::new(10, 5, 20, 1));

    app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 5));

    assert!(request_rx.try_recv().is_ok());
    assert!(app.store.state().in_progress);
}

#[test]
fn test_click_outside_link_does_nothing() {
    let mut app = test_app(false);
    let (worker, mut request_rx) = WorkerHandle::detached();
    app.worker = Some(worker);
    app.link_area = Some(Rect::new(10, 5, 20, 1));

    app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 5));
    app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 6));

    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_click_before_first_render_does_nothing() {
    let mut app = test_app(false);
    let (worker, mut request_rx) = WorkerHandle::detached();
    app.worker = Some(worker);

    app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));

    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_right_click_does_not_toggle() {
    let mut app = test_app(false);
    let (worker, mut request_rx) = WorkerHandle::detached();
    app.worker = Some(worker);
    app.link_area = Some(Rect::new(10, 5, 20, 1));

    app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 12, 5));

    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_moving_over_link_leaves_tooltip_alone() {
    let mut app = test_app(false);
    app.link_area = Some(Rect::new(10, 5, 20, 1));
    app.take_dirty();

    app.handle_mouse_event(mouse(MouseEventKind::Moved, 15, 5));

    assert!(!app.form.tooltip.is_visible());
    assert!(!app.take_dirty());
}
