//! Drag workflows: pointer-down on a body, move, release.

use maskpair::{CursorKind, MaskKind, Rect, Slot};

use crate::helpers::{TestEditorBuilder, drag_gesture, pt, surface, surface_300};

#[test]
fn test_drag_moves_by_the_pixel_delta_in_normalized_space() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::TopBand).build();

    // Drag the top band by (+50px, +20px) on a 300x300 surface.
    assert!(editor.handle_mouse_down(Slot::First, pt(150.0, 50.0), surface_300()));
    let cursor = editor.handle_mouse_move(Slot::First, pt(200.0, 70.0), surface_300());
    editor.handle_mouse_up(Slot::First);

    assert_eq!(cursor, CursorKind::Move);
    let rect = editor.geometry_of(MaskKind::TopBand);
    assert!((rect.x - 0.1667).abs() < 1e-3, "x = {}", rect.x);
    assert!((rect.y - 0.0667).abs() < 1e-3, "y = {}", rect.y);
    assert!((rect.width - 1.0).abs() < 1e-6);
    assert!((rect.height - 0.35).abs() < 1e-6);
}

#[test]
fn test_drag_synchronizes_the_paired_slot_exactly() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::TopBand).build();

    let cursor = drag_gesture(
        &mut editor,
        Slot::First,
        surface_300(),
        pt(150.0, 50.0),
        pt(200.0, 70.0),
    );
    assert_eq!(cursor, CursorKind::Move);

    let first = editor.registry(Slot::First).geometry_of(MaskKind::TopBand);
    let second = editor.registry(Slot::Second).geometry_of(MaskKind::TopBand);
    assert_eq!(first, second);
}

#[test]
fn test_drag_on_the_second_slot_uses_its_own_surface_size() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::Center).build();
    let size = surface(600.0, 150.0);

    // Center on 600x150 spans (180, 45) to (420, 105); grab its middle.
    assert!(editor.handle_mouse_down(Slot::Second, pt(300.0, 75.0), size));
    editor.handle_mouse_move(Slot::Second, pt(360.0, 90.0), size);
    editor.handle_mouse_up(Slot::Second);

    let rect = editor.geometry_of(MaskKind::Center);
    // +60px of 600 is +0.1 normalized; +15px of 150 is +0.1 normalized.
    assert!(rect.approx_eq(&Rect::new(0.4, 0.4, 0.4, 0.4), 1e-4), "{:?}", rect);
}

#[test]
fn test_drag_never_changes_size() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::Center).build();

    editor.handle_mouse_down(Slot::First, pt(150.0, 150.0), surface_300());
    for step in 1..20 {
        editor.handle_mouse_move(
            Slot::First,
            pt(150.0 + step as f32 * 7.0, 150.0 - step as f32 * 3.0),
            surface_300(),
        );
        let rect = editor.geometry_of(MaskKind::Center);
        assert!((rect.width - 0.4).abs() < 1e-6);
        assert!((rect.height - 0.4).abs() < 1e-6);
    }
    editor.handle_mouse_up(Slot::First);
}

#[test]
fn test_drag_position_clamps_into_unit_range() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::Center).build();

    editor.handle_mouse_down(Slot::First, pt(150.0, 150.0), surface_300());
    editor.handle_mouse_move(Slot::First, pt(-2000.0, -2000.0), surface_300());

    let rect = editor.geometry_of(MaskKind::Center);
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.y, 0.0);

    editor.handle_mouse_move(Slot::First, pt(5000.0, 5000.0), surface_300());
    let rect = editor.geometry_of(MaskKind::Center);
    assert!(rect.x <= 1.0 && rect.y <= 1.0);
    editor.handle_mouse_up(Slot::First);
}

#[test]
fn test_pointer_down_on_empty_space_is_not_consumed() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::TopBand).build();

    assert!(!editor.handle_mouse_down(Slot::First, pt(150.0, 250.0), surface_300()));
    assert!(editor.interaction().is_idle());
    assert!(editor.drain_redraws().is_empty());
}

#[test]
fn test_pointer_down_on_invalid_surface_is_ignored() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::TopBand).build();
    assert!(!editor.handle_mouse_down(Slot::First, pt(10.0, 10.0), surface(0.0, 0.0)));
    assert!(editor.interaction().is_idle());
}

#[test]
fn test_pointer_leave_ends_the_gesture_like_pointer_up() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::TopBand).build();

    editor.handle_mouse_down(Slot::First, pt(150.0, 50.0), surface_300());
    editor.handle_mouse_move(Slot::First, pt(180.0, 80.0), surface_300());
    let cursor = editor.handle_mouse_leave(Slot::First);

    assert_eq!(cursor, CursorKind::Move);
    assert!(editor.interaction().is_idle());

    // The geometry reached before the leave stays committed.
    let rect = editor.geometry_of(MaskKind::TopBand);
    assert!((rect.x - 0.1).abs() < 1e-4);
    assert!((rect.y - 0.1).abs() < 1e-4);
}

#[test]
fn test_moves_on_the_non_owning_slot_are_ignored_mid_gesture() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::TopBand).build();

    editor.handle_mouse_down(Slot::First, pt(150.0, 50.0), surface_300());
    let before = editor.geometry_of(MaskKind::TopBand);

    let cursor = editor.handle_mouse_move(Slot::Second, pt(10.0, 10.0), surface_300());
    assert_eq!(cursor, CursorKind::Default);
    assert_eq!(editor.geometry_of(MaskKind::TopBand), before);
    editor.handle_mouse_up(Slot::First);
}

#[test]
fn test_second_pointer_down_mid_gesture_is_ignored() {
    let mut editor = TestEditorBuilder::new()
        .with_mask(MaskKind::TopBand)
        .with_mask(MaskKind::BottomBand)
        .build();

    assert!(editor.handle_mouse_down(Slot::First, pt(150.0, 50.0), surface_300()));
    // Only one interaction may be active across the whole editor.
    assert!(!editor.handle_mouse_down(Slot::Second, pt(150.0, 250.0), surface_300()));
    assert!(editor.interaction().is_dragging());
}

#[test]
fn test_each_move_queues_redraws_for_both_slots() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::TopBand).build();

    editor.handle_mouse_down(Slot::First, pt(150.0, 50.0), surface_300());
    editor.handle_mouse_move(Slot::First, pt(160.0, 60.0), surface_300());
    assert_eq!(editor.drain_redraws(), vec![Slot::First, Slot::Second]);

    editor.handle_mouse_move(Slot::First, pt(170.0, 70.0), surface_300());
    editor.handle_mouse_move(Slot::First, pt(180.0, 80.0), surface_300());
    // Coalesced: two moves, one pending redraw per slot.
    assert_eq!(editor.drain_redraws(), vec![Slot::First, Slot::Second]);
    editor.handle_mouse_up(Slot::First);
}

#[test]
fn test_hover_reports_cursor_without_mutating() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::Center).build();
    let before = editor.geometry_of(MaskKind::Center);

    // Over the body.
    let cursor = editor.handle_mouse_move(Slot::First, pt(150.0, 150.0), surface_300());
    assert_eq!(cursor, CursorKind::Move);

    // Over empty space.
    let cursor = editor.handle_mouse_move(Slot::First, pt(20.0, 280.0), surface_300());
    assert_eq!(cursor, CursorKind::Default);

    // Over the east edge strip.
    let cursor = editor.handle_mouse_move(Slot::First, pt(210.0, 150.0), surface_300());
    assert_eq!(cursor, CursorKind::EwResize);

    assert_eq!(editor.geometry_of(MaskKind::Center), before);
    assert!(editor.drain_redraws().is_empty());
}
