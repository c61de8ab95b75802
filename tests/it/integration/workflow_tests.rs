//! End-to-end workflows: toggle, edit, render, submit.

use maskpair::export::rectangles_match;
use maskpair::{MaskKind, Preset, Rect, Slot};

use crate::helpers::{RecordingSurface, TestEditorBuilder, pt, surface, surface_300};

#[test]
fn test_toggle_edit_submit_round_trip() {
    let mut editor = TestEditorBuilder::new()
        .with_mask(MaskKind::TopBand)
        .with_mask(MaskKind::Center)
        .build();

    // Nudge the center square right by 30px on the first surface.
    editor.handle_mouse_down(Slot::First, pt(150.0, 150.0), surface_300());
    editor.handle_mouse_move(Slot::First, pt(180.0, 150.0), surface_300());
    editor.handle_mouse_up(Slot::First);

    for slot in Slot::BOTH {
        let rects = editor.export_rectangles(slot);
        assert_eq!(rects.len(), 2);
        assert!(rects[0].approx_eq(&Rect::new(0.0, 0.0, 1.0, 0.35), 1e-6));
        assert!(rects[1].approx_eq(&Rect::new(0.4, 0.3, 0.4, 0.4), 1e-4));
    }
    assert!(rectangles_match(
        &editor.export_rectangles(Slot::First),
        &editor.export_rectangles(Slot::Second),
        0.0
    ));
}

#[test]
fn test_edit_on_one_surface_renders_identically_scaled_on_the_other() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::Center).build();

    // The two images display at very different sizes.
    let small = surface(300.0, 300.0);

    editor.handle_mouse_down(Slot::First, pt(150.0, 150.0), small);
    editor.handle_mouse_move(Slot::First, pt(180.0, 180.0), small);
    editor.handle_mouse_up(Slot::First);

    // Geometry is stored normalized, so each slot paints to its own scale.
    let mut first = RecordingSurface::new(300.0, 300.0);
    editor.render(Slot::First, &mut first);
    assert_eq!(first.ops[1], "fill 120 120 120 120 rgba(0,0,0,255)");

    let mut second = RecordingSurface::new(600.0, 150.0);
    editor.render(Slot::Second, &mut second);
    assert_eq!(second.ops[1], "fill 240 60 240 60 rgba(0,0,0,255)");
}

#[test]
fn test_clear_all_after_edits_resets_everything() {
    let mut editor = TestEditorBuilder::new()
        .with_mask(MaskKind::TopBand)
        .with_mask(MaskKind::LeftBand)
        .build();

    editor.handle_mouse_down(Slot::First, pt(150.0, 50.0), surface_300());
    editor.handle_mouse_move(Slot::First, pt(190.0, 90.0), surface_300());
    editor.handle_mouse_up(Slot::First);

    editor.clear_all();

    for slot in Slot::BOTH {
        assert!(editor.registry(slot).is_empty());
        assert!(editor.export_rectangles(slot).is_empty());
        assert_eq!(editor.export_json(slot).unwrap(), "[]");
    }
}

#[test]
fn test_toggle_mid_gesture_degrades_to_nothing() {
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::Center).build();

    editor.handle_mouse_down(Slot::First, pt(150.0, 150.0), surface_300());
    // A button adapter toggles the dragged mask off mid-gesture.
    editor.toggle(MaskKind::Center);

    // Further moves hit the inactive-kind no-op path; nothing crashes and
    // nothing comes back to life.
    editor.handle_mouse_move(Slot::First, pt(200.0, 200.0), surface_300());
    editor.handle_mouse_up(Slot::First);

    assert!(!editor.is_active(MaskKind::Center));
    assert!(editor.export_rectangles(Slot::First).is_empty());
}

#[test]
fn test_frame_preset_masks_all_four_edges() {
    let mut editor = TestEditorBuilder::new().build();
    editor.apply_preset(Preset::Frame);

    let rects = editor.export_rectangles(Slot::First);
    assert_eq!(rects.len(), 4);
    assert!(!editor.is_active(MaskKind::Center));
}

#[test]
fn test_adapter_render_loop_consumes_the_queue() {
    let mut editor = TestEditorBuilder::new().build();
    editor.toggle(MaskKind::BottomBand);

    let mut first = RecordingSurface::new(300.0, 300.0);
    let mut second = RecordingSurface::new(512.0, 256.0);

    for slot in editor.drain_redraws() {
        match slot {
            Slot::First => editor.render(slot, &mut first),
            Slot::Second => editor.render(slot, &mut second),
        }
    }

    assert_eq!(first.ops[1], "fill 0 195 300 105 rgba(0,0,0,255)");
    assert_eq!(second.ops[1], "fill 0 166 512 90 rgba(0,0,0,255)");
    assert!(editor.drain_redraws().is_empty());
}

#[test]
fn test_late_surface_size_is_tolerated() {
    // The display collaborator reports a settled size only after layout;
    // events before that are guarded out, events after use the new size.
    let mut editor = TestEditorBuilder::new().with_mask(MaskKind::Center).build();

    assert!(!editor.handle_mouse_down(Slot::First, pt(150.0, 150.0), surface(0.0, 0.0)));

    // Layout settles at 600x600; the same normalized mask now spans
    // (180, 180) to (420, 420).
    let settled = surface(600.0, 600.0);
    assert!(editor.handle_mouse_down(Slot::First, pt(300.0, 300.0), settled));
    editor.handle_mouse_move(Slot::First, pt(360.0, 300.0), settled);
    editor.handle_mouse_up(Slot::First);

    let rect = editor.geometry_of(MaskKind::Center);
    assert!(rect.approx_eq(&Rect::new(0.4, 0.3, 0.4, 0.4), 1e-4), "{:?}", rect);
}
