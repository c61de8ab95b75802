//! Unit tests for backend serialization.

use maskpair::export::{parse_rectangles, rectangles_match};
use maskpair::{MaskKind, Rect, Slot};

use crate::helpers::TestEditorBuilder;

#[test]
fn test_single_toggle_exports_the_default_rect() {
    let editor = TestEditorBuilder::new().with_mask(MaskKind::TopBand).build();

    for slot in Slot::BOTH {
        let rects = editor.export_rectangles(slot);
        assert_eq!(rects.len(), 1);
        assert!(rects[0].approx_eq(&Rect::new(0.0, 0.0, 1.0, 0.35), 1e-6));
    }
}

#[test]
fn test_export_order_matches_toggle_order() {
    let editor = TestEditorBuilder::new()
        .with_mask(MaskKind::Center)
        .with_mask(MaskKind::TopBand)
        .build();

    let rects = editor.export_rectangles(Slot::First);
    assert_eq!(rects.len(), 2);
    assert!(rects[0].approx_eq(&MaskKind::Center.default_rect(), 1e-6));
    assert!(rects[1].approx_eq(&MaskKind::TopBand.default_rect(), 1e-6));
}

#[test]
fn test_empty_editor_exports_empty_list() {
    let editor = TestEditorBuilder::new().build();
    assert!(editor.export_rectangles(Slot::First).is_empty());
    assert_eq!(editor.export_json(Slot::Second).unwrap(), "[]");
}

#[test]
fn test_json_round_trips_through_backend_parse() {
    let editor = TestEditorBuilder::new()
        .with_mask(MaskKind::TopBand)
        .with_mask(MaskKind::Center)
        .build();

    let payload = editor.export_json(Slot::First).unwrap();
    let parsed = parse_rectangles(&payload);

    assert!(rectangles_match(
        &parsed,
        &editor.export_rectangles(Slot::First),
        1e-6
    ));
}

#[test]
fn test_both_slots_export_matching_payloads() {
    let editor = TestEditorBuilder::new()
        .with_mask(MaskKind::LeftBand)
        .with_mask(MaskKind::RightBand)
        .build();

    assert!(rectangles_match(
        &editor.export_rectangles(Slot::First),
        &editor.export_rectangles(Slot::Second),
        0.0
    ));
}
