//! Serialization to and from the comparison backend's rectangle format.
//!
//! The backend consumes normalized rectangles directly; nothing here touches
//! pixel space or a drawable surface, so submission works regardless of
//! render state. The parse direction mirrors the backend's tolerant inbound
//! sanitation: malformed payloads degrade to an empty list, out-of-range
//! entries are clamped, and entries with no remaining area are dropped.

use tracing::warn;

use crate::registry::MaskRegistry;
use crate::types::Rect;

/// One normalized rectangle per active mask, in the registry's fixed
/// iteration order (the same order hit-testing and rendering use).
pub fn export_rectangles(registry: &MaskRegistry) -> Vec<Rect> {
    registry
        .active()
        .iter()
        .map(|&kind| registry.geometry_of(kind))
        .collect()
}

/// The JSON array submitted alongside a slot's image.
pub fn export_json(registry: &MaskRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string(&export_rectangles(registry))
}

/// Parse a rectangle payload the way the backend does.
///
/// Entries missing a field are skipped rather than failing the batch;
/// surviving entries clamp into the unit square and must keep positive area.
/// A payload that is not a JSON array at all yields an empty list.
pub fn parse_rectangles(payload: &str) -> Vec<Rect> {
    if payload.is_empty() {
        return Vec::new();
    }

    let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(payload) else {
        warn!("discarding malformed rectangle payload");
        return Vec::new();
    };

    values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<Rect>(value).ok())
        .map(|rect| rect.clamped_to_unit())
        .filter(|rect| rect.width > 0.0 && rect.height > 0.0)
        .collect()
}

/// Validate that two exported lists describe the same masks within
/// `tolerance` - the pair-synchronization check the backend runs before
/// comparing.
pub fn rectangles_match(a: &[Rect], b: &[Rect], tolerance: f32) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(r1, r2)| r1.approx_eq(r2, tolerance))
}
