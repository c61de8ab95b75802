//! Hit testing - mask-under-point resolution, handle zones, cursor lookup.
//!
//! ## Performance Notes
//!
//! Hit testing runs on every pointer move while hovering. Candidate lookup
//! goes through the R-tree spatial index; the ordered scan over `active`
//! only decides ties between overlapping candidates.

use crate::coords::CoordinateConverter;
use crate::registry::MaskRegistry;
use crate::spatial_index::SpatialIndex;
use crate::types::{CursorKind, Handle, MaskKind, PixelPoint, PixelRect, SurfaceSize};

/// Resolve which active mask (if any) lies under a pointer position.
///
/// The point arrives in the slot's local pixel space and is normalized
/// against the slot's *current* surface size before the index query.
/// Overlaps resolve to the first match in `active` order, which is stable
/// for the whole edit session. Returns `None` over empty space — including
/// for kinds raced off by a concurrent toggle, which must degrade to
/// "nothing happens".
pub fn locate_mask(
    point: PixelPoint,
    surface: SurfaceSize,
    registry: &MaskRegistry,
    index: &SpatialIndex,
) -> Option<MaskKind> {
    let (nx, ny) = CoordinateConverter::point_to_normalized(point, surface);
    let candidates = index.query_point(nx, ny);

    registry
        .active()
        .iter()
        .copied()
        .find(|kind| candidates.contains(kind))
}

/// Resolve which resize handle (if any) a pointer position lands on, given
/// the mask's current pixel bounding box.
///
/// Corner zones are squares of `hit_radius` around the 4 corner points and
/// are tested first; edge zones are strips of the same radius spanning the
/// full edge. A point within reach of both a corner and its adjacent edge
/// therefore resolves to the corner.
pub fn locate_handle(point: PixelPoint, rect: PixelRect, hit_radius: f32) -> Option<Handle> {
    for handle in Handle::CORNERS {
        let (cx, cy) = corner_point(rect, handle);
        if (point.x - cx).abs() <= hit_radius && (point.y - cy).abs() <= hit_radius {
            return Some(handle);
        }
    }

    let in_x_span = point.x >= rect.x - hit_radius && point.x <= rect.right() + hit_radius;
    let in_y_span = point.y >= rect.y - hit_radius && point.y <= rect.bottom() + hit_radius;

    for handle in Handle::EDGES {
        let hit = match handle {
            Handle::N => in_x_span && (point.y - rect.y).abs() <= hit_radius,
            Handle::S => in_x_span && (point.y - rect.bottom()).abs() <= hit_radius,
            Handle::W => in_y_span && (point.x - rect.x).abs() <= hit_radius,
            Handle::E => in_y_span && (point.x - rect.right()).abs() <= hit_radius,
            _ => unreachable!("EDGES contains edge handles only"),
        };
        if hit {
            return Some(handle);
        }
    }

    None
}

/// The cursor style for a resize handle: two axis cursors and two diagonal
/// cursors cover all 8 zones. Body hover maps to [`CursorKind::Move`] and
/// empty space to [`CursorKind::Default`] at the call sites.
pub fn cursor_for(handle: Handle) -> CursorKind {
    match handle {
        Handle::N | Handle::S => CursorKind::NsResize,
        Handle::E | Handle::W => CursorKind::EwResize,
        Handle::Ne | Handle::Sw => CursorKind::NeswResize,
        Handle::Nw | Handle::Se => CursorKind::NwseResize,
    }
}

fn corner_point(rect: PixelRect, handle: Handle) -> (f32, f32) {
    match handle {
        Handle::Nw => (rect.x, rect.y),
        Handle::Ne => (rect.right(), rect.y),
        Handle::Sw => (rect.x, rect.bottom()),
        Handle::Se => (rect.right(), rect.bottom()),
        _ => unreachable!("CORNERS contains corner handles only"),
    }
}
