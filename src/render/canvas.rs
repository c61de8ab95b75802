//! The per-slot render pass.
//!
//! ## Performance Notes
//!
//! Rendering runs after every mutation during a gesture. The pass is a
//! single ordered sweep over the active masks with no allocation beyond the
//! surface's own draw calls.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use tracing::trace;

use crate::coords::CoordinateConverter;
use crate::input::InteractionState;
use crate::profile_scope;
use crate::registry::MaskRegistry;
use crate::render::DrawSurface;
use crate::settings::EditorSettings;
use crate::types::{PixelRect, Slot};

/// Clear and redraw one slot's surface from the current registry state.
///
/// Masks paint in `active` order (stacking only; fills are opaque). The mask
/// being manipulated gets an outline when the gesture is owned by this slot,
/// and its 8 handle squares while resizing. The pass is idempotent: two
/// calls with unchanged state produce identical pixels.
pub fn render_slot(
    registry: &MaskRegistry,
    interaction: &InteractionState,
    settings: &EditorSettings,
    slot: Slot,
    surface: &mut dyn DrawSurface,
) {
    profile_scope!("render_slot");

    let size = surface.size();
    if !size.is_valid() {
        // Layout has not settled yet; the pending redraw that follows the
        // next mutation repaints from current state.
        trace!(?slot, "skipping render on unsized surface");
        return;
    }

    surface.clear();

    for kind in registry.active().iter().copied() {
        let rect = CoordinateConverter::to_pixels(registry.geometry_of(kind), size);
        let (x, y, w, h) = rounded(rect);
        surface.fill_rect(x, y, w, h, settings.mask_fill);
    }

    if let Some(kind) = interaction.manipulated_in(slot) {
        if !registry.is_active(kind) {
            return;
        }
        let rect = CoordinateConverter::to_pixels(registry.geometry_of(kind), size);
        let (x, y, w, h) = rounded(rect);
        surface.stroke_rect(x, y, w, h, settings.outline_color, settings.outline_width);

        if interaction.is_resizing() {
            let half = settings.handle_size / 2.0;
            let side = settings.handle_size.round() as i32;
            for (cx, cy) in handle_anchor_points(rect) {
                surface.fill_rect(
                    (cx - half).round() as i32,
                    (cy - half).round() as i32,
                    side,
                    side,
                    settings.handle_fill,
                );
            }
        }
    }
}

/// Round a pixel rect to integers by its edges, so adjacent rects stay
/// gap-free regardless of fractional position.
fn rounded(rect: PixelRect) -> (i32, i32, i32, i32) {
    let x0 = rect.x.round() as i32;
    let y0 = rect.y.round() as i32;
    let x1 = rect.right().round() as i32;
    let y1 = rect.bottom().round() as i32;
    (x0, y0, x1 - x0, y1 - y0)
}

/// Where the 8 handle squares sit: the 4 corners plus the 4 edge midpoints.
/// (Edge *hit zones* span the whole edge; only the drawn affordance sits at
/// the midpoint.)
fn handle_anchor_points(rect: PixelRect) -> [(f32, f32); 8] {
    let mid_x = rect.x + rect.width / 2.0;
    let mid_y = rect.y + rect.height / 2.0;
    [
        (rect.x, rect.y),
        (mid_x, rect.y),
        (rect.right(), rect.y),
        (rect.x, mid_y),
        (rect.right(), mid_y),
        (rect.x, rect.bottom()),
        (mid_x, rect.bottom()),
        (rect.right(), rect.bottom()),
    ]
}
