//! Pointer move handling - live drag/resize geometry and hover cursor.
//!
//! ## Performance Notes
//!
//! Pointer move fires continuously during a gesture (60+ times per second).
//! Key properties:
//! - Early dispatch on the interaction state, no allocation per move
//! - Geometry converts against the surface size passed with *this* event
//! - Both slots are queued for redraw after every mutation
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::MIN_MASK_SIZE;
use crate::coords::CoordinateConverter;
use crate::editor::MaskEditor;
use crate::hit_testing::{cursor_for, locate_handle, locate_mask};
use crate::input::InteractionState;
use crate::profile_scope;
use crate::types::{CursorKind, Handle, PixelPoint, PixelRect, Slot, SurfaceSize};

impl MaskEditor {
    /// Handle pointer-move on a slot's surface.
    ///
    /// Mid-gesture this updates the synchronized geometry; when idle it is
    /// purely cosmetic and only resolves the cursor style to show. Moves on
    /// the slot that does not own an in-flight gesture are ignored.
    pub fn handle_mouse_move(
        &mut self,
        slot: Slot,
        pos: PixelPoint,
        surface: SurfaceSize,
    ) -> CursorKind {
        profile_scope!("handle_mouse_move");

        if !surface.is_valid() {
            return CursorKind::Default;
        }

        match self.input_state {
            InteractionState::Dragging { slot: owner, kind, anchor, origin_px } if owner == slot => {
                profile_scope!("mask_drag");

                let moved = PixelPoint::new(
                    origin_px.x + (pos.x - anchor.x),
                    origin_px.y + (pos.y - anchor.y),
                );

                // Drag never changes size; only the origin converts. Each
                // component clamps into [0, 1] on its own - a band wider
                // than the remaining span may overhang the far edge, which
                // the backend trims on parse.
                let current = self.registries.geometry_of(kind);
                let (nx, ny) = CoordinateConverter::point_to_normalized(moved, surface);
                let mut rect = current;
                rect.x = nx.clamp(0.0, 1.0);
                rect.y = ny.clamp(0.0, 1.0);

                self.registries.set_geometry(kind, rect);
                self.request_redraw_both();
                CursorKind::Move
            }

            InteractionState::Resizing { slot: owner, kind, handle, anchor, origin_bounds_px }
                if owner == slot =>
            {
                profile_scope!("mask_resize");

                let rect = resize_bounds(origin_bounds_px, handle, anchor, pos, surface);
                self.registries.set_geometry(kind, rect);
                self.request_redraw_both();
                cursor_for(handle)
            }

            InteractionState::Idle => self.hover_cursor(slot, pos, surface),

            // A gesture owned by the other surface; nothing to do here.
            _ => CursorKind::Default,
        }
    }

    /// Cosmetic pass for idle moves: what cursor belongs at this position.
    fn hover_cursor(&self, slot: Slot, pos: PixelPoint, surface: SurfaceSize) -> CursorKind {
        let registry = self.registries.slot(slot);

        for kind in registry.active().iter().copied() {
            let rect_px = CoordinateConverter::to_pixels(registry.geometry_of(kind), surface);
            if let Some(handle) = locate_handle(pos, rect_px, self.settings.handle_hit_radius) {
                return cursor_for(handle);
            }
        }

        if locate_mask(pos, surface, registry, self.registries.index()).is_some() {
            CursorKind::Move
        } else {
            CursorKind::Default
        }
    }
}

/// Compute the resized rectangle from the gesture baseline and the current
/// pointer position.
///
/// Only the edges named by the handle's directional components move; the
/// opposing edge holds, so an edge pushed past its opposite clamps instead
/// of flipping the rectangle. Width and height are floored at
/// [`MIN_MASK_SIZE`] and edges stay inside the surface.
fn resize_bounds(
    origin: PixelRect,
    handle: Handle,
    anchor: PixelPoint,
    pos: PixelPoint,
    surface: SurfaceSize,
) -> crate::types::Rect {
    let dx = pos.x - anchor.x;
    let dy = pos.y - anchor.y;

    let min_width_px = MIN_MASK_SIZE * surface.width;
    let min_height_px = MIN_MASK_SIZE * surface.height;

    let mut left = origin.x;
    let mut top = origin.y;
    let mut right = origin.right();
    let mut bottom = origin.bottom();

    let (horizontal, vertical) = handle.components();

    match horizontal {
        -1 => left = (left + dx).clamp(0.0, (right - min_width_px).max(0.0)),
        1 => right = (right + dx).clamp((left + min_width_px).min(surface.width), surface.width),
        _ => {}
    }
    match vertical {
        -1 => top = (top + dy).clamp(0.0, (bottom - min_height_px).max(0.0)),
        1 => bottom = (bottom + dy).clamp((top + min_height_px).min(surface.height), surface.height),
        _ => {}
    }

    let mut rect = CoordinateConverter::to_normalized(
        PixelRect::new(left, top, right - left, bottom - top),
        surface,
    );
    // Guard the floor in normalized space as well; pixel rounding of a
    // minimum-sized mask must not dip below it.
    rect.width = rect.width.max(MIN_MASK_SIZE);
    rect.height = rect.height.max(MIN_MASK_SIZE);
    rect
}
