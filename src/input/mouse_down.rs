//! Pointer down event handling - drag/resize gesture entry.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during interaction. Candidate masks come from
//! the R-tree spatial index; the ordered scans here only break ties.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use tracing::debug;

use crate::coords::CoordinateConverter;
use crate::editor::MaskEditor;
use crate::hit_testing::{locate_handle, locate_mask};
use crate::profile_scope;
use crate::types::{PixelPoint, Slot, SurfaceSize};

impl MaskEditor {
    /// Handle pointer-down on a slot's surface.
    ///
    /// Handle zones are checked first, across all active masks in their
    /// fixed order, so a corner grab that starts a few pixels outside the
    /// body still resizes; only then does body containment start a drag.
    /// Returns `true` when a mask was hit and the event is consumed;
    /// pointer-down over empty space stays Idle and returns `false`.
    pub fn handle_mouse_down(&mut self, slot: Slot, pos: PixelPoint, surface: SurfaceSize) -> bool {
        profile_scope!("handle_mouse_down");

        if !surface.is_valid() || !self.input_state.is_idle() {
            return false;
        }

        let registry = self.registries.slot(slot);

        for kind in registry.active().iter().copied() {
            let rect_px = CoordinateConverter::to_pixels(registry.geometry_of(kind), surface);
            if let Some(handle) = locate_handle(pos, rect_px, self.settings.handle_hit_radius) {
                debug!(kind = kind.label(), ?handle, ?slot, "resize started");
                self.input_state.start_resizing(slot, kind, handle, pos, rect_px);
                return true;
            }
        }

        if let Some(kind) = locate_mask(pos, surface, registry, self.registries.index()) {
            let rect_px = CoordinateConverter::to_pixels(registry.geometry_of(kind), surface);
            debug!(kind = kind.label(), ?slot, "drag started");
            self.input_state
                .start_dragging(slot, kind, pos, PixelPoint::new(rect_px.x, rect_px.y));
            return true;
        }

        false
    }
}
