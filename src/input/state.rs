//! Interaction state machine - unified state for all pointer interactions.
//!
//! A single explicit state machine replaces scattered "is dragging" flags,
//! making impossible states unrepresentable. One state is shared across the
//! whole editor, not one per slot: dragging a mask on either image is really
//! manipulating the one synchronized mask shared by both.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Resizing   (pointer down on a resize handle)
//! Idle -> Dragging   (pointer down on a mask body, not on a handle)
//!
//! Any  -> Idle       (pointer up, or pointer leaving the owning surface)
//! ```

use crate::types::{Handle, MaskKind, PixelPoint, PixelRect, Slot};

/// Unified interaction state for pointer gestures.
///
/// Gesture baselines (`origin_px`, `origin_bounds_px`) are captured in pixel
/// space at pointer-down from the surface size current at that moment; live
/// updates convert back to normalized space against the surface size current
/// at each move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    /// No active pointer operation.
    Idle,

    /// Moving a mask without changing its size.
    Dragging {
        /// Slot whose surface owns the gesture.
        slot: Slot,
        /// Mask being moved.
        kind: MaskKind,
        /// Pointer position at pointer-down.
        anchor: PixelPoint,
        /// Mask top-left in pixel space at drag start.
        origin_px: PixelPoint,
    },

    /// Resizing a mask by one of its 8 handles.
    Resizing {
        /// Slot whose surface owns the gesture.
        slot: Slot,
        /// Mask being resized.
        kind: MaskKind,
        /// Handle grabbed at pointer-down.
        handle: Handle,
        /// Pointer position at pointer-down.
        anchor: PixelPoint,
        /// Full pixel bounding box at resize start.
        origin_bounds_px: PixelRect,
    },
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// The mask being manipulated, regardless of owning slot.
    pub fn manipulated(&self) -> Option<MaskKind> {
        match *self {
            Self::Dragging { kind, .. } | Self::Resizing { kind, .. } => Some(kind),
            Self::Idle => None,
        }
    }

    /// The mask being manipulated, if the gesture is owned by `slot`. The
    /// renderer uses this to draw affordances only on the owning surface.
    pub fn manipulated_in(&self, slot: Slot) -> Option<MaskKind> {
        match *self {
            Self::Dragging { slot: s, kind, .. } | Self::Resizing { slot: s, kind, .. }
                if s == slot =>
            {
                Some(kind)
            }
            _ => None,
        }
    }

    /// The active handle, if resizing.
    pub fn active_handle(&self) -> Option<Handle> {
        match *self {
            Self::Resizing { handle, .. } => Some(handle),
            _ => None,
        }
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Enter the dragging state.
    pub fn start_dragging(&mut self, slot: Slot, kind: MaskKind, anchor: PixelPoint, origin_px: PixelPoint) {
        *self = Self::Dragging { slot, kind, anchor, origin_px };
    }

    /// Enter the resizing state.
    pub fn start_resizing(
        &mut self,
        slot: Slot,
        kind: MaskKind,
        handle: Handle,
        anchor: PixelPoint,
        origin_bounds_px: PixelRect,
    ) {
        *self = Self::Resizing { slot, kind, handle, anchor, origin_bounds_px };
    }
}
