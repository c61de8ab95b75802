//! Pointer up / leave handling - gesture exit.

use tracing::debug;

use crate::editor::MaskEditor;
use crate::types::{CursorKind, Slot};

impl MaskEditor {
    /// Handle pointer-up. Whatever geometry the gesture produced stays
    /// committed (there is no cancel gesture); the interaction returns to
    /// Idle and both slots repaint without affordances. Returns the neutral
    /// cursor to restore.
    pub fn handle_mouse_up(&mut self, slot: Slot) -> CursorKind {
        if !self.input_state.is_idle() {
            debug!(?slot, "interaction finished");
            self.input_state.reset();
            self.request_redraw_both();
        }
        CursorKind::Move
    }

    /// Handle the pointer leaving a slot's surface. Treated identically to
    /// pointer-up so a gesture cannot get stuck when the cursor exits the
    /// canvas with the button still held.
    pub fn handle_mouse_leave(&mut self, slot: Slot) -> CursorKind {
        self.handle_mouse_up(slot)
    }
}
