//! The editor context - the single owner of all mask-editing state.
//!
//! [`MaskEditor`] owns both per-slot registries, the shared interaction
//! state, and the redraw queue. Hosting adapters feed it pointer events and
//! button presses, drain its redraw requests, and hand it a surface to paint
//! on. Nothing in the crate reaches for globals; every operation goes through
//! a `&mut MaskEditor`, which is what makes the pair-synchronization
//! invariant checkable in one place.
//!
//! ## Redraw protocol
//!
//! Every mutation enqueues a redraw for *both* slots before it returns, so
//! there is no window in which one surface shows stale geometry. Requests
//! for a slot that is already pending are coalesced - a later render always
//! wins visually, so skipping intermediate frames is sound. Adapters drain
//! with [`MaskEditor::drain_redraws`] and call [`MaskEditor::render`] per
//! slot.
//!
//! ## Surface sizes
//!
//! The editor never stores a surface size. Pointer handlers and the renderer
//! take the *current* size per call, which is how the core stays correct
//! when the display collaborator's layout settles late after a resize.

use std::collections::VecDeque;

use tracing::info;

use crate::input::InteractionState;
use crate::registry::{MaskRegistry, RegistryPair};
use crate::render::{self, DrawSurface};
use crate::settings::EditorSettings;
use crate::types::{MaskKind, Preset, Rect, Slot};

pub struct MaskEditor {
    pub(crate) registries: RegistryPair,
    pub(crate) input_state: InteractionState,
    pub(crate) settings: EditorSettings,
    pub(crate) redraws: VecDeque<Slot>,
}

impl Default for MaskEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskEditor {
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            registries: RegistryPair::new(),
            input_state: InteractionState::default(),
            settings,
            redraws: VecDeque::new(),
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn registry(&self, slot: Slot) -> &MaskRegistry {
        self.registries.slot(slot)
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.input_state
    }

    // ========================================================================
    // Button adapter surface
    // ========================================================================

    /// Toggle a mask on or off in both slots. Returns the new active state
    /// for reflecting button UI.
    pub fn toggle(&mut self, kind: MaskKind) -> bool {
        let now_active = self.registries.toggle(kind);
        self.request_redraw_both();
        now_active
    }

    /// Toggle a preset's kinds as a group. No independent state: this is a
    /// composition of [`MaskEditor::toggle`] calls.
    pub fn apply_preset(&mut self, preset: Preset) {
        info!(preset = preset.label(), "applying preset");
        for kind in preset.kinds() {
            self.toggle(*kind);
        }
    }

    /// Remove every mask from both slots.
    pub fn clear_all(&mut self) {
        self.registries.clear_all();
        self.request_redraw_both();
    }

    /// Whether a kind currently has a visible mask, for button state.
    pub fn is_active(&self, kind: MaskKind) -> bool {
        self.registries.is_active(kind)
    }

    /// Current geometry for a kind: override if edited, else the default.
    pub fn geometry_of(&self, kind: MaskKind) -> Rect {
        self.registries.geometry_of(kind)
    }

    // ========================================================================
    // Render protocol
    // ========================================================================

    /// Slots with a pending redraw, in request order, clearing the queue.
    pub fn drain_redraws(&mut self) -> Vec<Slot> {
        self.redraws.drain(..).collect()
    }

    /// Repaint one slot onto its drawable surface from current state.
    pub fn render(&self, slot: Slot, surface: &mut dyn DrawSurface) {
        render::render_slot(
            self.registries.slot(slot),
            &self.input_state,
            &self.settings,
            slot,
            surface,
        );
    }

    // ========================================================================
    // Submission surface
    // ========================================================================

    /// One normalized rectangle per active mask, in the same fixed order the
    /// hit-tester and renderer use. Pure data; needs no surface.
    pub fn export_rectangles(&self, slot: Slot) -> Vec<Rect> {
        crate::export::export_rectangles(self.registries.slot(slot))
    }

    /// The JSON payload submitted alongside the slot's image.
    pub fn export_json(&self, slot: Slot) -> Result<String, serde_json::Error> {
        crate::export::export_json(self.registries.slot(slot))
    }

    // ========================================================================
    // Internal
    // ========================================================================

    pub(crate) fn request_redraw_both(&mut self) {
        for slot in Slot::BOTH {
            self.request_redraw(slot);
        }
    }

    pub(crate) fn request_redraw(&mut self, slot: Slot) {
        // Coalesce: an already-pending slot will repaint from latest state.
        if !self.redraws.contains(&slot) {
            self.redraws.push_back(slot);
        }
    }
}
