//! Mask registries and the pair-level synchronization rule.
//!
//! Each image slot owns a [`MaskRegistry`]; the two are bound together by
//! [`RegistryPair`], whose methods are the only mutation path. That keeps the
//! synchronization invariant — identical `active` sequences and bit-identical
//! overrides on both sides, in normalized space only — enforced in one place
//! instead of by convention at every call site.
//!
//! The registry never triggers rendering. The editor context pairs every
//! mutation with a redraw of both slots.

use std::collections::HashMap;

use tracing::{info, trace};

use crate::spatial_index::SpatialIndex;
use crate::types::{MaskKind, Rect, Slot};

/// Per-slot view of the active masks.
///
/// `active` preserves toggle-on order; hit-testing, rendering, and export all
/// iterate it, so "earliest toggled-on mask" is the documented tie-break for
/// overlapping masks.
#[derive(Debug, Default)]
pub struct MaskRegistry {
    active: Vec<MaskKind>,
    overrides: HashMap<MaskKind, Rect>,
}

impl MaskRegistry {
    pub fn is_active(&self, kind: MaskKind) -> bool {
        self.active.contains(&kind)
    }

    /// Active kinds in their fixed iteration order.
    pub fn active(&self) -> &[MaskKind] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The mask's current geometry: the user-edited override if present,
    /// else the kind's built-in default.
    pub fn geometry_of(&self, kind: MaskKind) -> Rect {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_rect())
    }

    fn insert(&mut self, kind: MaskKind) {
        if !self.active.contains(&kind) {
            self.active.push(kind);
        }
        self.overrides.entry(kind).or_insert_with(|| kind.default_rect());
    }

    fn remove(&mut self, kind: MaskKind) {
        self.active.retain(|k| *k != kind);
        self.overrides.remove(&kind);
    }

    fn set_override(&mut self, kind: MaskKind, rect: Rect) {
        self.overrides.insert(kind, rect);
    }

    fn clear(&mut self) {
        self.active.clear();
        self.overrides.clear();
    }
}

/// The two per-slot registries plus the shared hit-test index, mutated in
/// lockstep.
#[derive(Default)]
pub struct RegistryPair {
    slots: [MaskRegistry; 2],
    index: SpatialIndex,
}

impl RegistryPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: Slot) -> &MaskRegistry {
        &self.slots[slot.index()]
    }

    /// The normalized-space index over active masks. Geometry is identical
    /// across slots, so one index answers queries for both.
    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    pub fn is_active(&self, kind: MaskKind) -> bool {
        self.slots[0].is_active(kind)
    }

    pub fn geometry_of(&self, kind: MaskKind) -> Rect {
        self.slots[0].geometry_of(kind)
    }

    /// Toggle a mask on or off in both slots. Toggling on seeds both
    /// override tables with a copy of the kind's default rectangle; toggling
    /// off discards any edits. Returns the new active state.
    pub fn toggle(&mut self, kind: MaskKind) -> bool {
        let now_active = !self.is_active(kind);

        if now_active {
            for registry in &mut self.slots {
                registry.insert(kind);
            }
            self.index.insert(kind, kind.default_rect());
        } else {
            for registry in &mut self.slots {
                registry.remove(kind);
            }
            self.index.remove(kind);
        }

        info!(kind = kind.label(), active = now_active, "mask toggled");
        now_active
    }

    /// Remove every mask and every override from both slots.
    pub fn clear_all(&mut self) {
        for registry in &mut self.slots {
            registry.clear();
        }
        self.index.clear();
        info!("all masks cleared");
    }

    /// Write `rect` into both override tables. Called by the interaction
    /// state machine mid-drag/resize. A kind that is not active is a silent
    /// no-op: a toggle can race an in-flight pointer event, and the graceful
    /// outcome is "nothing happens".
    pub fn set_geometry(&mut self, kind: MaskKind, rect: Rect) {
        if !self.is_active(kind) {
            trace!(kind = kind.label(), "set_geometry on inactive kind ignored");
            return;
        }
        for registry in &mut self.slots {
            registry.set_override(kind, rect);
        }
        self.index.insert(kind, rect);
    }

    /// True when both slots agree on `active` order and override values.
    /// The pair's methods maintain this by construction; tests assert it
    /// after arbitrary operation sequences.
    pub fn is_synchronized(&self) -> bool {
        let [a, b] = &self.slots;
        a.active == b.active && a.overrides == b.overrides
    }
}
