//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for mask hit testing. The index is
//! kept in normalized space: mask geometry is identical across both image
//! slots by construction, so a single index serves point queries from either
//! surface once the query point is normalized.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

use crate::types::{MaskKind, Rect};

/// A spatial entry representing one active mask's normalized bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub kind: MaskKind,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(kind: MaskKind, rect: Rect) -> Self {
        Self {
            kind,
            min_x: rect.x,
            min_y: rect.y,
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// Spatial index over the active masks using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<MaskKind, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or update a mask's bounding box.
    pub fn insert(&mut self, kind: MaskKind, rect: Rect) {
        if let Some(old_entry) = self.entries.remove(&kind) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(kind, rect);
        self.tree.insert(entry);
        self.entries.insert(kind, entry);
    }

    pub fn remove(&mut self, kind: MaskKind) -> bool {
        if let Some(entry) = self.entries.remove(&kind) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All masks whose bounds contain the given normalized point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<MaskKind> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.kind)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
