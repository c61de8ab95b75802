//! Core types for the synchronized mask editor.
//!
//! Mask geometry is stored exclusively in normalized space: fractions of the
//! owning surface's displayed width/height in `[0, 1]`. Pixel-space types
//! exist only at the boundaries (pointer events in, draw calls out) and are
//! always derived from the *current* surface size, never cached.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BOTTOM_BAND_DEFAULT, CENTER_DEFAULT, LEFT_BAND_DEFAULT, RIGHT_BAND_DEFAULT, TOP_BAND_DEFAULT,
};

// ============================================================================
// Normalized geometry
// ============================================================================

/// A rectangle in normalized coordinates, top-left origin.
///
/// Every component lives in `[0, 1]`; `width`/`height` never drop below
/// [`crate::constants::MIN_MASK_SIZE`] once a mask has been edited.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point containment, inclusive on all edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Clamp into the unit square: position into `[0, 1]`, size into what
    /// remains to the far edge. Mirrors the comparison backend's inbound
    /// sanitation, so a mask dragged partially off-surface loses the
    /// overhanging part rather than being rejected.
    pub fn clamped_to_unit(&self) -> Self {
        let x = self.x.clamp(0.0, 1.0);
        let y = self.y.clamp(0.0, 1.0);
        Self {
            x,
            y,
            width: self.width.clamp(0.0, 1.0 - x),
            height: self.height.clamp(0.0, 1.0 - y),
        }
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

// ============================================================================
// Pixel-space geometry
// ============================================================================

/// A point in a surface's local pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in a surface's local pixel space. Kept as `f32` until the
/// draw boundary; integer rounding happens only there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// The displayed pixel dimensions of one image surface, queried from the
/// display collaborator at event time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The coordinate model requires a positive surface; callers must check
    /// this before converting (layout may not have settled yet).
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

// ============================================================================
// Mask identity
// ============================================================================

/// Stable identity of a mask. At most one mask of a given kind is active per
/// image pair; each kind carries a built-in default geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskKind {
    /// Horizontal band across the top of the image.
    TopBand,
    /// Horizontal band across the bottom.
    BottomBand,
    /// Vertical band along the left edge.
    LeftBand,
    /// Vertical band along the right edge.
    RightBand,
    /// Square over the center of the image.
    Center,
}

impl MaskKind {
    pub const ALL: [MaskKind; 5] = [
        MaskKind::TopBand,
        MaskKind::BottomBand,
        MaskKind::LeftBand,
        MaskKind::RightBand,
        MaskKind::Center,
    ];

    /// The kind's built-in default geometry, used to seed an override when
    /// the mask is toggled on.
    pub fn default_rect(self) -> Rect {
        match self {
            MaskKind::TopBand => TOP_BAND_DEFAULT,
            MaskKind::BottomBand => BOTTOM_BAND_DEFAULT,
            MaskKind::LeftBand => LEFT_BAND_DEFAULT,
            MaskKind::RightBand => RIGHT_BAND_DEFAULT,
            MaskKind::Center => CENTER_DEFAULT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaskKind::TopBand => "top_band",
            MaskKind::BottomBand => "bottom_band",
            MaskKind::LeftBand => "left_band",
            MaskKind::RightBand => "right_band",
            MaskKind::Center => "center",
        }
    }
}

/// A fixed group of kinds toggled together by one control. Presets carry no
/// state of their own; applying one is a composition of `toggle` calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Top and bottom bands.
    Bands,
    /// Left and right bands.
    Sides,
    /// All four edge bands.
    Frame,
}

impl Preset {
    pub fn kinds(self) -> &'static [MaskKind] {
        match self {
            Preset::Bands => &[MaskKind::TopBand, MaskKind::BottomBand],
            Preset::Sides => &[MaskKind::LeftBand, MaskKind::RightBand],
            Preset::Frame => &[
                MaskKind::TopBand,
                MaskKind::BottomBand,
                MaskKind::LeftBand,
                MaskKind::RightBand,
            ],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Bands => "bands",
            Preset::Sides => "sides",
            Preset::Frame => "frame",
        }
    }
}

/// One of the two paired image positions. Mask geometry is always identical
/// across both; the slots differ only in surface size and draw target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

// ============================================================================
// Interaction affordances
// ============================================================================

/// One of the 8 resize zones on a mask boundary: 4 corners plus 4 edges.
/// Corner zones are squares around the corner points; edge zones are strips
/// spanning the full edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl Handle {
    /// Corners are tested before edges so a point within reach of both
    /// resolves to the corner.
    pub const CORNERS: [Handle; 4] = [Handle::Nw, Handle::Ne, Handle::Sw, Handle::Se];
    pub const EDGES: [Handle; 4] = [Handle::N, Handle::S, Handle::E, Handle::W];

    /// Directional components as `(horizontal, vertical)`:
    /// `-1` moves the west/north edge, `1` the east/south edge, `0` neither.
    pub fn components(self) -> (i8, i8) {
        match self {
            Handle::N => (0, -1),
            Handle::S => (0, 1),
            Handle::E => (1, 0),
            Handle::W => (-1, 0),
            Handle::Ne => (1, -1),
            Handle::Nw => (-1, -1),
            Handle::Se => (1, 1),
            Handle::Sw => (-1, 1),
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(self, Handle::Ne | Handle::Nw | Handle::Se | Handle::Sw)
    }
}

/// Cursor style to show for the current hover/interaction, reported back to
/// the hosting adapter after every pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorKind {
    Default,
    /// Body hover and active drags.
    Move,
    /// Vertical resize (n/s).
    NsResize,
    /// Horizontal resize (e/w).
    EwResize,
    /// Diagonal resize (ne/sw).
    NeswResize,
    /// Diagonal resize (nw/se).
    NwseResize,
}

impl CursorKind {
    /// The CSS cursor name adapters feed to a canvas element.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorKind::Default => "default",
            CursorKind::Move => "move",
            CursorKind::NsResize => "ns-resize",
            CursorKind::EwResize => "ew-resize",
            CursorKind::NeswResize => "nesw-resize",
            CursorKind::NwseResize => "nwse-resize",
        }
    }
}

// ============================================================================
// Colors
// ============================================================================

/// 8-bit RGBA color for draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
