//! Application-wide constants.
//!
//! Centralizes magic numbers and default geometry to make the codebase
//! more maintainable and self-documenting.

use crate::types::{Color, Rect};

// ============================================================================
// Geometry Invariants
// ============================================================================

/// Minimum normalized width/height a mask may reach through any edit.
/// Resizes that would go below this are clamped, never rejected.
pub const MIN_MASK_SIZE: f32 = 0.05;

// ============================================================================
// Handle Metrics
// ============================================================================

/// Hit radius in pixels around corner points and edge strips.
pub const HANDLE_HIT_RADIUS: f32 = 8.0;

/// Side length in pixels of the drawn handle squares.
pub const HANDLE_SIZE: f32 = 8.0;

/// Line width in pixels of the manipulation outline.
pub const OUTLINE_WIDTH: f32 = 2.0;

// ============================================================================
// Default Mask Geometry
// ============================================================================

/// Horizontal band across the top of the image.
pub const TOP_BAND_DEFAULT: Rect = Rect::new(0.0, 0.0, 1.0, 0.35);

/// Horizontal band across the bottom of the image.
pub const BOTTOM_BAND_DEFAULT: Rect = Rect::new(0.0, 0.65, 1.0, 0.35);

/// Vertical band along the left edge.
pub const LEFT_BAND_DEFAULT: Rect = Rect::new(0.0, 0.0, 0.35, 1.0);

/// Vertical band along the right edge.
pub const RIGHT_BAND_DEFAULT: Rect = Rect::new(0.65, 0.0, 0.35, 1.0);

/// Square over the image center.
pub const CENTER_DEFAULT: Rect = Rect::new(0.3, 0.3, 0.4, 0.4);

// ============================================================================
// Default Colors
// ============================================================================

/// Opaque fill for mask bodies; the comparison backend blacks out the same
/// regions, so the preview matches what gets compared.
pub const MASK_FILL: Color = Color::rgb(0, 0, 0);

/// Outline drawn around the mask being dragged or resized.
pub const MANIPULATION_OUTLINE: Color = Color::rgb(255, 0, 0);

/// Fill for the 8 handle squares shown while resizing.
pub const HANDLE_FILL: Color = Color::rgb(255, 0, 0);
