//! Coordinate conversion between normalized and pixel space.
//!
//! This module centralizes the percentage↔pixel formulas so no caller ever
//! re-derives them. Registry values stay in unrounded normalized space; the
//! conversions here are pure and multiplicative, and integer rounding is
//! deferred to the draw boundary to avoid accumulated drift across repeated
//! edits.
//!
//! Precondition: every function requires a valid surface
//! ([`SurfaceSize::is_valid`]). Degenerate surfaces are a caller contract
//! violation — the display collaborator performs the "surface ready" check
//! before events reach the core — and are not defended against here.

use crate::types::{PixelPoint, PixelRect, Rect, SurfaceSize};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a normalized rectangle to pixel space for the given surface.
    #[inline]
    pub fn to_pixels(rect: Rect, surface: SurfaceSize) -> PixelRect {
        PixelRect {
            x: rect.x * surface.width,
            y: rect.y * surface.height,
            width: rect.width * surface.width,
            height: rect.height * surface.height,
        }
    }

    /// Convert a pixel rectangle back to normalized space.
    #[inline]
    pub fn to_normalized(rect: PixelRect, surface: SurfaceSize) -> Rect {
        Rect {
            x: rect.x / surface.width,
            y: rect.y / surface.height,
            width: rect.width / surface.width,
            height: rect.height / surface.height,
        }
    }

    /// Convert a pixel point to normalized `(x, y)`.
    #[inline]
    pub fn point_to_normalized(point: PixelPoint, surface: SurfaceSize) -> (f32, f32) {
        (point.x / surface.width, point.y / surface.height)
    }
}
