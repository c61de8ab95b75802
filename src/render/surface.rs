//! The drawable surface boundary.

use crate::types::{Color, SurfaceSize};

/// A 2D drawable surface owned by the display collaborator.
///
/// Coordinates are integer pixels: registry geometry stays in unrounded
/// normalized space and rounding happens exactly once, at this boundary.
/// `size()` must report the *currently displayed* dimensions - the renderer
/// re-queries it on every pass instead of caching, since layout may settle
/// after a resize.
pub trait DrawSurface {
    fn size(&self) -> SurfaceSize;

    /// Erase the whole surface.
    fn clear(&mut self);

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, line_width: f32);
}
