//! Canvas rendering - mask fills and manipulation affordances.
//!
//! The drawable surface is a trait so the core renders against anything the
//! hosting adapter provides - a real canvas binding in production, a
//! command-recording stub in tests.
//!
//! ## Modules
//!
//! - `surface` - The `DrawSurface` trait (integer-pixel draw boundary)
//! - `canvas` - The per-slot render pass

mod canvas;
mod surface;

pub use canvas::render_slot;
pub use surface::DrawSurface;
