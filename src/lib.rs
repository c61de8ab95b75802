//! Synchronized rectangular mask editing over a pair of image surfaces.
//!
//! Two images are displayed side by side and the user overlays rectangular
//! masks on them; any mask added, moved, resized, or removed on one image is
//! reflected identically - in normalized coordinates - on the other, even
//! when the two images display at different pixel sizes. At submission time
//! the masks serialize to the normalized rectangle lists the comparison
//! backend consumes.
//!
//! The crate is display-agnostic: pointer events come in with the owning
//! slot and that surface's current pixel size, draw calls go out through the
//! [`DrawSurface`] trait, and redraws are requested through an event queue
//! the hosting adapter drains. See [`MaskEditor`] for the full protocol.
//!
//! ## Module map
//!
//! - [`types`] - Normalized/pixel geometry, mask kinds, handles, cursors
//! - [`constants`] - Geometry invariants and defaults
//! - [`coords`] - Normalized↔pixel conversion
//! - [`registry`] - Per-slot registries and the pair synchronization rule
//! - [`spatial_index`] - R-tree over active masks for hit testing
//! - [`hit_testing`] - Mask/handle resolution and cursor lookup
//! - [`input`] - The pointer interaction state machine
//! - [`render`] - The per-slot render pass and surface trait
//! - [`export`] - Backend rectangle serialization
//! - [`editor`] - The context object tying it all together
//! - [`settings`], [`logging`], [`perf`] - Ambient concerns

pub mod constants;
pub mod coords;
pub mod editor;
pub mod export;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod perf;
pub mod registry;
pub mod render;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use editor::MaskEditor;
pub use input::InteractionState;
pub use registry::{MaskRegistry, RegistryPair};
pub use render::DrawSurface;
pub use settings::{EditorSettings, SettingsError};
pub use types::{
    Color, CursorKind, Handle, MaskKind, PixelPoint, PixelRect, Preset, Rect, Slot, SurfaceSize,
};
