//! Pointer input handling for the two mask surfaces.
//!
//! This module implements all pointer interaction logic for the editor:
//! grabbing a mask body to drag it, grabbing a handle to resize, and the
//! cosmetic hover pass that keeps the cursor style honest.
//!
//! ## Architecture
//!
//! An explicit state machine (`InteractionState`) tracks the current
//! interaction mode. Events arrive with the owning slot and that surface's
//! current pixel size; pixel geometry is re-derived from that size on every
//! event rather than cached, so late layout settling cannot desynchronize
//! the two surfaces.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine enum and helper methods
//! - `mouse_down` - Pointer down (gesture entry: drag vs. resize)
//! - `drag` - Pointer move (live geometry updates, hover cursor)
//! - `mouse_up` - Pointer up / leave (gesture exit)

mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use state::InteractionState;
