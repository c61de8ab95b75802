//! Logging initialization for hosts and tests.
//!
//! The crate itself only emits `tracing` events; embedding applications that
//! already install a subscriber can ignore this module entirely.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Install an env-filtered fmt subscriber (`RUST_LOG`, default `info`).
/// Idempotent, and a no-op when the host already installed a global
/// subscriber.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
