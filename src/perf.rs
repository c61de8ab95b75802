//! Performance profiling instrumentation.
//!
//! RAII-scoped timers for the pointer-event and render hot paths, compiled
//! to nothing unless the `profiling` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! maskpair = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use maskpair::profile_scope;
//!
//! fn handle_mouse_move() {
//!     profile_scope!("handle_mouse_move");
//!     // ... event handling code ...
//! }
//! ```

use std::time::Instant;

use tracing::debug;

/// Scopes slower than this log at debug level even without a threshold.
pub const SLOW_SCOPE_MS: f64 = 8.0;

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

/// RAII timer that reports its scope's duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self { name, start: Instant::now() }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms >= SLOW_SCOPE_MS {
            debug!(scope = self.name, elapsed_ms, "slow scope");
        } else {
            tracing::trace!(scope = self.name, elapsed_ms, "scope timing");
        }
    }
}
