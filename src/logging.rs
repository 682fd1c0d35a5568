//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! host's call. `init` installs the `fmt` subscriber once and reports whether
//! this call was the one that did it.

use tracing::Level;

/// Install the global `fmt` subscriber at `level`.
///
/// Returns `false` when a global subscriber is already set (for example by
/// an earlier call or by a test harness).
pub fn init(level: Level) -> bool {
    match tracing_subscriber::fmt().with_max_level(level).with_target(false).try_init() {
        Ok(()) => {
            tracing::debug!(%level, "logging initialized");
            true
        }
        Err(_) => false,
    }
}
