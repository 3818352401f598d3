//! Debug logging setup.
//!
//! The application is silent on the tracing side unless debug mode is
//! active (`TASKR_DEBUG` or `RUST_LOG` set). With debug mode on, the
//! message macros emit tracing events instead of plain console output,
//! and this module installs the subscriber that renders them.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber writing to stderr. No-op when debug
/// mode is off, so normal runs keep the plain console protocol.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    // try_init is a no-op if a subscriber is already set
    let _ = subscriber.try_init();
}
