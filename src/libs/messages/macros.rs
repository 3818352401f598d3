//! Output macros with conditional tracing support.
//!
//! In normal runs messages go straight to the console so the interactive
//! protocol stays plain. When debug mode is enabled (`TASKR_DEBUG` or
//! `RUST_LOG` set) the same macros emit tracing events instead, which the
//! subscriber installed by [`crate::libs::logger::init`] renders to stderr.

use std::sync::OnceLock;

/// Cached debug mode flag; environment variables are checked once.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKR_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a success message with ✅ prefix to stdout.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Debug-only diagnostics with 🔍 prefix. Suppressed entirely outside
/// debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
