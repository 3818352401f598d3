//! Shared library modules.
//!
//! Everything the command handlers lean on lives here: the task model,
//! console input and output, the message catalog, and debug logging.

/// Debug-mode tracing subscriber setup.
pub mod logger;

/// User-facing message catalog and output macros.
pub mod messages;

/// Interactive console input.
pub mod prompt;

/// The task entity.
pub mod task;

/// Console rendering of task listings.
pub mod view;
