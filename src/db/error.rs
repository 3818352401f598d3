//! Storage error types.
//!
//! Every fallible store operation returns a [`DbError`] so callers can
//! distinguish a missing row from a broken connection without matching on
//! driver-level error codes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The tasks table could not be created at startup.
    #[error("schema initialization failed: {0}")]
    Schema(#[source] rusqlite::Error),

    /// An INSERT, UPDATE or DELETE statement failed.
    #[error("storage write failed: {0}")]
    Write(#[source] rusqlite::Error),

    /// A SELECT statement failed before producing rows.
    #[error("storage read failed: {0}")]
    Read(#[source] rusqlite::Error),

    /// No task row carries the requested id.
    #[error("task with ID {0} not found")]
    NotFound(i64),

    /// A fetched row did not decode into a task.
    #[error("malformed task row: {0}")]
    Decode(#[source] rusqlite::Error),
}
