//! Persistence layer built on SQLite.
//!
//! One database file, one table. The [`db::Db`] handle is opened once at
//! startup and handed to [`tasks::Tasks`], which owns every SQL statement
//! the application runs.

/// Database connection management.
pub mod db;

/// Typed storage errors.
pub mod error;

/// CRUD operations for the tasks table.
pub mod tasks;
