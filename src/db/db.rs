use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Database file, relative to the working directory.
pub const DB_FILE_NAME: &str = "tasks.sqlite3";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the process-wide database handle at the fixed relative path.
    ///
    /// The connection is closed when the handle is dropped, which happens
    /// on every normal exit path.
    pub fn new() -> Result<Db> {
        Self::open(Path::new(DB_FILE_NAME))
    }

    /// Opens a database at an explicit path. Tests use this to point the
    /// store at a temporary directory.
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        msg_debug!(format!("Opened task database at {}", path.display()));

        Ok(Db { conn })
    }
}
