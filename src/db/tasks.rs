//! Task persistence over the local SQLite database.
//!
//! Owns the `tasks` table and provides the CRUD surface the command
//! handlers drive. Schema creation is idempotent and runs once at
//! startup before any command executes.

use super::db::Db;
use super::error::DbError;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_error;
use rusqlite::{params, Connection, OptionalExtension};

/// Idempotent schema for the tasks table. Ids are assigned by the
/// database and never reused after deletion.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    priority TEXT,
    category TEXT,
    completed BOOLEAN
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, priority, category, completed) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS: &str = "SELECT id, title, priority, category, completed FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, priority, category, completed FROM tasks WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?1, priority = ?2, category = ?3 WHERE id = ?4";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Takes ownership of the database handle and ensures the tasks table
    /// exists. A schema failure here is fatal for the process.
    pub fn new(db: Db) -> Result<Tasks, DbError> {
        db.conn.execute(SCHEMA_TASKS, []).map_err(DbError::Schema)?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new task row. The generated id stays inside the store.
    pub fn insert(&mut self, task: &Task) -> Result<(), DbError> {
        self.conn
            .execute(INSERT_TASK, params![task.title, task.priority, task.category, task.completed])
            .map_err(DbError::Write)?;

        Ok(())
    }

    /// Looks up a single task by its id.
    pub fn get_by_id(&mut self, id: i64) -> Result<Task, DbError> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    priority: row.get(2)?,
                    category: row.get(3)?,
                    completed: row.get(4)?,
                })
            })
            .optional()
            .map_err(DbError::Read)?
            .ok_or(DbError::NotFound(id))
    }

    /// Writes the mutable fields of an existing task back as a whole.
    /// Callers merge replacement values against the stored row first.
    pub fn update(&mut self, task: &Task) -> Result<(), DbError> {
        let affected = self
            .conn
            .execute(UPDATE_TASK, params![task.title, task.priority, task.category, task.id])
            .map_err(DbError::Write)?;

        if affected == 0 {
            return Err(DbError::NotFound(task.id.unwrap_or(0)));
        }

        Ok(())
    }

    /// Deletes a task by id. Deleting an id with no row behind it is a
    /// no-op, so the affected count is returned instead of an error.
    pub fn delete(&mut self, id: i64) -> Result<usize, DbError> {
        self.conn.execute(DELETE_TASK, params![id]).map_err(DbError::Write)
    }

    /// Fetches every task in insertion order. A row that fails to decode
    /// is reported and skipped rather than aborting the whole listing.
    pub fn fetch_all(&mut self) -> Result<Vec<Task>, DbError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS).map_err(DbError::Read)?;
        let task_iter = stmt
            .query_map([], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    priority: row.get(2)?,
                    category: row.get(3)?,
                    completed: row.get(4)?,
                })
            })
            .map_err(DbError::Read)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            match task {
                Ok(task) => tasks.push(task),
                Err(e) => msg_error!(Message::TaskScanFailed(DbError::Decode(e).to_string())),
            }
        }

        Ok(tasks)
    }
}
