//! # Taskr - Command-Line Task Tracker
//!
//! A single-user command-line utility for tracking tasks in a local
//! SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Add, update, delete, and list tasks
//! - **Interactive Prompts**: All task data is collected from the console
//! - **Local Storage**: A single `tasks.sqlite3` file in the working directory
//! - **Optional Overwrite**: Updates keep any field whose replacement is blank
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskr::commands::Cli;
//! use taskr::db::db::Db;
//! use taskr::db::tasks::Tasks;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut tasks = Tasks::new(Db::new()?)?;
//!     Cli::menu(&mut tasks)
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
