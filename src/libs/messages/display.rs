//! Display implementation for application messages.
//!
//! Every user-facing string lives in this one match so the console wording
//! stays in a single place. Prompt variants render without the trailing
//! `: `, which the prompter appends itself.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded => "Task added successfully".to_string(),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskAddFailed(error) => format!("Error adding task: {}", error),
            Message::TaskFetchFailed(error) => format!("Error fetching task details: {}", error),
            Message::TaskUpdateFailed(error) => format!("Error updating task: {}", error),
            Message::TaskDeleteFailed(error) => format!("Error deleting task: {}", error),
            Message::TaskListFailed(error) => format!("Error fetching tasks: {}", error),
            Message::TaskScanFailed(error) => format!("Error scanning task: {}", error),
            Message::AllTasksHeader => "All Tasks:".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbConnectionFailed(error) => format!("Error opening database connection: {}", error),
            Message::SchemaInitFailed(error) => format!("Error creating table: {}", error),

            // === CLI MESSAGES ===
            Message::InvalidCommand => "Invalid command. Use 'taskr' with one of the following commands: add, update, delete, list".to_string(),
            Message::UnexpectedError(error) => format!("Unexpected error: {}", error),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskPriority => "Enter task priority (low/medium/high)".to_string(),
            Message::PromptTaskCategory => "Enter task category".to_string(),
            Message::PromptUpdateId => "Enter task ID to update".to_string(),
            Message::PromptUpdatedTitle => "Enter updated task title (press Enter to skip)".to_string(),
            Message::PromptUpdatedPriority => "Enter updated task priority (press Enter to skip)".to_string(),
            Message::PromptUpdatedCategory => "Enter updated task category (press Enter to skip)".to_string(),
            Message::PromptDeleteId => "Enter task ID to delete".to_string(),
        };

        write!(f, "{}", text)
    }
}
