#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded,
    TaskUpdated,
    TaskDeleted,
    TaskAddFailed(String),
    TaskFetchFailed(String),
    TaskUpdateFailed(String),
    TaskDeleteFailed(String),
    TaskListFailed(String),
    TaskScanFailed(String),
    AllTasksHeader,

    // === DATABASE MESSAGES ===
    DbConnectionFailed(String),
    SchemaInitFailed(String),

    // === CLI MESSAGES ===
    InvalidCommand,
    UnexpectedError(String),

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskPriority,
    PromptTaskCategory,
    PromptUpdateId,
    PromptUpdatedTitle,
    PromptUpdatedPriority,
    PromptUpdatedCategory,
    PromptDeleteId,
}
