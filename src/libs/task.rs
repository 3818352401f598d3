#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub priority: String,
    pub category: String,
    pub completed: bool,
}

impl Task {
    /// Builds an unsaved task. The id is assigned on insert and every new
    /// task starts out incomplete.
    pub fn new(title: &str, priority: &str, category: &str) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            priority: priority.to_string(),
            category: category.to_string(),
            completed: false,
        }
    }
}
