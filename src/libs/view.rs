use super::messages::Message;
use super::task::Task;

pub struct View {}

impl View {
    /// Prints the full task listing: a blank line, the header, then one
    /// fixed-format line per task.
    pub fn tasks(tasks: &[Task]) {
        println!("\n{}", Message::AllTasksHeader);
        for task in tasks {
            println!(
                "ID: {}, Title: {}, Priority: {}, Category: {}, Completed: {}",
                task.id.unwrap_or(0),
                task.title,
                task.priority,
                task.category,
                task.completed
            );
        }
    }
}
