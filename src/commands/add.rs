use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, prompt::Prompter, task::Task},
    msg_error, msg_success,
};
use anyhow::Result;
use std::io::BufRead;

pub fn cmd<R: BufRead>(tasks: &mut Tasks, prompter: &mut Prompter<R>) -> Result<()> {
    let title = prompter.read_line(Message::PromptTaskTitle)?;
    let priority = prompter.read_token(Message::PromptTaskPriority)?;
    let category = prompter.read_line(Message::PromptTaskCategory)?;

    let task = Task::new(&title, &priority, &category);
    if let Err(e) = tasks.insert(&task) {
        msg_error!(Message::TaskAddFailed(e.to_string()));
        return Ok(());
    }

    msg_success!(Message::TaskAdded);
    Ok(())
}
