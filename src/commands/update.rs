//! Interactive task update.
//!
//! The flow is fetch-then-merge: the stored row is loaded first, each
//! replacement value is read as a single token, and a blank answer keeps
//! the stored value. The merged record is then written back whole.

use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, prompt::Prompter},
    msg_error, msg_success,
};
use anyhow::Result;
use std::io::BufRead;

pub fn cmd<R: BufRead>(tasks: &mut Tasks, prompter: &mut Prompter<R>) -> Result<()> {
    let id = prompter.read_id(Message::PromptUpdateId)?;

    let mut task = match tasks.get_by_id(id) {
        Ok(task) => task,
        Err(e) => {
            msg_error!(Message::TaskFetchFailed(e.to_string()));
            return Ok(());
        }
    };

    let title = prompter.read_token(Message::PromptUpdatedTitle)?;
    if !title.is_empty() {
        task.title = title;
    }

    let priority = prompter.read_token(Message::PromptUpdatedPriority)?;
    if !priority.is_empty() {
        task.priority = priority;
    }

    let category = prompter.read_token(Message::PromptUpdatedCategory)?;
    if !category.is_empty() {
        task.category = category;
    }

    if let Err(e) = tasks.update(&task) {
        msg_error!(Message::TaskUpdateFailed(e.to_string()));
        return Ok(());
    }

    msg_success!(Message::TaskUpdated);
    Ok(())
}
