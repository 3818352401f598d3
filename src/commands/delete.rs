use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, prompt::Prompter},
    msg_error, msg_success,
};
use anyhow::Result;
use std::io::BufRead;

pub fn cmd<R: BufRead>(tasks: &mut Tasks, prompter: &mut Prompter<R>) -> Result<()> {
    let id = prompter.read_id(Message::PromptDeleteId)?;

    // Deleting an id that matches no row still counts as success.
    if let Err(e) = tasks.delete(id) {
        msg_error!(Message::TaskDeleteFailed(e.to_string()));
        return Ok(());
    }

    msg_success!(Message::TaskDeleted);
    Ok(())
}
