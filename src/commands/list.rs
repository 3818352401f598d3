use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_error,
};
use anyhow::Result;

pub fn cmd(tasks: &mut Tasks) -> Result<()> {
    let all = match tasks.fetch_all() {
        Ok(all) => all,
        Err(e) => {
            msg_error!(Message::TaskListFailed(e.to_string()));
            return Ok(());
        }
    };

    View::tasks(&all);
    Ok(())
}
