use std::process;
use taskr::commands::Cli;
use taskr::db::db::Db;
use taskr::db::tasks::Tasks;
use taskr::libs::logger;
use taskr::libs::messages::Message;
use taskr::msg_error;

fn main() {
    logger::init();

    let db = match Db::new() {
        Ok(db) => db,
        Err(e) => {
            msg_error!(Message::DbConnectionFailed(e.to_string()));
            return;
        }
    };

    // Schema initialization is the only fatal failure.
    let mut tasks = match Tasks::new(db) {
        Ok(tasks) => tasks,
        Err(e) => {
            msg_error!(Message::SchemaInitFailed(e.to_string()));
            process::exit(1);
        }
    };

    if let Err(e) = Cli::menu(&mut tasks) {
        msg_error!(Message::UnexpectedError(e.to_string()));
    }
}
