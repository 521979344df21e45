use super::Session;
use crate::{
    libs::{
        formatter::{short_id, DisplaySettings},
        messages::Message,
        task::Task,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// ID or unique ID prefix of the task
    id: String,
}

pub fn cmd(args: InfoArgs) -> Result<()> {
    let session = Session::open()?;
    let task = session.manager.info(&args.id)?;
    let settings = session.display();

    msg_print!(details_header(&task, &settings), true);
    View::task_details(&task, &settings, session.manager.now())
}

fn details_header(task: &Task, settings: &DisplaySettings) -> Message {
    Message::TaskDetailsHeader(short_id(&task.id, settings.id_length).to_string())
}
