use super::Session;
use crate::{libs::messages::Message, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UncompleteArgs {
    /// ID or unique ID prefix of the task to mark as not completed
    id: String,
}

pub fn cmd(args: UncompleteArgs) -> Result<()> {
    let mut session = Session::open()?;
    let outcome = session.manager.uncomplete(&args.id)?;

    if outcome.changed {
        msg_success!(Message::TaskUncompleted(outcome.task.id));
    } else {
        msg_warning!(Message::TaskAlreadyPending(outcome.task.id));
    }
    Ok(())
}
