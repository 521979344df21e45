use super::Session;
use crate::{libs::messages::Message, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// ID or unique ID prefix of the task to mark as completed
    id: String,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let mut session = Session::open()?;
    let outcome = session.manager.complete(&args.id)?;

    if outcome.changed {
        msg_success!(Message::TaskCompleted(outcome.task.id));
    } else {
        msg_warning!(Message::TaskAlreadyCompleted(outcome.task.id));
    }
    Ok(())
}
