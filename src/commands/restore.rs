use super::Session;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// ID or unique ID prefix of the archived task
    id: String,
}

pub fn cmd(args: RestoreArgs) -> Result<()> {
    let mut session = Session::open()?;
    let task = session.manager.restore(&args.id)?;

    msg_success!(Message::TaskRestored(task.id));
    Ok(())
}
