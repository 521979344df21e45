use super::Session;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ArchiveArgs {
    /// ID or unique ID prefix of the task to archive
    id: String,
}

pub fn cmd(args: ArchiveArgs) -> Result<()> {
    let mut session = Session::open()?;
    let task = session.manager.archive(&args.id)?;

    msg_success!(Message::TaskArchived(task.id));
    Ok(())
}
