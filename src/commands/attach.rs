use super::Session;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AttachArgs {
    /// ID or unique ID prefix of the task
    id: String,

    /// Path of the file to reference; the file is not copied
    path: PathBuf,
}

pub fn cmd(args: AttachArgs) -> Result<()> {
    let mut session = Session::open()?;
    let task = session.manager.attach(&args.id, &args.path)?;

    if let Some(attachment) = task.attachments.last() {
        msg_success!(Message::AttachmentAdded(attachment.name.clone(), task.id.clone()));
    }
    Ok(())
}
