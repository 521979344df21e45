use super::Session;
use crate::{
    libs::{
        messages::Message,
        parse::{parse_datetime, parse_tags},
        task::CopyOptions,
        view::View,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// ID or unique ID prefix of the task to copy
    id: String,

    /// New due date for the copied task
    #[arg(long)]
    due: Option<String>,

    /// Comma-separated list of tags for the copied task
    #[arg(short, long)]
    tags: Option<String>,

    /// Drop the original task's tags and use only --tags
    #[arg(long)]
    no_keep_tags: bool,
}

pub fn cmd(args: CopyArgs) -> Result<()> {
    let mut session = Session::open()?;
    let now = session.manager.now();

    let options = CopyOptions {
        due: args.due.as_deref().map(|due| parse_datetime(due, now)).transpose()?,
        tags: args.tags.as_deref().map(parse_tags).unwrap_or_default(),
        keep_tags: !args.no_keep_tags,
    };
    let copy = session.manager.copy(&args.id, &options)?;

    msg_success!(Message::TaskCopied(copy.id.clone()));
    View::task_details(&copy, &session.display(), now)
}
