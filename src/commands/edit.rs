use super::Session;
use crate::{
    libs::{
        messages::Message,
        parse::{parse_datetime, parse_tags},
        task::{Priority, TaskPatch},
        view::View,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;

/// Keyword that clears `--due` or `--tags`.
const CLEAR_KEYWORD: &str = "none";

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID or unique ID prefix of the task to edit
    id: String,

    /// New title for the task
    #[arg(long)]
    title: Option<String>,

    /// New description; an empty string keeps an empty description
    #[arg(short, long = "desc")]
    description: Option<String>,

    /// New priority for the task
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// New due date, or 'none' to remove it
    #[arg(long)]
    due: Option<String>,

    /// New comma-separated list of tags, or 'none' to remove all
    #[arg(long)]
    tags: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut session = Session::open()?;
    let now = session.manager.now();

    let patch = TaskPatch {
        title: args.title,
        description: args.description.map(Some),
        priority: args.priority,
        due: args.due.as_deref().map(|due| parse_due(due, now)).transpose()?,
        tags: args.tags.as_deref().map(|tags| {
            if tags.trim().eq_ignore_ascii_case(CLEAR_KEYWORD) {
                Default::default()
            } else {
                parse_tags(tags)
            }
        }),
    };
    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let before = session.manager.info(&args.id)?;
    let task = session.manager.edit(&args.id, &patch)?;
    if task == before {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    msg_success!(Message::TaskUpdated(task.id.clone()));
    View::task_details(&task, &session.display(), now)
}

fn parse_due(value: &str, now: NaiveDateTime) -> Result<Option<NaiveDateTime>> {
    if value.trim().eq_ignore_ascii_case(CLEAR_KEYWORD) {
        return Ok(None);
    }
    Ok(Some(parse_datetime(value, now)?))
}
