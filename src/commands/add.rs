use super::Session;
use crate::{
    libs::{
        messages::Message,
        parse::{parse_datetime, parse_tags},
        task::{NewTask, Priority},
        view::View,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// The title of the task
    title: String,

    /// Task description
    #[arg(short, long = "desc")]
    description: Option<String>,

    /// Task priority; the configured default when omitted
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// Due date, e.g. '2025-05-10 14:00' or 'tomorrow'
    #[arg(long)]
    due: Option<String>,

    /// Comma-separated list of tags
    #[arg(short, long)]
    tags: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut session = Session::open()?;
    let now = session.manager.now();

    let draft = NewTask {
        title: args.title,
        description: args.description,
        priority: args.priority.unwrap_or(session.config.default_priority),
        due: args.due.as_deref().map(|due| parse_datetime(due, now)).transpose()?,
        tags: args.tags.as_deref().map(parse_tags).unwrap_or_default(),
    };
    let task = session.manager.add(draft)?;

    msg_success!(Message::TaskCreated(task.id.clone()));
    View::task_details(&task, &session.display(), now)
}
