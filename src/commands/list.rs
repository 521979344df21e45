use super::Session;
use crate::{
    libs::{messages::Message, query::ListFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show all tasks including completed ones
    #[arg(short, long)]
    all: bool,

    /// Show only completed tasks
    #[arg(short, long)]
    completed: bool,

    /// Filter tasks by tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Include archived tasks
    #[arg(long)]
    archived: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let session = Session::open()?;
    let filter = ListFilter::new(args.all, args.completed, args.tag.clone(), args.archived);
    let tasks = session.manager.list(&filter);

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let scope = if args.all {
        Message::AllTasksHeader
    } else if args.completed {
        Message::CompletedTasksHeader
    } else {
        Message::PendingTasksHeader
    };
    match args.tag {
        Some(tag) => msg_print!(Message::TaggedTasksHeader(scope.to_string(), tag), true),
        None => msg_print!(scope, true),
    }
    View::tasks(&tasks, &session.display())
}
