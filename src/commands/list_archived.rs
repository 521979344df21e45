use super::Session;
use crate::{
    libs::{messages::Message, query::ListFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArchivedArgs {
    /// Show all archived tasks including completed ones
    #[arg(short, long)]
    all: bool,

    /// Show only completed archived tasks
    #[arg(short, long)]
    completed: bool,

    /// Filter archived tasks by tag
    #[arg(short, long)]
    tag: Option<String>,
}

pub fn cmd(args: ListArchivedArgs) -> Result<()> {
    let session = Session::open()?;
    let filter = ListFilter::archived(args.all, args.completed, args.tag.clone());
    let tasks = session.manager.list(&filter);

    if tasks.is_empty() {
        msg_info!(Message::NoArchivedTasksFound);
        return Ok(());
    }

    let scope = if args.all {
        Message::AllArchivedTasksHeader
    } else if args.completed {
        Message::ArchivedCompletedTasksHeader
    } else {
        Message::ArchivedPendingTasksHeader
    };
    match args.tag {
        Some(tag) => msg_print!(Message::TaggedTasksHeader(scope.to_string(), tag), true),
        None => msg_print!(scope, true),
    }
    View::archived_tasks(&tasks, &session.display())
}
