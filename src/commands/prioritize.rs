use super::Session;
use crate::{
    libs::{formatter::format_priority, messages::Message, task::Priority},
    msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct PrioritizeArgs {
    /// ID or unique ID prefix of the task to prioritize
    id: String,

    /// Set task priority directly
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// Bump task priority up one level
    #[arg(short, long)]
    bump: bool,
}

pub fn cmd(args: PrioritizeArgs) -> Result<()> {
    let mut session = Session::open()?;
    let current = session.manager.info(&args.id)?;

    let priority = match (args.priority, args.bump) {
        (None, false) => Some(select_priority(current.priority)?),
        (priority, _) => priority,
    };
    if priority.is_none() && current.priority == Priority::Urgent {
        msg_warning!(Message::PriorityAlreadyHighest(current.id));
        return Ok(());
    }

    let change = session.manager.prioritize(&current.id, priority, args.bump)?;
    msg_success!(Message::TaskUpdated(change.task.id.clone()));
    msg_print!(Message::PriorityChanged(
        format_priority(change.previous),
        format_priority(change.task.priority)
    ));
    Ok(())
}

fn select_priority(current: Priority) -> Result<Priority> {
    let levels: Vec<String> = Priority::ALL.iter().map(|p| format_priority(*p)).collect();
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectPriority.to_string())
        .items(&levels)
        .default(Priority::ALL.iter().position(|p| *p == current).unwrap_or_default())
        .interact()?;

    Ok(Priority::ALL[selected])
}
