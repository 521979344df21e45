use super::Session;
use crate::{
    libs::{formatter::format_datetime, messages::Message},
    msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct SnoozeArgs {
    /// ID or unique ID prefix of the task to snooze
    id: String,

    /// Duration to postpone, e.g. 1d, 2h, 30m or 1d2h30m
    duration: String,
}

pub fn cmd(args: SnoozeArgs) -> Result<()> {
    let mut session = Session::open()?;
    let snoozed = session.manager.snooze(&args.id, &args.duration)?;
    let pattern = &session.config.date_format;

    let describe = |due: Option<NaiveDateTime>| match due {
        Some(_) => format_datetime(due, pattern),
        None => "None".to_string(),
    };
    msg_success!(Message::TaskSnoozed(snoozed.task.id.clone()));
    msg_print!(Message::DueDateChanged(describe(snoozed.previous_due), describe(snoozed.task.due)));
    Ok(())
}
