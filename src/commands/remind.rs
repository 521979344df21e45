use super::Session;
use crate::{
    libs::{messages::Message, parse::parse_duration, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RemindArgs {
    /// Only show tasks due within this duration, e.g. 2d or 12h
    #[arg(short, long)]
    within: Option<String>,
}

pub fn cmd(args: RemindArgs) -> Result<()> {
    let session = Session::open()?;
    let within = args.within.as_deref().map(parse_duration).transpose()?;
    let upcoming = session.manager.upcoming(within);

    if upcoming.is_empty() {
        msg_info!(Message::NoUpcomingTasks);
        return Ok(());
    }

    msg_print!(Message::UpcomingTasksHeader, true);
    View::upcoming(&upcoming, &session.display(), session.manager.now())
}
