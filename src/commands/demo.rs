use super::Session;
use crate::{
    libs::{messages::Message, query::ListFilter, view::View},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Replace existing tasks without confirmation
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(args: DemoArgs) -> Result<()> {
    let mut session = Session::open()?;

    if !args.force && !session.manager.tasks().is_empty() {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReplaceWithDemo(session.manager.tasks().len()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let created = session.manager.seed_demo()?;
    msg_success!(Message::DemoTasksCreated(created.len()));
    View::tasks(&session.manager.list(&ListFilter::default()), &session.display())
}
