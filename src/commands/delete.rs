use super::Session;
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID or unique ID prefix of the task to delete
    id: String,

    /// Delete without confirmation
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut session = Session::open()?;
    let task = session.manager.info(&args.id)?;

    if !args.force {
        View::task_details(&task, &session.display(), session.manager.now())?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let removed = session.manager.delete(&task.id)?;
    msg_success!(Message::TaskDeleted(removed.id));
    Ok(())
}
