use super::Session;
use crate::{
    libs::{export::Importer, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file produced by `export`
    input: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let mut session = Session::open()?;
    let importer = Importer::new(args.input);
    let summary = importer.import(session.manager.tasks_mut())?;

    msg_success!(Message::ImportCompleted(
        summary.imported,
        summary.skipped,
        importer.input_path().display().to_string()
    ));
    Ok(())
}
