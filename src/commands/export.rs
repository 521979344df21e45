use super::Session;
use crate::{
    libs::{export::Exporter, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file; defaults to taskforge_export_YYYYMMDD_HHMMSS.json
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let session = Session::open()?;
    let exporter = Exporter::new(args.output);
    let count = exporter.export(session.manager.tasks())?;

    msg_success!(Message::ExportCompleted(count, exporter.output_path().display().to_string()));
    Ok(())
}
