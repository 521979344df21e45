//! Command-line interface for taskforge.
//!
//! Each subcommand lives in its own module with an `XxxArgs` struct parsed by
//! `clap` and a `cmd` function that runs it. Commands load the configuration,
//! open the task store it points at, call one operation and print the result.
//!
//! ## Commands
//!
//! - **add**, **edit**, **delete**, **copy**: create and change tasks
//! - **complete**, **uncomplete**, **archive**, **restore**: lifecycle changes
//! - **snooze**, **prioritize**: move the due date or the priority
//! - **list**, **list-archived**, **info**, **remind**: look at tasks
//! - **attach**: reference a file from a task
//! - **export**, **import**: JSON backup and merge
//! - **demo**, **init**: example data and configuration

pub mod add;
pub mod archive;
pub mod attach;
pub mod complete;
pub mod copy;
pub mod delete;
pub mod demo;
pub mod edit;
pub mod export;
pub mod import;
pub mod info;
pub mod init;
pub mod list;
pub mod list_archived;
pub mod prioritize;
pub mod remind;
pub mod restore;
pub mod snooze;
pub mod uncomplete;

use crate::libs::{config::Config, formatter::DisplaySettings, manager::TaskManager};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "List archived tasks")]
    ListArchived(list_archived::ListArchivedArgs),
    #[command(about = "Show detailed information about a task")]
    Info(info::InfoArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Mark a task as not completed")]
    Uncomplete(uncomplete::UncompleteArgs),
    #[command(about = "Edit an existing task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Archive a task")]
    Archive(archive::ArchiveArgs),
    #[command(about = "Restore a task from the archive")]
    Restore(restore::RestoreArgs),
    #[command(about = "Duplicate a task, optionally with a new due date or tags")]
    Copy(copy::CopyArgs),
    #[command(about = "Postpone a task's due date by a duration like 1d2h30m")]
    Snooze(snooze::SnoozeArgs),
    #[command(about = "Change a task's priority level")]
    Prioritize(prioritize::PrioritizeArgs),
    #[command(about = "Attach a file reference to a task")]
    Attach(attach::AttachArgs),
    #[command(about = "Show upcoming tasks with due dates")]
    Remind(remind::RemindArgs),
    #[command(about = "Export tasks to a JSON file")]
    Export(export::ExportArgs),
    #[command(about = "Import tasks from a JSON file")]
    Import(import::ImportArgs),
    #[command(about = "Replace all tasks with example tasks")]
    Demo(demo::DemoArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::ListArchived(args) => list_archived::cmd(args),
            Commands::Info(args) => info::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Uncomplete(args) => uncomplete::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Archive(args) => archive::cmd(args),
            Commands::Restore(args) => restore::cmd(args),
            Commands::Copy(args) => copy::cmd(args),
            Commands::Snooze(args) => snooze::cmd(args),
            Commands::Prioritize(args) => prioritize::cmd(args),
            Commands::Attach(args) => attach::cmd(args),
            Commands::Remind(args) => remind::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Demo(args) => demo::cmd(args),
            Commands::Init(args) => init::cmd(args),
        }
    }
}

/// Configuration plus the task store it points at.
pub struct Session {
    pub config: Config,
    pub manager: TaskManager,
}

impl Session {
    pub fn open() -> Result<Self> {
        let config = Config::read()?;
        let manager = TaskManager::open(config.data_file_path()?)?;
        Ok(Self { config, manager })
    }

    pub fn display(&self) -> DisplaySettings {
        self.config.display_settings()
    }
}
