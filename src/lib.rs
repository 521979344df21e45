//! # Taskforge - local task tracking from the command line
//!
//! Keeps a personal task list in a single JSON file and manages it through
//! short commands.
//!
//! ## Features
//!
//! - **Task Records**: Title, description, priority, due date, tags and file attachments
//! - **Prefix Lookup**: Any unique leading part of an id selects a task
//! - **Lifecycle**: Complete, archive and restore without losing history
//! - **Scheduling**: Snooze due dates by `1d2h30m`-style durations, bump priorities
//! - **Backup**: JSON export and a merging import that never overwrites
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskforge::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
