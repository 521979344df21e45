//! Core library modules for taskforge.
//!
//! ## Layout
//!
//! - **Records**: [`task`] defines the task entity, [`identifier`] assigns ids
//! - **Operations**: [`manager`] mutates tasks, [`query`] filters and sorts them
//! - **Parsing**: [`parse`] turns command-line text into dates, tags and durations
//! - **Exchange**: [`export`] writes and merges JSON backups
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`], [`messages`]
//! - **Presentation**: [`formatter`] and [`view`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskforge::libs::manager::TaskManager;
//! use taskforge::libs::task::NewTask;
//!
//! let mut manager = TaskManager::open("tasks.json")?;
//! let task = manager.add(NewTask::new("Buy groceries"))?;
//! manager.complete(&task.id[..10])?;
//! # Ok::<(), taskforge::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod identifier;
pub mod manager;
pub mod messages;
pub mod parse;
pub mod query;
pub mod task;
pub mod view;
