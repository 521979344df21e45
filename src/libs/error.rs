//! Error kinds produced by the task store and its operations.
//!
//! Every variant renders through [`Message`], so an error printed by the
//! command layer reads exactly like the rest of the application output.
//! Errors are values: a failed operation leaves the store as it was, and the
//! caller decides whether to continue with the next command.

use crate::libs::messages::Message;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// No task id starts with the given prefix.
    #[error("{}", Message::TaskNotFound(.0.clone()))]
    NotFound(String),

    /// The prefix is shared by several tasks; `candidates` holds every match.
    #[error("{}", Message::AmbiguousTaskId(.prefix.clone(), .candidates.clone()))]
    AmbiguousId { prefix: String, candidates: Vec<String> },

    /// Field-level validation failed (title, tag, priority token, date).
    #[error("{0}")]
    Validation(Message),

    /// Snooze expression does not follow the `<N>d<N>h<N>m` grammar.
    #[error("{0}")]
    InvalidDuration(Message),

    /// The requested transition does not apply to the task's current state.
    #[error("{0}")]
    StateConflict(Message),

    /// The backing file exists but cannot be understood. Never repaired automatically.
    #[error("{}", Message::StoreCorrupted(.path.display().to_string(), .reason.clone()))]
    CorruptStore { path: PathBuf, reason: String },

    /// The import document was rejected before anything was applied.
    #[error("{}", Message::ImportFailed(.path.display().to_string(), .reason.to_string()))]
    ImportFormat { path: PathBuf, reason: Message },

    /// Reading or rewriting a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
