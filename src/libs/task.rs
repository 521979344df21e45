//! Task record definition and field-level rules.
//!
//! A [`Task`] is the single entity kept in the store. The struct itself knows
//! how to validate its fields and how to perform its own state transitions
//! (complete, archive, snooze, bump); identifier assignment and persistence
//! live elsewhere.

use crate::libs::{
    error::{Result, TaskError},
    messages::Message,
};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Task priority levels, ordered `Low < Medium < High < Urgent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All levels in ascending order.
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    /// One ordinal step up. `Urgent` is the ceiling.
    pub fn bump(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High | Priority::Urgent => Priority::Urgent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(TaskError::Validation(Message::InvalidPriority(s.to_string()))),
        }
    }
}

/// Reference to a file attached to a task. Only metadata is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub path: PathBuf,
}

impl Attachment {
    /// Builds an attachment named after the final path component.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(TaskError::Validation(Message::EmptyAttachmentPath));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, alias = "due_date")]
    pub due: Option<NaiveDateTime>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub archived_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: NaiveDateTime,
}

/// Input for creating a task. The id and creation time are assigned on insert.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due: Option<NaiveDateTime>,
    pub tags: BTreeSet<String>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }
}

/// Partial update for [`Task`]. `None` leaves a field untouched; for the
/// nullable fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due: Option<Option<NaiveDateTime>>,
    pub tags: Option<BTreeSet<String>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none() && self.due.is_none() && self.tags.is_none()
    }
}

/// Parameters of a copy: an optional new due date and extra tags.
#[derive(Debug, Clone)]
pub struct CopyOptions {
    pub due: Option<NaiveDateTime>,
    pub tags: BTreeSet<String>,
    pub keep_tags: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            due: None,
            tags: BTreeSet::new(),
            keep_tags: true,
        }
    }
}

impl Task {
    pub fn new(id: String, draft: NewTask, created_at: NaiveDateTime) -> Result<Self> {
        let task = Task {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description,
            priority: draft.priority,
            due: draft.due,
            tags: draft.tags,
            completed: false,
            completed_at: None,
            archived: false,
            archived_at: None,
            attachments: Vec::new(),
            created_at,
        };
        task.validate()?;
        Ok(task)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() || self.id.trim() != self.id {
            return Err(TaskError::Validation(Message::InvalidTaskId(self.id.clone())));
        }
        if self.title.trim().is_empty() {
            return Err(TaskError::Validation(Message::EmptyTitle));
        }
        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(TaskError::Validation(Message::EmptyTag));
        }
        Ok(())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.due.is_some_and(|due| due < now)
    }

    /// Applies a patch in place and re-validates. Returns whether anything changed.
    ///
    /// On validation failure the task is left as it was.
    pub fn apply(&mut self, patch: &TaskPatch) -> Result<bool> {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            next.description = description.clone();
        }
        if let Some(priority) = patch.priority {
            next.priority = priority;
        }
        if let Some(due) = patch.due {
            next.due = due;
        }
        if let Some(tags) = &patch.tags {
            next.tags = tags.clone();
        }
        next.validate()?;

        let changed = next != *self;
        *self = next;
        Ok(changed)
    }

    /// Marks the task completed. Returns `false` when it already was.
    pub fn complete(&mut self, now: NaiveDateTime) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completed_at = Some(now);
        true
    }

    /// Marks the task pending again. Returns `false` when it already was.
    pub fn uncomplete(&mut self) -> bool {
        if !self.completed {
            return false;
        }
        self.completed = false;
        self.completed_at = None;
        true
    }

    pub fn archive(&mut self, now: NaiveDateTime) -> Result<()> {
        if self.archived {
            return Err(TaskError::StateConflict(Message::TaskAlreadyArchived(self.id.clone())));
        }
        self.archived = true;
        self.archived_at = Some(now);
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.archived {
            return Err(TaskError::StateConflict(Message::TaskNotArchived(self.id.clone())));
        }
        self.archived = false;
        self.archived_at = None;
        Ok(())
    }

    /// Pushes the due date forward; a task without one gets `now + by`.
    pub fn snooze(&mut self, by: Duration, now: NaiveDateTime) -> Result<()> {
        let base = self.due.unwrap_or(now);
        let due = base
            .checked_add_signed(by)
            .ok_or_else(|| TaskError::InvalidDuration(Message::DurationOverflow(by.to_string())))?;
        self.due = Some(due);
        Ok(())
    }

    /// Sets the priority directly, or bumps it one level. An explicit level wins.
    pub fn reprioritize(&mut self, priority: Option<Priority>, bump: bool) -> Result<()> {
        match (priority, bump) {
            (Some(level), _) => self.priority = level,
            (None, true) => self.priority = self.priority.bump(),
            (None, false) => return Err(TaskError::Validation(Message::PriorityOrBumpRequired)),
        }
        Ok(())
    }

    /// Builds a fresh, pending, active copy of this task under a new id.
    pub fn duplicate(&self, id: String, created_at: NaiveDateTime, options: &CopyOptions) -> Task {
        let tags = if options.keep_tags {
            self.tags.union(&options.tags).cloned().collect()
        } else {
            options.tags.clone()
        };

        Task {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            due: options.due.or(self.due),
            tags,
            completed: false,
            completed_at: None,
            archived: false,
            archived_at: None,
            attachments: self.attachments.clone(),
            created_at,
        }
    }
}
