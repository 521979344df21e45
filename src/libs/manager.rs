//! Task operations built on the store and the query engine.
//!
//! [`TaskManager`] is what the command layer talks to. Each operation
//! resolves its target through [`Tasks::resolve`], applies the change to a
//! copy of the task, and hands it back to the store, which persists before
//! the call returns. Errors leave the store untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskforge::libs::manager::TaskManager;
//! use taskforge::libs::task::{NewTask, Priority};
//!
//! let mut manager = TaskManager::open("tasks.json")?;
//! let task = manager.add(NewTask::new("Pay electricity bill"))?;
//! manager.prioritize(&task.id, Some(Priority::Urgent), false)?;
//! manager.snooze(&task.id, "1d2h")?;
//! # Ok::<(), taskforge::libs::error::TaskError>(())
//! ```

use crate::db::tasks::Tasks;
use crate::libs::{
    error::Result,
    identifier::generate_id,
    parse::{end_of_day, parse_duration},
    query::{self, ListFilter, Upcoming},
    task::{Attachment, CopyOptions, NewTask, Priority, Task, TaskPatch},
};
use chrono::{Duration, Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Source of the current time, replaceable in tests.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn demo_task(title: &str, description: Option<&str>, priority: Priority, due: Option<NaiveDateTime>, tags: &[&str]) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: description.map(str::to_string),
        priority,
        due,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Result of an idempotent toggle: the task and whether it actually changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Toggled {
    pub task: Task,
    pub changed: bool,
}

/// Result of a snooze, with the due date before the change.
#[derive(Debug, Clone, PartialEq)]
pub struct Snoozed {
    pub task: Task,
    pub previous_due: Option<NaiveDateTime>,
}

/// Result of a priority change, with the level before the change.
#[derive(Debug, Clone, PartialEq)]
pub struct Reprioritized {
    pub task: Task,
    pub previous: Priority,
}

pub struct TaskManager {
    tasks: Tasks,
    clock: Clock,
}

impl TaskManager {
    /// Opens the store at `path` using the local wall clock.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(Tasks::open(path)?))
    }

    pub fn new(tasks: Tasks) -> Self {
        Self::with_clock(tasks, local_now)
    }

    pub fn with_clock(tasks: Tasks, clock: Clock) -> Self {
        Self { tasks, clock }
    }

    pub fn tasks(&self) -> &Tasks {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut Tasks {
        &mut self.tasks
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Creates a task with a newly generated id.
    pub fn add(&mut self, draft: NewTask) -> Result<Task> {
        let now = self.now();
        let task = Task::new(self.tasks.next_id(now), draft, now)?;
        self.tasks.insert(task.clone())?;
        Ok(task)
    }

    /// Returns the task identified by `id_or_prefix`.
    pub fn info(&self, id_or_prefix: &str) -> Result<Task> {
        self.tasks.resolve(id_or_prefix).cloned()
    }

    /// Applies only the fields set in `patch`.
    pub fn edit(&mut self, id_or_prefix: &str, patch: &TaskPatch) -> Result<Task> {
        let mut task = self.info(id_or_prefix)?;
        if task.apply(patch)? {
            self.tasks.update(task.clone())?;
        }
        Ok(task)
    }

    pub fn complete(&mut self, id_or_prefix: &str) -> Result<Toggled> {
        let now = self.now();
        self.toggle(id_or_prefix, |task| task.complete(now))
    }

    pub fn uncomplete(&mut self, id_or_prefix: &str) -> Result<Toggled> {
        self.toggle(id_or_prefix, Task::uncomplete)
    }

    /// Removes the task permanently. Any confirmation happens before this call.
    pub fn delete(&mut self, id_or_prefix: &str) -> Result<Task> {
        let id = self.tasks.resolve(id_or_prefix)?.id.clone();
        self.tasks.remove(&id)
    }

    pub fn archive(&mut self, id_or_prefix: &str) -> Result<Task> {
        let now = self.now();
        let mut task = self.info(id_or_prefix)?;
        task.archive(now)?;
        self.tasks.update(task.clone())?;
        Ok(task)
    }

    pub fn restore(&mut self, id_or_prefix: &str) -> Result<Task> {
        let mut task = self.info(id_or_prefix)?;
        task.restore()?;
        self.tasks.update(task.clone())?;
        Ok(task)
    }

    /// Creates a pending, active duplicate under a new id.
    pub fn copy(&mut self, id_or_prefix: &str, options: &CopyOptions) -> Result<Task> {
        let now = self.now();
        let source = self.info(id_or_prefix)?;
        let copy = source.duplicate(self.tasks.next_id(now), now, options);
        self.tasks.insert(copy.clone())?;
        Ok(copy)
    }

    /// Moves the due date by a `<N>d<N>h<N>m` expression.
    pub fn snooze(&mut self, id_or_prefix: &str, expression: &str) -> Result<Snoozed> {
        let by = parse_duration(expression)?;
        self.snooze_by(id_or_prefix, by)
    }

    pub fn snooze_by(&mut self, id_or_prefix: &str, by: Duration) -> Result<Snoozed> {
        let now = self.now();
        let mut task = self.info(id_or_prefix)?;
        let previous_due = task.due;
        task.snooze(by, now)?;
        self.tasks.update(task.clone())?;
        Ok(Snoozed { task, previous_due })
    }

    /// Sets `priority`, or bumps one level when only `bump` is given.
    pub fn prioritize(&mut self, id_or_prefix: &str, priority: Option<Priority>, bump: bool) -> Result<Reprioritized> {
        let mut task = self.info(id_or_prefix)?;
        let previous = task.priority;
        task.reprioritize(priority, bump)?;
        if task.priority != previous {
            self.tasks.update(task.clone())?;
        }
        Ok(Reprioritized { task, previous })
    }

    /// Records a reference to `path`; the file itself is not read.
    pub fn attach(&mut self, id_or_prefix: &str, path: &Path) -> Result<Task> {
        let attachment = Attachment::from_path(path)?;
        let mut task = self.info(id_or_prefix)?;
        task.attachments.push(attachment);
        self.tasks.update(task.clone())?;
        Ok(task)
    }

    pub fn list(&self, filter: &ListFilter) -> Vec<&Task> {
        query::list(self.tasks.all(), filter)
    }

    pub fn upcoming(&self, within: Option<Duration>) -> Vec<Upcoming<'_>> {
        query::upcoming(self.tasks.all(), self.now(), within)
    }

    /// Replaces the whole store with a small set of example tasks.
    ///
    /// The new set is written in one go; if that write fails the previous
    /// tasks stay in place.
    pub fn seed_demo(&mut self) -> Result<Vec<Task>> {
        let now = self.now();

        let drafts = [
            demo_task(
                "Complete TaskForge project",
                Some("Implement all features for the TaskForge CLI application"),
                Priority::High,
                Some(end_of_day(now.date())),
                &["coding", "project"],
            ),
            demo_task("Buy groceries", Some("Milk, eggs, bread, fruits"), Priority::Medium, None, &["shopping", "home"]),
            demo_task("Pay electricity bill", None, Priority::Urgent, now.checked_add_signed(Duration::days(1)), &["bills", "home"]),
            demo_task("Call mom", None, Priority::Low, None, &["personal"]),
        ];

        let mut seeded: Vec<Task> = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = generate_id(now, |id| seeded.iter().any(|task| task.id == id));
            seeded.push(Task::new(id, draft, now)?);
        }
        self.tasks.replace_all(seeded.clone())?;
        Ok(seeded)
    }

    fn toggle<F>(&mut self, id_or_prefix: &str, change: F) -> Result<Toggled>
    where
        F: FnOnce(&mut Task) -> bool,
    {
        let mut task = self.info(id_or_prefix)?;
        let changed = change(&mut task);
        if changed {
            self.tasks.update(task.clone())?;
        }
        Ok(Toggled { task, changed })
    }
}
