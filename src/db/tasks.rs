use super::db::Db;
use crate::libs::{
    error::{Result, TaskError},
    identifier::generate_id,
    messages::Message,
    task::Task,
};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// In-memory task collection bound to its backing file.
///
/// Every mutating call rewrites the file before returning. The change is
/// built on a copy of the collection and only becomes visible once the write
/// succeeded, so a failed save leaves both the file and memory untouched.
#[derive(Debug)]
pub struct Tasks {
    db: Db,
    tasks: Vec<Task>,
}

impl Tasks {
    /// Loads the store at `path`; a missing file gives an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Tasks> {
        let db = Db::new(path);
        let tasks = db.read()?;
        Ok(Tasks { db, tasks })
    }

    pub fn path(&self) -> &Path {
        self.db.path()
    }

    /// Tasks in file order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Finds the task whose id starts with `prefix`.
    ///
    /// An exact id match always wins, even when that id is itself a prefix of
    /// other ids. Otherwise exactly one id must start with `prefix`.
    pub fn resolve(&self, prefix: &str) -> Result<&Task> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(TaskError::NotFound(prefix.to_string()));
        }
        if let Some(task) = self.get(prefix) {
            return Ok(task);
        }

        let matches: Vec<&Task> = self.tasks.iter().filter(|task| task.id.starts_with(prefix)).collect();
        match matches.as_slice() {
            [] => Err(TaskError::NotFound(prefix.to_string())),
            [task] => Ok(*task),
            _ => {
                let mut candidates: Vec<String> = matches.iter().map(|task| task.id.clone()).collect();
                candidates.sort();
                Err(TaskError::AmbiguousId {
                    prefix: prefix.to_string(),
                    candidates,
                })
            }
        }
    }

    /// A fresh id for a task created at `now`.
    pub fn next_id(&self, now: NaiveDateTime) -> String {
        generate_id(now, |id| self.contains(id))
    }

    pub fn insert(&mut self, task: Task) -> Result<()> {
        self.insert_many(vec![task])
    }

    /// Inserts several tasks with a single rewrite. Nothing is inserted if any id is taken.
    pub fn insert_many(&mut self, tasks: Vec<Task>) -> Result<()> {
        let mut next = self.tasks.clone();
        for task in tasks {
            task.validate()?;
            if next.iter().any(|existing| existing.id == task.id) {
                return Err(TaskError::StateConflict(Message::DuplicateTaskId(task.id)));
            }
            tracing::debug!(id = %task.id, "inserting task");
            next.push(task);
        }
        self.commit(next)
    }

    /// Replaces the stored task that has the same id.
    pub fn update(&mut self, task: Task) -> Result<()> {
        task.validate()?;
        let mut next = self.tasks.clone();
        let slot = next
            .iter_mut()
            .find(|existing| existing.id == task.id)
            .ok_or_else(|| TaskError::NotFound(task.id.clone()))?;
        tracing::debug!(id = %task.id, "updating task");
        *slot = task;
        self.commit(next)
    }

    /// Deletes the task with exactly this id and returns it.
    pub fn remove(&mut self, id: &str) -> Result<Task> {
        let mut next = self.tasks.clone();
        let index = next
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        let removed = next.remove(index);
        tracing::debug!(id = %removed.id, "removing task");
        self.commit(next)?;
        Ok(removed)
    }

    /// Swaps the whole collection for `tasks` with a single rewrite.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> Result<()> {
        let mut seen = HashSet::new();
        for task in &tasks {
            task.validate()?;
            if !seen.insert(task.id.as_str()) {
                return Err(TaskError::StateConflict(Message::DuplicateTaskId(task.id.clone())));
            }
        }
        tracing::debug!(count = tasks.len(), "replacing all tasks");
        self.commit(tasks)
    }

    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        self.db.write(&next)?;
        self.tasks = next;
        Ok(())
    }
}
