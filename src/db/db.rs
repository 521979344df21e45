use crate::libs::{
    error::{Result, TaskError},
    messages::Message,
    task::Task,
};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DB_FILE_NAME: &str = "tasks.json";

/// The backing file of a task store: one JSON array holding every task.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole collection. A missing or blank file is an empty store.
    pub fn read(&self) -> Result<Vec<Task>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let corrupt = |reason: String| TaskError::CorruptStore {
            path: self.path.clone(),
            reason,
        };
        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| corrupt(e.to_string()))?;

        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(corrupt(Message::DuplicateTaskId(task.id.clone()).to_string()));
            }
            task.validate().map_err(|e| corrupt(format!("task {}: {}", task.id, e)))?;
        }

        tracing::debug!("{}", Message::StoreLoaded(tasks.len(), self.path.display().to_string()));
        Ok(tasks)
    }

    /// Replaces the file contents with `tasks`.
    pub fn write(&self, tasks: &[Task]) -> Result<()> {
        write_json_atomic(&self.path, tasks)?;
        tracing::debug!("{}", Message::StoreSaved(tasks.len(), self.path.display().to_string()));
        Ok(())
    }
}

/// Serializes `value` as pretty JSON next to `path` and renames it into place.
///
/// The previous file stays intact until the rename, so an interrupted write
/// never leaves a truncated document behind.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, value).map_err(io::Error::from)?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::NewTask;
    use chrono::NaiveDate;

    fn sample(id: &str) -> Task {
        let created = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap().and_hms_opt(9, 0, 0).unwrap();
        Task::new(id.to_string(), NewTask::new("Sample"), created).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::new(dir.path().join("absent.json"));
        assert!(db.read().unwrap().is_empty());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::new(dir.path().join("nested").join("deeper").join(DB_FILE_NAME));
        db.write(&[sample("1")]).unwrap();
        assert_eq!(db.read().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_in_file_are_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DB_FILE_NAME);
        write_json_atomic(&path, &vec![sample("1"), sample("1")]).unwrap();
        assert!(matches!(Db::new(&path).read(), Err(TaskError::CorruptStore { .. })));
    }
}
