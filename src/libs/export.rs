//! Bulk export and import of the task collection.
//!
//! Export writes every task (completed and archived included) as a pretty
//! printed JSON array with all fields named. Import reads a document of the
//! same shape and merges it into the store:
//!
//! - a task whose id already exists is skipped, the stored task wins
//! - a task with a new id is inserted as-is, keeping its id and `created_at`
//! - the whole document is checked before anything is written, so a bad
//!   document leaves the store untouched
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskforge::db::tasks::Tasks;
//! use taskforge::libs::export::{Exporter, Importer};
//! use std::path::PathBuf;
//!
//! let mut tasks = Tasks::open("tasks.json")?;
//! let exporter = Exporter::new(Some(PathBuf::from("backup.json")));
//! exporter.export(&tasks)?;
//!
//! let summary = Importer::new("backup.json").import(&mut tasks)?;
//! assert_eq!(summary.imported, 0);
//! # Ok::<(), taskforge::libs::error::TaskError>(())
//! ```

use crate::{
    db::{db::write_json_atomic, tasks::Tasks},
    libs::{
        error::{Result, TaskError},
        messages::Message,
        task::Task,
    },
};
use chrono::Local;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the task collection to a JSON file.
pub struct Exporter {
    output_path: PathBuf,
}

impl Exporter {
    /// Uses `output_path`, or `taskforge_export_YYYYMMDD_HHMMSS.json` in the
    /// current directory when none is given.
    pub fn new(output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(default_export_path);
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes every task and returns how many were written.
    pub fn export(&self, tasks: &Tasks) -> Result<usize> {
        write_json_atomic(&self.output_path, tasks.all())?;
        tracing::debug!("{}", Message::ExportCompleted(tasks.len(), self.output_path.display().to_string()));
        Ok(tasks.len())
    }
}

fn default_export_path() -> PathBuf {
    PathBuf::from(format!("taskforge_export_{}.json", Local::now().format("%Y%m%d_%H%M%S")))
}

/// Counts reported after a successful import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Merges tasks from an exported JSON file into a store.
pub struct Importer {
    input_path: PathBuf,
}

impl Importer {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Validates the whole document, then inserts the tasks with unknown ids
    /// in one write.
    pub fn import(&self, tasks: &mut Tasks) -> Result<ImportSummary> {
        let incoming = self.read()?;
        let total = incoming.len();

        let fresh: Vec<Task> = incoming.into_iter().filter(|task| !tasks.contains(&task.id)).collect();
        let summary = ImportSummary {
            imported: fresh.len(),
            skipped: total - fresh.len(),
        };

        if !fresh.is_empty() {
            tasks.insert_many(fresh)?;
        }
        tracing::debug!(
            "{}",
            Message::ImportCompleted(summary.imported, summary.skipped, self.input_path.display().to_string())
        );
        Ok(summary)
    }

    /// Parses and checks the document without touching any store.
    pub fn read(&self) -> Result<Vec<Task>> {
        let content = fs::read_to_string(&self.input_path)?;
        parse_document(&content).map_err(|reason| TaskError::ImportFormat {
            path: self.input_path.clone(),
            reason,
        })
    }
}

fn parse_document(content: &str) -> std::result::Result<Vec<Task>, Message> {
    let document: Value = serde_json::from_str(content).map_err(|e| Message::ImportMalformed(e.to_string()))?;
    let Value::Array(items) = document else {
        return Err(Message::ImportMalformed("expected a JSON array of tasks".to_string()));
    };

    let mut seen = HashSet::new();
    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let task: Task = serde_json::from_value(item).map_err(|e| Message::ImportInvalidTask(index, e.to_string()))?;
        task.validate().map_err(|e| Message::ImportInvalidTask(index, e.to_string()))?;
        if !seen.insert(task.id.clone()) {
            return Err(Message::ImportDuplicateId(task.id));
        }
        parsed.push(task);
    }
    Ok(parsed)
}
