//! Console tables for task listings.
//!
//! All rendering goes through `prettytable`; the values come pre-formatted
//! from [`FormattedTask`] so every table shows dates and ids the same way.

use super::formatter::{format_datetime, format_relative, format_tags, DisplaySettings, FormattedTask};
use super::query::Upcoming;
use super::task::Task;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Main listing: status, id, title, priority, due date and tags.
    pub fn tasks(tasks: &[&Task], settings: &DisplaySettings) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["", "ID", "TITLE", "PRIORITY", "DUE", "TAGS"]);
        for task in tasks {
            let row = FormattedTask::new(task, settings);
            table.add_row(row![row.status, row.id, row.title, row.priority, row.due, row.tags]);
        }
        table.printstd();

        Ok(())
    }

    /// Archived listing; adds the archive date column.
    pub fn archived_tasks(tasks: &[&Task], settings: &DisplaySettings) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["", "ID", "TITLE", "PRIORITY", "DUE", "TAGS", "ARCHIVED ON"]);
        for task in tasks {
            let row = FormattedTask::new(task, settings);
            table.add_row(row![row.status, row.id, row.title, row.priority, row.due, row.tags, row.archived_at]);
        }
        table.printstd();

        Ok(())
    }

    /// Tasks with a due date; overdue ones are marked in red.
    pub fn upcoming(tasks: &[Upcoming], settings: &DisplaySettings, now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "TITLE", "PRIORITY", "DUE", "WHEN"]);
        for entry in tasks {
            let row = FormattedTask::new(entry.task, settings);
            let when = entry.task.due.map(|due| format_relative(due, now)).unwrap_or_default();
            if entry.overdue {
                table.add_row(row![row.id, row.title, row.priority, Fr->row.due, Fr->when]);
            } else {
                table.add_row(row![row.id, row.title, row.priority, row.due, when]);
            }
        }
        table.printstd();

        Ok(())
    }

    /// Every field of a single task as a two-column table.
    pub fn task_details(task: &Task, settings: &DisplaySettings, now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        let date = |value: Option<NaiveDateTime>| format_datetime(value, &settings.date_format);

        let due = match task.due {
            Some(due) if !task.completed => format!("{} ({})", date(Some(due)), format_relative(due, now)),
            Some(due) => date(Some(due)),
            None => String::new(),
        };
        let status = if task.completed { "completed" } else { "pending" };
        let attachments = task
            .attachments
            .iter()
            .map(|a| format!("{} ({})", a.name, a.path.display()))
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(row![b->"ID", task.id]);
        table.add_row(row![b->"Title", task.title]);
        table.add_row(row![b->"Description", task.description.as_deref().unwrap_or_default()]);
        table.add_row(row![b->"Priority", task.priority.as_str().to_uppercase()]);
        table.add_row(row![b->"Due", due]);
        table.add_row(row![b->"Tags", format_tags(task)]);
        table.add_row(row![b->"Status", status]);
        table.add_row(row![b->"Completed on", date(task.completed_at)]);
        table.add_row(row![b->"Archived", if task.archived { "yes" } else { "no" }]);
        table.add_row(row![b->"Archived on", date(task.archived_at)]);
        table.add_row(row![b->"Attachments", attachments]);
        table.add_row(row![b->"Created", date(Some(task.created_at))]);
        table.printstd();

        Ok(())
    }
}
