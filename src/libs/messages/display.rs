//! Display implementation for taskforge application messages.
//!
//! Converts structured [`Message`] values into the text shown in the
//! terminal. Keeping all wording in one match makes parameter usage checked
//! at compile time and gives a single place to adjust tone.
//!
//! ```rust
//! use taskforge::libs::messages::Message;
//!
//! let message = Message::TaskCreated("20250520170000123".to_string());
//! assert_eq!(message.to_string(), "Task added successfully with ID: 20250520170000123");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task added successfully with ID: {}", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully.", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully.", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed.", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} is already marked as completed.", id),
            Message::TaskUncompleted(id) => format!("Task {} marked as not completed.", id),
            Message::TaskAlreadyPending(id) => format!("Task {} is already marked as not completed.", id),
            Message::TaskArchived(id) => format!("Task {} archived successfully.", id),
            Message::TaskRestored(id) => format!("Task {} restored successfully.", id),
            Message::TaskCopied(id) => format!("Task copied successfully with new ID: {}", id),
            Message::TaskSnoozed(id) => format!("Task {} snoozed successfully.", id),
            Message::DueDateChanged(old, new) => format!("Due date changed from {} to {}", old, new),
            Message::PriorityChanged(old, new) => format!("Priority changed from {} to {}", old, new),
            Message::PriorityAlreadyHighest(id) => format!("Task {} is already at the highest priority (URGENT).", id),
            Message::AttachmentAdded(name, id) => format!("Attached '{}' to task {}.", name, id),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::SelectPriority => "Select new priority".to_string(),
            Message::DemoTasksCreated(count) => format!("{} example tasks created.", count),
            Message::ConfirmReplaceWithDemo(count) => format!("Replace the {} existing task(s) with example tasks?", count),

            // === LISTING MESSAGES ===
            Message::PendingTasksHeader => "Pending Tasks".to_string(),
            Message::CompletedTasksHeader => "Completed Tasks".to_string(),
            Message::AllTasksHeader => "All Tasks".to_string(),
            Message::TaggedTasksHeader(scope, tag) => format!("{} with tag #{}", scope, tag),
            Message::ArchivedPendingTasksHeader => "Archived Pending Tasks".to_string(),
            Message::ArchivedCompletedTasksHeader => "Archived Completed Tasks".to_string(),
            Message::AllArchivedTasksHeader => "All Archived Tasks".to_string(),
            Message::UpcomingTasksHeader => "Upcoming Tasks".to_string(),
            Message::TaskDetailsHeader(id) => format!("Task {}", id),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoArchivedTasksFound => "No archived tasks found.".to_string(),
            Message::NoUpcomingTasks => "No upcoming tasks with due dates.".to_string(),

            // === STORE MESSAGES ===
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::AmbiguousTaskId(prefix, candidates) => {
                format!("ID prefix '{}' matches {} tasks: {}", prefix, candidates.len(), candidates.join(", "))
            }
            Message::DuplicateTaskId(id) => format!("A task with ID {} already exists.", id),
            Message::StoreCorrupted(path, detail) => format!("Task store {} is corrupted: {}", path, detail),
            Message::StoreLoaded(count, path) => format!("Loaded {} task(s) from {}", count, path),
            Message::StoreSaved(count, path) => format!("Saved {} task(s) to {}", count, path),

            // === VALIDATION MESSAGES ===
            Message::EmptyTitle => "Task title must not be empty.".to_string(),
            Message::InvalidTaskId(id) => format!("Invalid task ID '{}': IDs must be non-empty without surrounding spaces.", id),
            Message::EmptyTag => "Tags must not be empty.".to_string(),
            Message::EmptyAttachmentPath => "Attachment path must not be empty.".to_string(),
            Message::InvalidPriority(value) => format!("Invalid priority '{}'. Use one of: low, medium, high, urgent.", value),
            Message::InvalidDate(value) => format!(
                "Invalid date '{}'. Use a format like 'YYYY-MM-DD', 'YYYY-MM-DD HH:MM', 'today' or 'tomorrow'.",
                value
            ),
            Message::InvalidDuration(value) => format!("Invalid duration '{}'. Use a format like 1d, 2h, 30m, or 1d2h30m.", value),
            Message::ZeroDuration => "No valid duration specified. Use format like 1d, 2h, 30m, or 1d2h30m.".to_string(),
            Message::DurationOverflow(value) => format!("Duration '{}' is too large.", value),
            Message::PriorityOrBumpRequired => "Either a priority level or --bump must be given.".to_string(),
            Message::InvalidChoice => "Invalid choice.".to_string(),

            // === STATE MESSAGES ===
            Message::TaskAlreadyArchived(id) => format!("Task {} is not active: it is already archived.", id),
            Message::TaskNotArchived(id) => format!("Task {} is not archived.", id),

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportCompleted(count, path) => format!("{} task(s) exported to {}", count, path),
            Message::ImportCompleted(imported, skipped, path) => {
                format!("Successfully imported {} task(s) from {} ({} already present, skipped)", imported, path, skipped)
            }
            Message::ImportFailed(path, reason) => format!("Cannot import {}: {}", path, reason),
            Message::ImportMalformed(detail) => format!("document is not a valid task list ({})", detail),
            Message::ImportInvalidTask(index, reason) => format!("task #{} is invalid: {}", index + 1, reason),
            Message::ImportDuplicateId(id) => format!("task ID {} appears more than once", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError(detail) => format!("Failed to parse configuration: {}", detail),
            Message::InvalidDateFormat(pattern) => format!("Invalid date format '{}'. Use strftime items like %Y-%m-%d %H:%M.", pattern),
            Message::ConfigWizardHeader => "Taskforge configuration".to_string(),
            Message::PromptDataFile => "Task store file (empty for default)".to_string(),
            Message::PromptDateFormat => "Date display format".to_string(),
            Message::PromptIdDisplayLength => "Number of ID characters to display".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_id_lists_candidates() {
        let msg = Message::AmbiguousTaskId("2025".to_string(), vec!["20250101".to_string(), "20250102".to_string()]);
        assert_eq!(msg.to_string(), "ID prefix '2025' matches 2 tasks: 20250101, 20250102");
    }

    #[test]
    fn test_import_task_index_is_one_based() {
        let msg = Message::ImportInvalidTask(0, "empty title".to_string());
        assert_eq!(msg.to_string(), "task #1 is invalid: empty title");
    }
}
