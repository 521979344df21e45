//! Filtering and ordering of task listings.
//!
//! Pure functions over a slice of tasks; nothing here mutates or persists.
//!
//! ## Listing Order
//!
//! 1. Due date ascending, tasks without a due date last
//! 2. Priority descending (urgent first)
//! 3. Creation time ascending
//!
//! The id is used as a final key so equal tasks always come out the same way.

use crate::libs::task::Task;
use chrono::{Duration, NaiveDateTime};
use std::cmp::Ordering;

/// Which completion states a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionFilter {
    #[default]
    Pending,
    Completed,
    Any,
}

/// Which archive states a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArchiveFilter {
    #[default]
    Active,
    Archived,
    Any,
}

/// Listing criteria. The default is the plain `list` view: pending, active, any tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub completion: CompletionFilter,
    pub archive: ArchiveFilter,
    pub tag: Option<String>,
}

impl ListFilter {
    /// Filter for the main listing.
    ///
    /// `include_completed` shows pending and completed tasks and takes
    /// precedence over `only_completed`. `include_archived` adds archived tasks
    /// to the active ones.
    pub fn new(include_completed: bool, only_completed: bool, tag: Option<String>, include_archived: bool) -> Self {
        Self {
            completion: completion_filter(include_completed, only_completed),
            archive: if include_archived { ArchiveFilter::Any } else { ArchiveFilter::Active },
            tag,
        }
    }

    /// Filter for the archived listing: same completion and tag rules, archived tasks only.
    pub fn archived(include_completed: bool, only_completed: bool, tag: Option<String>) -> Self {
        Self {
            completion: completion_filter(include_completed, only_completed),
            archive: ArchiveFilter::Archived,
            tag,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        let completion = match self.completion {
            CompletionFilter::Pending => !task.completed,
            CompletionFilter::Completed => task.completed,
            CompletionFilter::Any => true,
        };
        let archive = match self.archive {
            ArchiveFilter::Active => !task.archived,
            ArchiveFilter::Archived => task.archived,
            ArchiveFilter::Any => true,
        };
        let tag = self.tag.as_deref().map_or(true, |tag| task.has_tag(tag));

        completion && archive && tag
    }
}

fn completion_filter(include_completed: bool, only_completed: bool) -> CompletionFilter {
    if include_completed {
        CompletionFilter::Any
    } else if only_completed {
        CompletionFilter::Completed
    } else {
        CompletionFilter::Pending
    }
}

/// Ordering used by every listing, see the module docs.
pub fn listing_order(a: &Task, b: &Task) -> Ordering {
    let due = match (a.due, b.due) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    due.then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Tasks matching `filter`, in listing order.
pub fn list<'a>(tasks: &'a [Task], filter: &ListFilter) -> Vec<&'a Task> {
    let mut selected: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
    selected.sort_by(|a, b| listing_order(a, b));
    selected
}

/// A task with a due date, flagged when that date has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Upcoming<'a> {
    pub task: &'a Task,
    pub overdue: bool,
}

/// Pending, active tasks that have a due date, overdue ones included.
///
/// With `within`, only tasks due no later than `now + within` are kept.
pub fn upcoming<'a>(tasks: &'a [Task], now: NaiveDateTime, within: Option<Duration>) -> Vec<Upcoming<'a>> {
    let horizon = within.and_then(|window| now.checked_add_signed(window));

    let mut selected: Vec<Upcoming> = tasks
        .iter()
        .filter(|task| !task.completed && !task.archived)
        .filter_map(|task| {
            let due = task.due?;
            if horizon.is_some_and(|limit| due > limit) {
                return None;
            }
            Some(Upcoming {
                task,
                overdue: due < now,
            })
        })
        .collect();

    selected.sort_by(|a, b| listing_order(a.task, b.task));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::{NewTask, Priority};
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn task(id: &str, priority: Priority, due: Option<NaiveDateTime>, created_hour: u32) -> Task {
        let mut draft = NewTask::new(id);
        draft.priority = priority;
        draft.due = due;
        Task::new(id.to_string(), draft, at(1, created_hour)).unwrap()
    }

    #[test]
    fn test_order_due_then_priority_then_created() {
        let tasks = vec![
            task("no-due-urgent", Priority::Urgent, None, 1),
            task("late-low", Priority::Low, Some(at(22, 9)), 2),
            task("early-low", Priority::Low, Some(at(21, 9)), 3),
            task("late-high", Priority::High, Some(at(22, 9)), 4),
            task("late-high-older", Priority::High, Some(at(22, 9)), 0),
        ];

        let ids: Vec<&str> = list(&tasks, &ListFilter::default()).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["early-low", "late-high-older", "late-high", "late-low", "no-due-urgent"]);
    }

    #[test]
    fn test_include_completed_wins_over_only_completed() {
        let filter = ListFilter::new(true, true, None, false);
        assert_eq!(filter.completion, CompletionFilter::Any);
        assert_eq!(ListFilter::new(false, true, None, false).completion, CompletionFilter::Completed);
    }

    #[test]
    fn test_tag_filter_is_case_sensitive() {
        let mut tagged = task("a", Priority::Low, None, 1);
        tagged.tags.insert("Home".to_string());
        let tasks = vec![tagged];

        assert_eq!(list(&tasks, &ListFilter::new(false, false, Some("Home".to_string()), false)).len(), 1);
        assert!(list(&tasks, &ListFilter::new(false, false, Some("home".to_string()), false)).is_empty());
    }

    #[test]
    fn test_upcoming_flags_overdue_and_respects_window() {
        let now = at(20, 12);
        let mut done = task("done", Priority::Low, Some(at(21, 9)), 1);
        done.completed = true;
        let tasks = vec![
            task("overdue", Priority::Low, Some(at(19, 9)), 1),
            task("soon", Priority::Low, Some(at(20, 18)), 1),
            task("later", Priority::Low, Some(at(25, 9)), 1),
            task("undated", Priority::Low, None, 1),
            done,
        ];

        let all = upcoming(&tasks, now, None);
        let ids: Vec<(&str, bool)> = all.iter().map(|u| (u.task.id.as_str(), u.overdue)).collect();
        assert_eq!(ids, vec![("overdue", true), ("soon", false), ("later", false)]);

        let window = upcoming(&tasks, now, Some(Duration::days(1)));
        assert_eq!(window.len(), 2);
    }
}
