#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::collections::BTreeSet;
    use std::path::{Path, PathBuf};
    use taskforge::db::tasks::Tasks;
    use taskforge::libs::error::TaskError;
    use taskforge::libs::manager::TaskManager;
    use taskforge::libs::task::{CopyOptions, NewTask, Priority, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    struct OperationsTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
        manager: TaskManager,
    }

    impl TestContext for OperationsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.json");
            let manager = TaskManager::with_clock(Tasks::open(&path).unwrap(), fixed_now);
            OperationsTestContext {
                _temp_dir: temp_dir,
                path,
                manager,
            }
        }
    }

    impl OperationsTestContext {
        fn reopen(&self) -> TaskManager {
            TaskManager::with_clock(Tasks::open(&self.path).unwrap(), fixed_now)
        }
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_add_assigns_unique_stable_ids(ctx: &mut OperationsTestContext) {
        let first = ctx.manager.add(NewTask::new("First")).unwrap();
        let second = ctx.manager.add(NewTask::new("Second")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.id, "20250520120000000");
        assert_eq!(first.created_at, fixed_now());

        let reopened = ctx.reopen();
        assert_eq!(reopened.info(&first.id).unwrap(), first);
        assert_eq!(reopened.info(&second.id).unwrap(), second);
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_add_rejects_empty_title(ctx: &mut OperationsTestContext) {
        assert!(matches!(ctx.manager.add(NewTask::new("  ")), Err(TaskError::Validation(_))));
        assert!(ctx.manager.tasks().is_empty());
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_edit_changes_only_given_fields(ctx: &mut OperationsTestContext) {
        let mut draft = NewTask::new("Write report");
        draft.description = Some("quarterly".to_string());
        draft.due = Some(at(22, 9, 0));
        draft.tags = tags(&["work"]);
        let task = ctx.manager.add(draft).unwrap();

        let patch = TaskPatch {
            title: Some("Write annual report".to_string()),
            due: Some(None),
            ..Default::default()
        };
        let edited = ctx.manager.edit(&task.id, &patch).unwrap();

        assert_eq!(edited.id, task.id);
        assert_eq!(edited.created_at, task.created_at);
        assert_eq!(edited.title, "Write annual report");
        assert_eq!(edited.due, None);
        assert_eq!(edited.description.as_deref(), Some("quarterly"));
        assert_eq!(edited.tags, tags(&["work"]));
        assert_eq!(ctx.reopen().info(&task.id).unwrap(), edited);
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_edit_sets_empty_description(ctx: &mut OperationsTestContext) {
        let task = ctx.manager.add(NewTask::new("Call mom")).unwrap();
        let patch = TaskPatch {
            description: Some(Some(String::new())),
            ..Default::default()
        };
        assert_eq!(ctx.manager.edit(&task.id, &patch).unwrap().description.as_deref(), Some(""));
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_complete_and_uncomplete(ctx: &mut OperationsTestContext) {
        let task = ctx.manager.add(NewTask::new("Buy groceries")).unwrap();

        let done = ctx.manager.complete(&task.id).unwrap();
        assert!(done.changed);
        assert!(done.task.completed);
        assert_eq!(done.task.completed_at, Some(fixed_now()));
        assert!(!ctx.manager.complete(&task.id).unwrap().changed);

        let reopened = ctx.manager.uncomplete(&task.id).unwrap();
        assert!(reopened.changed);
        assert!(!reopened.task.completed);
        assert_eq!(reopened.task.completed_at, None);
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_bump_stops_at_urgent(ctx: &mut OperationsTestContext) {
        let mut draft = NewTask::new("Pay electricity bill");
        draft.priority = Priority::High;
        let task = ctx.manager.add(draft).unwrap();

        let bumped = ctx.manager.prioritize(&task.id, None, true).unwrap();
        assert_eq!(bumped.previous, Priority::High);
        assert_eq!(bumped.task.priority, Priority::Urgent);

        let again = ctx.manager.prioritize(&task.id, None, true).unwrap();
        assert_eq!(again.task.priority, Priority::Urgent);
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_explicit_priority_wins_over_bump(ctx: &mut OperationsTestContext) {
        let task = ctx.manager.add(NewTask::new("Plan trip")).unwrap();

        let changed = ctx.manager.prioritize(&task.id, Some(Priority::Low), true).unwrap();
        assert_eq!(changed.task.priority, Priority::Low);
        assert!(matches!(
            ctx.manager.prioritize(&task.id, None, false),
            Err(TaskError::Validation(_))
        ));
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_snooze_moves_existing_due_date(ctx: &mut OperationsTestContext) {
        let mut draft = NewTask::new("Submit form");
        draft.due = Some(at(20, 17, 0));
        let task = ctx.manager.add(draft).unwrap();

        let snoozed = ctx.manager.snooze(&task.id, "1d2h30m").unwrap();
        assert_eq!(snoozed.previous_due, Some(at(20, 17, 0)));
        assert_eq!(snoozed.task.due, Some(at(21, 19, 30)));
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_snooze_without_due_starts_from_now(ctx: &mut OperationsTestContext) {
        let task = ctx.manager.add(NewTask::new("Water plants")).unwrap();

        let snoozed = ctx.manager.snooze(&task.id, "2h").unwrap();
        assert_eq!(snoozed.previous_due, None);
        assert_eq!(snoozed.task.due, Some(fixed_now() + Duration::hours(2)));
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_snooze_rejects_bad_expression(ctx: &mut OperationsTestContext) {
        let task = ctx.manager.add(NewTask::new("Water plants")).unwrap();

        assert!(matches!(ctx.manager.snooze(&task.id, "2x"), Err(TaskError::InvalidDuration(_))));
        assert!(matches!(ctx.manager.snooze(&task.id, "0m"), Err(TaskError::InvalidDuration(_))));
        assert_eq!(ctx.manager.info(&task.id).unwrap().due, None);
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_copy_with_replaced_tags(ctx: &mut OperationsTestContext) {
        let mut draft = NewTask::new("Weekly review");
        draft.tags = tags(&["work", "weekly"]);
        let source = ctx.manager.add(draft).unwrap();
        ctx.manager.complete(&source.id).unwrap();

        let options = CopyOptions {
            due: None,
            tags: tags(&["x"]),
            keep_tags: false,
        };
        let copy = ctx.manager.copy(&source.id, &options).unwrap();

        assert_ne!(copy.id, source.id);
        assert_eq!(copy.tags, tags(&["x"]));
        assert!(!copy.completed);
        assert_eq!(copy.title, "Weekly review");
        assert_eq!(ctx.manager.tasks().len(), 2);
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_copy_merges_tags_and_overrides_due(ctx: &mut OperationsTestContext) {
        let mut draft = NewTask::new("Weekly review");
        draft.tags = tags(&["work"]);
        draft.due = Some(at(23, 9, 0));
        let source = ctx.manager.add(draft).unwrap();

        let options = CopyOptions {
            due: Some(at(30, 9, 0)),
            tags: tags(&["next"]),
            keep_tags: true,
        };
        let copy = ctx.manager.copy(&source.id, &options).unwrap();

        assert_eq!(copy.tags, tags(&["next", "work"]));
        assert_eq!(copy.due, Some(at(30, 9, 0)));
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_archive_and_restore_conflicts(ctx: &mut OperationsTestContext) {
        let task = ctx.manager.add(NewTask::new("Old project")).unwrap();

        assert!(matches!(ctx.manager.restore(&task.id), Err(TaskError::StateConflict(_))));

        let archived = ctx.manager.archive(&task.id).unwrap();
        assert!(archived.archived);
        assert_eq!(archived.archived_at, Some(fixed_now()));
        assert!(matches!(ctx.manager.archive(&task.id), Err(TaskError::StateConflict(_))));

        let restored = ctx.manager.restore(&task.id).unwrap();
        assert!(!restored.archived);
        assert_eq!(restored.archived_at, None);
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_delete_then_lookup_fails(ctx: &mut OperationsTestContext) {
        let task = ctx.manager.add(NewTask::new("Temporary")).unwrap();
        ctx.manager.delete(&task.id).unwrap();

        assert!(matches!(ctx.manager.info(&task.id), Err(TaskError::NotFound(_))));
        assert!(matches!(ctx.reopen().info(&task.id), Err(TaskError::NotFound(_))));
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_operations_report_ambiguous_prefix(ctx: &mut OperationsTestContext) {
        ctx.manager.add(NewTask::new("One")).unwrap();
        ctx.manager.add(NewTask::new("Two")).unwrap();

        assert!(matches!(ctx.manager.complete("2025"), Err(TaskError::AmbiguousId { .. })));
        assert!(matches!(ctx.manager.delete("2025"), Err(TaskError::AmbiguousId { .. })));
        assert_eq!(ctx.manager.tasks().len(), 2);
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_attach_keeps_insertion_order(ctx: &mut OperationsTestContext) {
        let task = ctx.manager.add(NewTask::new("Taxes")).unwrap();
        ctx.manager.attach(&task.id, Path::new("docs/receipt.pdf")).unwrap();
        let task = ctx.manager.attach(&task.id, Path::new("docs/form.pdf")).unwrap();

        let names: Vec<&str> = task.attachments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["receipt.pdf", "form.pdf"]);
        assert!(matches!(ctx.manager.attach(&task.id, Path::new("")), Err(TaskError::Validation(_))));
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_seed_demo_replaces_store(ctx: &mut OperationsTestContext) {
        ctx.manager.add(NewTask::new("Existing")).unwrap();

        let created = ctx.manager.seed_demo().unwrap();
        assert_eq!(created.len(), 4);
        assert_eq!(ctx.reopen().tasks().len(), 4);
        assert!(ctx.manager.tasks().all().iter().all(|task| task.title != "Existing"));
        assert_eq!(created[2].priority, Priority::Urgent);
        assert_eq!(created[1].id, "20250520120000000-0001");
    }

    #[test_context(OperationsTestContext)]
    #[test]
    fn test_failed_seed_keeps_existing_tasks(ctx: &mut OperationsTestContext) {
        ctx.manager.add(NewTask::new("Existing")).unwrap();
        // A directory in place of the file makes the rewrite fail.
        std::fs::remove_file(&ctx.path).unwrap();
        std::fs::create_dir_all(&ctx.path).unwrap();

        assert!(ctx.manager.seed_demo().is_err());
        let titles: Vec<&str> = ctx.manager.tasks().all().iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, vec!["Existing"]);
    }
}
