#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use taskforge::db::tasks::Tasks;
    use taskforge::libs::manager::TaskManager;
    use taskforge::libs::query::ListFilter;
    use taskforge::libs::task::{NewTask, Priority};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    struct ListingTestContext {
        _temp_dir: TempDir,
        manager: TaskManager,
    }

    impl TestContext for ListingTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(temp_dir.path().join("tasks.json")).unwrap();
            let mut manager = TaskManager::with_clock(tasks, fixed_now);

            let add = |manager: &mut TaskManager, title: &str, priority: Priority, due_in_hours: Option<i64>, tags: &[&str]| {
                let mut draft = NewTask::new(title);
                draft.priority = priority;
                draft.due = due_in_hours.map(|hours| fixed_now() + Duration::hours(hours));
                draft.tags = tags.iter().map(|t| t.to_string()).collect();
                manager.add(draft).unwrap()
            };

            add(&mut manager, "pending-late", Priority::Low, Some(48), &["home"]);
            add(&mut manager, "pending-soon", Priority::Medium, Some(2), &["work"]);
            add(&mut manager, "pending-undated", Priority::Urgent, None, &["home"]);
            add(&mut manager, "pending-overdue", Priority::High, Some(-3), &[]);
            let done = add(&mut manager, "completed", Priority::Medium, Some(5), &["work"]);
            let shelved = add(&mut manager, "archived", Priority::Low, None, &["home"]);
            let shelved_done = add(&mut manager, "archived-completed", Priority::Low, None, &[]);

            manager.complete(&done.id).unwrap();
            manager.archive(&shelved.id).unwrap();
            manager.complete(&shelved_done.id).unwrap();
            manager.archive(&shelved_done.id).unwrap();

            ListingTestContext {
                _temp_dir: temp_dir,
                manager,
            }
        }
    }

    fn titles(manager: &TaskManager, filter: &ListFilter) -> Vec<String> {
        manager.list(filter).iter().map(|task| task.title.clone()).collect()
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_default_view_hides_completed_and_archived(ctx: &mut ListingTestContext) {
        assert_eq!(
            titles(&ctx.manager, &ListFilter::default()),
            vec!["pending-overdue", "pending-soon", "pending-late", "pending-undated"]
        );
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_full_view_returns_everything(ctx: &mut ListingTestContext) {
        let filter = ListFilter::new(true, false, None, true);
        assert_eq!(ctx.manager.list(&filter).len(), ctx.manager.tasks().len());
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_only_completed(ctx: &mut ListingTestContext) {
        assert_eq!(titles(&ctx.manager, &ListFilter::new(false, true, None, false)), vec!["completed"]);
        assert_eq!(
            titles(&ctx.manager, &ListFilter::new(false, true, None, true)),
            vec!["completed", "archived-completed"]
        );
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_tag_filter(ctx: &mut ListingTestContext) {
        let home = ListFilter::new(false, false, Some("home".to_string()), false);
        assert_eq!(titles(&ctx.manager, &home), vec!["pending-late", "pending-undated"]);

        let work_all = ListFilter::new(true, false, Some("work".to_string()), false);
        assert_eq!(titles(&ctx.manager, &work_all), vec!["pending-soon", "completed"]);
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_archived_listing(ctx: &mut ListingTestContext) {
        assert_eq!(titles(&ctx.manager, &ListFilter::archived(false, false, None)), vec!["archived"]);
        assert_eq!(
            titles(&ctx.manager, &ListFilter::archived(true, false, None)),
            vec!["archived", "archived-completed"]
        );
    }

    #[test_context(ListingTestContext)]
    #[test]
    fn test_upcoming_includes_overdue_and_honours_window(ctx: &mut ListingTestContext) {
        let all: Vec<(String, bool)> = ctx
            .manager
            .upcoming(None)
            .iter()
            .map(|entry| (entry.task.title.clone(), entry.overdue))
            .collect();
        assert_eq!(
            all,
            vec![
                ("pending-overdue".to_string(), true),
                ("pending-soon".to_string(), false),
                ("pending-late".to_string(), false),
            ]
        );

        assert_eq!(ctx.manager.upcoming(Some(Duration::hours(24))).len(), 2);
    }
}
