#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskforge::libs::config::{Config, CONFIG_FILE_NAME};
    use taskforge::libs::data_storage::DataStorage;
    use taskforge::libs::task::Priority;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Isolated data directory per test; nothing touches the real home directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("taskforge"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.storage.get_path(CONFIG_FILE_NAME).unwrap()
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.data_file.is_none());
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.id_display_length, 17);
        assert_eq!(config.default_priority, Priority::Medium);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            data_file: Some(PathBuf::from("project/tasks.json")),
            date_format: "%d.%m.%Y".to_string(),
            id_display_length: 12,
            default_priority: Priority::High,
        };
        config.save_to(&ctx.config_path()).unwrap();

        let loaded = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.data_file_path().unwrap(), PathBuf::from("project/tasks.json"));
        assert_eq!(loaded.display_settings().id_length, 12);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "{ not json").unwrap();
        let error = Config::read_from(&ctx.config_path()).unwrap_err();
        assert!(error.to_string().contains("Failed to parse configuration"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unusable_date_format_is_rejected(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), r#"{"date_format": "%Y-%Q"}"#).unwrap();
        let error = Config::read_from(&ctx.config_path()).unwrap_err();
        assert!(error.to_string().contains("Invalid date format"));

        let config = Config {
            date_format: "%Y-%Q".to_string(),
            ..Config::default()
        };
        assert!(config.save_to(&ctx.config_path()).is_err());
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.config_path()).unwrap();

        assert!(Config::delete_at(&ctx.config_path()).unwrap());
        assert!(!ctx.config_path().exists());
        assert!(!Config::delete_at(&ctx.config_path()).unwrap());
    }
}
