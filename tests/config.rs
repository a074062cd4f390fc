#[cfg(test)]
mod tests {
    use kindergarten::libs::config::{Config, DB_ENV_VAR, DEFAULT_APP_TITLE};
    use kindergarten::libs::data_storage::DataStorage;
    use kindergarten::libs::group::AgeCategory;
    use std::env;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
        original_home: Option<String>,
        original_local_app_data: Option<String>,
        original_db: Option<String>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let original_home = env::var("HOME").ok();
            let original_local_app_data = env::var("LOCALAPPDATA").ok();
            let original_db = env::var(DB_ENV_VAR).ok();

            env::set_var("HOME", temp_dir.path());
            env::set_var("LOCALAPPDATA", temp_dir.path());
            env::remove_var(DB_ENV_VAR);

            ConfigTestContext {
                temp_dir,
                original_home,
                original_local_app_data,
                original_db,
            }
        }

        fn teardown(self) {
            restore("HOME", self.original_home);
            restore("LOCALAPPDATA", self.original_local_app_data);
            restore(DB_ENV_VAR, self.original_db);
        }
    }

    fn restore(key: &str, value: Option<String>) {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    // Environment variables are process-wide, so all checks live in one test.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::new();
        assert!(storage.base_path().starts_with(ctx.temp_dir.path()));

        // Missing file reads as defaults.
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.app_title, DEFAULT_APP_TITLE);
        assert_eq!(config.default_age_category, AgeCategory::Junior);
        assert_eq!(config.date_format, "%d.%m.%Y");

        let default_db = config.resolve_db_path(None).unwrap();
        assert_eq!(default_db, storage.base_path().join("kindergarten.db"));

        let saved = Config {
            app_title: "Sunny Days".to_string(),
            database_path: Some(ctx.temp_dir.path().join("office.db").display().to_string()),
            default_age_category: AgeCategory::Preschool,
            date_format: "%Y-%m-%d".to_string(),
        };
        saved.save().unwrap();
        let loaded = Config::read().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.resolve_db_path(None).unwrap(), ctx.temp_dir.path().join("office.db"));

        env::set_var(DB_ENV_VAR, ctx.temp_dir.path().join("env.db"));
        assert_eq!(loaded.resolve_db_path(None).unwrap(), ctx.temp_dir.path().join("env.db"));

        let flag = PathBuf::from("/srv/flag.db");
        assert_eq!(loaded.resolve_db_path(Some(Path::new("/srv/flag.db"))).unwrap(), flag);

        env::set_var(DB_ENV_VAR, "   ");
        assert_eq!(loaded.resolve_db_path(None).unwrap(), ctx.temp_dir.path().join("office.db"));
        env::remove_var(DB_ENV_VAR);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "app_title": "Rainbow" }"#).unwrap();
        assert_eq!(config.app_title, "Rainbow");
        assert_eq!(config.database_path, None);
        assert_eq!(config.default_age_category, AgeCategory::Junior);

        let config: Config = serde_json::from_str(r#"{ "default_age_category": "senior" }"#).unwrap();
        assert_eq!(config.default_age_category, AgeCategory::Senior);
        assert_eq!(config.app_title, DEFAULT_APP_TITLE);
    }
}
