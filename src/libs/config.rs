//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! per-user data directory (see [`DataStorage`]). A missing file is not an
//! error; [`Config::read`] falls back to defaults so the CLI works without
//! running `kindergarten init` first.
//!
//! ```rust,no_run
//! use kindergarten::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.resolve_db_path(None)?;
//! println!("{}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::formatter::DEFAULT_DATE_FORMAT;
use crate::libs::group::AgeCategory;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides the configured database file.
pub const DB_ENV_VAR: &str = "KINDERGARTEN_DB";

pub const DEFAULT_APP_TITLE: &str = "Kindergarten";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Title printed above statistics.
    pub app_title: String,

    /// Database file. `None` means `kindergarten.db` in the data directory.
    pub database_path: Option<String>,

    /// Preselected category when creating groups interactively.
    pub default_age_category: AgeCategory,

    /// `chrono` pattern used to display dates. Input always accepts both
    /// `YYYY-MM-DD` and `DD.MM.YYYY`.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            database_path: None,
            default_age_category: AgeCategory::Junior,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Reads `config.json`, returning defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| anyhow::anyhow!("{}: {}", Message::ConfigParseError, e))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let app_title: String = Input::with_theme(&theme)
            .with_prompt(Message::ConfigPromptAppTitle.to_string())
            .default(current.app_title.clone())
            .interact_text()?;

        let default_db = match &current.database_path {
            Some(path) => path.clone(),
            None => DataStorage::new().get_path(DB_FILE_NAME)?.display().to_string(),
        };
        let database_path: String = Input::with_theme(&theme)
            .with_prompt(Message::ConfigPromptDatabasePath.to_string())
            .default(default_db)
            .interact_text()?;

        let labels: Vec<&str> = AgeCategory::ALL.iter().map(|c| c.label()).collect();
        let preselected = AgeCategory::ALL
            .iter()
            .position(|c| *c == current.default_age_category)
            .unwrap_or(0);
        let category = Select::with_theme(&theme)
            .with_prompt(Message::ConfigPromptDefaultAgeCategory.to_string())
            .items(&labels)
            .default(preselected)
            .interact()?;

        let date_format: String = Input::with_theme(&theme)
            .with_prompt(Message::ConfigPromptDateFormat.to_string())
            .default(current.date_format.clone())
            .interact_text()?;

        Ok(Config {
            app_title,
            database_path: Some(database_path),
            default_age_category: AgeCategory::ALL[category],
            date_format,
        })
    }

    /// Picks the database file: the `--db` flag, then `KINDERGARTEN_DB`,
    /// then `database_path`, then the data directory default.
    pub fn resolve_db_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = env::var(DB_ENV_VAR).ok().filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = self.database_path.as_deref().filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        DataStorage::new().get_path(DB_FILE_NAME)
    }
}
