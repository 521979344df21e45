//! Configuration management for taskforge.
//!
//! The configuration is a small JSON document kept next to the task store in
//! the platform data directory (see [`DataStorage`]). Every field has a
//! default, so a missing file simply means "use the defaults"; a file that
//! exists but cannot be parsed, or holds a date format chrono cannot render,
//! is reported instead of being overwritten.
//!
//! ## Fields
//!
//! - **data_file**: Backing file for the task store, `<data dir>/tasks.json` when unset
//! - **date_format**: `strftime` pattern used to display dates
//! - **id_display_length**: Number of id characters shown in tables
//! - **default_priority**: Priority given to tasks created without `--priority`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskforge::libs::config::Config;
//!
//! // Load existing configuration or defaults
//! let config = Config::read()?;
//! println!("Tasks are stored in {}", config.data_file_path()?.display());
//!
//! // Run the interactive wizard and persist the answers
//! Config::init()?.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::{write_json_atomic, DB_FILE_NAME};
use crate::libs::{
    formatter::{is_valid_date_format, DisplaySettings},
    messages::Message,
    task::Priority,
};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Backing file of the task store. Relative paths are taken from the
    /// current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Display pattern for dates, e.g. `%Y-%m-%d %H:%M`.
    pub date_format: String,

    /// How many leading id characters the tables show.
    pub id_display_length: usize,

    /// Priority of tasks created without an explicit one.
    pub default_priority: Priority,
}

impl Default for Config {
    fn default() -> Self {
        let settings = DisplaySettings::default();
        Config {
            data_file: None,
            date_format: settings.date_format,
            id_display_length: settings.id_length,
            default_priority: Priority::default(),
        }
    }
}

impl Config {
    /// Location of the configuration file in the data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Loads the configuration from the data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    /// Loads the configuration from `path`; a missing file yields the defaults.
    pub fn read_from(path: &Path) -> Result<Config> {
        let config_str = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };

        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the views cannot use.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_date_format(&self.date_format) {
            msg_bail_anyhow!(Message::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        write_json_atomic(path, self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        Self::delete_at(&Self::path()?)
    }

    pub fn delete_at(path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Backing file of the task store: `data_file` or the default in the data directory.
    pub fn data_file_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            date_format: self.date_format.clone(),
            id_length: self.id_display_length,
        }
    }

    /// Interactive setup wizard. The current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;
        msg_print!(Message::ConfigWizardHeader, true);

        let data_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataFile.to_string())
            .default(current.data_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let date_format: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(current.date_format.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                if is_valid_date_format(input) {
                    Ok(())
                } else {
                    Err(Message::InvalidDateFormat(input.clone()).to_string())
                }
            })
            .interact_text()?;

        let id_display_length: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptIdDisplayLength.to_string())
            .default(current.id_display_length)
            .interact_text()?;

        let levels: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .items(&levels)
            .default(Priority::ALL.iter().position(|p| *p == current.default_priority).unwrap_or(1))
            .interact()?;

        let data_file = data_file.trim();
        Ok(Config {
            data_file: (!data_file.is_empty()).then(|| PathBuf::from(data_file)),
            date_format,
            id_display_length: id_display_length.max(1),
            default_priority: Priority::ALL[selected],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"id_display_length": 12}"#).unwrap();
        assert_eq!(config.id_display_length, 12);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.default_priority, Priority::Medium);
        assert!(config.data_file.is_none());
    }
}
